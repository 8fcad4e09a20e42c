//! Discipline module - the fixed set of academic fields

use std::fmt;

/// Broad grouping of disciplines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisciplineGroup {
    /// Science, technology, engineering and mathematics
    Stem,
    /// Social and behavioral sciences
    SocialSciences,
    /// Medicine and health sciences
    Health,
    /// Humanities and the arts
    Humanities,
}

impl DisciplineGroup {
    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            DisciplineGroup::Stem => "STEM",
            DisciplineGroup::SocialSciences => "Social Sciences",
            DisciplineGroup::Health => "Health",
            DisciplineGroup::Humanities => "Humanities",
        }
    }
}

/// An academic discipline
///
/// Declaration order is the enumeration order used for deterministic
/// tie-breaking and for ordered output; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Discipline {
    /// Computer science
    ComputerScience,
    /// Physics
    Physics,
    /// Chemistry
    Chemistry,
    /// Biology
    Biology,
    /// Mathematics and statistics
    Mathematics,
    /// Engineering
    Engineering,
    /// Environmental science
    EnvironmentalScience,
    /// Psychology
    Psychology,
    /// Economics
    Economics,
    /// Sociology
    Sociology,
    /// Political science
    PoliticalScience,
    /// Anthropology
    Anthropology,
    /// Education
    Education,
    /// Linguistics
    Linguistics,
    /// Law
    Law,
    /// Medicine
    Medicine,
    /// Neuroscience
    Neuroscience,
    /// Public health
    PublicHealth,
    /// Nursing
    Nursing,
    /// Pharmacology
    Pharmacology,
    /// Philosophy
    Philosophy,
    /// History
    History,
    /// Literature
    Literature,
    /// Art history
    ArtHistory,
    /// Religious studies
    ReligiousStudies,
}

impl Discipline {
    /// Every discipline in enumeration order
    pub const ALL: [Discipline; 25] = [
        Discipline::ComputerScience,
        Discipline::Physics,
        Discipline::Chemistry,
        Discipline::Biology,
        Discipline::Mathematics,
        Discipline::Engineering,
        Discipline::EnvironmentalScience,
        Discipline::Psychology,
        Discipline::Economics,
        Discipline::Sociology,
        Discipline::PoliticalScience,
        Discipline::Anthropology,
        Discipline::Education,
        Discipline::Linguistics,
        Discipline::Law,
        Discipline::Medicine,
        Discipline::Neuroscience,
        Discipline::PublicHealth,
        Discipline::Nursing,
        Discipline::Pharmacology,
        Discipline::Philosophy,
        Discipline::History,
        Discipline::Literature,
        Discipline::ArtHistory,
        Discipline::ReligiousStudies,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::ComputerScience => "Computer Science",
            Discipline::Physics => "Physics",
            Discipline::Chemistry => "Chemistry",
            Discipline::Biology => "Biology",
            Discipline::Mathematics => "Mathematics",
            Discipline::Engineering => "Engineering",
            Discipline::EnvironmentalScience => "Environmental Science",
            Discipline::Psychology => "Psychology",
            Discipline::Economics => "Economics",
            Discipline::Sociology => "Sociology",
            Discipline::PoliticalScience => "Political Science",
            Discipline::Anthropology => "Anthropology",
            Discipline::Education => "Education",
            Discipline::Linguistics => "Linguistics",
            Discipline::Law => "Law",
            Discipline::Medicine => "Medicine",
            Discipline::Neuroscience => "Neuroscience",
            Discipline::PublicHealth => "Public Health",
            Discipline::Nursing => "Nursing",
            Discipline::Pharmacology => "Pharmacology",
            Discipline::Philosophy => "Philosophy",
            Discipline::History => "History",
            Discipline::Literature => "Literature",
            Discipline::ArtHistory => "Art History",
            Discipline::ReligiousStudies => "Religious Studies",
        }
    }

    /// Snake-case identifier used in configuration files
    pub fn id(&self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }

    /// The group this discipline belongs to
    pub fn group(&self) -> DisciplineGroup {
        match self {
            Discipline::ComputerScience
            | Discipline::Physics
            | Discipline::Chemistry
            | Discipline::Biology
            | Discipline::Mathematics
            | Discipline::Engineering
            | Discipline::EnvironmentalScience => DisciplineGroup::Stem,
            Discipline::Psychology
            | Discipline::Economics
            | Discipline::Sociology
            | Discipline::PoliticalScience
            | Discipline::Anthropology
            | Discipline::Education
            | Discipline::Linguistics
            | Discipline::Law => DisciplineGroup::SocialSciences,
            Discipline::Medicine
            | Discipline::Neuroscience
            | Discipline::PublicHealth
            | Discipline::Nursing
            | Discipline::Pharmacology => DisciplineGroup::Health,
            Discipline::Philosophy
            | Discipline::History
            | Discipline::Literature
            | Discipline::ArtHistory
            | Discipline::ReligiousStudies => DisciplineGroup::Humanities,
        }
    }

    /// Parse a discipline from its name or identifier
    ///
    /// Case, spaces, hyphens and underscores are ignored, so
    /// "Computer Science", "computer_science" and "computer-science" all
    /// resolve. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = squash(s);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|d| squash(d.name()) == wanted)
    }

    /// Enumeration index
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown discipline: {}", s))
    }
}

/// Discipline tag attached to a research session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisciplineTag {
    /// No specific discipline
    #[default]
    General,
    /// A specific discipline
    Specific(Discipline),
}

impl DisciplineTag {
    /// Parse "general" or any discipline name
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("general") {
            return Some(DisciplineTag::General);
        }
        Discipline::parse(s).map(DisciplineTag::Specific)
    }

    /// The discipline, if specific
    pub fn discipline(&self) -> Option<Discipline> {
        match self {
            DisciplineTag::General => None,
            DisciplineTag::Specific(d) => Some(*d),
        }
    }
}

impl fmt::Display for DisciplineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisciplineTag::General => f.write_str("general"),
            DisciplineTag::Specific(d) => write!(f, "{}", d),
        }
    }
}

impl std::str::FromStr for DisciplineTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown discipline tag: {}", s))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, d) in Discipline::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_every_group_is_populated() {
        for group in [
            DisciplineGroup::Stem,
            DisciplineGroup::SocialSciences,
            DisciplineGroup::Health,
            DisciplineGroup::Humanities,
        ] {
            assert!(Discipline::ALL.iter().any(|d| d.group() == group));
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(Discipline::parse("Computer Science"), Some(Discipline::ComputerScience));
        assert_eq!(Discipline::parse("computer_science"), Some(Discipline::ComputerScience));
        assert_eq!(Discipline::parse("NEUROSCIENCE"), Some(Discipline::Neuroscience));
        assert_eq!(Discipline::parse("alchemy"), None);
        assert_eq!(Discipline::parse(""), None);
    }

    #[test]
    fn test_id_round_trip() {
        for d in Discipline::ALL {
            assert_eq!(Discipline::parse(&d.id()), Some(d));
        }
    }

    #[test]
    fn test_discipline_tag() {
        assert_eq!(DisciplineTag::parse("General"), Some(DisciplineTag::General));
        assert_eq!(
            DisciplineTag::parse("economics"),
            Some(DisciplineTag::Specific(Discipline::Economics))
        );
        assert_eq!(DisciplineTag::parse("astrology"), None);
        assert_eq!(DisciplineTag::General.discipline(), None);
    }
}
