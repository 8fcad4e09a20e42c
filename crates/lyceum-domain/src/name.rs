//! Personal name handling for bibliographic authors

/// Lowercase particles that belong to the family name ("van", "de", ...)
const FAMILY_PARTICLES: &[&str] = &["van", "von", "de", "der", "den", "da", "di", "du", "le", "la", "del"];

/// Generational suffixes written after the family name
const SUFFIXES: &[&str] = &["Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV"];

/// An author name split into family and given parts
///
/// Accepts both "Given Middle Family" and "Family, Given Middle" forms.
/// Casing is preserved exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// Family name (surname), including particles such as "van"
    pub family: String,
    /// Given names and initials, in order
    pub given: Vec<String>,
    /// Generational suffix such as "Jr." or "III"
    pub suffix: Option<String>,
}

impl PersonName {
    /// Parse a full name
    ///
    /// # Examples
    ///
    /// ```
    /// use lyceum_domain::PersonName;
    ///
    /// let name = PersonName::parse("John A. Smith");
    /// assert_eq!(name.family, "Smith");
    /// assert_eq!(name.initials(), "J. A.");
    ///
    /// let inverted = PersonName::parse("Smith, John");
    /// assert_eq!(inverted.family, "Smith");
    /// assert_eq!(inverted.given, vec!["John".to_string()]);
    ///
    /// let suffixed = PersonName::parse("Martin Luther King Jr.");
    /// assert_eq!(suffixed.family, "King");
    /// assert_eq!(suffixed.suffix.as_deref(), Some("Jr."));
    /// ```
    pub fn parse(full: &str) -> Self {
        let full = full.trim();

        // "King, Martin Luther, Jr." and "Martin Luther King, Jr."
        let (full, mut suffix) = match full.rsplit_once(',') {
            Some((head, tail)) if is_suffix(tail) => (head.trim(), Some(tail.trim().to_string())),
            _ => (full, None),
        };

        if let Some((family, given)) = full.split_once(',') {
            return Self {
                family: family.trim().to_string(),
                given: given.split_whitespace().map(str::to_string).collect(),
                suffix,
            };
        }

        let mut tokens: Vec<&str> = full.split_whitespace().collect();
        if suffix.is_none() && tokens.len() > 1 && tokens.last().is_some_and(|t| is_suffix(t)) {
            suffix = tokens.pop().map(str::to_string);
        }
        let Some((last, rest)) = tokens.split_last() else {
            return Self {
                family: String::new(),
                given: Vec::new(),
                suffix,
            };
        };

        // Walk back over particles so "Ludwig van Beethoven" keeps "van Beethoven"
        let mut split = rest.len();
        while split > 0 && FAMILY_PARTICLES.contains(&rest[split - 1]) {
            split -= 1;
        }

        let mut family: Vec<&str> = rest[split..].to_vec();
        family.push(last);

        Self {
            family: family.join(" "),
            given: rest[..split].iter().map(|s| s.to_string()).collect(),
            suffix,
        }
    }

    /// Initials with periods, space separated ("J. A.")
    pub fn initials(&self) -> String {
        self.initial_chars()
            .iter()
            .map(|c| format!("{}.", c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Initials without punctuation ("JA"), as used by AMA
    pub fn initials_compact(&self) -> String {
        self.initial_chars().into_iter().collect()
    }

    /// "Given Family Suffix" order
    pub fn display_full(&self) -> String {
        let mut parts: Vec<&str> = self.given.iter().map(String::as_str).collect();
        parts.push(&self.family);
        if let Some(suffix) = &self.suffix {
            parts.push(suffix);
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }

    /// "Family, Given" order; the suffix is left out
    pub fn inverted(&self) -> String {
        if self.given.is_empty() {
            self.family.clone()
        } else {
            format!("{}, {}", self.family, self.given.join(" "))
        }
    }

    fn initial_chars(&self) -> Vec<char> {
        self.given
            .iter()
            .flat_map(|g| g.split('-'))
            .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(&token.trim())
}
