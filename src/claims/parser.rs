use serde::Serialize;

use super::error::ClaimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    President,
    PrimeMinister,
    Capital,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::President => "President",
            Role::PrimeMinister => "Prime Minister",
            Role::Capital => "Capital",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked in order; the first role with a matching synonym wins.
const ROLE_SYNONYMS: &[(Role, &[&str])] = &[
    (Role::President, &["president", "leader", "head of state"]),
    (Role::PrimeMinister, &["prime minister", "pm", "premier"]),
    (Role::Capital, &["capital", "city"]),
];

const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("us", "United States"),
    ("america", "United States"),
    ("united states", "United States"),
    ("uk", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("united kingdom", "United Kingdom"),
    ("india", "India"),
    ("russia", "Russia"),
    ("france", "France"),
];

/// "X is the <role> of <country> [in <year>]".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleClaim {
    pub subject: String,
    pub role: Role,
    pub country: String,
    pub year: Option<u16>,
}

impl RoleClaim {
    pub fn parse(statement: &str) -> Result<Self, ClaimError> {
        let lowered = statement.to_lowercase();
        let year = find_year(&lowered);

        let words: Vec<String> = lowered
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| year.is_none_or(|y| *w != y.to_string()))
            .collect();

        if words.is_empty() {
            return Err(ClaimError::EmptyStatement);
        }

        let role = detect_role(&words).ok_or_else(|| ClaimError::UnsupportedClaim {
            statement: statement.trim().to_string(),
        })?;

        let country = detect_country(&words);
        let subject = capitalize(&words[0]);

        Ok(Self {
            subject,
            role,
            country,
            year,
        })
    }

    /// Knowledge-base title for the office, e.g. "President of France".
    pub fn page_title(&self) -> String {
        format!("{} of {}", self.role, self.country)
    }
}

fn find_year(lowered: &str) -> Option<u16> {
    lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| w.len() == 4 && (w.starts_with("19") || w.starts_with("20")))
        .find_map(|w| w.parse::<u16>().ok())
}

fn detect_role(words: &[String]) -> Option<Role> {
    let padded = format!(" {} ", words.join(" "));
    ROLE_SYNONYMS.iter().find_map(|(role, synonyms)| {
        synonyms
            .iter()
            .any(|s| padded.contains(&format!(" {s} ")))
            .then_some(*role)
    })
}

/// Word after "of" (two-word aliases first, "the" skipped), else the last word.
fn detect_country(words: &[String]) -> String {
    let mut start = words
        .iter()
        .position(|w| w == "of")
        .filter(|idx| idx + 1 < words.len())
        .map_or(words.len() - 1, |idx| idx + 1);
    if words[start] == "the" && start + 1 < words.len() {
        start += 1;
    }

    if let Some(pair) = words.get(start..start + 2) {
        if let Some(country) = alias(&pair.join(" ")) {
            return country.to_string();
        }
    }

    let raw = &words[start];
    alias(raw).map_or_else(|| capitalize(raw), str::to_string)
}

fn alias(raw: &str) -> Option<&'static str> {
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, country)| *country)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
