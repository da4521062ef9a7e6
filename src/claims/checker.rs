use serde::Serialize;
use tracing::debug;

use crate::verification::{KnowledgeBase, PageLookup};

use super::error::ClaimError;
use super::parser::RoleClaim;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimVerdict {
    True,
    False,
    Unknown,
}

impl ClaimVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimVerdict::True => "TRUE",
            ClaimVerdict::False => "FALSE",
            ClaimVerdict::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ClaimVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimOutcome {
    pub claim: RoleClaim,
    pub verdict: ClaimVerdict,
    pub reason: String,
}

/// Checks office-holder statements against the summary of the office's page.
#[derive(Debug, Clone)]
pub struct ClaimChecker<K> {
    knowledge_base: K,
}

impl<K: KnowledgeBase> ClaimChecker<K> {
    pub fn new(knowledge_base: K) -> Self {
        Self { knowledge_base }
    }

    pub async fn check(&self, statement: &str) -> Result<ClaimOutcome, ClaimError> {
        let claim = RoleClaim::parse(statement)?;
        let title = claim.page_title();
        debug!(title = %title, subject = %claim.subject, year = ?claim.year, "Checking role claim");

        let (verdict, reason) = match self.knowledge_base.lookup(&title).await? {
            PageLookup::Missing => (ClaimVerdict::Unknown, format!("No page found for {title}")),
            PageLookup::Ambiguous => (
                ClaimVerdict::Unknown,
                format!("Several pages match {title}"),
            ),
            PageLookup::Resolved { summary } => judge(&claim, &summary.to_lowercase()),
        };

        Ok(ClaimOutcome {
            claim,
            verdict,
            reason,
        })
    }
}

fn judge(claim: &RoleClaim, summary: &str) -> (ClaimVerdict, String) {
    let RoleClaim {
        subject,
        role,
        country,
        year,
    } = claim;
    let person = subject.to_lowercase();

    if !summary.contains(&person) {
        return (
            ClaimVerdict::False,
            format!("{subject} is not listed for {role} of {country}"),
        );
    }

    let Some(year) = year else {
        return (
            ClaimVerdict::True,
            format!("{subject} is currently {role} of {country}"),
        );
    };

    if year_follows(summary, &person, &year.to_string()) {
        (
            ClaimVerdict::True,
            format!("{subject} was {role} of {country} in {year}"),
        )
    } else {
        (
            ClaimVerdict::False,
            format!("{subject} was not {role} of {country} in {year}"),
        )
    }
}

/// Whether `year` appears after the first mention of `person` on the same line.
fn year_follows(summary: &str, person: &str, year: &str) -> bool {
    summary.lines().any(|line| {
        line.find(person)
            .is_some_and(|idx| line[idx + person.len()..].contains(year))
    })
}
