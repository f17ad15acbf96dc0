//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::heuristics;

/// A single job posting as returned by the Job Source.
///
/// Records are immutable once received. `id` is unique within one result
/// set, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free text, e.g. "$100,000 - $130,000"
    pub salary: String,
    /// e.g. "Full-time", "Contract"
    pub job_type: String,
    /// Free-text relative string, e.g. "2 days ago", "Just now"
    pub date_posted: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub source: Source,
    pub url: String,
}

impl JobRecord {
    /// Approximate age in days derived from `date_posted`.
    ///
    /// `None` when the string names a unit but carries no leading number.
    pub fn recency_days(&self) -> Option<i64> {
        heuristics::recency_days(&self.date_posted)
    }

    /// Salary sort key derived from `salary` (digit concatenation / 1000).
    pub fn salary_key(&self) -> Option<f64> {
        heuristics::salary_value(&self.salary)
    }
}

/// Origin tag of a job posting
///
/// Tags other than the known ones deserialize to [`Source::Other`], so a
/// record or request naming a new board is still accepted. All unknown tags
/// collapse into that one value and serialize back as "other".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Indeed,
    Glassdoor,
    #[serde(other)]
    Other,
}

impl Source {
    /// Every known origin tag, in display order
    pub const ALL: [Source; 2] = [Source::Indeed, Source::Glassdoor];

    /// Wire tag ("indeed", "glassdoor")
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Indeed => "indeed",
            Source::Glassdoor => "glassdoor",
            Source::Other => "other",
        }
    }

    /// Capitalized label for display ("Indeed", "Glassdoor")
    pub fn label(&self) -> &'static str {
        match self {
            Source::Indeed => "Indeed",
            Source::Glassdoor => "Glassdoor",
            Source::Other => "Other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indeed" => Ok(Source::Indeed),
            "glassdoor" => Ok(Source::Glassdoor),
            other => Err(format!("Unknown job source: {}", other)),
        }
    }
}
