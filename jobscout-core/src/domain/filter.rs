//! Filter state
//!
//! UI filters applied on top of a search: date bucket and job types.
//! Experience levels are carried through the wire contract but no record
//! has that attribute, so they never constrain anything.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::heuristics::leading_int;
use crate::domain::job::JobRecord;

/// Date-posted bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePosted {
    Day,
    Week,
    Month,
    /// No constraint. Unknown bucket names on the wire also land here.
    #[default]
    #[serde(other)]
    Any,
}

impl DatePosted {
    /// Whether a `date_posted` string falls within this bucket.
    ///
    /// - day: "Just now" or a "1 day" string
    /// - week: "Just now", any "day" string, or a "week" string whose leading
    ///   integer is exactly 1
    /// - month: anything not mentioning "month", or a "month" string whose
    ///   leading integer is at most 1
    ///
    /// Matching is by substring, so "11 days ago" passes `Day` as well.
    pub fn admits(&self, date_posted: &str) -> bool {
        match self {
            DatePosted::Any => true,
            DatePosted::Day => date_posted.contains("Just now") || date_posted.contains("1 day"),
            DatePosted::Week => {
                date_posted.contains("Just now")
                    || date_posted.contains("day")
                    || (date_posted.contains("week") && leading_int(date_posted) == Some(1))
            }
            DatePosted::Month => {
                !date_posted.contains("month")
                    || leading_int(date_posted).is_some_and(|months| months <= 1)
            }
        }
    }
}

impl fmt::Display for DatePosted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatePosted::Any => "any",
            DatePosted::Day => "day",
            DatePosted::Week => "week",
            DatePosted::Month => "month",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DatePosted {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(DatePosted::Any),
            "day" => Ok(DatePosted::Day),
            "week" => Ok(DatePosted::Week),
            "month" => Ok(DatePosted::Month),
            other => Err(format!(
                "Unknown date bucket '{}' (expected any, day, week or month)",
                other
            )),
        }
    }
}

/// Active UI filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub date_posted: DatePosted,
    /// Empty means no constraint
    pub job_types: BTreeSet<String>,
    /// Accepted, never applied
    pub experience_levels: BTreeSet<String>,
}

impl FilterState {
    /// Whether every active filter admits the record
    pub fn matches(&self, job: &JobRecord) -> bool {
        self.date_posted.admits(&job.date_posted) && self.matches_job_type(job)
    }

    /// Case-insensitive substring match against any selected job type
    fn matches_job_type(&self, job: &JobRecord) -> bool {
        if self.job_types.is_empty() {
            return true;
        }
        let job_type = job.job_type.to_lowercase();
        self.job_types
            .iter()
            .any(|selected| job_type.contains(&selected.to_lowercase()))
    }

    /// True when no filter narrows the view
    pub fn is_unconstrained(&self) -> bool {
        self.date_posted == DatePosted::Any && self.job_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::Source;

    fn job(date_posted: &str, job_type: &str) -> JobRecord {
        JobRecord {
            id: 1,
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: "$1".to_string(),
            job_type: job_type.to_string(),
            date_posted: date_posted.to_string(),
            description: String::new(),
            requirements: vec![],
            source: Source::Indeed,
            url: "#".to_string(),
        }
    }

    #[test]
    fn test_day_bucket() {
        assert!(DatePosted::Day.admits("Just now"));
        assert!(DatePosted::Day.admits("1 day ago"));
        assert!(!DatePosted::Day.admits("2 days ago"));
        assert!(!DatePosted::Day.admits("1 week ago"));
        // substring rule
        assert!(DatePosted::Day.admits("11 days ago"));
    }

    #[test]
    fn test_week_bucket() {
        assert!(DatePosted::Week.admits("Just now"));
        assert!(DatePosted::Week.admits("6 days ago"));
        assert!(DatePosted::Week.admits("1 week ago"));
        assert!(!DatePosted::Week.admits("2 weeks ago"));
        assert!(!DatePosted::Week.admits("1 month ago"));
    }

    #[test]
    fn test_month_bucket_is_loose() {
        assert!(DatePosted::Month.admits("3 weeks ago"));
        assert!(DatePosted::Month.admits("1 month ago"));
        assert!(DatePosted::Month.admits("some time ago"));
        assert!(!DatePosted::Month.admits("2 months ago"));
        assert!(!DatePosted::Month.admits("a month ago"));
    }

    #[test]
    fn test_job_type_filter_is_case_insensitive_substring() {
        let mut filters = FilterState::default();
        filters.job_types.insert("full".to_string());

        assert!(filters.matches(&job("Just now", "Full-time")));
        assert!(!filters.matches(&job("Just now", "Contract")));

        filters.job_types.insert("CONTRACT".to_string());
        assert!(filters.matches(&job("Just now", "Contract")));
    }

    #[test]
    fn test_experience_levels_are_inert() {
        let mut filters = FilterState::default();
        filters.experience_levels.insert("senior".to_string());

        assert!(filters.matches(&job("Just now", "Full-time")));
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_unknown_bucket_deserializes_to_any() {
        let filters: FilterState = serde_json::from_value(serde_json::json!({
            "datePosted": "fortnight",
            "jobTypes": ["Contract"]
        }))
        .unwrap();

        assert_eq!(filters.date_posted, DatePosted::Any);
        assert!(filters.experience_levels.is_empty());
        assert!(filters.job_types.contains("Contract"));
    }

    #[test]
    fn test_date_bucket_wire_names() {
        for bucket in ["any", "day", "week", "month"] {
            let parsed: DatePosted = serde_json::from_value(serde_json::json!(bucket)).unwrap();
            assert_eq!(parsed.to_string(), bucket);
            assert_eq!(serde_json::to_value(parsed).unwrap(), serde_json::json!(bucket));
        }
        assert_eq!(DatePosted::default(), DatePosted::Any);
    }
}
