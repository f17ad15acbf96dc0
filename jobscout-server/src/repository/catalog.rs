//! Catalog Repository
//!
//! Loads the job catalog.

use std::path::Path;

use anyhow::{Context, Result};
use jobscout_core::catalog::Catalog;
use jobscout_core::domain::job::JobRecord;

/// Load the catalog from a JSON file, or the built-in sample when no path
/// is given.
///
/// The file must hold a JSON array of job records with unique ids.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::sample());
    };

    tracing::info!("Loading catalog from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse(&raw).with_context(|| format!("Invalid catalog file: {}", path.display()))
}

/// Parse a JSON array of job records
pub fn parse(raw: &str) -> Result<Catalog> {
    let records: Vec<JobRecord> =
        serde_json::from_str(raw).context("Expected a JSON array of job records")?;
    let catalog = Catalog::new(records);

    if let Some(id) = catalog.duplicate_id() {
        anyhow::bail!("Duplicate job id {}", id);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::domain::job::Source;

    const ONE_JOB: &str = r##"[{
        "id": 1,
        "title": "Rust Engineer",
        "company": "Ferrous",
        "location": "Remote",
        "salary": "$150,000",
        "jobType": "Full-time",
        "datePosted": "Just now",
        "description": "Systems work.",
        "requirements": ["Rust"],
        "source": "glassdoor",
        "url": "https://example.com/jobs/1"
    }]"##;

    #[test]
    fn test_load_without_path_uses_sample() {
        let catalog = load(None).unwrap();
        assert_eq!(catalog.len(), Catalog::sample().len());
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse(ONE_JOB).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].source, Source::Glassdoor);
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let twice = format!("[{0}, {0}]", &ONE_JOB[1..ONE_JOB.len() - 1]);
        let err = parse(&twice).unwrap_err();
        assert!(err.to_string().contains("Duplicate job id 1"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse(r#"{"jobs": []}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/jobs.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
