//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod browse;
mod search;

use std::collections::BTreeSet;

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use jobscout_client::{ResultManager, SearchClient, SortKey};
use jobscout_core::domain::criteria::SearchCriteria;
use jobscout_core::domain::filter::{DatePosted, FilterState};
use jobscout_core::domain::job::Source;

use crate::config::Config;

/// Search criteria shared by every command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Keyword matched against title, company and description
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// Location substring (e.g. "Remote", "CA")
    #[arg(short, long, default_value = "")]
    location: String,

    /// Job sources to include (comma-separated)
    #[arg(short, long = "source", value_delimiter = ',', default_values_t = Source::ALL)]
    sources: Vec<Source>,

    /// Posted within: any, day, week or month
    #[arg(short, long, default_value_t = DatePosted::Any)]
    date: DatePosted,

    /// Job type filter, repeatable (e.g. --job-type full-time --job-type contract)
    #[arg(short = 't', long = "job-type")]
    job_types: Vec<String>,

    /// Experience level, repeatable (accepted, currently has no effect)
    #[arg(short = 'e', long = "experience")]
    experience_levels: Vec<String>,
}

impl SearchArgs {
    fn filters(&self) -> FilterState {
        FilterState {
            date_posted: self.date,
            job_types: self.job_types.iter().cloned().collect(),
            experience_levels: self.experience_levels.iter().cloned().collect(),
        }
    }

    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            keyword: self.keyword.clone(),
            location: self.location.clone(),
            sources: self.sources.iter().copied().collect::<BTreeSet<_>>(),
            filters: self.filters(),
        }
    }
}

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search and print one page of results
    Search {
        #[command(flatten)]
        criteria: SearchArgs,

        /// Sort by relevance, date or salary
        #[arg(long, default_value_t = SortKey::Relevance)]
        sort: SortKey,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Search and show the full detail of one job
    Show {
        /// Job ID from the result list
        id: u32,

        #[command(flatten)]
        criteria: SearchArgs,
    },
    /// Search, then sort, filter and page through the results interactively
    Browse {
        #[command(flatten)]
        criteria: SearchArgs,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.search_client()?;

    match command {
        Commands::Search {
            criteria,
            sort,
            page,
        } => search::search(&client, &criteria, sort, page).await,
        Commands::Show { id, criteria } => search::show(&client, &criteria, id).await,
        Commands::Browse { criteria } => browse::browse(&client, &criteria).await,
    }
}

/// Submit a search and load the outcome into `results`
///
/// Validation errors are returned to the user; a degraded result is
/// announced but still loaded.
async fn run_search(
    client: &SearchClient,
    criteria: SearchCriteria,
    results: &mut ResultManager,
) -> Result<()> {
    let filters = criteria.filters.clone();

    eprintln!("{}", "Searching...".dimmed());
    let outcome = client.submit_search(criteria).await?;

    if outcome.is_degraded() {
        eprintln!(
            "{}",
            "⚠ Job server unavailable, showing results from sample data".yellow()
        );
    }

    if results.load(outcome) {
        results.apply_filters(filters);
    }

    Ok(())
}
