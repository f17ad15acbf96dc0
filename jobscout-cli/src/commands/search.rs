//! Search command handlers
//!
//! One-shot search and job detail commands.

use anyhow::Result;
use jobscout_client::view::{JobDetail, render_page};
use jobscout_client::{ResultManager, SearchClient, SortKey};

use super::{SearchArgs, run_search};
use crate::output::{print_detail, print_page};

/// Search and print one page
pub async fn search(
    client: &SearchClient,
    args: &SearchArgs,
    sort: SortKey,
    page: usize,
) -> Result<()> {
    let mut results = ResultManager::new();
    run_search(client, args.criteria(), &mut results).await?;

    results.apply_sort(sort);
    results.set_page(page);

    print_page(&render_page(&results));

    Ok(())
}

/// Search and print the detail of one job
pub async fn show(client: &SearchClient, args: &SearchArgs, id: u32) -> Result<()> {
    let mut results = ResultManager::new();
    run_search(client, args.criteria(), &mut results).await?;

    let job = results
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("Job #{} is not in the results of this search", id))?;

    print_detail(&JobDetail::from(job));

    Ok(())
}
