//! View models
//!
//! Pure functions from result-manager state to render-ready data. Nothing in
//! here knows how it will be drawn; the CLI prints it, another front end
//! could template it.

use jobscout_core::domain::job::{JobRecord, Source};

use crate::results::{ResultManager, SortKey};

/// Shown in place of the job list when the view is empty
pub const EMPTY_STATE_MESSAGE: &str = "No jobs found. Try adjusting your search criteria.";

/// One job in the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: Source,
    /// "Indeed", "Glassdoor"
    pub source_label: &'static str,
    pub job_type: String,
    pub salary: String,
    pub date_posted: String,
    pub description: String,
}

impl From<&JobRecord> for JobCard {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            source: job.source,
            source_label: job.source.label(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone(),
            date_posted: job.date_posted.clone(),
            description: job.description.clone(),
        }
    }
}

/// A numbered page control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Page controls; only built when there is more than one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Target of "Previous", when not on the first page
    pub previous: Option<usize>,
    pub buttons: Vec<PageButton>,
    /// Target of "Next", when not on the last page
    pub next: Option<usize>,
}

impl Pagination {
    fn build(page: usize, page_count: usize) -> Option<Self> {
        if page_count <= 1 {
            return None;
        }

        let buttons = (1..=page_count)
            .map(|number| PageButton {
                number,
                active: number == page,
            })
            .collect();

        Some(Self {
            previous: (page > 1).then(|| page - 1),
            buttons,
            next: (page < page_count).then(|| page + 1),
        })
    }
}

/// Everything needed to draw the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Size of the filtered view, not of the page
    pub total_results: usize,
    pub page: usize,
    pub page_count: usize,
    pub sort_key: SortKey,
    pub cards: Vec<JobCard>,
    pub pagination: Option<Pagination>,
    /// Set when the view is empty
    pub empty_message: Option<&'static str>,
}

/// Build the view model of the current page
pub fn render_page(results: &ResultManager) -> PageView {
    let total_results = results.total();
    let page = results.page();
    let page_count = results.page_count();

    if total_results == 0 {
        return PageView {
            total_results,
            page,
            page_count,
            sort_key: results.sort_key(),
            cards: Vec::new(),
            pagination: None,
            empty_message: Some(EMPTY_STATE_MESSAGE),
        };
    }

    PageView {
        total_results,
        page,
        page_count,
        sort_key: results.sort_key(),
        cards: results.current_page().into_iter().map(JobCard::from).collect(),
        pagination: Pagination::build(page, page_count),
        empty_message: None,
    }
}

/// Full detail of one selected job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub date_posted: String,
    pub source_label: &'static str,
    pub description: String,
    pub requirements: Vec<String>,
    url: String,
    saved: bool,
}

impl JobDetail {
    /// Target to open for "Apply"
    pub fn apply(&self) -> &str {
        &self.url
    }

    /// Mark the job saved. Returns `true` only the first time.
    ///
    /// Display state only; nothing is persisted.
    pub fn save(&mut self) -> bool {
        !std::mem::replace(&mut self.saved, true)
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Label for the save action
    pub fn save_label(&self) -> &'static str {
        if self.saved { "Saved" } else { "Save Job" }
    }
}

impl From<&JobRecord> for JobDetail {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone(),
            date_posted: job.date_posted.clone(),
            source_label: job.source.label(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            url: job.url.clone(),
            saved: false,
        }
    }
}
