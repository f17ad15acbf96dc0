//! Interactive browsing
//!
//! Runs one search, then reads sort/filter/page/detail actions from stdin
//! and re-renders from the same result set without searching again.

use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use colored::*;
use jobscout_client::view::{JobDetail, render_page};
use jobscout_client::{ResultManager, SearchClient, SortKey};
use jobscout_core::domain::filter::{DatePosted, FilterState};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{SearchArgs, run_search};
use crate::output::{print_detail, print_page};

const HELP: &str = "\
Commands:
  sort <relevance|date|salary>          reorder the results
  filter [date=<any|day|week|month>] [type=<job type>]... [exp=<level>]...
                                        replace the active filters
  clear                                 remove all filters
  page <n> | next | prev                move between pages
  list                                  show the current page again
  show <id>                             job details
  apply <id>                            open the application link
  save <id>                             save a job (this session only)
  search <keyword>                      new search with a different keyword
  help                                  this text
  quit                                  leave";

/// A parsed user action
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Sort(SortKey),
    Filter(FilterState),
    ClearFilters,
    Page(usize),
    Next,
    Previous,
    List,
    Show(u32),
    Apply(u32),
    Save(u32),
    Search(String),
    Help,
    Quit,
}

/// What the session wants printed after an action
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Page,
    Detail(u32),
    Open(String),
    Saved { id: u32, first: bool },
    Missing(u32),
    Help,
    Quit,
}

/// Parse one input line
fn parse_action(line: &str) -> Result<Action, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = words.collect();

    let id = |rest: &[&str]| -> Result<u32, String> {
        rest.first()
            .ok_or_else(|| format!("Usage: {} <id>", command))?
            .parse::<u32>()
            .map_err(|_| "Job id must be a number".to_string())
    };

    match command.as_str() {
        "sort" => rest
            .first()
            .ok_or_else(|| "Usage: sort <relevance|date|salary>".to_string())?
            .parse()
            .map(Action::Sort),
        "filter" => parse_filters(&rest).map(Action::Filter),
        "clear" => Ok(Action::ClearFilters),
        "page" => rest
            .first()
            .and_then(|n| n.parse::<usize>().ok())
            .map(Action::Page)
            .ok_or_else(|| "Usage: page <n>".to_string()),
        "next" | "n" => Ok(Action::Next),
        "prev" | "previous" | "p" => Ok(Action::Previous),
        "list" | "ls" => Ok(Action::List),
        "show" => id(rest.as_slice()).map(Action::Show),
        "apply" => id(rest.as_slice()).map(Action::Apply),
        "save" => id(rest.as_slice()).map(Action::Save),
        "search" => Ok(Action::Search(rest.join(" "))),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        other => Err(format!("Unknown command '{}' (try 'help')", other)),
    }
}

/// Build a fresh filter state from `key=value` words
fn parse_filters(words: &[&str]) -> Result<FilterState, String> {
    let mut filters = FilterState::default();

    for word in words {
        let (key, value) = word
            .split_once('=')
            .ok_or_else(|| format!("Expected key=value, got '{}'", word))?;
        match key {
            "date" => filters.date_posted = value.parse::<DatePosted>()?,
            "type" => {
                filters.job_types.insert(value.to_string());
            }
            "exp" => {
                filters.experience_levels.insert(value.to_string());
            }
            other => return Err(format!("Unknown filter '{}'", other)),
        }
    }

    Ok(filters)
}

/// Result set plus per-job detail state for one browsing session
struct Session {
    results: ResultManager,
    details: HashMap<u32, JobDetail>,
}

impl Session {
    fn new() -> Self {
        Self {
            results: ResultManager::new(),
            details: HashMap::new(),
        }
    }

    /// Forget detail state; ids are only unique within one result set
    fn reset_details(&mut self) {
        self.details.clear();
    }

    /// Detail for `id`, created on first use
    fn detail(&mut self, id: u32) -> Option<&mut JobDetail> {
        if !self.details.contains_key(&id) {
            let job = self.results.find(id)?;
            self.details.insert(id, JobDetail::from(job));
        }
        self.details.get_mut(&id)
    }

    /// Apply an action that does not need the network
    fn handle(&mut self, action: Action) -> Reply {
        match action {
            Action::Sort(key) => {
                self.results.apply_sort(key);
                Reply::Page
            }
            Action::Filter(filters) => {
                self.results.apply_filters(filters);
                Reply::Page
            }
            Action::ClearFilters => {
                self.results.apply_filters(FilterState::default());
                Reply::Page
            }
            Action::Page(n) => {
                self.results.set_page(n);
                Reply::Page
            }
            Action::Next => {
                let page = self.results.page();
                if page < self.results.page_count() {
                    self.results.set_page(page + 1);
                }
                Reply::Page
            }
            Action::Previous => {
                let page = self.results.page();
                if page > 1 {
                    self.results.set_page(page - 1);
                }
                Reply::Page
            }
            Action::List | Action::Search(_) => Reply::Page,
            Action::Show(id) => match self.detail(id) {
                Some(_) => Reply::Detail(id),
                None => Reply::Missing(id),
            },
            Action::Apply(id) => match self.detail(id) {
                Some(detail) => Reply::Open(detail.apply().to_string()),
                None => Reply::Missing(id),
            },
            Action::Save(id) => match self.detail(id) {
                Some(detail) => Reply::Saved {
                    id,
                    first: detail.save(),
                },
                None => Reply::Missing(id),
            },
            Action::Help => Reply::Help,
            Action::Quit => Reply::Quit,
        }
    }
}

/// Search, then browse the results until the user quits or stdin closes
pub async fn browse(client: &SearchClient, args: &SearchArgs) -> Result<()> {
    let mut session = Session::new();
    run_search(client, args.criteria(), &mut session.results).await?;
    print_page(&render_page(&session.results));
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", "jobscout>".cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        if let Action::Search(keyword) = &action {
            let mut criteria = args.criteria();
            criteria.keyword = keyword.clone();
            criteria.filters = session.results.filters().clone();

            match run_search(client, criteria, &mut session.results).await {
                Ok(()) => session.reset_details(),
                Err(err) => {
                    println!("{}", err.to_string().red());
                    continue;
                }
            }
        }

        match session.handle(action) {
            Reply::Page => print_page(&render_page(&session.results)),
            Reply::Detail(id) => {
                if let Some(detail) = session.details.get(&id) {
                    print_detail(detail);
                }
            }
            Reply::Open(url) => println!("Opening {}", url.underline()),
            Reply::Saved { id, first: true } => {
                println!("{}", format!("✓ Saved job #{}", id).green())
            }
            Reply::Saved { id, first: false } => {
                println!("{}", format!("Job #{} is already saved", id).dimmed())
            }
            Reply::Missing(id) => {
                println!("{}", format!("Job #{} is not in the results", id).yellow())
            }
            Reply::Help => println!("{}", HELP),
            Reply::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_core::catalog::Catalog;

    fn session() -> Session {
        let mut session = Session::new();
        session
            .results
            .set_results(Catalog::sample().records().to_vec());
        session
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_action("sort salary"), Ok(Action::Sort(SortKey::Salary)));
        assert!(parse_action("sort").is_err());
        assert!(parse_action("sort cost").is_err());
    }

    #[test]
    fn test_parse_filter() {
        let action = parse_action("filter date=week type=Contract exp=senior").unwrap();
        let Action::Filter(filters) = action else {
            panic!("expected filter action");
        };
        assert_eq!(filters.date_posted, DatePosted::Week);
        assert!(filters.job_types.contains("Contract"));
        assert!(filters.experience_levels.contains("senior"));

        assert!(parse_action("filter date=yesterday").is_err());
        assert!(parse_action("filter color=red").is_err());
        assert!(parse_action("filter week").is_err());
    }

    #[test]
    fn test_parse_ids_and_misc() {
        assert_eq!(parse_action("show 4"), Ok(Action::Show(4)));
        assert_eq!(parse_action("SAVE 2"), Ok(Action::Save(2)));
        assert!(parse_action("apply x").is_err());
        assert_eq!(parse_action("page 2"), Ok(Action::Page(2)));
        assert_eq!(
            parse_action("search data scientist"),
            Ok(Action::Search("data scientist".to_string()))
        );
        assert_eq!(parse_action("q"), Ok(Action::Quit));
        assert!(parse_action("dance").is_err());
    }

    #[test]
    fn test_next_and_prev_stay_in_bounds() {
        let mut session = session();

        // 10 sample jobs fit on one page
        session.handle(Action::Next);
        assert_eq!(session.results.page(), 1);
        session.handle(Action::Previous);
        assert_eq!(session.results.page(), 1);
    }

    #[test]
    fn test_filter_then_clear() {
        let mut session = session();

        session.handle(parse_action("filter type=contract").unwrap());
        assert_eq!(session.results.total(), 2);

        session.handle(parse_action("filter date=day").unwrap());
        assert_eq!(session.results.total(), 2);

        session.handle(Action::ClearFilters);
        assert_eq!(session.results.total(), 10);
    }

    #[test]
    fn test_save_is_one_shot() {
        let mut session = session();

        assert_eq!(session.handle(Action::Save(3)), Reply::Saved { id: 3, first: true });
        assert_eq!(session.handle(Action::Save(3)), Reply::Saved { id: 3, first: false });
        assert!(session.details[&3].is_saved());
    }

    #[test]
    fn test_show_and_apply() {
        let mut session = session();

        assert_eq!(session.handle(Action::Show(5)), Reply::Detail(5));
        assert_eq!(session.handle(Action::Apply(5)), Reply::Open("#".to_string()));
        assert_eq!(session.handle(Action::Show(42)), Reply::Missing(42));
    }

    #[test]
    fn test_reset_details_forgets_saved_state() {
        let mut session = session();
        session.handle(Action::Save(1));

        session.reset_details();
        assert_eq!(session.handle(Action::Save(1)), Reply::Saved { id: 1, first: true });
    }
}
