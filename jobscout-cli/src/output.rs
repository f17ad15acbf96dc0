//! Terminal output
//!
//! Prints the client's view models with colors.

use colored::*;
use jobscout_client::view::{JobCard, JobDetail, PageView, Pagination};
use jobscout_core::domain::job::Source;

/// Print the result list for the current page
pub fn print_page(view: &PageView) {
    if let Some(message) = view.empty_message {
        println!("{}", message.yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} job(s), page {} of {}, sorted by {}:",
            view.total_results, view.page, view.page_count, view.sort_key
        )
        .bold()
    );
    println!();

    if view.cards.is_empty() {
        println!("{}", format!("Page {} has no jobs.", view.page).yellow());
    }

    for card in &view.cards {
        print_card(card);
    }

    if let Some(pagination) = &view.pagination {
        print_pagination(pagination);
    }
}

/// Print a job summary
fn print_card(card: &JobCard) {
    println!(
        "  {} {} {}  {}",
        "▸".cyan(),
        format!("#{}", card.id).dimmed(),
        card.title.bold(),
        colorize_source(card.source, card.source_label)
    );
    println!("    {} · {}", card.company, card.location.dimmed());
    println!(
        "    {} | {} | {}",
        card.job_type,
        card.salary.green(),
        card.date_posted.dimmed()
    );
    println!("    {}", truncate(&card.description, 100).dimmed());
    println!();
}

/// Print page controls
fn print_pagination(pagination: &Pagination) {
    let mut parts = Vec::new();

    if pagination.previous.is_some() {
        parts.push("« Previous".to_string());
    }
    for button in &pagination.buttons {
        if button.active {
            parts.push(format!("[{}]", button.number).bold().to_string());
        } else {
            parts.push(button.number.to_string());
        }
    }
    if pagination.next.is_some() {
        parts.push("Next »".to_string());
    }

    println!("{}", parts.join("  "));
}

/// Print detailed job information
pub fn print_detail(detail: &JobDetail) {
    println!("{}", detail.title.bold());
    println!("{}", detail.company.cyan());
    println!("{}", detail.location.dimmed());
    println!();
    println!("  Job Type: {}", detail.job_type);
    println!("  Salary:   {}", detail.salary.green());
    println!("  Posted:   {}", detail.date_posted);
    println!("  Source:   {}", detail.source_label);

    println!("\n{}", "Job Description".bold());
    println!("{}", detail.description);

    if !detail.requirements.is_empty() {
        println!("\n{}", "Requirements".bold());
        for requirement in &detail.requirements {
            println!("  • {}", requirement);
        }
    }

    println!();
    println!(
        "  {}   {}",
        "Apply Now".green().bold(),
        if detail.is_saved() {
            detail.save_label().dimmed()
        } else {
            detail.save_label().normal()
        }
    );
}

/// Colorize a source tag for display
fn colorize_source(source: Source, label: &str) -> ColoredString {
    match source {
        Source::Indeed => label.blue(),
        Source::Glassdoor => label.green(),
        Source::Other => label.normal(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
