//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Profile
//!
//! ```text
//! Profile
//!     Username: acme
//!     Heading: Hi, I'm Ada
//!     Tagline: I build things with code.
//!     About: I'm a software engineer with a passion for building deli...
//!     Email: (unchanged)
//!     Footer: Ada Lovelace
//!     Featured: engine
//! ```
//!
//! ## Projects
//!
//! ```text
//! Projects
//! 001 engine
//!     URL: https://github.com/acme/engine
//!     Description: Difference engine
//! 002 tools
//!     URL: https://github.com/acme/tools
//!     Description: No description provided.
//! ```
//!
//! When the listing couldn't be fetched the section holds a single line with
//! the fallback message.
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::Profile;
use crate::init::InitReport;
use crate::page::{PROJECTS_UNAVAILABLE, ProjectCard};
use crate::projects::RenderOutcome;
use std::path::Path;

const DESCRIPTION_WIDTH: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Format the resolved profile.
pub fn format_profile(profile: &Profile) -> Vec<String> {
    let email = profile.email.as_deref().unwrap_or("(unchanged)");
    let featured = if profile.featured.is_empty() {
        "(none)".to_string()
    } else {
        profile.featured.join(", ")
    };

    vec![
        "Profile".to_string(),
        format!("{}Username: {}", indent(1), profile.username),
        format!("{}Heading: {}", indent(1), profile.hero_heading()),
        format!("{}Tagline: {}", indent(1), profile.tagline),
        format!(
            "{}About: {}",
            indent(1),
            truncate_desc(&profile.about, DESCRIPTION_WIDTH)
        ),
        format!("{}Email: {}", indent(1), email),
        format!("{}Footer: {}", indent(1), profile.footer_name),
        format!("{}Featured: {}", indent(1), featured),
    ]
}

fn format_card(index: usize, card: &ProjectCard) -> Vec<String> {
    vec![
        format!("{} {}", format_index(index), card.name),
        format!("{}URL: {}", indent(1), card.url),
        format!(
            "{}Description: {}",
            indent(1),
            truncate_desc(&card.description, DESCRIPTION_WIDTH)
        ),
    ]
}

/// Format the display set, or the fallback notice.
pub fn format_projects(outcome: &RenderOutcome) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];
    match outcome {
        RenderOutcome::Rendered(cards) if cards.is_empty() => {
            lines.push(format!("{}(no public repositories)", indent(1)));
        }
        RenderOutcome::Rendered(cards) => {
            for (i, card) in cards.iter().enumerate() {
                lines.extend(format_card(i + 1, card));
            }
        }
        RenderOutcome::Unavailable => {
            lines.push(format!("{}{}", indent(1), PROJECTS_UNAVAILABLE));
        }
    }
    lines
}

/// Format the summary of a full build.
pub fn format_build_output(report: &InitReport, index_path: &Path) -> Vec<String> {
    let mut lines = format_profile(&report.profile);
    lines.push(String::new());
    lines.extend(format_projects(&report.projects));
    lines.push(String::new());
    lines.push(format!("Home → {}", index_path.display()));
    lines
}

pub fn print_profile(profile: &Profile) {
    for line in format_profile(profile) {
        println!("{}", line);
    }
}

pub fn print_projects(outcome: &RenderOutcome) {
    for line in format_projects(outcome) {
        println!("{}", line);
    }
}

pub fn print_build_output(report: &InitReport, index_path: &Path) {
    for line in format_build_output(report, index_path) {
        println!("{}", line);
    }
}
