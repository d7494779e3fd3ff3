//! Page initialization: configuration in, populated page out.
//!
//! [`init`] runs once per build, strictly in sequence:
//!
//! ```text
//! load site.config.json  →  write profile fields  →  fetch + render projects
//! ```
//!
//! Neither network-dependent step can fail the run: a bad config becomes
//! defaults, a failed fetch becomes the fallback message. The only error that
//! escapes is a page missing one of its targets.

use chrono::{Datelike, Local};
use std::path::Path;
use tracing::debug;

use crate::config::{self, Profile, SiteConfig};
use crate::github::RepoSource;
use crate::page::{Page, PageError, TextTarget};
use crate::projects::{self, RenderOutcome};

/// What a completed run wrote to the page.
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub profile: Profile,
    pub year: i32,
    pub projects: RenderOutcome,
}

/// Load configuration from `source_dir` and populate `page`.
///
/// The footer year is the current local calendar year.
pub async fn init<S, P>(source_dir: &Path, repos: &S, page: &mut P) -> Result<InitReport, PageError>
where
    S: RepoSource + ?Sized,
    P: Page + ?Sized,
{
    let config = config::load_config(source_dir).await;
    let year = Local::now().year();
    populate(&config, year, repos, page).await
}

/// Populate `page` from an already-loaded config.
pub async fn populate<S, P>(
    config: &SiteConfig,
    year: i32,
    repos: &S,
    page: &mut P,
) -> Result<InitReport, PageError>
where
    S: RepoSource + ?Sized,
    P: Page + ?Sized,
{
    let profile = Profile::resolve(config);
    debug!(username = %profile.username, "populating page");

    page.set_text(TextTarget::HeroHeading, &profile.hero_heading())?;
    page.set_text(TextTarget::HeroTagline, &profile.tagline)?;
    page.set_text(TextTarget::AboutText, &profile.about)?;
    if let Some(href) = profile.email_href() {
        page.set_email_href(&href)?;
    }
    page.set_text(TextTarget::Name, &profile.footer_name)?;
    page.set_text(TextTarget::Year, &year.to_string())?;

    let projects =
        projects::render_projects(repos, page, &profile.username, &profile.featured).await?;

    Ok(InitReport {
        profile,
        year,
        projects,
    })
}
