//! Projects grid: which repositories are shown, and in what order.
//!
//! ## Selection
//!
//! Starting from the API's list (most recently updated first):
//!
//! 1. Drop private repositories and the user's Pages site (`{username}.github.io`).
//! 2. Move featured repositories to the front. Both groups keep the API order;
//!    the order of the `featured` list itself is irrelevant.
//! 3. Keep the first [`DISPLAY_LIMIT`].
//!
//! Name matching is exact and case-sensitive throughout.
//!
//! ## Rendering
//!
//! [`render_projects`] ends in one of two states: the grid holds the selected
//! cards, or it holds only the fallback message. A failed fetch is logged and
//! never escapes; a missing grid element does.

use tracing::{error, info};

use crate::github::{RepoSource, Repository};
use crate::page::{Page, PageError, ProjectCard, ProjectsGrid};

/// Maximum number of cards in the grid.
pub const DISPLAY_LIMIT: usize = 6;

/// Card text for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Final state of one [`render_projects`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(Vec<ProjectCard>),
    /// The repository list couldn't be loaded; the grid shows the fallback message.
    Unavailable,
}

/// Name of the GitHub Pages repository for `username`.
pub fn pages_repo_name(username: &str) -> String {
    format!("{username}.github.io")
}

/// Filter, partition and truncate `repos` into the display set.
pub fn select_projects(
    repos: Vec<Repository>,
    username: &str,
    featured: &[String],
) -> Vec<Repository> {
    let pages_repo = pages_repo_name(username);
    let (featured_repos, others): (Vec<_>, Vec<_>) = repos
        .into_iter()
        .filter(|r| !r.private && r.name != pages_repo)
        .partition(|r| featured.iter().any(|f| *f == r.name));

    featured_repos
        .into_iter()
        .chain(others)
        .take(DISPLAY_LIMIT)
        .collect()
}

pub fn project_card(repo: &Repository) -> ProjectCard {
    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);
    ProjectCard {
        name: repo.name.clone(),
        url: repo.html_url.clone(),
        description: description.to_string(),
    }
}

/// Fetch `username`'s repositories and fill the page's projects grid.
///
/// Returns `Err` only when the page has no projects grid.
pub async fn render_projects<S, P>(
    source: &S,
    page: &mut P,
    username: &str,
    featured: &[String],
) -> Result<RenderOutcome, PageError>
where
    S: RepoSource + ?Sized,
    P: Page + ?Sized,
{
    match source.list_repos(username).await {
        Ok(repos) => {
            let total = repos.len();
            let cards: Vec<ProjectCard> = select_projects(repos, username, featured)
                .iter()
                .map(project_card)
                .collect();
            info!(username, total, shown = cards.len(), "rendering projects");
            page.replace_projects(ProjectsGrid::Cards(cards.clone()))?;
            Ok(RenderOutcome::Rendered(cards))
        }
        Err(err) => {
            error!(username, error = %err, "unable to load projects");
            page.replace_projects(ProjectsGrid::Unavailable)?;
            Ok(RenderOutcome::Unavailable)
        }
    }
}
