//! The page being populated.
//!
//! [`Page`] is the set of targets the initializer writes to. It is passed in
//! explicitly rather than looked up, so tests can hand the initializer any
//! page they like, including one with targets missing.
//!
//! [`Document`] is the stock page: one slot per target, pre-filled with the
//! markup a visitor sees before population, rendered to HTML with
//! [maud](https://maud.lambda.xyz/).
//!
//! ## Targets
//!
//! | Target | Selector | Written as |
//! |--------|----------|------------|
//! | [`TextTarget::Year`] | `#year` | text |
//! | [`TextTarget::Name`] | `#name` | text |
//! | [`TextTarget::HeroHeading`] | `header h1` | text |
//! | [`TextTarget::HeroTagline`] | `header p` | text |
//! | [`TextTarget::AboutText`] | `#about p` | text |
//! | [`Target::EmailLink`] | `#email-link` | `href` |
//! | [`Target::ProjectsGrid`] | `#projects-grid` | [`ProjectsGrid`] |
//!
//! Text is always escaped on render; configuration can never inject markup.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Message shown in place of the grid when the repository list can't be loaded.
pub const PROJECTS_UNAVAILABLE: &str = "Unable to load projects at this time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextTarget {
    Year,
    Name,
    HeroHeading,
    HeroTagline,
    AboutText,
}

impl TextTarget {
    pub const ALL: [TextTarget; 5] = [
        TextTarget::Year,
        TextTarget::Name,
        TextTarget::HeroHeading,
        TextTarget::HeroTagline,
        TextTarget::AboutText,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            TextTarget::Year => "#year",
            TextTarget::Name => "#name",
            TextTarget::HeroHeading => "header h1",
            TextTarget::HeroTagline => "header p",
            TextTarget::AboutText => "#about p",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Text(TextTarget),
    EmailLink,
    ProjectsGrid,
}

impl Target {
    pub fn selector(self) -> &'static str {
        match self {
            Target::Text(t) => t.selector(),
            Target::EmailLink => "#email-link",
            Target::ProjectsGrid => "#projects-grid",
        }
    }
}

impl From<TextTarget> for Target {
    fn from(target: TextTarget) -> Self {
        Target::Text(target)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("page has no element matching `{0}`")]
    MissingTarget(Target),
}

/// One repository as displayed in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub name: String,
    pub url: String,
    /// Already defaulted; never empty.
    pub description: String,
}

/// Content of the projects container.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsGrid {
    /// Markup shipped with the page, before any fetch has resolved.
    Loading,
    Cards(Vec<ProjectCard>),
    /// A single fallback message and nothing else.
    Unavailable,
}

/// The targets the initializer writes to.
///
/// Every method fails with [`PageError::MissingTarget`] when the page has no
/// such element.
pub trait Page {
    fn set_text(&mut self, target: TextTarget, text: &str) -> Result<(), PageError>;
    fn set_email_href(&mut self, href: &str) -> Result<(), PageError>;
    /// Replace the whole container content.
    fn replace_projects(&mut self, grid: ProjectsGrid) -> Result<(), PageError>;
}

/// The stock portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    texts: BTreeMap<TextTarget, String>,
    email_href: Option<String>,
    projects: Option<ProjectsGrid>,
}

impl Document {
    /// A page with every target present, holding its pre-population markup.
    pub fn standard() -> Self {
        let texts = TextTarget::ALL
            .into_iter()
            .map(|t| (t, String::new()))
            .collect();
        Self {
            texts,
            email_href: Some("#contact".to_string()),
            projects: Some(ProjectsGrid::Loading),
        }
    }

    /// Remove a target, as if the hosting markup lacked that element.
    pub fn without(mut self, target: Target) -> Self {
        match target {
            Target::Text(t) => {
                self.texts.remove(&t);
            }
            Target::EmailLink => self.email_href = None,
            Target::ProjectsGrid => self.projects = None,
        }
        self
    }

    pub fn text(&self, target: TextTarget) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    pub fn email_href(&self) -> Option<&str> {
        self.email_href.as_deref()
    }

    pub fn projects(&self) -> Option<&ProjectsGrid> {
        self.projects.as_ref()
    }

    /// Render the full HTML document with `css` inlined.
    pub fn render(&self, css: &str) -> Markup {
        let title = self
            .text(TextTarget::Name)
            .filter(|n| !n.is_empty())
            .unwrap_or("Portfolio");

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(css)) }
                }
                body {
                    header.hero {
                        @if let Some(heading) = self.text(TextTarget::HeroHeading) {
                            h1 { (heading) }
                        }
                        @if let Some(tagline) = self.text(TextTarget::HeroTagline) {
                            p { (tagline) }
                        }
                    }
                    main {
                        section id="about" {
                            h2 { "About" }
                            @if let Some(about) = self.text(TextTarget::AboutText) {
                                p { (about) }
                            }
                        }
                        section id="projects" {
                            h2 { "Projects" }
                            @if let Some(grid) = &self.projects {
                                div.projects-grid id="projects-grid" {
                                    (render_grid(grid))
                                }
                            }
                        }
                        section id="contact" {
                            h2 { "Contact" }
                            @if let Some(href) = &self.email_href {
                                a.btn id="email-link" href=(href) { "Get in touch" }
                            }
                        }
                    }
                    footer {
                        p {
                            "© "
                            @if let Some(year) = self.text(TextTarget::Year) {
                                span id="year" { (year) }
                            }
                            " "
                            @if let Some(name) = self.text(TextTarget::Name) {
                                span id="name" { (name) }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Page for Document {
    fn set_text(&mut self, target: TextTarget, text: &str) -> Result<(), PageError> {
        let slot = self
            .texts
            .get_mut(&target)
            .ok_or(PageError::MissingTarget(target.into()))?;
        *slot = text.to_string();
        Ok(())
    }

    fn set_email_href(&mut self, href: &str) -> Result<(), PageError> {
        let slot = self
            .email_href
            .as_mut()
            .ok_or(PageError::MissingTarget(Target::EmailLink))?;
        *slot = href.to_string();
        Ok(())
    }

    fn replace_projects(&mut self, grid: ProjectsGrid) -> Result<(), PageError> {
        let slot = self
            .projects
            .as_mut()
            .ok_or(PageError::MissingTarget(Target::ProjectsGrid))?;
        *slot = grid;
        Ok(())
    }
}

/// Renders the inner content of the projects container.
pub fn render_grid(grid: &ProjectsGrid) -> Markup {
    html! {
        @match grid {
            ProjectsGrid::Loading => p.loading { "Loading projects…" },
            ProjectsGrid::Cards(cards) => {
                @for card in cards {
                    (render_card(card))
                }
            },
            ProjectsGrid::Unavailable => p { (PROJECTS_UNAVAILABLE) },
        }
    }
}

/// Renders a single project card.
fn render_card(card: &ProjectCard) -> Markup {
    html! {
        div.project-card {
            h3 {
                a href=(card.url) target="_blank" rel="noopener" { (card.name) }
            }
            p { (card.description) }
            a.btn.btn-outline href=(card.url) target="_blank" rel="noopener" {
                "View on GitHub"
            }
        }
    }
}
