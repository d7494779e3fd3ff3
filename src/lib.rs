//! # Simple Folio
//!
//! A minimal static portfolio page. Personal details come from an optional
//! `site.config.json`; the projects grid is filled from the owner's public
//! GitHub repositories.
//!
//! # Architecture: One Sequential Pass
//!
//! A build is a single run of [`init::init`] against a fresh page:
//!
//! ```text
//! 1. Config    site.config.json  →  Profile        (defaults for every field)
//! 2. Fields    Profile           →  page text       (heading, tagline, about, email, footer)
//! 3. Projects  GitHub listing    →  projects grid   (filter, feature, cap at 6)
//! 4. Write     page              →  dist/index.html
//! ```
//!
//! Each step finishes before the next starts. Steps 1 and 3 touch the network
//! or filesystem and degrade instead of failing: a bad config becomes
//! defaults, a failed listing becomes a fallback message. Only a page missing
//! one of its targets aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.config.json` loading and default resolution into a [`config::Profile`] |
//! | [`github`] | Repository listing: the [`github::RepoSource`] seam and the reqwest-backed client |
//! | [`projects`] | Display-set selection and grid rendering |
//! | [`page`] | The [`page::Page`] target bundle and the stock [`page::Document`] |
//! | [`init`] | Orchestration: config, fields, projects, in that order |
//! | [`generate`] | Writes the rendered page to the output directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Targets Are Injected
//!
//! The initializer never looks anything up globally. It receives a
//! [`page::Page`] and writes through it, so tests drive it with a page that
//! lacks targets, and the stock [`page::Document`] is just one implementation.
//!
//! ## Defaults Live in One Place
//!
//! [`config::SiteConfig`] mirrors the file (everything optional).
//! [`config::Profile::resolve`] is the only code that knows the defaults.
//!
//! ## Maud for HTML
//!
//! All text written to the page is interpolated through
//! [Maud](https://maud.lambda.xyz/), which escapes by default. Configuration
//! values and repository descriptions can't inject markup.

pub mod config;
pub mod generate;
pub mod github;
pub mod init;
pub mod output;
pub mod page;
pub mod projects;

#[cfg(test)]
pub(crate) mod test_helpers;
