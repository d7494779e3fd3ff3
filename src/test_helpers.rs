//! Shared test utilities for the simple-folio test suite.
//!
//! Provides repository builders and a [`ScriptedSource`] that answers
//! [`RepoSource`] calls with a canned result, so project rendering and
//! initialization can be tested without a network.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = ScriptedSource::repos(vec![repo("engine"), private_repo("secret")]);
//! let mut page = Document::standard();
//! render_projects(&source, &mut page, "acme", &[]).await.unwrap();
//! assert_eq!(source.requested(), vec!["acme"]);
//! ```

use async_trait::async_trait;
use std::sync::Mutex;

use crate::github::{FetchError, RepoSource, Repository};
use crate::page::{Document, ProjectsGrid};

// =========================================================================
// Repository builders
// =========================================================================

/// A public repository with a description and a GitHub URL.
pub fn repo(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        html_url: format!("https://github.com/acme/{name}"),
        private: false,
        updated_at: None,
    }
}

pub fn private_repo(name: &str) -> Repository {
    Repository {
        private: true,
        ..repo(name)
    }
}

/// Public repositories named in the given order.
pub fn repos(names: &[&str]) -> Vec<Repository> {
    names.iter().map(|n| repo(n)).collect()
}

pub fn names(repos: &[Repository]) -> Vec<&str> {
    repos.iter().map(|r| r.name.as_str()).collect()
}

/// Names of the cards currently in the page's grid. Panics if the grid
/// doesn't hold cards.
pub fn card_names(page: &Document) -> Vec<String> {
    match page.projects() {
        Some(ProjectsGrid::Cards(cards)) => cards.iter().map(|c| c.name.clone()).collect(),
        other => panic!("expected project cards, found {other:?}"),
    }
}

// =========================================================================
// Scripted source
// =========================================================================

enum Script {
    Repos(Vec<Repository>),
    Status(u16),
    Malformed,
}

/// A [`RepoSource`] that always returns the same answer and records which
/// usernames were requested.
pub struct ScriptedSource {
    script: Script,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn new(script: Script) -> Self {
        Self {
            script,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn repos(repos: Vec<Repository>) -> Self {
        Self::new(Script::Repos(repos))
    }

    /// Answers with a non-success HTTP status.
    pub fn status(code: u16) -> Self {
        Self::new(Script::Status(code))
    }

    /// Answers with a body that isn't a repository list.
    pub fn malformed() -> Self {
        Self::new(Script::Malformed)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoSource for ScriptedSource {
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        self.requested.lock().unwrap().push(username.to_string());
        match &self.script {
            Script::Repos(repos) => Ok(repos.clone()),
            Script::Status(code) => Err(FetchError::Status(*code)),
            Script::Malformed => {
                let err = serde_json::from_str::<Vec<Repository>>(r#"{"message":"Not Found"}"#)
                    .unwrap_err();
                Err(FetchError::Decode(err))
            }
        }
    }
}
