//! HTML site generation.
//!
//! Writes a populated [`Document`] to disk as a single self-contained page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html     # Hero, about, projects grid, contact, footer
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and inlined into the page,
//! so the output has no other files to ship.

use crate::page::Document;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const CSS: &str = include_str!("../static/style.css");

/// Render `document` and write it as `index.html` under `output_dir`.
///
/// Creates `output_dir` if needed and returns the path written.
pub fn write_site(document: &Document, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, document.render(CSS).into_string())?;
    info!(path = %index_path.display(), "wrote page");
    Ok(index_path)
}
