//! Static HTML templates for the home and editor pages.

use std::path::{Path, PathBuf};

/// File names looked up inside a template directory.
pub const HOME_FILE: &str = "home.html";
pub const ARTICLE_FILE: &str = "article.html";
pub const EDITOR_FILE: &str = "editor.html";

#[derive(Debug, thiserror::Error)]
#[error("Failed to read template {path}: {source}")]
pub struct TemplateError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The three page templates, held in memory for the life of the server.
#[derive(Debug, Clone)]
pub struct Templates {
    /// Outer page with an `!articles!` marker.
    pub home: String,
    /// Per-post fragment with `!content!`, `!title!` and `!time!` markers.
    pub article: String,
    /// Post submission form, served as-is.
    pub editor: String,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            home: include_str!("../templates/home.html").to_string(),
            article: include_str!("../templates/article.html").to_string(),
            editor: include_str!("../templates/editor.html").to_string(),
        }
    }

    /// Read all three templates from `dir`. Every file must exist.
    pub async fn load_dir(dir: &Path) -> Result<Self, TemplateError> {
        Ok(Self {
            home: read(dir, HOME_FILE).await?,
            article: read(dir, ARTICLE_FILE).await?,
            editor: read(dir, EDITOR_FILE).await?,
        })
    }

    /// Load from `dir` when configured, otherwise fall back to the built-ins.
    pub async fn load(dir: Option<&Path>) -> Result<Self, TemplateError> {
        match dir {
            Some(dir) => Self::load_dir(dir).await,
            None => Ok(Self::builtin()),
        }
    }
}

async fn read(dir: &Path, file: &str) -> Result<String, TemplateError> {
    let path = dir.join(file);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| TemplateError { path, source })
}
