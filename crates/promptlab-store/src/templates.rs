//! Prompt template catalog backed by a directory of YAML files.
//!
//! Each `*.yaml` / `*.yml` file holds one template:
//!
//! ```yaml
//! name: Summarize
//! description: Three-sentence summary
//! template: |
//!   Summarize the following text in three sentences:
//!   {text}
//! ```
//!
//! The file stem becomes the template id.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use promptlab_core::PromptTemplate;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Errors from listing the template directory itself.
///
/// Individual bad files are skipped, not reported.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read templates directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    name: String,
    #[serde(default)]
    description: String,
    template: String,
}

/// Read-only catalog over a templates directory.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    dir: PathBuf,
}

impl TemplateCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every template, ordered by file name.
    ///
    /// A missing directory yields an empty list.
    pub async fn list(&self) -> Result<Vec<PromptTemplate>, TemplateError> {
        let read_dir_error = |source: std::io::Error| TemplateError::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "Templates directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(read_dir_error(e)),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
            let path = entry.path();
            if is_template_file(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut templates = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(template) = load_template(&path).await {
                templates.push(template);
            }
        }
        Ok(templates)
    }
}

fn is_template_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

async fn load_template(path: &Path) -> Option<PromptTemplate> {
    let id = path.file_stem()?.to_str()?.to_string();

    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unreadable template");
            return None;
        }
    };

    match serde_yaml::from_str::<TemplateFile>(&text) {
        Ok(file) => Some(PromptTemplate {
            id,
            name: file.name,
            description: file.description,
            template: file.template,
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping malformed template");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_dir_is_empty() {
        let temp = tempdir().unwrap();
        let catalog = TemplateCatalog::new(temp.path().join("nope"));
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lists_in_file_name_order() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("b_review.yml"),
            "name: Review\ntemplate: Review this code\n",
        )
        .unwrap();
        std::fs::write(
            temp.path().join("a_summary.yaml"),
            "name: Summary\ndescription: Short summary\ntemplate: |\n  Summarize:\n  {text}\n",
        )
        .unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let templates = TemplateCatalog::new(temp.path()).list().await.unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].id, "a_summary");
        assert_eq!(templates[0].description, "Short summary");
        assert_eq!(templates[0].template, "Summarize:\n{text}\n");
        assert_eq!(templates[1].id, "b_review");
        assert_eq!(templates[1].description, "");
    }

    #[tokio::test]
    async fn test_malformed_file_is_skipped() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("bad.yaml"), "name: [unclosed").unwrap();
        std::fs::write(temp.path().join("no_body.yaml"), "name: Missing template\n").unwrap();
        std::fs::write(temp.path().join("good.yaml"), "name: Good\ntemplate: Hi\n").unwrap();

        let templates = TemplateCatalog::new(temp.path()).list().await.unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "good");
    }
}
