use crate::error::TemplateError;
use regex::{Captures, Regex};
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

const PLACEHOLDER: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";
const COMMENT: &str = r"(?s)\{#.*?#\}";

/// Extensions whose output is HTML-escaped
const AUTOESCAPE_EXTENSIONS: [&str; 3] = ["html", "htm", "xml"];

/// Renders prompt templates stored under a root directory.
///
/// Supports `{{ name }}` substitution and `{# ... #}` comments. Names missing
/// from the parameters render as an empty string.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    root: PathBuf,
    placeholder: Regex,
    comment: Regex,
}

impl TemplateRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            // Both patterns are constants
            placeholder: Regex::new(PLACEHOLDER).unwrap(),
            comment: Regex::new(COMMENT).unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render `template_path` (relative to the root) with `params`, a JSON object
    pub async fn render(&self, template_path: &str, params: &Value) -> Result<String, TemplateError> {
        let full_path = self.resolve(template_path)?;

        let source = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => TemplateError::NotFound(template_path.to_string()),
                _ => TemplateError::Io {
                    path: template_path.to_string(),
                    source,
                },
            })?;

        Ok(self.render_str(&source, params, autoescape(&full_path)))
    }

    /// Render, reporting a missing or unreadable template as `None`
    pub async fn load(&self, template_path: &str, params: &Value) -> Option<String> {
        match self.render(template_path, params).await {
            Ok(rendered) => Some(rendered),
            Err(e @ TemplateError::NotFound(_)) => {
                tracing::warn!("{}", e);
                None
            }
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }

    pub fn render_str(&self, source: &str, params: &Value, escape: bool) -> String {
        let without_comments = self.comment.replace_all(source, "");

        self.placeholder
            .replace_all(&without_comments, |caps: &Captures| {
                let raw = params.get(&caps[1]).map(value_to_string).unwrap_or_default();
                if escape {
                    html_escape::encode_quoted_attribute(&raw).into_owned()
                } else {
                    raw
                }
            })
            .into_owned()
    }

    /// Join under the root, refusing paths that could leave it
    fn resolve(&self, template_path: &str) -> Result<PathBuf, TemplateError> {
        let relative = Path::new(template_path);
        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes_root || template_path.is_empty() {
            return Err(TemplateError::NotFound(template_path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

fn autoescape(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUTOESCAPE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
