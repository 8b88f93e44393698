use std::path::PathBuf;

use crate::{
    color,
    error::{CovergenError, CovergenResult},
    template::Template,
};

/// Input model for one cover invocation, loadable from JSON.
///
/// Template and scheme stay as names here; the parse into the closed enums
/// happens once, behind [`validate`](Self::validate).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CoverSpec {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Explicit entries for the list template; when absent, items are
    /// extracted from the subtitle (or title) text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    /// Output file path; a timestamped default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_template() -> String {
    "gradient".to_string()
}

fn default_color() -> String {
    "warm".to_string()
}

impl CoverSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            template: default_template(),
            color: default_color(),
            items: None,
            output: None,
        }
    }

    /// Fail-fast input validation; no rendering work happens before this.
    pub fn validate(&self) -> CovergenResult<()> {
        if self.title.trim().is_empty() {
            return Err(CovergenError::validation("title must be non-empty"));
        }
        self.template.parse::<Template>()?;
        if color::scheme_by_name(&self.color).is_none() {
            return Err(CovergenError::validation(format!(
                "unknown color '{}', choose from: {}",
                self.color,
                color::scheme_names().join(", ")
            )));
        }
        Ok(())
    }
}
