//! Core options exposed to the host's settings UI
//!
//! Bliss has no tunable variables yet; it publishes an empty "Core" group and
//! an empty "Video" group so the host can render its settings page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in the option tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoreOption {
    Group {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default)]
        sub_options: Vec<CoreOption>,
    },
    Bool {
        key: String,
        title: String,
        default: bool,
    },
}

impl CoreOption {
    pub fn group(title: &str) -> Self {
        CoreOption::Group {
            title: title.to_string(),
            description: None,
            sub_options: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CoreOption::Group { title, .. } | CoreOption::Bool { title, .. } => title,
        }
    }
}

/// The option set published by the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreOptions {
    pub options: Vec<CoreOption>,
}

impl Default for CoreOptions {
    fn default() -> Self {
        Self {
            options: vec![CoreOption::group("Core"), CoreOption::group("Video")],
        }
    }
}

impl CoreOptions {
    /// Current value of a core variable. Unknown names yield `None`.
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        match self.find_bool(&self.options, name) {
            Some(default) => Some(Value::Bool(default)),
            None => {
                tracing::warn!("Unsupported variable <{}>", name);
                None
            }
        }
    }

    fn find_bool(&self, options: &[CoreOption], name: &str) -> Option<bool> {
        options.iter().find_map(|option| match option {
            CoreOption::Bool { key, default, .. } if key == name => Some(*default),
            CoreOption::Group { sub_options, .. } => self.find_bool(sub_options, name),
            CoreOption::Bool { .. } => None,
        })
    }

    /// Serialize for the host settings UI
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.options)
    }
}
