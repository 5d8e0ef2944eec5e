//! Tool-mode registration payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolIcon {
    pub icon: String,
    pub label: String,
    /// Tools the icon is shown for. Empty means the host default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCursor {
    pub cursor: String,
}

/// Everything the host needs to show a mode in the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolModeSpec {
    pub id: String,
    pub icons: Vec<ToolIcon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cursors: Vec<ToolCursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl ToolModeSpec {
    pub fn new(id: impl Into<String>, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icons: vec![ToolIcon {
                icon: icon.into(),
                label: label.into(),
                active_tools: Vec::new(),
            }],
            cursors: Vec::new(),
            shortcut: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursors.push(ToolCursor {
            cursor: cursor.into(),
        });
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_spec_serializes_camel_case() {
        let spec = ToolModeSpec::new("cthulu/movement-mode", "/move-icon.svg", "Movement Mode")
            .with_cursor("pointer")
            .with_shortcut("Shift+D");

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["icons"][0]["label"], json!("Movement Mode"));
        assert!(value["icons"][0].get("activeTools").is_none());
        assert_eq!(value["cursors"][0]["cursor"], json!("pointer"));
        assert_eq!(value["shortcut"], json!("Shift+D"));
    }
}
