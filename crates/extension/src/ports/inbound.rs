//! Inbound ports - host callbacks as values
//!
//! The host bridge translates each SDK callback into a [`HostEvent`] and hands
//! it to the tool's dispatcher, one at a time.

use cthulu_domain::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Pointer moved while `mode` is active.
    ToolMove { mode: String, pointer: Point },
    /// Pointer clicked while `mode` is active.
    ToolClick { mode: String, pointer: Point },
    /// `mode` was activated from the toolbar or its shortcut.
    ModeActivated { mode: String },
    /// The active tool mode changed to `mode`.
    ToolModeChanged { mode: String },
    /// Grid size, type or scale changed.
    GridChanged,
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToolMove { .. } => "tool_move",
            Self::ToolClick { .. } => "tool_click",
            Self::ModeActivated { .. } => "mode_activated",
            Self::ToolModeChanged { .. } => "tool_mode_changed",
            Self::GridChanged => "grid_changed",
        }
    }
}
