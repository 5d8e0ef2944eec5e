//! Movement tool settings
//!
//! Animation pacing and the look of the transient path items. Every field has
//! a serde default so partial JSON documents load cleanly; environment
//! overrides are applied by `infrastructure::settings_loader`.

use serde::{Deserialize, Serialize};

fn default_steps_per_cell() -> u32 {
    2
}
fn default_step_delay_ms() -> u64 {
    100
}
fn default_outline_stroke_width() -> f64 {
    2.0
}
fn default_fill_alpha() -> f64 {
    0.4
}
fn default_arrow_color() -> String {
    "red".to_string()
}
fn default_arrow_stroke_width() -> f64 {
    4.0
}
fn default_track_pointer_moves() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSettings {
    // ============================================================================
    // Animation
    // ============================================================================
    /// Interpolated increments per traversed cell (minimum 1)
    #[serde(default = "default_steps_per_cell")]
    steps_per_cell: u32,

    /// Pause after each increment, in milliseconds
    #[serde(default = "default_step_delay_ms")]
    step_delay_ms: u64,

    // ============================================================================
    // Path items
    // ============================================================================
    #[serde(default = "default_outline_stroke_width")]
    outline_stroke_width: f64,

    /// Alpha of the outline fill derived from the player color
    #[serde(default = "default_fill_alpha")]
    fill_alpha: f64,

    #[serde(default = "default_arrow_color")]
    arrow_color: String,

    #[serde(default = "default_arrow_stroke_width")]
    arrow_stroke_width: f64,

    // ============================================================================
    // Input
    // ============================================================================
    /// Toggle cells on pointer moves, once per grid coordinate entered.
    /// When off, only clicks toggle.
    #[serde(default = "default_track_pointer_moves")]
    track_pointer_moves: bool,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            steps_per_cell: default_steps_per_cell(),
            step_delay_ms: default_step_delay_ms(),
            outline_stroke_width: default_outline_stroke_width(),
            fill_alpha: default_fill_alpha(),
            arrow_color: default_arrow_color(),
            arrow_stroke_width: default_arrow_stroke_width(),
            track_pointer_moves: default_track_pointer_moves(),
        }
    }
}

impl MovementSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Increments per cell, never below 1.
    pub fn steps_per_cell(&self) -> u32 {
        self.steps_per_cell.max(1)
    }

    pub fn step_delay_ms(&self) -> u64 {
        self.step_delay_ms
    }

    pub fn outline_stroke_width(&self) -> f64 {
        self.outline_stroke_width
    }

    pub fn fill_alpha(&self) -> f64 {
        self.fill_alpha
    }

    pub fn arrow_color(&self) -> &str {
        &self.arrow_color
    }

    pub fn arrow_stroke_width(&self) -> f64 {
        self.arrow_stroke_width
    }

    pub fn track_pointer_moves(&self) -> bool {
        self.track_pointer_moves
    }

    // ============================================================================
    // Builders
    // ============================================================================

    pub fn with_steps_per_cell(mut self, steps: u32) -> Self {
        self.steps_per_cell = steps;
        self
    }

    pub fn with_step_delay_ms(mut self, ms: u64) -> Self {
        self.step_delay_ms = ms;
        self
    }

    pub fn with_track_pointer_moves(mut self, enabled: bool) -> Self {
        self.track_pointer_moves = enabled;
        self
    }
}
