//! Cthulu Shared - the host-facing wire model
//!
//! Scene items, tool-mode registration payloads and the add-on's namespaced
//! ids. Pure data: serde types and small builders, no host access.

pub mod ids;
pub mod items;
pub mod tool;

pub use ids::{extension_id, movement_confirm_id, movement_mode_id, EXTENSION_NAMESPACE};
pub use items::{
    ImageContent, Item, ItemContent, ItemKind, LabelContent, Layer, PathContent, PathStyle,
    CREATED_BY_KEY,
};
pub use tool::{ToolCursor, ToolIcon, ToolModeSpec};
