//! Scene items as the host exchanges them.
//!
//! Field names follow the host's camelCase JSON. Only the item kinds the
//! movement tool reads or creates are modelled.

use std::collections::BTreeMap;

use cthulu_domain::{ItemId, PathCommand, Point};
use serde::{Deserialize, Serialize};

use crate::ids::EXTENSION_NAMESPACE;

/// Metadata key marking items created by this add-on.
pub const CREATED_BY_KEY: &str = "createdBy";

/// Scene layer an item is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Layer {
    Map,
    Drawing,
    Prop,
    Mount,
    #[default]
    Character,
    Attachment,
    Note,
    Text,
    Ruler,
    Fog,
    Pointer,
    Control,
    Popover,
}

/// Item kind without its payload. Used to filter scene queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Image,
    Path,
    Label,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default = "default_opacity")]
    pub fill_opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: "black".to_string(),
            stroke_width: 1.0,
            fill_color: None,
            fill_opacity: default_opacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathContent {
    pub commands: Vec<PathCommand>,
    pub style: PathStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelContent {
    pub plain_text: String,
    #[serde(default)]
    pub pointer_width: f64,
    #[serde(default)]
    pub pointer_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemContent {
    Image(ImageContent),
    Path(PathContent),
    Label(LabelContent),
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Image(_) => ItemKind::Image,
            Self::Path(_) => ItemKind::Path,
            Self::Label(_) => ItemKind::Label,
        }
    }
}

/// A scene item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layer: Layer,
    pub position: Point,
    #[serde(default)]
    pub disable_hit: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    #[serde(flatten)]
    pub content: ItemContent,
}

impl Item {
    /// New item with a fresh id at the origin.
    pub fn new(content: ItemContent) -> Self {
        Self {
            id: ItemId::new(),
            name: String::new(),
            layer: Layer::default(),
            position: Point::ORIGIN,
            disable_hit: false,
            locked: false,
            metadata: BTreeMap::new(),
            content,
        }
    }

    pub fn image(position: Point) -> Self {
        Self::new(ItemContent::Image(ImageContent {
            url: String::new(),
            width: 0.0,
            height: 0.0,
        }))
        .with_position(position)
    }

    pub fn path(style: PathStyle) -> Self {
        Self::new(ItemContent::Path(PathContent {
            commands: Vec::new(),
            style,
        }))
        .with_layer(Layer::Drawing)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ItemContent::Label(LabelContent {
            plain_text: text.into(),
            pointer_width: 0.0,
            pointer_height: 0.0,
        }))
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Tag the item as created by this add-on.
    pub fn created_by_extension(self) -> Self {
        self.with_metadata(CREATED_BY_KEY, serde_json::Value::from(EXTENSION_NAMESPACE))
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    pub fn path_content_mut(&mut self) -> Option<&mut PathContent> {
        match &mut self.content {
            ItemContent::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn label_content_mut(&mut self) -> Option<&mut LabelContent> {
        match &mut self.content {
            ItemContent::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn path_commands(&self) -> Option<&[PathCommand]> {
        match &self.content {
            ItemContent::Path(path) => Some(&path.commands),
            _ => None,
        }
    }

    pub fn label_text(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Label(label) => Some(&label.plain_text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_item_serializes_in_host_shape() {
        let mut item = Item::path(PathStyle {
            stroke_color: "red".into(),
            stroke_width: 4.0,
            fill_color: None,
            fill_opacity: 0.0,
        })
        .with_id("arrow-1")
        .with_name("Cthulhu Arrow")
        .created_by_extension();
        if let Some(path) = item.path_content_mut() {
            path.commands.push(PathCommand::Close);
        }

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], json!("PATH"));
        assert_eq!(value["layer"], json!("DRAWING"));
        assert_eq!(value["disableHit"], json!(false));
        assert_eq!(value["metadata"]["createdBy"], json!("cthulu"));
        assert_eq!(value["commands"], json!([[5]]));
        assert_eq!(value["style"]["strokeWidth"], json!(4.0));
    }

    #[test]
    fn image_item_reads_from_host_json() {
        let item: Item = serde_json::from_value(json!({
            "id": "token-7",
            "type": "IMAGE",
            "position": { "x": 125.0, "y": 75.0 },
            "url": "https://example.test/goblin.png"
        }))
        .unwrap();

        assert_eq!(item.kind(), ItemKind::Image);
        assert_eq!(item.id.as_str(), "token-7");
        assert_eq!(item.position, Point::new(125.0, 75.0));
        assert_eq!(item.layer, Layer::Character);
        assert!(item.label_text().is_none());
    }

    #[test]
    fn label_accessors() {
        let mut label = Item::label("").with_locked(true);
        if let Some(content) = label.label_content_mut() {
            content.plain_text = "15ft".into();
        }
        assert_eq!(label.label_text(), Some("15ft"));
        assert!(label.path_commands().is_none());
    }
}
