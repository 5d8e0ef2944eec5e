//! Interaction session: the three transient items shown while planning.

use cthulu_domain::{Color, ItemId};
use cthulu_shared::{Item, Layer, PathStyle};

use crate::error::MovementError;
use crate::ports::outbound::{InteractionPort, ItemInteraction, PlayerPort};
use crate::settings::MovementSettings;

use super::geometry::PathGeometry;

pub const OUTLINE_NAME: &str = "Cthulhu Highlight";
pub const ARROW_NAME: &str = "Cthulhu Arrow";
pub const LABEL_NAME: &str = "Cthulhu Label";

const OUTLINE: usize = 0;
const ARROW: usize = 1;
const LABEL: usize = 2;

/// Outline, arrow and label, in the order the interaction holds them.
pub fn build_items(player_color: &str, settings: &MovementSettings) -> Vec<Item> {
    let fill_color = match Color::from_hex(player_color) {
        Ok(color) => Some(color.to_rgba(settings.fill_alpha())),
        Err(e) => {
            tracing::warn!(error = %e, "Player color is not hex, outline drawn without fill");
            None
        }
    };

    let outline = Item::path(PathStyle {
        stroke_color: player_color.to_string(),
        stroke_width: settings.outline_stroke_width(),
        fill_color,
        fill_opacity: 1.0,
    })
    .with_name(OUTLINE_NAME)
    .created_by_extension();

    let arrow = Item::path(PathStyle {
        stroke_color: settings.arrow_color().to_string(),
        stroke_width: settings.arrow_stroke_width(),
        fill_color: None,
        fill_opacity: 0.0,
    })
    .with_name(ARROW_NAME)
    .created_by_extension();

    let label = Item::label("")
        .with_layer(Layer::Drawing)
        .with_locked(true)
        .with_name(LABEL_NAME)
        .created_by_extension();

    vec![outline, arrow, label]
}

/// One planning gesture's hold on the host interaction lock.
pub struct InteractionSession {
    interaction: Box<dyn ItemInteraction>,
    item_ids: Vec<ItemId>,
}

impl InteractionSession {
    /// Build the items in the player's color and take the interaction lock.
    pub async fn start(
        interactions: &dyn InteractionPort,
        player: &dyn PlayerPort,
        settings: &MovementSettings,
    ) -> Result<Self, MovementError> {
        let color = player.color().await?;
        let items = build_items(&color, settings);
        let item_ids = items.iter().map(|item| item.id.clone()).collect();

        let interaction = interactions.start_item_interaction(items).await?;
        tracing::info!("Movement interaction started");

        Ok(Self {
            interaction,
            item_ids,
        })
    }

    /// Ids of the transient items (outline, arrow, label).
    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    /// Push the whole geometry in one update.
    pub async fn render(&self, geometry: PathGeometry) -> Result<(), MovementError> {
        self.interaction
            .update(Box::new(move |items: &mut [Item]| {
                if let Some(outline) = items.get_mut(OUTLINE).and_then(Item::path_content_mut) {
                    outline.commands = geometry.outline;
                }
                if let Some(arrow) = items.get_mut(ARROW).and_then(Item::path_content_mut) {
                    arrow.commands = geometry.arrow;
                }
                if let Some(item) = items.get_mut(LABEL) {
                    let (position, text) = match geometry.label {
                        Some(label) => (Some(label.position), label.text),
                        None => (None, String::new()),
                    };
                    if let Some(position) = position {
                        item.position = position;
                    }
                    if let Some(content) = item.label_content_mut() {
                        content.plain_text = text;
                    }
                }
            }))
            .await?;
        Ok(())
    }

    /// Release the lock; the transient items disappear.
    pub fn stop(self) {
        self.interaction.stop();
        tracing::info!("Movement interaction stopped");
    }
}
