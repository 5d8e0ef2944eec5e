//! In-memory host
//!
//! A complete stand-in for the VTT: a square grid, a scene of items, one
//! interaction lock, a player and a toolbar registry. Backs the demo binary
//! and the integration tests.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use async_trait::async_trait;
use cthulu_domain::{Cell, DomainError, GridScale, ItemId, Point, SquareGrid};
use cthulu_shared::{Item, ItemKind, ToolModeSpec};

use crate::ports::outbound::{
    GridPort, HostError, InteractionPort, ItemInteraction, ItemMutator, PlayerPort, ScenePort,
    SleepProvider, ToolRegistryPort,
};
use crate::use_cases::movement::HostPorts;

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>, HostError> {
    mutex
        .lock()
        .map_err(|_| HostError::unavailable(format!("{what} lock poisoned")))
}

struct GridDescription {
    grid: SquareGrid,
    scale: GridScale,
}

pub struct InMemoryHost {
    grid: RwLock<GridDescription>,
    items: Mutex<Vec<Item>>,
    player_color: String,
    selection: Mutex<Vec<ItemId>>,
    modes: Mutex<Vec<ToolModeSpec>>,
    held: Arc<Mutex<Option<Vec<Item>>>>,
}

impl InMemoryHost {
    /// Square grid of `cell_size` scene units (also the DPI), with a scale
    /// string such as `"5ft"`.
    pub fn new(cell_size: f64, scale: &str) -> Result<Self, DomainError> {
        Ok(Self {
            grid: RwLock::new(GridDescription {
                grid: SquareGrid::new(cell_size)?,
                scale: parse_scale(scale),
            }),
            items: Mutex::new(Vec::new()),
            player_color: "#ffcc00".to_string(),
            selection: Mutex::new(Vec::new()),
            modes: Mutex::new(Vec::new()),
            held: Arc::new(Mutex::new(None)),
        })
    }

    pub fn with_player_color(mut self, color: impl Into<String>) -> Self {
        self.player_color = color.into();
        self
    }

    pub fn with_item(self, item: Item) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.push(item);
        }
        self
    }

    /// Bundle this host as every port, with the given timer.
    pub fn ports(self: &Arc<Self>, sleep: Arc<dyn SleepProvider>) -> HostPorts {
        HostPorts {
            grid: self.clone(),
            scene: self.clone(),
            interactions: self.clone(),
            player: self.clone(),
            tools: self.clone(),
            sleep,
        }
    }

    /// Swap the grid, as a host grid-change would.
    pub fn set_grid(&self, cell_size: f64, scale: &str) -> Result<(), DomainError> {
        let grid = SquareGrid::new(cell_size)?;
        let mut description = self.grid.write().unwrap_or_else(|e| e.into_inner());
        description.grid = grid;
        description.scale = parse_scale(scale);
        Ok(())
    }

    pub fn item(&self, id: &ItemId) -> Option<Item> {
        self.items
            .lock()
            .ok()
            .and_then(|items| items.iter().find(|item| &item.id == id).cloned())
    }

    pub fn selection(&self) -> Vec<ItemId> {
        self.selection
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn modes(&self) -> Vec<ToolModeSpec> {
        self.modes.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Items held by the active interaction, if any.
    pub fn held_items(&self) -> Option<Vec<Item>> {
        self.held.lock().ok().and_then(|held| held.clone())
    }

    fn description(&self) -> std::sync::RwLockReadGuard<'_, GridDescription> {
        self.grid.read().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_scale(raw: &str) -> GridScale {
    GridScale::parse(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Grid scale not understood, distances will read 0");
        GridScale::default()
    })
}

impl GridPort for InMemoryHost {
    fn snap_to_center(&self, point: Point) -> Point {
        self.description().grid.snap_to_center(point)
    }

    fn get_cell(&self, center: Point) -> Cell {
        self.description().grid.cell_at(center)
    }

    fn dpi(&self) -> f64 {
        self.description().grid.cell_size()
    }

    fn scale(&self) -> GridScale {
        self.description().scale.clone()
    }
}

#[async_trait]
impl ScenePort for InMemoryHost {
    async fn get_items(&self, kind: Option<ItemKind>) -> Result<Vec<Item>, HostError> {
        let items = lock(&self.items, "scene")?;
        Ok(items
            .iter()
            .filter(|item| kind.map_or(true, |k| item.kind() == k))
            .cloned()
            .collect())
    }

    async fn update_items(&self, ids: Vec<ItemId>, mutator: ItemMutator) -> Result<(), HostError> {
        let mut items = lock(&self.items, "scene")?;

        let mut indices = Vec::with_capacity(ids.len());
        for id in &ids {
            let index = items
                .iter()
                .position(|item| &item.id == id)
                .ok_or_else(|| HostError::not_found("Item", id))?;
            indices.push(index);
        }

        let mut batch: Vec<Item> = indices.iter().map(|&i| items[i].clone()).collect();
        mutator(&mut batch);
        for (index, item) in indices.into_iter().zip(batch) {
            items[index] = item;
        }
        Ok(())
    }
}

/// Handle for the single interaction slot.
struct InMemoryInteraction {
    held: Arc<Mutex<Option<Vec<Item>>>>,
}

#[async_trait]
impl ItemInteraction for InMemoryInteraction {
    async fn update(&self, mutator: ItemMutator) -> Result<(), HostError> {
        let mut held = lock(&self.held, "interaction")?;
        let items = held
            .as_mut()
            .ok_or_else(|| HostError::rejected("interaction update", "interaction was stopped"))?;
        mutator(items.as_mut_slice());
        Ok(())
    }

    fn stop(&self) {
        if let Ok(mut held) = self.held.lock() {
            *held = None;
        }
    }
}

#[async_trait]
impl InteractionPort for InMemoryHost {
    async fn start_item_interaction(
        &self,
        items: Vec<Item>,
    ) -> Result<Box<dyn ItemInteraction>, HostError> {
        let mut held = lock(&self.held, "interaction")?;
        if held.is_some() {
            return Err(HostError::rejected(
                "start interaction",
                "another interaction is active",
            ));
        }
        *held = Some(items);
        Ok(Box::new(InMemoryInteraction {
            held: self.held.clone(),
        }))
    }
}

#[async_trait]
impl PlayerPort for InMemoryHost {
    async fn color(&self) -> Result<String, HostError> {
        Ok(self.player_color.clone())
    }

    async fn select(&self, ids: Vec<ItemId>) -> Result<(), HostError> {
        *lock(&self.selection, "selection")? = ids;
        Ok(())
    }
}

impl ToolRegistryPort for InMemoryHost {
    fn create_mode(&self, spec: ToolModeSpec) -> Result<(), HostError> {
        let mut modes = lock(&self.modes, "toolbar")?;
        if modes.iter().any(|m| m.id == spec.id) {
            return Err(HostError::rejected("create mode", format!("{} already exists", spec.id)));
        }
        modes.push(spec);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> InMemoryHost {
        InMemoryHost::new(50.0, "5ft")
            .unwrap()
            .with_item(Item::image(Point::new(25.0, 25.0)).with_id("hero"))
            .with_item(Item::label("note").with_id("note"))
    }

    #[test]
    fn grid_port_describes_a_square_grid() {
        let host = host();
        assert_eq!(host.snap_to_center(Point::new(60.0, 1.0)), Point::new(75.0, 25.0));
        assert_eq!(host.dpi(), 50.0);
        assert_eq!(host.scale(), GridScale::new(Some(5.0), Some("ft".into())));

        host.set_grid(70.0, "").unwrap();
        assert_eq!(host.dpi(), 70.0);
        assert_eq!(host.scale(), GridScale::default());
    }

    #[tokio::test]
    async fn scene_filters_by_kind() {
        let host = host();
        let images = host.get_items(Some(ItemKind::Image)).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(host.get_items(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_of_unknown_item_is_not_found() {
        let host = host();
        let err = host
            .update_items(vec![ItemId::from("ghost")], Box::new(|_: &mut [Item]| {}))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_writes_back_in_id_order() {
        let host = host();
        host.update_items(
            vec![ItemId::from("hero")],
            Box::new(|items: &mut [Item]| items[0].position = Point::new(75.0, 25.0)),
        )
        .await
        .unwrap();

        let hero = host.item(&ItemId::from("hero")).unwrap();
        assert_eq!(hero.position, Point::new(75.0, 25.0));
    }

    #[tokio::test]
    async fn only_one_interaction_at_a_time() {
        let host = host();
        let first = host
            .start_item_interaction(vec![Item::label("a")])
            .await
            .unwrap();
        assert!(host.start_item_interaction(vec![]).await.is_err());

        first.stop();
        assert!(host.held_items().is_none());
        assert!(first
            .update(Box::new(|_: &mut [Item]| {}))
            .await
            .is_err());
        assert!(host.start_item_interaction(vec![]).await.is_ok());
    }

    #[test]
    fn duplicate_modes_are_rejected() {
        let host = host();
        let spec = ToolModeSpec::new("cthulu/x", "/x.svg", "X");
        host.create_mode(spec.clone()).unwrap();
        assert!(host.create_mode(spec).is_err());
        assert_eq!(host.modes().len(), 1);
    }
}
