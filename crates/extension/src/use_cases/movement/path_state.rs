//! The planned path and the rules for growing or shrinking it.

use cthulu_domain::{Cell, CellShape, ItemId, Point};
use cthulu_shared::{Item, ItemKind};

use super::grid_adapter::GridAdapter;

/// Per-axis distance under which two cell centers count as the same cell.
const SAME_CELL_TOLERANCE: f64 = 0.5;

/// A token under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredToken {
    pub id: ItemId,
    pub center: Point,
}

/// What a pointer event did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMutation {
    /// Path started at a token.
    Seeded,
    Appended,
    /// Entry at this index was toggled off.
    Removed(usize),
    Unchanged,
}

impl PathMutation {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Ordered, deduplicated cells plus the token they belong to.
#[derive(Debug, Clone, Default)]
pub struct PathState {
    cells: Vec<Cell>,
    subject: Option<ItemId>,
}

impl PathState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn subject(&self) -> Option<&ItemId> {
        self.subject.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Apply one pointer event.
    ///
    /// A token under the pointer only matters for an empty path, where it
    /// seeds the path at the token's exact center. Otherwise the cell under
    /// the pointer is toggled, provided it touches the last entry.
    pub fn try_accept_or_remove(
        &mut self,
        pointer: Point,
        hovered: Option<&HoveredToken>,
        grid: &GridAdapter,
    ) -> PathMutation {
        if let Some(token) = hovered {
            if !self.cells.is_empty() {
                return PathMutation::Unchanged;
            }
            let size = grid.metrics().cell_width;
            self.cells.push(Cell::synthetic(token.center, size));
            self.subject = Some(token.id.clone());
            return PathMutation::Seeded;
        }

        let Some(last) = self.cells.last() else {
            return PathMutation::Unchanged;
        };
        if !grid
            .grid_coord(pointer)
            .is_adjacent_to(grid.grid_coord(last.center()))
        {
            return PathMutation::Unchanged;
        }

        let cell = grid.cell_at(pointer);
        let existing = self
            .cells
            .iter()
            .position(|c| c.center().approx_eq(cell.center(), SAME_CELL_TOLERANCE));

        match existing {
            Some(index) => {
                self.cells.remove(index);
                PathMutation::Removed(index)
            }
            None => {
                self.cells.push(cell);
                PathMutation::Appended
            }
        }
    }

    /// Forget the path and its token.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.subject = None;
    }

    /// Move the path out, leaving this state empty.
    pub fn take(&mut self) -> (Option<ItemId>, Vec<Cell>) {
        (self.subject.take(), std::mem::take(&mut self.cells))
    }
}

/// First image item whose position lies within `cell_width / 2` of the
/// pointer.
pub fn find_hovered_token(items: &[Item], pointer: Point, cell_width: f64) -> Option<HoveredToken> {
    let reach = cell_width / 2.0;
    items
        .iter()
        .filter(|item| item.kind() == ItemKind::Image)
        .find(|item| item.position.distance_to(pointer) <= reach)
        .map(|item| HoveredToken {
            id: item.id.clone(),
            center: item.position,
        })
}
