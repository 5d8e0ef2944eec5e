//! Movement tool controller.
//!
//! Owns the gesture state (grid cache, path, interaction session) and turns
//! host events into path mutations, renders and the final animation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cthulu_domain::{Cell, GridCoord, Point};
use cthulu_shared::{movement_confirm_id, movement_mode_id, ItemKind, ToolModeSpec};
use tokio::sync::Mutex;

use crate::error::MovementError;
use crate::ports::inbound::HostEvent;
use crate::ports::outbound::{
    GridPort, InteractionPort, PlayerPort, ScenePort, SleepProvider, ToolRegistryPort,
};
use crate::settings::MovementSettings;

use super::animator::{AnimationReport, MotionAnimator};
use super::geometry;
use super::grid_adapter::GridAdapter;
use super::path_state::{find_hovered_token, PathMutation, PathState};
use super::session::InteractionSession;

/// Host adapters the tool runs against.
#[derive(Clone)]
pub struct HostPorts {
    pub grid: Arc<dyn GridPort>,
    pub scene: Arc<dyn ScenePort>,
    pub interactions: Arc<dyn InteractionPort>,
    pub player: Arc<dyn PlayerPort>,
    pub tools: Arc<dyn ToolRegistryPort>,
    pub sleep: Arc<dyn SleepProvider>,
}

/// Toolbar entries for planning and confirming a move.
pub fn mode_specs() -> [ToolModeSpec; 2] {
    [
        ToolModeSpec::new(movement_mode_id(), "/move-icon.svg", "Movement Mode")
            .with_cursor("pointer")
            .with_shortcut("Shift+D"),
        ToolModeSpec::new(movement_confirm_id(), "/confirm-icon.svg", "Confirm Movement")
            .with_shortcut("Shift+C"),
    ]
}

struct ToolState {
    grid: GridAdapter,
    path: PathState,
    session: Option<InteractionSession>,
    /// Grid coordinate of the last pointer move, for edge-triggered tracking.
    last_move_coord: Option<GridCoord>,
    /// Cell a pointer move toggled and no click has landed on yet. A click
    /// there confirms the move's toggle instead of undoing it.
    move_toggled: Option<GridCoord>,
}

impl ToolState {
    fn reset_tracking(&mut self) {
        self.last_move_coord = None;
        self.move_toggled = None;
    }
}

pub struct MovementTool {
    scene: Arc<dyn ScenePort>,
    interactions: Arc<dyn InteractionPort>,
    player: Arc<dyn PlayerPort>,
    tools: Arc<dyn ToolRegistryPort>,
    animator: MotionAnimator,
    settings: MovementSettings,
    state: Mutex<ToolState>,
    animating: AtomicBool,
}

impl MovementTool {
    /// Build the tool. The grid is measured here, before any event can
    /// arrive.
    pub fn new(ports: HostPorts, settings: MovementSettings) -> Result<Self, MovementError> {
        let grid = GridAdapter::new(ports.grid)?;
        let animator = MotionAnimator::new(
            ports.scene.clone(),
            ports.sleep,
            settings.steps_per_cell(),
            settings.step_delay_ms(),
        );

        Ok(Self {
            scene: ports.scene,
            interactions: ports.interactions,
            player: ports.player,
            tools: ports.tools,
            animator,
            settings,
            state: Mutex::new(ToolState {
                grid,
                path: PathState::new(),
                session: None,
                last_move_coord: None,
                move_toggled: None,
            }),
            animating: AtomicBool::new(false),
        })
    }

    /// Register the planning and confirm modes with the host toolbar.
    pub fn register_modes(&self) -> Result<(), MovementError> {
        for spec in mode_specs() {
            tracing::debug!(mode = %spec.id, "Registering tool mode");
            self.tools.create_mode(spec)?;
        }
        Ok(())
    }

    /// Handle one host event. Failures are logged, never returned.
    pub async fn dispatch(&self, event: HostEvent) {
        let name = event.name();
        match self.handle(event).await {
            Ok(()) => {}
            Err(MovementError::NoActiveSession) => {
                tracing::debug!(event = name, "No movement in progress, ignoring");
            }
            Err(e) => {
                tracing::warn!(event = name, error = %e, "Movement event failed");
            }
        }
    }

    /// Handle one host event, surfacing failures.
    pub async fn handle(&self, event: HostEvent) -> Result<(), MovementError> {
        match event {
            HostEvent::ToolClick { mode, pointer } if mode == movement_mode_id() => {
                self.on_click(pointer).await.map(|_| ())
            }
            HostEvent::ToolMove { mode, pointer } if mode == movement_mode_id() => {
                self.on_move(pointer).await
            }
            HostEvent::ModeActivated { mode } if mode == movement_confirm_id() => {
                self.confirm().await.map(|_| ())
            }
            HostEvent::ToolModeChanged { mode } => {
                self.on_mode_changed(&mode).await;
                Ok(())
            }
            HostEvent::GridChanged => self.on_grid_changed().await,
            other => {
                tracing::debug!(event = other.name(), "Event not handled by movement tool");
                Ok(())
            }
        }
    }

    /// Click in movement mode: open a session if needed, then toggle.
    ///
    /// A click on the cell a pointer move just toggled leaves the path as
    /// the move left it.
    pub async fn on_click(&self, pointer: Point) -> Result<PathMutation, MovementError> {
        let mut state = self.state.lock().await;
        // Checked under the lock: confirm raises the flag before releasing it.
        if self.is_animating() {
            return Err(MovementError::AnimationInFlight);
        }

        if state.session.is_none() {
            let session = InteractionSession::start(
                self.interactions.as_ref(),
                self.player.as_ref(),
                &self.settings,
            )
            .await?;
            state.session = Some(session);
        }

        let coord = state.grid.grid_coord(pointer);
        if state.move_toggled.take() == Some(coord) {
            tracing::debug!(x = coord.x, y = coord.y, "Click on cell already toggled by move");
            return Ok(PathMutation::Unchanged);
        }

        let mutation = self.mutate(&mut state, pointer).await?;
        if mutation.changed() {
            self.render(&state).await?;
        }
        Ok(mutation)
    }

    /// Pointer move in movement mode: toggle once per grid coordinate
    /// entered (unless move tracking is off), then re-render.
    pub async fn on_move(&self, pointer: Point) -> Result<(), MovementError> {
        let mut state = self.state.lock().await;
        if state.session.is_none() {
            return Ok(());
        }

        if self.settings.track_pointer_moves() && !self.is_animating() {
            let coord = state.grid.grid_coord(pointer);
            if state.last_move_coord != Some(coord) {
                state.last_move_coord = Some(coord);
                state.move_toggled = None;
                if self.mutate(&mut state, pointer).await?.changed() {
                    state.move_toggled = Some(coord);
                }
            }
        }

        self.render(&state).await
    }

    /// Any mode other than planning or confirming discards the gesture.
    pub async fn on_mode_changed(&self, mode: &str) {
        if mode == movement_mode_id() || mode == movement_confirm_id() {
            return;
        }

        let mut state = self.state.lock().await;
        if let Some(session) = state.session.take() {
            session.stop();
            tracing::info!(mode, "Movement cancelled by mode change");
        }
        state.path.clear();
        state.reset_tracking();
    }

    /// Commit the planned path: release the session, then walk the token.
    pub async fn confirm(&self) -> Result<AnimationReport, MovementError> {
        let (subject, cells) = {
            let mut state = self.state.lock().await;
            let session = state.session.take().ok_or(MovementError::NoActiveSession)?;
            session.stop();
            state.reset_tracking();
            // Raised under the lock; on_click checks it there too.
            self.animating.store(true, Ordering::SeqCst);
            state.path.take()
        };

        let report = self.animator.animate(subject.as_ref(), &cells).await;
        self.animating.store(false, Ordering::SeqCst);

        Ok(report)
    }

    pub async fn on_grid_changed(&self) -> Result<(), MovementError> {
        let mut state = self.state.lock().await;
        state.grid.refresh()?;
        Ok(())
    }

    /// Snapshot of the planned path.
    pub async fn path_cells(&self) -> Vec<Cell> {
        self.state.lock().await.path.cells().to_vec()
    }

    pub async fn has_session(&self) -> bool {
        self.state.lock().await.session.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animating.load(Ordering::SeqCst)
    }

    async fn mutate(&self, state: &mut ToolState, pointer: Point) -> Result<PathMutation, MovementError> {
        let images = self.scene.get_items(Some(ItemKind::Image)).await?;
        let hovered = find_hovered_token(&images, pointer, state.grid.metrics().cell_width);

        let ToolState { grid, path, .. } = state;
        let mutation = path.try_accept_or_remove(pointer, hovered.as_ref(), grid);
        tracing::debug!(
            ?mutation,
            x = pointer.x,
            y = pointer.y,
            cells = path.len(),
            "Path updated"
        );
        Ok(mutation)
    }

    async fn render(&self, state: &ToolState) -> Result<(), MovementError> {
        let Some(session) = state.session.as_ref() else {
            return Err(MovementError::NoActiveSession);
        };

        if let Some(subject) = state.path.subject() {
            self.player.select(vec![subject.clone()]).await?;
        }

        let geometry = geometry::build(
            state.path.cells(),
            state.grid.metrics(),
            state.grid.dpi(),
            &state.grid.scale(),
        );
        session.render(geometry).await
    }
}
