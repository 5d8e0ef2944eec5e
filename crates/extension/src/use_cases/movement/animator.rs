//! Motion animator: walks a token along the confirmed path.

use std::sync::Arc;

use cthulu_domain::{Cell, CellShape, ItemId, Point};
use cthulu_shared::Item;

use crate::ports::outbound::{HostError, ScenePort, SleepProvider};

/// Outcome of one animation run. Host failures end the run early and are
/// reported here rather than raised.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationReport {
    /// Position updates the host accepted.
    pub steps_applied: usize,
    /// Position updates the path called for.
    pub steps_planned: usize,
    pub error: Option<HostError>,
}

impl AnimationReport {
    pub fn completed(&self) -> bool {
        self.error.is_none() && self.steps_applied == self.steps_planned
    }
}

pub struct MotionAnimator {
    scene: Arc<dyn ScenePort>,
    sleep: Arc<dyn SleepProvider>,
    steps_per_cell: u32,
    step_delay_ms: u64,
}

impl MotionAnimator {
    pub fn new(
        scene: Arc<dyn ScenePort>,
        sleep: Arc<dyn SleepProvider>,
        steps_per_cell: u32,
        step_delay_ms: u64,
    ) -> Self {
        Self {
            scene,
            sleep,
            steps_per_cell: steps_per_cell.max(1),
            step_delay_ms,
        }
    }

    /// Move `token` through every cell center in order.
    ///
    /// Each hop is split into equal increments. The token ignores hits while
    /// moving and becomes hittable again on the very last increment. Nothing
    /// happens without a token or with fewer than two cells.
    pub async fn animate(&self, token: Option<&ItemId>, cells: &[Cell]) -> AnimationReport {
        let Some(token) = token else {
            return AnimationReport::default();
        };
        if cells.len() < 2 {
            return AnimationReport::default();
        }

        let steps = self.steps_per_cell as usize;
        let mut report = AnimationReport {
            steps_planned: (cells.len() - 1) * steps,
            ..AnimationReport::default()
        };
        tracing::info!(
            token = %token,
            cells = cells.len(),
            steps = report.steps_planned,
            "Animating token along path"
        );

        for pair in cells.windows(2) {
            let from = pair[0].center();
            let to = pair[1].center();

            for step in 1..=steps {
                let position = from.lerp(to, step as f64 / steps as f64);
                let is_final = report.steps_applied + 1 == report.steps_planned;

                if let Err(e) = self.step(token, position, is_final).await {
                    tracing::warn!(
                        token = %token,
                        error = %e,
                        applied = report.steps_applied,
                        "Token update failed, aborting animation"
                    );
                    report.error = Some(e);
                    return report;
                }
                report.steps_applied += 1;

                self.sleep.sleep_ms(self.step_delay_ms).await;
            }
        }

        tracing::info!(token = %token, "Token animation finished");
        report
    }

    async fn step(&self, token: &ItemId, position: Point, is_final: bool) -> Result<(), HostError> {
        self.scene
            .update_items(
                vec![token.clone()],
                Box::new(move |items: &mut [Item]| {
                    for item in items.iter_mut() {
                        item.position = position;
                        item.disable_hit = !is_final;
                    }
                }),
            )
            .await
    }
}
