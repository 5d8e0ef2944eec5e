//! Settings loader for reading MovementSettings from environment variables
//!
//! Environment I/O stays out of the settings type itself.

use crate::settings::MovementSettings;

/// Read an environment variable, falling back to `default` when missing or
/// unparseable.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Unparseable environment override, ignoring");
                default
            }
        },
        Err(_) => default,
    }
}

/// Load MovementSettings from environment variables on top of `base`.
///
/// # Environment Variables
///
/// - `CTHULU_STEPS_PER_CELL` - Animation increments per cell (default: 2)
/// - `CTHULU_STEP_DELAY_MS` - Pause after each increment (default: 100)
/// - `CTHULU_TRACK_POINTER_MOVES` - Toggle cells on pointer moves (default: true)
pub fn load_settings_from_env(base: MovementSettings) -> MovementSettings {
    let steps = env_or("CTHULU_STEPS_PER_CELL", base.steps_per_cell());
    let delay = env_or("CTHULU_STEP_DELAY_MS", base.step_delay_ms());
    let track = env_or("CTHULU_TRACK_POINTER_MOVES", base.track_pointer_moves());

    base.with_steps_per_cell(steps)
        .with_step_delay_ms(delay)
        .with_track_pointer_moves(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_and_garbage() {
        assert_eq!(env_or("CTHULU_TEST_SURELY_UNSET_VARIABLE", 7u32), 7);

        std::env::set_var("CTHULU_TEST_GARBAGE_STEPS", "many");
        assert_eq!(env_or("CTHULU_TEST_GARBAGE_STEPS", 3u32), 3);

        std::env::set_var("CTHULU_TEST_GOOD_STEPS", " 5 ");
        assert_eq!(env_or("CTHULU_TEST_GOOD_STEPS", 3u32), 5);
    }

    #[test]
    fn loader_keeps_base_without_overrides() {
        let base = MovementSettings::default().with_step_delay_ms(250);
        std::env::remove_var("CTHULU_STEP_DELAY_MS");
        assert_eq!(load_settings_from_env(base).step_delay_ms(), 250);
    }
}
