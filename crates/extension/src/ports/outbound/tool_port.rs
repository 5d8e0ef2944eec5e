use cthulu_shared::ToolModeSpec;

use super::HostError;

/// Toolbar registration.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ToolRegistryPort: Send + Sync {
    fn create_mode(&self, spec: ToolModeSpec) -> Result<(), HostError>;
}
