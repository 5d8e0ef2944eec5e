//! Namespaced identifiers for everything the add-on registers with the host.

/// Namespace prefix shared by tool modes and item metadata.
pub const EXTENSION_NAMESPACE: &str = "cthulu";

/// `cthulu` on its own, or `cthulu/<path>`.
pub fn extension_id(path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{EXTENSION_NAMESPACE}/{path}"),
        _ => EXTENSION_NAMESPACE.to_string(),
    }
}

/// Tool mode used while planning a path.
pub fn movement_mode_id() -> String {
    extension_id(Some("movement-mode"))
}

/// Tool mode that commits the planned path.
pub fn movement_confirm_id() -> String {
    extension_id(Some("movement-confirm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_namespaced_ids() {
        assert_eq!(extension_id(None), "cthulu");
        assert_eq!(extension_id(Some("")), "cthulu");
        assert_eq!(movement_mode_id(), "cthulu/movement-mode");
        assert_eq!(movement_confirm_id(), "cthulu/movement-confirm");
    }
}
