//! Cthulu Extension - demo composition root.
//!
//! Native: wires the movement tool to the in-memory host, plays one scripted
//! gesture and confirms it.
//!
//! wasm32: installs the panic hook and browser logging, then reports the tool
//! modes. The JavaScript bridge to the VTT host is not part of this
//! workspace; it implements the outbound ports and hands them to
//! `MovementTool::new` together with `PlatformSleepProvider`.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use cthulu_domain::{ItemId, Point};
    use cthulu_extension::infrastructure::in_memory::InMemoryHost;
    use cthulu_extension::infrastructure::platform::PlatformSleepProvider;
    use cthulu_extension::infrastructure::settings_loader::load_settings_from_env;
    use cthulu_extension::ports::inbound::HostEvent;
    use cthulu_extension::use_cases::movement::MovementTool;
    use cthulu_extension::MovementSettings;
    use cthulu_shared::{movement_confirm_id, movement_mode_id, Item};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cthulu_extension=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cthulu movement demo");

    let settings = match std::env::var("CTHULU_SETTINGS_JSON") {
        Ok(json) => MovementSettings::from_json(&json)?,
        Err(_) => MovementSettings::default(),
    };
    let settings = load_settings_from_env(settings);

    let token = ItemId::from("goblin");
    let host = Arc::new(
        InMemoryHost::new(150.0, "5ft")?
            .with_player_color("#2d9cdb")
            .with_item(Item::image(Point::new(75.0, 75.0)).with_id(token.clone())),
    );

    let tool = MovementTool::new(host.ports(Arc::new(PlatformSleepProvider)), settings)?;
    tool.register_modes()?;

    let mode = movement_mode_id();
    let gesture = [
        Point::new(80.0, 70.0),
        Point::new(225.0, 75.0),
        Point::new(375.0, 225.0),
        Point::new(375.0, 375.0),
    ];
    for pointer in gesture {
        tool.dispatch(HostEvent::ToolMove {
            mode: mode.clone(),
            pointer,
        })
        .await;
        tool.dispatch(HostEvent::ToolClick {
            mode: mode.clone(),
            pointer,
        })
        .await;
    }

    if let Some(label) = host.held_items().and_then(|items| {
        items
            .iter()
            .find_map(|item| item.label_text().map(str::to_string))
    }) {
        tracing::info!(distance = %label, "Planned path");
    }

    tool.dispatch(HostEvent::ToolModeChanged {
        mode: movement_confirm_id(),
    })
    .await;
    tool.dispatch(HostEvent::ModeActivated {
        mode: movement_confirm_id(),
    })
    .await;

    match host.item(&token) {
        Some(item) => tracing::info!(position = %item.position, "Token moved"),
        None => tracing::warn!("Token disappeared from the scene"),
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use cthulu_extension::use_cases::movement::mode_specs;
    use cthulu_extension::MovementSettings;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let settings = MovementSettings::default();
    for spec in mode_specs() {
        tracing::info!(mode = %spec.id, shortcut = ?spec.shortcut, "Tool mode available");
    }
    tracing::info!(
        steps_per_cell = settings.steps_per_cell(),
        step_delay_ms = settings.step_delay_ms(),
        "Cthulu movement tool loaded; waiting for the host bridge"
    );
}
