//! LootLens - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lootlens_player::infrastructure::{create_catalog_source, create_report_sink};
use lootlens_player::ui::ShellKind;
use lootlens_player::PlayerConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is fine
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lootlens_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting LootLens");

    let config = PlayerConfig::from_env();
    tracing::info!(
        catalog = %config.catalog_location,
        cascade = %config.cascade,
        "Configuration loaded"
    );

    let services = lootlens_player::ui::presentation::Services::new(
        create_catalog_source(&config.catalog_location),
        create_report_sink(&config.report_endpoint),
        config.browser_config(),
    );

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);
            ShellKind::for_width(width)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("LOOTLENS_SHELL")
                .ok()
                .and_then(|s| ShellKind::parse(&s))
                .unwrap_or_default()
        }
    };

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("LootLens");
        builder = builder.with_cfg(dioxus_desktop::Config::new().with_window(window));
    }

    builder
        .with_context(shell)
        .with_context(services)
        .launch(lootlens_player::ui::app);
}
