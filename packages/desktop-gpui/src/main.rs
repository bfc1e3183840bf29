//! Design Sync Desktop - GPUI design editor shell
//!
//! Hosts the synced projects panel next to the editor canvas: browse and
//! search the projects stored by the sync service, open one onto the canvas
//! or generate a new design from a prompt.

mod api;
mod app;
mod components;
mod dialogs;
mod editor;
mod host;
mod i18n;
mod keyboard;
mod panel;
mod state;
mod theme;
mod views;

use anyhow::Result;
use design_sync_core::Config;
use gpui::prelude::*;
use gpui::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Design Sync Desktop");

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default configuration: {}", err);
        Config::default()
    });
    tracing::info!(
        sync_url = %config.sync_url,
        generation_url = %config.generation_url,
        "Services configured"
    );

    // Initialize GPUI application
    Application::new().run(move |cx: &mut App| {
        // Initialize i18n before views
        i18n::init(cx);

        // Initialize state management
        state::init(&config.default_prompt, cx);

        // Initialize theme system (also sets global Theme)
        theme::init(cx);

        // Register keyboard bindings
        keyboard::init(cx);

        // Initialize API client
        if let Err(err) = api::init(&config, cx) {
            tracing::error!("Failed to initialize API client: {:#}", err);
            cx.quit();
            return;
        }

        // Open the main window
        let opened = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Design Sync".into()),
                    appears_transparent: true,
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(1280.0), px(800.0)),
                })),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| app::AppRoot::new(window, cx)),
        );

        match opened {
            Ok(_) => tracing::info!("Design Sync Desktop window opened"),
            Err(err) => {
                tracing::error!("Failed to open window: {:#}", err);
                cx.quit();
            }
        }
    });

    Ok(())
}
