//! Purchase Dashboard
//!
//! A GUI application showing linked charts over a CSV file of purchase
//! records. The optional first argument overrides the configured data path.

use anyhow::{anyhow, Context};
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use purchase_dashboard::app::{load_in_background, App, AppWrapper};
use purchase_dashboard::DashboardConfig;

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load()
        .context("failed to load dashboard config")?
        .with_args(std::env::args().skip(1));

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    // Initialize the Tokio runtime
    let rt = Runtime::new().context("failed to start the async runtime")?;
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(config.window_size)
                .with_min_inner_size([800.0, 600.0])
                .with_title("Purchase Dashboard"),
            ..Default::default()
        };

        let app = Arc::new(Mutex::new(App::new(config)));
        eframe::run_native(
            "Purchase Dashboard",
            options,
            Box::new(move |cc| {
                load_in_background(Arc::clone(&app), cc.egui_ctx.clone());
                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| anyhow!("error running application: {}", e))
    })
}
