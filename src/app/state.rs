use eframe::App as EApp;
use egui::TextureHandle;
use log::{error, info};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{Dashboard, FilterState};
use crate::config::DashboardConfig;
use crate::data::{load_records_async, RecordStore};
use crate::error::DashboardError;
use crate::plotting::ChartTheme;
use crate::types::ChartKind;

/// Main application state
pub struct App {
    pub config: DashboardConfig,
    pub dashboard: Option<Dashboard>,
    pub theme: ChartTheme,
    pub textures: HashMap<ChartKind, TextureHandle>,
    /// Charts whose texture no longer matches their latest frame
    pub update_needed: HashSet<ChartKind>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dashboard: None,
            theme: ChartTheme::default(),
            textures: HashMap::new(),
            update_needed: HashSet::new(),
            is_loading: false,
            error_message: None,
        }
    }

    /// Install the loaded dataset and render every chart on it.
    pub fn update_with_store(&mut self, store: RecordStore) {
        info!("rendering dashboard for {} records", store.len());
        self.dashboard = Some(Dashboard::new(store));
        self.update_needed = ChartKind::ALL.into_iter().collect();
        self.is_loading = false;
        self.error_message = None;
    }

    /// A failed load is final: no chart is ever shown.
    pub fn update_with_error(&mut self, error: DashboardError) {
        error!("failed to load dataset: {}", error);
        self.dashboard = None;
        self.is_loading = false;
        self.error_message = Some(error.to_string());
    }

    /// Forward a click on chart `kind` at surface coordinates `(x, y)`.
    pub fn handle_click(&mut self, kind: ChartKind, x: f64, y: f64) {
        if let Some(dashboard) = self.dashboard.as_mut() {
            self.update_needed.extend(dashboard.click(kind, x, y));
        }
    }

    pub fn status(&self) -> String {
        match &self.dashboard {
            Some(dashboard) => match dashboard.filter_state() {
                FilterState::Unfiltered => "Showing all records".to_string(),
                FilterState::Filtered(selection) => format!(
                    "Filtered to {} (from the {} chart)",
                    selection.gender, selection.source
                ),
            },
            None if self.is_loading => "Loading...".to_string(),
            None => "No data".to_string(),
        }
    }
}

/// Load the configured dataset on the runtime and hand it to `app` when
/// done. Runs exactly once; there is no retry.
pub fn load_in_background(app: Arc<Mutex<App>>, ctx: egui::Context) {
    let path = match app.lock() {
        Ok(mut app) => {
            app.is_loading = true;
            app.config.data_path.clone()
        }
        Err(_) => {
            error!("Failed to acquire app lock before loading");
            return;
        }
    };

    tokio::spawn(async move {
        let result = load_records_async(path).await;
        match app.lock() {
            Ok(mut app) => match result {
                Ok(store) => app.update_with_store(store),
                Err(e) => app.update_with_error(e),
            },
            Err(_) => error!("Failed to acquire app lock after loading"),
        }
        ctx.request_repaint();
    });
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx);
        } else {
            error!("Failed to acquire app lock in update");
        }
    }
}
