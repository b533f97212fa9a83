use egui::{Context, Sense, Ui};
use log::error;

use super::App;
use crate::plotting::render_rgb;
use crate::types::ChartKind;

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context) {
    // Refresh textures for charts that were re-rendered since the last frame
    for kind in std::mem::take(&mut app.update_needed) {
        load_chart_texture(app, kind, ctx);
    }

    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Dataset");
        ui.separator();

        ui.label(format!("File: {}", app.config.data_path.display()));
        if let Some(dashboard) = &app.dashboard {
            ui.label(format!("Records: {}", dashboard.store().len()));
            ui.label(format!(
                "Genders: {}",
                dashboard.store().domains().genders.join(", ")
            ));
        }

        ui.separator();
        ui.label(app.status());
        ui.label("Click a bar or a line point to filter the other charts.");
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Purchase Dashboard");
        ui.separator();

        if app.is_loading {
            ui.label("Loading dataset... Please wait.");
            ui.spinner();
            return;
        }

        if let Some(message) = &app.error_message {
            ui.colored_label(egui::Color32::RED, format!("Error: {}", message));
            return;
        }

        egui::ScrollArea::both().show(ui, |ui| {
            ui.horizontal(|ui| {
                draw_chart(app, ChartKind::Bar, ui);
                draw_chart(app, ChartKind::Line, ui);
            });
            draw_chart(app, ChartKind::Pie, ui);
        });
    });
}

/// Show one chart texture and forward clicks on it as surface coordinates.
fn draw_chart(app: &mut App, kind: ChartKind, ui: &mut Ui) {
    let Some(texture) = app.textures.get(&kind).cloned() else {
        return;
    };
    let size = texture.size_vec2();
    let response = ui.add(
        egui::Image::new(&texture)
            .fit_to_exact_size(size)
            .sense(Sense::click()),
    );

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - response.rect.min;
            let x = local.x * size.x / response.rect.width();
            let y = local.y * size.y / response.rect.height();
            app.handle_click(kind, x as f64, y as f64);
            ui.ctx().request_repaint();
        }
    }
}

fn load_chart_texture(app: &mut App, kind: ChartKind, ctx: &Context) {
    let Some(dashboard) = &app.dashboard else {
        return;
    };
    let frame = dashboard.frame(kind);

    let pixels = match render_rgb(frame, &app.theme) {
        Ok(pixels) => pixels,
        Err(e) => {
            error!("Plotting error for the {} chart: {}", kind, e);
            return;
        }
    };
    let Some(image) = image::RgbImage::from_raw(frame.width, frame.height, pixels) else {
        error!("Rendered {} chart has an unexpected buffer size", kind);
        return;
    };

    let size = [image.width() as usize, image.height() as usize];
    let rgba = image::DynamicImage::ImageRgb8(image).to_rgba8();
    let texture = ctx.load_texture(
        format!("{}_chart", kind),
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        egui::TextureOptions::LINEAR,
    );
    app.textures.insert(kind, texture);
}
