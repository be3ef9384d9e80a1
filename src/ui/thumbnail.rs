use eframe::egui;

use crate::app::events::GalleryEvent;
use crate::app::grid::ThumbnailSlot;

const CHECK_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const CHECK_WIDTH: f32 = 4.0;
const CHECK_EXTENT: f32 = 16.0;
const CHECK_INSET: f32 = 4.0;

/// Draws one thumbnail tile and turns clicks on it into gallery events.
pub fn thumbnail_widget(
    ui: &mut egui::Ui,
    slot: &ThumbnailSlot,
    texture: &egui::TextureHandle,
    tile_size: f32,
    failure: Option<&str>,
) -> Option<GalleryEvent> {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(tile_size, tile_size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let image_rect = egui::Rect::from_center_size(rect.center(), texture.size_vec2());
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        if response.hovered() {
            painter.rect_stroke(
                rect,
                2.0,
                ui.visuals().widgets.hovered.bg_stroke,
                egui::StrokeKind::Inside,
            );
        }
        if slot.selected {
            paint_checkmark(&painter, rect);
        }
    }

    let response = match failure {
        Some(reason) => response.on_hover_text(format!("{}\n{reason}", slot.path.file_name())),
        None => response.on_hover_text(slot.path.file_name()),
    };

    if response.clicked() {
        Some(GalleryEvent::ThumbnailClicked {
            path: slot.path.clone(),
        })
    } else if response.secondary_clicked() {
        Some(GalleryEvent::ThumbnailRightClicked {
            path: slot.path.clone(),
        })
    } else {
        None
    }
}

fn paint_checkmark(painter: &egui::Painter, tile: egui::Rect) {
    let origin = tile.right_top() + egui::vec2(-(CHECK_EXTENT + CHECK_INSET), CHECK_INSET);
    let stroke = egui::Stroke::new(CHECK_WIDTH, CHECK_COLOR);
    let start = origin + egui::vec2(0.0, CHECK_EXTENT * 0.55);
    let valley = origin + egui::vec2(CHECK_EXTENT * 0.35, CHECK_EXTENT * 0.9);
    let tip = origin + egui::vec2(CHECK_EXTENT, 0.0);
    painter.line_segment([start, valley], stroke);
    painter.line_segment([valley, tip], stroke);
}
