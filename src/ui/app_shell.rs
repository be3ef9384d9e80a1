use eframe::egui;

use crate::app::controller::GalleryController;
use crate::app::events::{GalleryEffect, GalleryEvent};
use crate::cache::thumbs::ThumbnailCache;
use crate::infra::config::AppConfig;
use crate::ui::preview::PreviewDialog;
use crate::ui::thumbnail::thumbnail_widget;

const TILE_PADDING: f32 = 8.0;

enum Notice {
    Info(String),
    Error(String),
}

pub struct GalleryApp {
    controller: GalleryController,
    thumbnails: ThumbnailCache,
    preview: Option<PreviewDialog>,
    preview_size: [u32; 2],
    notice: Option<Notice>,
}

impl GalleryApp {
    pub fn new(controller: GalleryController, config: &AppConfig) -> Self {
        Self {
            controller,
            thumbnails: ThumbnailCache::new(config.thumbnail_size),
            preview: None,
            preview_size: config.preview_size,
            notice: None,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, event: GalleryEvent) {
        let Some(effect) = self.controller.dispatch(event) else {
            return;
        };

        match effect {
            GalleryEffect::OpenPreview(path) => {
                self.preview = Some(PreviewDialog::open(ctx, path, self.preview_size));
            }
            GalleryEffect::Saved { path, count } => {
                self.notice = Some(Notice::Info(format!(
                    "Saved {count} selected images to {path}"
                )));
            }
            GalleryEffect::SaveFailed(reason) => {
                self.notice = Some(Notice::Error(format!("Save failed: {reason}")));
            }
        }
    }

    fn navigation_bar(&mut self, ui: &mut egui::Ui, events: &mut Vec<GalleryEvent>) {
        let session = self.controller.session();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(session.has_previous_page(), egui::Button::new("Previous"))
                .clicked()
            {
                events.push(GalleryEvent::NavigatePrev);
            }
            if ui
                .add_enabled(session.has_next_page(), egui::Button::new("Next"))
                .clicked()
            {
                events.push(GalleryEvent::NavigateNext);
            }
            ui.separator();
            ui.label(self.controller.page_label());
            ui.separator();
            ui.label(format!("{} selected", self.controller.selection_count()));
        });

        if ui.button("Save Selected Images").clicked() {
            events.push(GalleryEvent::SaveRequested);
        }

        let mut dismissed = false;
        match &self.notice {
            Some(Notice::Info(text)) => {
                ui.horizontal(|ui| {
                    ui.label(text);
                    dismissed = ui.small_button("x").clicked();
                });
            }
            Some(Notice::Error(text)) => {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, text);
                    dismissed = ui.small_button("x").clicked();
                });
            }
            None => {}
        }
        if dismissed {
            self.notice = None;
        }
    }

    fn thumbnail_grid(&mut self, ui: &mut egui::Ui, events: &mut Vec<GalleryEvent>) {
        let tile_size = self.thumbnails.size() as f32;
        let grid = self.controller.grid();

        egui::Grid::new("thumbnail_grid")
            .spacing(egui::vec2(TILE_PADDING, TILE_PADDING))
            .show(ui, |ui| {
                for row in grid.rows() {
                    for slot in row {
                        let texture = self.thumbnails.texture(ui.ctx(), &slot.path);
                        let failure = self.thumbnails.failure(&slot.path);
                        if let Some(event) =
                            thumbnail_widget(ui, slot, &texture, tile_size, failure)
                        {
                            events.push(event);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        if self.preview.is_none() {
            ctx.input(|input| {
                if input.key_pressed(egui::Key::ArrowLeft) {
                    events.push(GalleryEvent::NavigatePrev);
                }
                if input.key_pressed(egui::Key::ArrowRight) {
                    events.push(GalleryEvent::NavigateNext);
                }
            });
        }

        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.add_space(4.0);
            self.navigation_bar(ui, &mut events);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.thumbnail_grid(ui, &mut events);
            });
        });

        if let Some(preview) = &self.preview {
            if preview.show(ctx) {
                self.preview = None;
            }
        }

        for event in events {
            self.apply(ctx, event);
        }
    }
}

pub fn launch_window(controller: GalleryController, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Selector")
            .with_inner_size([520.0, 600.0]),
        ..Default::default()
    };
    let app = GalleryApp::new(controller, config);

    eframe::run_native(
        "Image Selector",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
