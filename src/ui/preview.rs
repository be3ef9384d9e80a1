use eframe::egui;

use crate::app::state::ImageRef;
use crate::cache::previews::{load_preview, PreviewImage};

pub struct PreviewDialog {
    path: ImageRef,
    image: PreviewImage,
}

impl PreviewDialog {
    pub fn open(ctx: &egui::Context, path: ImageRef, max_size: [u32; 2]) -> Self {
        let image = load_preview(ctx, &path, max_size[0], max_size[1]);
        Self { path, image }
    }

    /// Returns true once the user dismissed the dialog.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let modal = egui::Modal::new(egui::Id::new("full_size_preview")).show(ctx, |ui| {
            ui.heading("Full-Size Image View");
            ui.label(self.path.as_str());
            ui.separator();
            match &self.image {
                PreviewImage::Ready(texture) => {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                PreviewImage::Failed(reason) => {
                    ui.colored_label(ui.visuals().error_fg_color, reason);
                }
            }
            ui.separator();
            ui.button("Close").clicked()
        });

        modal.inner || modal.should_close()
    }
}
