//! Portrait texture and resume export

use super::App;
use crate::constants::RESUME_FILE_NAME;
use crate::error::{PortfolioError, Result};
use crate::utils::{rasterize_svg_square, AVATAR_SVG};
use eframe::egui;
use std::path::Path;
use tracing::{debug, info, warn};

/// Decode a portrait file into an egui image
pub(crate) fn load_portrait(path: &Path) -> Result<egui::ColorImage> {
    if !path.exists() {
        return Err(PortfolioError::MissingAsset(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| PortfolioError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw()))
}

/// Copy the resume to `dest`, returning the number of bytes written
pub(crate) fn export_resume(src: &Path, dest: &Path) -> Result<u64> {
    if !src.exists() {
        return Err(PortfolioError::MissingAsset(src.to_path_buf()));
    }
    std::fs::copy(src, dest).map_err(|e| PortfolioError::io(dest, e))
}

impl App {
    /// Portrait from settings, falling back to the built-in silhouette
    pub(crate) fn avatar_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        if let Some(texture) = &self.avatar_texture {
            return Some(texture.clone());
        }

        let image = match self.portrait_path.as_deref().map(load_portrait) {
            Some(Ok(image)) => {
                debug!("Portrait loaded");
                Some(image)
            }
            Some(Err(e)) => {
                warn!(error = %e, "Failed to load portrait, using placeholder");
                None
            }
            None => None,
        }
        .or_else(|| {
            rasterize_svg_square(AVATAR_SVG, 400).map(|(pixels, w, h)| {
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels)
            })
        })?;

        let texture = ctx.load_texture("avatar", image, egui::TextureOptions::LINEAR);
        self.avatar_texture = Some(texture.clone());
        Some(texture)
    }

    pub(crate) fn resume_available(&self) -> bool {
        self.resume_path.as_deref().is_some_and(Path::exists)
    }

    pub(crate) fn download_resume(&mut self) {
        let Some(src) = self.resume_path.clone() else {
            return;
        };
        let Some(dest) = rfd::FileDialog::new()
            .set_title("Save Resume")
            .set_file_name(RESUME_FILE_NAME)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            debug!("Resume save cancelled");
            return;
        };

        match export_resume(&src, &dest) {
            Ok(bytes) => {
                info!(bytes, path = %dest.display(), "Resume saved");
                self.show_toast("Resume saved");
            }
            Err(e) => {
                warn!(error = %e, "Failed to save resume");
                self.show_toast(format!("Could not save resume: {}", e));
            }
        }
    }
}
