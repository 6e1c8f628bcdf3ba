//! Utility functions

use crate::constants::APP_NAME;
use chrono::Datelike;
use std::path::PathBuf;

// Placeholder portrait: silhouette on the avatar ring gradient
pub const AVATAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#2196f3"/><stop offset="1" stop-color="#21cbf3"/></linearGradient><clipPath id="c"><circle cx="100" cy="100" r="100"/></clipPath></defs><g clip-path="url(#c)"><rect width="200" height="200" fill="url(#g)"/><circle cx="100" cy="78" r="36" fill="#e3f2fd"/><path d="M28 200c0-44 32-72 72-72s72 28 72 72z" fill="#e3f2fd"/></g></svg>"##;

// Square variant for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#3f51b5"/><stop offset="1" stop-color="#f73184"/></linearGradient></defs><rect width="64" height="64" rx="14" fill="url(#g)"/><circle cx="32" cy="25" r="10" fill="#fff"/><path d="M13 54c0-12 8.5-19 19-19s19 7 19 19z" fill="#fff"/></svg>"##;

/// Rasterize an SVG to a square straight-alpha RGBA buffer.
pub fn rasterize_svg_square(svg: &str, size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings.json, logs/)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_rasterizes_to_square_rgba() {
        let (pixels, w, h) = rasterize_svg_square(AVATAR_SVG, 64).expect("valid svg");
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
        // Center is inside the circle, corner is clipped away
        let center = ((32 * 64 + 32) * 4) as usize;
        assert_eq!(pixels[center + 3], 255);
        assert_eq!(pixels[3], 0);
    }

    #[test]
    fn avatar_is_silhouette_on_blue_gradient() {
        assert!(!AVATAR_SVG.contains("<text"));
        let (pixels, w, _) = rasterize_svg_square(AVATAR_SVG, 64).expect("valid svg");
        let px = |x: u32, y: u32| {
            let i = ((y * w + x) * 4) as usize;
            [pixels[i], pixels[i + 1], pixels[i + 2]]
        };
        // Head fill at the center
        let [r, g, b] = px(32, 32);
        assert!(r > 200 && g > 220 && b > 240, "head was {:?}", (r, g, b));
        // Gradient background above the head
        let [r, _, b] = px(32, 4);
        assert!(r < 60 && b > 220, "background was {:?}", (r, b));
    }

    #[test]
    fn icon_rasterizes() {
        let (pixels, w, _) = rasterize_svg_square(ICON_SVG, 32).expect("valid svg");
        assert_eq!(w, 32);
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn bad_svg_yields_none() {
        assert!(rasterize_svg_square("<not svg", 16).is_none());
    }

    #[test]
    fn copyright_line_format() {
        assert_eq!(
            copyright_line(2025, "Shiva Rama Krishna Reddy"),
            "© 2025 Shiva Rama Krishna Reddy. All rights reserved."
        );
        assert!(current_year() >= 2024);
    }

    #[test]
    fn data_dir_is_app_scoped() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
