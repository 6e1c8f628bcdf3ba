//! Centralized theme constants for the portfolio
//! All colors, sizes, and styling should reference these constants

use crate::types::ThemeMode;
use egui::Color32;

// =============================================================================
// COLORS - Fixed accents (same in both modes)
// =============================================================================
pub const HEADING_PINK: Color32 = Color32::from_rgb(0xf7, 0x31, 0x84);
pub const UNDERLINE_START: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const UNDERLINE_END: Color32 = Color32::from_rgb(0xa8, 0x55, 0xf7); // purple-500
pub const AVATAR_RING: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3);
pub const AVATAR_RING_LIGHT: Color32 = Color32::from_rgb(0x21, 0xcb, 0xf3);
pub const NAV_TEXT: Color32 = Color32::WHITE;

// =============================================================================
// PALETTE - Mode dependent
// =============================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub paper: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
}

impl Palette {
    /// Softer primary, used for card outlines at rest
    pub fn primary_light(&self) -> Color32 {
        lighten(self.primary, 0.3)
    }
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            primary: Color32::from_rgb(0x3f, 0x51, 0xb5),
            secondary: Color32::from_rgb(0xff, 0x40, 0x81),
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            paper: Color32::WHITE,
            text: Color32::from_rgba_unmultiplied(0, 0, 0, 222),
            text_secondary: Color32::from_rgba_unmultiplied(0, 0, 0, 153),
        },
        ThemeMode::Dark => Palette {
            primary: Color32::from_rgb(0x90, 0xca, 0xf9),
            secondary: Color32::from_rgb(0xf4, 0x8f, 0xb1),
            background: Color32::from_rgb(0x12, 0x12, 0x12),
            paper: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            text: Color32::WHITE,
            text_secondary: Color32::from_rgba_unmultiplied(255, 255, 255, 179),
        },
    }
}

/// Brand color from a 0xRRGGBB literal
pub fn rgb_hex(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_BRAND: f32 = 24.0;
pub const FONT_HERO: f32 = 36.0;
pub const FONT_SECTION: f32 = 28.0;
pub const FONT_CARD_TITLE: f32 = 20.0;
pub const FONT_LEAD: f32 = 18.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_SMALL: f32 = 13.0;
pub const FONT_CAPTION: f32 = 12.0;
pub const FONT_SOCIAL: f32 = 32.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const NAV_HEIGHT: f32 = 64.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const AVATAR_SIZE: f32 = 200.0;
pub const AVATAR_RING_WIDTH: f32 = 6.0;
pub const UNDERLINE_SIZE: (f32, f32) = (100.0, 4.0);
pub const CARD_LIFT: f32 = 10.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 12.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 32.0;
pub const SPACING_XL: f32 = 48.0;
pub const SPACING_XXL: f32 = 64.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode) {
    let p = palette(mode);
    let (base, egui_theme) = match mode {
        ThemeMode::Light => (egui::Visuals::light(), egui::Theme::Light),
        ThemeMode::Dark => (egui::Visuals::dark(), egui::Theme::Dark),
    };

    let mut widgets = base.widgets.clone();
    widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, p.text);
    widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, p.text_secondary.gamma_multiply(0.3));
    widgets.inactive.fg_stroke = egui::Stroke::new(1.0, p.text);
    widgets.hovered.bg_stroke = egui::Stroke::new(1.0, p.primary);
    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.corner_radius = RADIUS_DEFAULT.into();
    }

    ctx.set_theme(egui_theme);
    ctx.set_visuals(egui::Visuals {
        panel_fill: p.background,
        window_fill: p.paper,
        extreme_bg_color: p.paper,
        faint_bg_color: p.paper,
        hyperlink_color: p.primary,
        override_text_color: Some(p.text),
        selection: egui::style::Selection {
            bg_fill: p.primary.gamma_multiply(0.35),
            stroke: egui::Stroke::new(1.0, p.primary),
        },
        widgets,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(RADIUS_DEFAULT as u8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Project card; border switches to full primary on hover
pub fn card_frame(p: &Palette, hovered: bool) -> egui::Frame {
    let border = if hovered { p.primary } else { p.primary_light() };
    let shadow_alpha = if hovered { 50 } else { 25 };
    egui::Frame::new()
        .fill(p.paper)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(24))
        .shadow(egui::epaint::Shadow {
            offset: [0, if hovered { 8 } else { 4 }],
            blur: if hovered { 30 } else { 20 },
            spread: 0,
            color: Color32::from_black_alpha(shadow_alpha),
        })
}

pub fn nav_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.primary)
        .inner_margin(egui::Margin::symmetric(24, 0))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

pub fn footer_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.primary)
        .inner_margin(egui::Margin::symmetric(16, 24))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Outlined button in the given color (for "View Project")
pub fn button_outlined(text: impl Into<String>, color: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).size(FONT_CAPTION).color(color))
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.6)))
        .corner_radius(RADIUS_DEFAULT)
}

/// Filled button (for "Download Resume")
pub fn button_contained(text: impl Into<String>, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).size(FONT_BODY).color(Color32::WHITE))
        .fill(fill)
        .corner_radius(RADIUS_LARGE)
        .min_size(egui::vec2(0.0, 44.0))
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_mode() {
        let light = palette(ThemeMode::Light);
        assert_eq!(light.primary, Color32::from_rgb(0x3f, 0x51, 0xb5));
        assert_eq!(light.secondary, Color32::from_rgb(0xff, 0x40, 0x81));
        assert_eq!(light.background, Color32::from_rgb(0xf5, 0xf5, 0xf5));
        assert_eq!(light.paper, Color32::WHITE);

        let dark = palette(ThemeMode::Dark);
        assert_eq!(dark.primary, Color32::from_rgb(0x90, 0xca, 0xf9));
        assert_eq!(dark.secondary, Color32::from_rgb(0xf4, 0x8f, 0xb1));
        assert_eq!(dark.background, Color32::from_rgb(0x12, 0x12, 0x12));
        assert_eq!(dark.paper, Color32::from_rgb(0x1e, 0x1e, 0x1e));
    }

    #[test]
    fn rgb_hex_splits_channels() {
        assert_eq!(rgb_hex(0x0e76a8), Color32::from_rgb(0x0e, 0x76, 0xa8));
        assert_eq!(rgb_hex(0xe1306c), Color32::from_rgb(0xe1, 0x30, 0x6c));
    }

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        let c = lighten(Color32::from_rgb(0x3f, 0x51, 0xb5), 0.3);
        assert!(c.r() > 0x3f && c.g() > 0x51 && c.b() > 0xb5);
    }
}
