//! Reusable UI components
//!
//! Section headings, nav links, social icons and the layout math shared by
//! the page sections.

use crate::constants::{MOBILE_BREAKPOINT, PROFILE_TRAVEL, TABLET_BREAKPOINT};
use crate::theme;
use eframe::egui;

/// Opacity and vertical offset of the profile header.
///
/// `progress` runs 0..=1 toward the current target: entering moves down from
/// `-PROFILE_TRAVEL`, exiting moves further down to `+PROFILE_TRAVEL`.
pub fn profile_transition(shown: bool, progress: f32) -> (f32, f32) {
    let t = progress.clamp(0.0, 1.0);
    if shown {
        (t, -PROFILE_TRAVEL * (1.0 - t))
    } else {
        (t, PROFILE_TRAVEL * (1.0 - t))
    }
}

/// Project grid columns for the given content width
pub fn grid_columns(width: f32) -> usize {
    if width < MOBILE_BREAKPOINT {
        1
    } else if width < TABLET_BREAKPOINT {
        2
    } else {
        3
    }
}

pub fn is_compact(width: f32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Centered uppercase heading with gradient underline. Returns the heading rect
/// so nav clicks can scroll to it.
pub fn section_heading(ui: &mut egui::Ui, text: &str) -> egui::Rect {
    ui.vertical_centered(|ui| {
        let label = ui.add(
            egui::Label::new(
                egui::RichText::new(text.to_uppercase())
                    .size(theme::FONT_SECTION)
                    .strong()
                    .color(theme::HEADING_PINK),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);
        gradient_bar(ui);
        label.rect
    })
    .inner
}

/// Short horizontal bar fading from blue to purple
pub fn gradient_bar(ui: &mut egui::Ui) {
    let (w, h) = theme::UNDERLINE_SIZE;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), theme::UNDERLINE_START);
    mesh.colored_vertex(rect.right_top(), theme::UNDERLINE_END);
    mesh.colored_vertex(rect.right_bottom(), theme::UNDERLINE_END);
    mesh.colored_vertex(rect.left_bottom(), theme::UNDERLINE_START);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Bold white text button for the nav bar. Returns true if clicked.
pub fn nav_link(ui: &mut egui::Ui, text: &str) -> bool {
    let response = ui.add(
        egui::Button::new(
            egui::RichText::new(text.to_uppercase())
                .size(theme::FONT_SMALL)
                .strong()
                .color(theme::NAV_TEXT),
        )
        .frame(false),
    );
    if response.hovered() {
        ui.painter().rect_filled(
            response.rect.expand(2.0),
            theme::RADIUS_DEFAULT,
            egui::Color32::from_white_alpha(25),
        );
    }
    response.clicked()
}

/// Icon glyph that grows and takes the hover color under the pointer.
pub fn icon_link(
    ui: &mut egui::Ui,
    icon: &str,
    color: egui::Color32,
    hover_color: egui::Color32,
    tooltip: &str,
) -> bool {
    let base = theme::FONT_SOCIAL;
    let slot = egui::vec2(base * 1.3, base * 1.3);
    let (rect, response) = ui.allocate_exact_size(slot, egui::Sense::click());
    let t = ui
        .ctx()
        .animate_bool_with_time(response.id.with("hover"), response.hovered(), 0.3);

    if ui.is_rect_visible(rect) {
        let size = base * (1.0 + 0.2 * t);
        let color = if t > 0.5 { hover_color } else { color };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.on_hover_text(tooltip).clicked()
}
