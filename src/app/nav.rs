//! Top navigation bar

use super::App;
use crate::theme;
use crate::types::Section;
use crate::ui::components::{is_compact, nav_link};
use eframe::egui;

impl App {
    pub(crate) fn render_nav(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        let compact = is_compact(ctx.screen_rect().width());

        egui::TopBottomPanel::top("nav")
            .exact_height(theme::NAV_HEIGHT)
            .show_separator_line(false)
            .frame(theme::nav_frame(&palette))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Portfolio")
                                .size(theme::FONT_BRAND)
                                .strong()
                                .color(theme::NAV_TEXT),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Show the icon for the mode we'd switch to
                        let icon = if self.presenter.theme().is_dark() {
                            egui_phosphor::regular::SUN
                        } else {
                            egui_phosphor::regular::MOON
                        };
                        let tooltip = if self.presenter.theme().is_dark() {
                            "Switch to light mode"
                        } else {
                            "Switch to dark mode"
                        };
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(icon).size(22.0).color(theme::NAV_TEXT),
                                )
                                .frame(false),
                            )
                            .on_hover_text(tooltip)
                            .clicked()
                        {
                            self.presenter.toggle_theme();
                        }

                        if compact {
                            return;
                        }

                        ui.add_space(theme::SPACING_MD);
                        // right_to_left: iterate in reverse so links read left to right
                        for section in Section::ALL.iter().rev() {
                            if nav_link(ui, section.nav_label()) {
                                tracing::debug!(anchor = section.anchor(), "Nav link clicked");
                                self.scroll_target = Some(*section);
                            }
                        }
                    });
                });
            });
    }
}
