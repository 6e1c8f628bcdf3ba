//! Page sections: hero, about, projects, services, contact, footer

use super::App;
use crate::constants::PROFILE_TRANSITION_SECS;
use crate::content::{self, OWNER_NAME};
use crate::theme::{self, Palette};
use crate::types::{ProjectRecord, Section};
use crate::ui::components::{grid_columns, icon_link, is_compact, profile_transition, section_heading};
use eframe::egui;
use std::time::Duration;

impl App {
    pub(crate) fn render_page(&mut self, ctx: &egui::Context) {
        let palette = self.palette();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let avail = ui.available_width();
                        let content_w = (avail - 2.0 * theme::SPACING_MD).min(theme::CONTENT_MAX_WIDTH);
                        let side = ((avail - content_w) / 2.0).max(0.0);

                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(content_w);
                                ui.add_space(theme::SPACING_XL);
                                self.render_hero(ui, &palette);
                                self.render_about(ui);
                                self.render_projects(ui, &palette);
                                self.render_services(ui);
                                self.render_contact(ui, &palette);
                            });
                        });

                        ui.add_space(theme::SPACING_XXL + theme::SPACING_MD);
                        self.render_footer(ui, &palette);
                    });
            });
    }

    /// Section heading that also honors a pending nav scroll
    fn heading(&mut self, ui: &mut egui::Ui, section: Section) {
        let rect = section_heading(ui, section.heading());
        if self.scroll_target == Some(section) {
            ui.scroll_to_rect(rect.expand(theme::SPACING_LG), Some(egui::Align::TOP));
            self.scroll_target = None;
        }
    }

    // ========================================================================
    // HERO
    // ========================================================================

    fn render_hero(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let shown = self.presenter.profile().is_shown();
        let progress = ui.ctx().animate_bool_with_time(
            egui::Id::new("profile_header"),
            shown,
            PROFILE_TRANSITION_SECS,
        );
        // Exit finished: drop out of the layout entirely
        if !shown && progress <= 0.0 {
            return;
        }
        let (opacity, offset) = profile_transition(shown, progress);

        // Paint shifted by `offset` but reserve space at the unshifted position,
        // so the sections below stay put while the header slides.
        let top_left = ui.cursor().min;
        let width = ui.available_width();
        let child_rect = egui::Rect::from_min_size(
            top_left + egui::vec2(0.0, offset),
            egui::vec2(width, f32::INFINITY),
        );
        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(child_rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        child.multiply_opacity(opacity);
        self.hero_contents(&mut child, palette);
        let height = child.min_rect().height();
        ui.allocate_rect(
            egui::Rect::from_min_size(top_left, egui::vec2(width, height)),
            egui::Sense::hover(),
        );
    }

    fn hero_contents(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let compact = is_compact(ui.available_width());
        let intro = |ui: &mut egui::Ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(
                    egui::RichText::new("Hi, I'm ")
                        .size(theme::FONT_HERO)
                        .color(palette.primary),
                );
                ui.label(
                    egui::RichText::new(OWNER_NAME)
                        .size(theme::FONT_HERO)
                        .color(palette.secondary),
                );
            });
            ui.add_space(theme::SPACING_SM);
            ui.label(egui::RichText::new(content::HEADLINE).size(theme::FONT_LEAD));
        };

        if compact {
            ui.vertical_centered(|ui| self.render_avatar(ui));
            ui.add_space(theme::SPACING_LG);
            intro(ui);
        } else {
            ui.horizontal(|ui| {
                let avatar_col = ui.available_width() / 3.0;
                ui.allocate_ui(egui::vec2(avatar_col, theme::AVATAR_SIZE + 40.0), |ui| {
                    ui.vertical_centered(|ui| self.render_avatar(ui));
                });
                ui.add_space(theme::SPACING_LG);
                ui.vertical(|ui| {
                    ui.add_space(theme::SPACING_LG);
                    intro(ui);
                });
            });
        }
    }

    /// Circular portrait inside a pulsing glow ring
    fn render_avatar(&mut self, ui: &mut egui::Ui) {
        let pad = 20.0;
        let outer = theme::AVATAR_SIZE + 2.0 * pad;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(outer, outer), egui::Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let center = rect.center();
        let radius = theme::AVATAR_SIZE / 2.0;
        let time = ui.input(|i| i.time) as f32;
        // 3s pulse, 0..1..0
        let pulse = 0.5 - 0.5 * (time * std::f32::consts::TAU / 3.0).cos();

        let painter = ui.painter();
        for (i, alpha) in [0.2_f32, 0.4, 0.6].iter().enumerate() {
            let spread = (3 - i) as f32 * (5.0 + 3.0 * pulse);
            let a = (alpha * (0.6 + 0.4 * pulse) * 255.0) as u8;
            painter.circle_filled(
                center,
                radius + spread,
                egui::Color32::from_rgba_unmultiplied(
                    theme::AVATAR_RING.r(),
                    theme::AVATAR_RING.g(),
                    theme::AVATAR_RING.b(),
                    a / 3,
                ),
            );
        }
        painter.circle_filled(center, radius, theme::AVATAR_RING);
        painter.circle_stroke(
            center,
            radius - theme::AVATAR_RING_WIDTH / 2.0,
            egui::Stroke::new(theme::AVATAR_RING_WIDTH / 2.0, theme::AVATAR_RING_LIGHT),
        );

        let inner = radius - theme::AVATAR_RING_WIDTH;
        if let Some(texture) = self.avatar_texture(ui.ctx()) {
            let img_rect = egui::Rect::from_center_size(center, egui::vec2(inner * 2.0, inner * 2.0));
            egui::Image::new(egui::load::SizedTexture::new(texture.id(), img_rect.size()))
                .corner_radius(inner)
                .paint_at(ui, img_rect);
        }

        ui.ctx().request_repaint_after(Duration::from_millis(33));
    }

    // ========================================================================
    // ABOUT / SERVICES
    // ========================================================================

    fn render_about(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XL);
        self.heading(ui, Section::About);
        ui.add_space(theme::SPACING_LG);
        for paragraph in content::ABOUT {
            ui.label(egui::RichText::new(*paragraph).size(theme::FONT_LEAD));
        }
        ui.add_space(theme::SPACING_LG);
    }

    fn render_services(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XXL);
        self.heading(ui, Section::Services);
        ui.add_space(theme::SPACING_LG);
        ui.label(egui::RichText::new(content::SERVICES).size(theme::FONT_BODY));
        ui.add_space(theme::SPACING_MD);
    }

    // ========================================================================
    // PROJECTS
    // ========================================================================

    fn render_projects(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.add_space(theme::SPACING_XXL);
        self.heading(ui, Section::Projects);
        ui.add_space(theme::SPACING_LG);

        let projects = self.presenter.projects();
        let columns = grid_columns(ui.available_width());
        let mut clicked: Option<&'static str> = None;

        for (row, chunk) in projects.chunks(columns).enumerate() {
            ui.columns(columns, |cols| {
                for (col, (ui, project)) in cols.iter_mut().zip(chunk).enumerate() {
                    let index = row * columns + col;
                    if project_card(ui, index, project, palette) {
                        clicked = Some(project.repo_link);
                    }
                }
            });
            ui.add_space(theme::SPACING_LG);
        }

        if let Some(url) = clicked {
            self.presenter.open_external_link(url);
        }
    }

    // ========================================================================
    // CONTACT
    // ========================================================================

    fn render_contact(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.add_space(theme::SPACING_XXL);
        self.heading(ui, Section::Contact);
        ui.add_space(theme::SPACING_LG);
        ui.label(egui::RichText::new(content::CONTACT_BLURB).size(theme::FONT_BODY));
        ui.add_space(theme::SPACING_MD);

        // Centered icon row
        let slot = theme::FONT_SOCIAL * 1.3;
        let gap = theme::SPACING_LG;
        let count = content::SOCIAL_LINKS.len() as f32;
        let row_w = count * slot + (count - 1.0) * gap;
        let mut clicked: Option<&'static str> = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
            for link in content::SOCIAL_LINKS {
                if icon_link(ui, link.icon, theme::rgb_hex(link.color), palette.primary, link.label) {
                    clicked = Some(link.url);
                }
            }
        });
        if let Some(url) = clicked {
            self.presenter.open_external_link(url);
        }
        ui.add_space(theme::SPACING_XL);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(egui::RichText::new("Email:").size(theme::FONT_BODY));
            ui.label(egui::RichText::new(content::EMAIL).size(theme::FONT_BODY).strong());
        });
        ui.add_space(theme::SPACING_MD);

        let available = self.resume_available();
        let button = theme::button_contained(
            format!("{}  Download Resume", egui_phosphor::regular::DOWNLOAD_SIMPLE),
            palette.secondary,
        );
        if ui
            .add_enabled(available, button)
            .on_disabled_hover_text("No resume file configured")
            .clicked()
        {
            self.download_resume();
        }
    }

    // ========================================================================
    // FOOTER
    // ========================================================================

    fn render_footer(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        theme::footer_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(crate::utils::copyright_line(self.footer_year, OWNER_NAME))
                        .color(egui::Color32::WHITE),
                );
            });
        });
    }
}

/// One project card. Lifts while hovered. Returns true if "View Project" was clicked.
fn project_card(ui: &mut egui::Ui, index: usize, project: &ProjectRecord, palette: &Palette) -> bool {
    let id = egui::Id::new(("project_card", index));
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let lift = ui.ctx().animate_bool_with_time(id.with("lift"), hovered, 0.2);

    ui.add_space(theme::CARD_LIFT * (1.0 - lift));
    let mut clicked = false;
    let frame = theme::card_frame(palette, hovered).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(project.title)
                .size(theme::FONT_CARD_TITLE)
                .strong()
                .color(palette.primary),
        );
        ui.label(
            egui::RichText::new(project.date)
                .size(theme::FONT_SMALL)
                .color(palette.text_secondary),
        );
        ui.add_space(theme::SPACING_SM);
        for point in project.description {
            ui.label(egui::RichText::new(*point).size(theme::FONT_SMALL).color(palette.text));
        }
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(format!("Technologies: {}", project.technologies))
                .size(theme::FONT_CAPTION)
                .strong()
                .color(palette.text_secondary),
        );
        ui.add_space(theme::SPACING_MD);
        let button = theme::button_outlined(
            format!("{}  View Project", egui_phosphor::regular::ARROW_SQUARE_OUT),
            palette.primary,
        );
        clicked = ui.add_sized([ui.available_width(), 28.0], button).clicked();
    });
    ui.add_space(theme::CARD_LIFT * lift);

    let now_hovered = ui.rect_contains_pointer(frame.response.rect);
    if now_hovered != hovered {
        ui.ctx().data_mut(|d| d.insert_temp(id, now_hovered));
        ui.ctx().request_repaint();
    }
    clicked
}
