//! Toast notification (bottom-right, 3s visible then fade, pause on hover)

use super::App;
use eframe::egui;
use std::time::Instant;

const VISIBLE_SECS: f32 = 3.0;
const FADE_SECS: f32 = 0.5;

/// Toast opacity after `elapsed` seconds; zero once fully faded.
pub(crate) fn toast_alpha(elapsed: f32) -> f32 {
    if elapsed <= VISIBLE_SECS {
        1.0
    } else {
        ((VISIBLE_SECS + FADE_SECS - elapsed) / FADE_SECS).max(0.0)
    }
}

impl App {
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };
        let palette = self.palette();
        let margin = 16.0;
        let screen = ctx.screen_rect();
        let toast_pos = egui::pos2(screen.right() - margin, screen.bottom() - margin);
        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        let alpha = toast_alpha(elapsed);

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(palette.paper.gamma_multiply(0.95 * alpha))
                    .stroke(egui::Stroke::new(1.0, palette.primary.gamma_multiply(alpha)))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).color(palette.text.gamma_multiply(alpha)));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(Instant::now());
        }

        if alpha <= 0.0 {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_fades_after_visible_window() {
        assert_eq!(toast_alpha(0.0), 1.0);
        assert_eq!(toast_alpha(VISIBLE_SECS), 1.0);
        assert!((toast_alpha(VISIBLE_SECS + FADE_SECS / 2.0) - 0.5).abs() < 1e-4);
        assert_eq!(toast_alpha(VISIBLE_SECS + FADE_SECS), 0.0);
        assert_eq!(toast_alpha(60.0), 0.0);
    }
}
