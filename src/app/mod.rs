//! App module - contains the main application state and logic

mod assets;
mod nav;
mod sections;
mod toast;

use crate::content::PROJECTS;
use crate::controller::{LinkOpener, Presenter, SystemOpener};
use crate::settings::Settings;
use crate::theme;
use crate::types::{Section, ThemeMode};
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) presenter: Presenter<SystemOpener>,
    /// Theme last pushed into the egui context
    pub(crate) applied_theme: Option<ThemeMode>,
    // Assets
    pub(crate) avatar_texture: Option<egui::TextureHandle>,
    pub(crate) portrait_path: Option<PathBuf>,
    pub(crate) resume_path: Option<PathBuf>,
    // Navigation
    pub(crate) scroll_target: Option<Section>,
    pub(crate) footer_year: i32,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<Instant>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// PROFILE CYCLE WIRING
// ============================================================================

/// Presenter over the fixed project list with the visibility cycle armed at `now`
pub(crate) fn mounted_presenter<O: LinkOpener>(opener: O, now: Instant) -> Presenter<O> {
    let mut presenter = Presenter::new(PROJECTS, opener);
    presenter.mount(now);
    presenter
}

/// Fire elapsed periods and return how long until the next flip is due.
/// `None` once the cycle is unmounted, so no further repaints get scheduled.
pub(crate) fn advance_profile_cycle<O: LinkOpener>(
    presenter: &mut Presenter<O>,
    now: Instant,
) -> Option<Duration> {
    if presenter.tick(now) {
        tracing::trace!(profile = ?presenter.profile(), "Profile cycle flipped");
    }
    presenter
        .next_deadline()
        .map(|deadline| deadline.saturating_duration_since(now))
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let presenter = mounted_presenter(SystemOpener, Instant::now());
        theme::apply_visuals(&cc.egui_ctx, presenter.theme());

        Self {
            applied_theme: Some(presenter.theme()),
            presenter,
            avatar_texture: None,
            portrait_path: settings.portrait_path(),
            resume_path: settings.resume_path(),
            scroll_target: None,
            footer_year: crate::utils::current_year(),
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            portrait_path: self
                .portrait_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            resume_path: self
                .resume_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        };
        settings.save(&self.data_dir);
    }

    pub(crate) fn palette(&self) -> theme::Palette {
        theme::palette(self.presenter.theme())
    }

    /// Push the palette into egui when the theme changed since last frame
    pub(crate) fn sync_theme(&mut self, ctx: &egui::Context) {
        let mode = self.presenter.theme();
        if self.applied_theme != Some(mode) {
            theme::apply_visuals(ctx, mode);
            self.applied_theme = Some(mode);
        }
    }

    /// Advance the profile cycle and schedule a repaint for the next flip
    pub(crate) fn drive_profile_cycle(&mut self, ctx: &egui::Context) {
        if let Some(delay) = advance_profile_cycle(&mut self.presenter, Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(Instant::now());
    }
}
