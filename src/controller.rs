//! Presentation controller
//!
//! Owns the theme and profile-visibility state. The egui shell reads it every
//! frame and drives it through `toggle_theme`, `mount`/`tick`/`unmount` and
//! `open_external_link`. Time is always passed in, so tests can run the cycle
//! against synthetic instants.

use crate::constants::PROFILE_CYCLE;
use crate::error::PortfolioError;
use crate::types::{ProfileVisibility, ProjectRecord, ThemeMode};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// ============================================================================
// LINK OPENER
// ============================================================================

/// Opens a URL in a new browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), PortfolioError>;
}

/// Hands the URL to the system browser.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), PortfolioError> {
        open::that(url).map_err(|source| PortfolioError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

// ============================================================================
// INTERVAL TIMER
// ============================================================================

/// Repeating timer polled from the UI loop. Dropping it cancels it.
#[derive(Debug)]
pub struct IntervalTimer {
    period: Duration,
    next_deadline: Instant,
}

impl IntervalTimer {
    pub fn start(now: Instant, period: Duration) -> Self {
        // Zero period would make fire_count spin forever
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_deadline: now + period,
        }
    }

    /// Number of periods that elapsed since the last poll. Each period fires once.
    pub fn fire_count(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_deadline {
            fired += 1;
            self.next_deadline += self.period;
        }
        fired
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }
}

// ============================================================================
// PRESENTER
// ============================================================================

pub struct Presenter<O: LinkOpener = SystemOpener> {
    theme: ThemeMode,
    profile: ProfileVisibility,
    timer: Option<IntervalTimer>,
    projects: &'static [ProjectRecord],
    opener: O,
}

impl<O: LinkOpener> Presenter<O> {
    pub fn new(projects: &'static [ProjectRecord], opener: O) -> Self {
        Self {
            theme: ThemeMode::default(),
            profile: ProfileVisibility::default(),
            timer: None,
            projects,
            opener,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn profile(&self) -> ProfileVisibility {
        self.profile
    }

    pub fn projects(&self) -> &'static [ProjectRecord] {
        self.projects
    }

    #[cfg(test)]
    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "Theme toggled");
    }

    /// Arm the visibility cycle. Re-mounting restarts the period from `now`.
    pub fn mount(&mut self, now: Instant) {
        if self.timer.is_some() {
            debug!("Profile cycle re-armed");
        }
        self.timer = Some(IntervalTimer::start(now, PROFILE_CYCLE));
    }

    /// Fire any elapsed periods. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        // An even number of flips since the last poll nets out to no change
        let changed = timer.fire_count(now) % 2 == 1;
        if changed {
            self.profile = self.profile.flipped();
        }
        changed
    }

    /// When the next flip is due, if mounted.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(IntervalTimer::next_deadline)
    }

    /// Cancel the visibility cycle.
    pub fn unmount(&mut self) {
        if self.timer.take().is_some() {
            info!("Profile cycle stopped");
        }
    }

    pub fn open_external_link(&self, url: &str) {
        debug!(url, "Opening external link");
        if let Err(e) = self.opener.open(url) {
            warn!(error = %e, "Failed to open link");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        calls: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), PortfolioError> {
            self.calls.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open(&self, url: &str) -> Result<(), PortfolioError> {
            Err(PortfolioError::Launch {
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
            })
        }
    }

    fn presenter() -> Presenter<RecordingOpener> {
        Presenter::new(PROJECTS, RecordingOpener::default())
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn initial_state() {
        let p = presenter();
        assert_eq!(p.theme(), ThemeMode::Light);
        assert_eq!(p.profile(), ProfileVisibility::Shown);
        assert!(!p.is_mounted());
    }

    #[test]
    fn toggle_theme_twice_restores() {
        let mut p = presenter();
        p.toggle_theme();
        assert_eq!(p.theme(), ThemeMode::Dark);
        p.toggle_theme();
        assert_eq!(p.theme(), ThemeMode::Light);
    }

    #[test]
    fn visibility_alternates_every_cycle() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);

        p.tick(t0);
        assert_eq!(p.profile(), ProfileVisibility::Shown);

        assert!(p.tick(t0 + secs(4)));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);

        assert!(p.tick(t0 + secs(8)));
        assert_eq!(p.profile(), ProfileVisibility::Shown);

        assert!(p.tick(t0 + secs(12)));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);
    }

    #[test]
    fn no_flip_before_deadline() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        assert!(!p.tick(t0 + Duration::from_millis(3999)));
        assert_eq!(p.profile(), ProfileVisibility::Shown);
        assert_eq!(p.next_deadline(), Some(t0 + secs(4)));
    }

    #[test]
    fn same_period_fires_once() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        assert!(p.tick(t0 + secs(5)));
        assert!(!p.tick(t0 + secs(6)));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);
    }

    #[test]
    fn missed_periods_catch_up() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        // Three periods: Shown -> Hidden -> Shown -> Hidden
        assert!(p.tick(t0 + secs(12)));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);
        // One more: even number since last poll leaves state unchanged
        assert!(!p.tick(t0 + secs(20)));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);
    }

    #[test]
    fn unmount_stops_transitions() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        p.tick(t0 + secs(4));
        assert_eq!(p.profile(), ProfileVisibility::Hidden);

        p.unmount();
        assert!(!p.is_mounted());
        assert_eq!(p.next_deadline(), None);
        for s in [8, 12, 100, 10_000] {
            assert!(!p.tick(t0 + secs(s)));
            assert_eq!(p.profile(), ProfileVisibility::Hidden);
        }
    }

    #[test]
    fn remount_restarts_period() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        p.mount(t0 + secs(3));
        assert!(!p.tick(t0 + secs(4)));
        assert!(p.tick(t0 + secs(7)));
    }

    #[test]
    fn timer_state_survives_theme_toggle() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.mount(t0);
        p.toggle_theme();
        p.tick(t0 + secs(4));
        assert_eq!(p.theme(), ThemeMode::Dark);
        assert_eq!(p.profile(), ProfileVisibility::Hidden);
    }

    #[test]
    fn open_external_link_opens_each_repo_once() {
        let p = presenter();
        for project in p.projects() {
            p.opener().calls.borrow_mut().clear();
            p.open_external_link(project.repo_link);
            assert_eq!(*p.opener().calls.borrow(), vec![project.repo_link.to_string()]);
            assert_eq!(p.theme(), ThemeMode::Light);
            assert_eq!(p.profile(), ProfileVisibility::Shown);
        }
    }

    #[test]
    fn open_failure_is_swallowed() {
        let p = Presenter::new(PROJECTS, FailingOpener);
        p.open_external_link(PROJECTS[1].repo_link);
        assert_eq!(p.theme(), ThemeMode::Light);
    }

    #[test]
    fn zero_period_does_not_spin() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::start(t0, Duration::ZERO);
        assert_eq!(timer.fire_count(t0 + Duration::from_millis(5)), 5);
    }
}
