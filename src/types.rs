//! Core types shared between the controller, content and UI

/// Display color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Which of the two profile header states is currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileVisibility {
    #[default]
    Shown,
    Hidden,
}

impl ProfileVisibility {
    pub fn flipped(self) -> Self {
        match self {
            ProfileVisibility::Shown => ProfileVisibility::Hidden,
            ProfileVisibility::Hidden => ProfileVisibility::Shown,
        }
    }

    pub fn is_shown(self) -> bool {
        self == ProfileVisibility::Shown
    }
}

/// One portfolio project entry. Defined once in `content`, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static str,
    pub repo_link: &'static str,
}

/// Social profile shown in the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    /// Brand color as 0xRRGGBB
    pub color: u32,
}

/// Page sections reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact Me",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_and_shown() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ProfileVisibility::default(), ProfileVisibility::Shown);
    }

    #[test]
    fn flips_are_involutions() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
        for vis in [ProfileVisibility::Shown, ProfileVisibility::Hidden] {
            assert_ne!(vis.flipped(), vis);
            assert_eq!(vis.flipped().flipped(), vis);
        }
    }

    #[test]
    fn section_anchors() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["about", "projects", "services", "contact"]);
        assert_eq!(Section::Contact.nav_label(), "Contact");
        assert_eq!(Section::Contact.heading(), "Contact Me");
    }

    #[test]
    fn about_link_targets_about_heading() {
        // The hero leaves the layout while hidden, so About scrolls to its own heading
        assert_eq!(Section::ALL[0], Section::About);
        assert_eq!(Section::About.anchor(), "about");
        assert_eq!(Section::About.heading(), "About Me");
    }
}
