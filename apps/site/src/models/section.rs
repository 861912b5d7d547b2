//! Section identity — the six sections of the page and their navigation items.
//!
//! `SectionId` is the only currency for "which section": the sidebar, the
//! renderers, and the scroll-spy controller all speak it. Untyped input (a
//! click payload, a fragment string) enters through `SectionId::parse`,
//! which yields `None` for anything unknown so callers can no-op.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Certifications,
}

impl SectionId {
    /// All six sections, in display (and scroll) order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Certifications,
    ];

    /// The DOM id used for the section's anchor element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
        }
    }

    /// Parses an untyped identifier. Unknown strings are `None`, never an error.
    pub fn parse(raw: &str) -> Option<SectionId> {
        SectionId::ALL.iter().copied().find(|s| s.as_str() == raw)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into the inline SVG icon registry (`render::icon_svg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    User,
    Briefcase,
    Code,
    Star,
    GraduationCap,
    Award,
    Github,
    Linkedin,
    Mail,
    Phone,
    MapPin,
    Calendar,
    Cpu,
}

/// One sidebar navigation entry. The static list is the display order.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub icon: IconKey,
}

/// The sidebar navigation, one item per section, in `SectionId::ALL` order.
pub fn nav_items() -> [NavItem; 6] {
    [
        NavItem {
            section: SectionId::About,
            label: "About",
            icon: IconKey::User,
        },
        NavItem {
            section: SectionId::Experience,
            label: "Experience",
            icon: IconKey::Briefcase,
        },
        NavItem {
            section: SectionId::Projects,
            label: "Projects",
            icon: IconKey::Code,
        },
        NavItem {
            section: SectionId::Skills,
            label: "Skills",
            icon: IconKey::Star,
        },
        NavItem {
            section: SectionId::Education,
            label: "Education",
            icon: IconKey::GraduationCap,
        },
        NavItem {
            section: SectionId::Certifications,
            label: "Certifications",
            icon: IconKey::Award,
        },
    ]
}

/// Opaque scroll/observe target for one rendered section.
///
/// Created when the section is rendered, referenced (not owned) by the
/// navigation controller. The DOM id is only ever consumed through this
/// handle — raw element references never leave the controller's anchor map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorHandle {
    pub section: SectionId,
    pub dom_id: String,
}

impl AnchorHandle {
    pub fn for_section(section: SectionId) -> Self {
        AnchorHandle {
            section,
            dom_id: section.as_str().to_string(),
        }
    }
}
