use serde::Serialize;

use crate::models::section::IconKey;

/// The sidebar identity block plus the About section's contact lines.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub photo_url: &'static str,
    pub about: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub social_links: Vec<SocialLink>,
}

/// One outbound sidebar link. Rendered with `target="_blank"` and
/// `rel="noopener noreferrer"` so no opener or referrer leaks back.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKey,
}
