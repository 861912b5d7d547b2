//! Fixed sidebar: photo, name, social links, section navigation.
//!
//! The active highlight is a pure function of the active section — exactly
//! one nav item carries the `active` class. Server-side this renders the
//! initial state; afterwards the client script owns the toggle.

use crate::models::profile::Profile;
use crate::models::section::{nav_items, SectionId};
use crate::render::{html_escape, icon_svg};

pub fn render_sidebar(profile: &Profile, active: SectionId) -> String {
    let mut out = String::new();
    out.push_str("  <aside class=\"sidebar\">\n");
    out.push_str(&format!(
        "    <div class=\"photo\" style=\"background-image: url('{}')\"></div>\n",
        html_escape(profile.photo_url)
    ));
    out.push_str(&format!(
        "    <h1 class=\"name\">{}</h1>\n",
        html_escape(profile.name)
    ));
    out.push_str(&format!(
        "    <p class=\"headline\">{}</p>\n",
        html_escape(profile.headline)
    ));

    out.push_str("    <div class=\"social\">\n");
    for link in &profile.social_links {
        // New browsing context, no opener/referrer leakage back to the page.
        out.push_str(&format!(
            "      <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>\n",
            html_escape(link.href),
            html_escape(link.label),
            icon_svg(link.icon)
        ));
    }
    out.push_str("    </div>\n");

    out.push_str("    <nav class=\"nav\">\n");
    for item in nav_items() {
        let class = if item.section == active {
            "nav-item active"
        } else {
            "nav-item"
        };
        out.push_str(&format!(
            "      <button class=\"{class}\" data-section=\"{}\">{}<span>{}</span></button>\n",
            item.section.as_str(),
            icon_svg(item.icon),
            html_escape(item.label)
        ));
    }
    out.push_str("    </nav>\n");
    out.push_str("  </aside>\n");
    out
}
