//! HTML rendering — stateless transforms from the literal dataset to markup.
//!
//! Every interpolated field goes through `html_escape`. Renderers never
//! filter, sort, or validate: one card per entry, in input order, sub-lists
//! in their own input order.

pub mod sections;
pub mod sidebar;

use crate::content::PortfolioContent;
use crate::models::section::{IconKey, SectionId};

pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inline SVG registry, keyed by `IconKey`.
pub fn icon_svg(key: IconKey) -> &'static str {
    match key {
        IconKey::User => {
            r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="8" r="4"/><path d="M4 21v-1a8 8 0 0 1 16 0v1"/></svg>"#
        }
        IconKey::Briefcase => {
            r#"<svg class="icon" viewBox="0 0 24 24"><rect x="2" y="7" width="20" height="14" rx="2"/><path d="M8 7V5a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/></svg>"#
        }
        IconKey::Code => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="m16 18 6-6-6-6M8 6l-6 6 6 6"/></svg>"#
        }
        IconKey::Star => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="m12 2 3 7 7 .5-5.5 4.5 2 7.5-6.5-4.5L5.5 21l2-7.5L2 9.5 9 9z"/></svg>"#
        }
        IconKey::GraduationCap => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="m22 10-10-5L2 10l10 5 10-5zM6 12v5c0 1.7 2.7 3 6 3s6-1.3 6-3v-5"/></svg>"#
        }
        IconKey::Award => {
            r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="9" r="6"/><path d="m9 14-2 8 5-3 5 3-2-8"/></svg>"#
        }
        IconKey::Github => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="M12 2a10 10 0 0 0-3.2 19.5c.5.1.7-.2.7-.5v-1.7c-2.8.6-3.4-1.3-3.4-1.3-.4-1.2-1.1-1.5-1.1-1.5-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.3 1.1 2.9.8.1-.6.3-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.3-.4-1.3.1-2.7 0 0 .8-.3 2.7 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.7-1 2.7-1 .5 1.4.2 2.4.1 2.7.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .3.3.6.9.6 1.8V21c0 .3.2.6.7.5A10 10 0 0 0 12 2z"/></svg>"#
        }
        IconKey::Linkedin => {
            r#"<svg class="icon" viewBox="0 0 24 24"><rect x="2" y="2" width="20" height="20" rx="2"/><path d="M8 11v5M8 8v0M12 16v-5M16 16v-3a2 2 0 0 0-4 0"/></svg>"#
        }
        IconKey::Mail => {
            r#"<svg class="icon" viewBox="0 0 24 24"><rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/></svg>"#
        }
        IconKey::Phone => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-17.7-17.7A2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7l.7 3.4a2 2 0 0 1-.5 1.8l-1.3 1.3a16 16 0 0 0 6.8 6.8l1.3-1.3a2 2 0 0 1 1.8-.5l3.4.7a2 2 0 0 1 1.7 2z"/></svg>"#
        }
        IconKey::MapPin => {
            r#"<svg class="icon" viewBox="0 0 24 24"><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/></svg>"#
        }
        IconKey::Calendar => {
            r#"<svg class="icon" viewBox="0 0 24 24"><rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/></svg>"#
        }
        IconKey::Cpu => {
            r#"<svg class="icon" viewBox="0 0 24 24"><rect x="4" y="4" width="16" height="16" rx="2"/><rect x="9" y="9" width="6" height="6"/><path d="M9 1v3M15 1v3M9 20v3M15 20v3M1 9h3M1 15h3M20 9h3M20 15h3"/></svg>"#
        }
    }
}

/// Assembles the full single-page document: fixed sidebar plus the six
/// sections in `SectionId::ALL` order, linking the generated assets.
pub fn render_page(content: &PortfolioContent, active: SectionId) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"utf-8\" />\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    out.push_str(&format!(
        "  <title>{} — {}</title>\n",
        html_escape(content.profile.name),
        html_escape(content.profile.headline)
    ));
    out.push_str("  <link rel=\"stylesheet\" href=\"/assets/site.css\" />\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str(&sidebar::render_sidebar(&content.profile, active));
    out.push_str("  <main class=\"content\">\n");
    for section in SectionId::ALL {
        out.push_str(&sections::render_section(section, content));
    }
    out.push_str("  </main>\n");
    out.push_str("  <script src=\"/assets/scrollspy.js\" defer></script>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}
