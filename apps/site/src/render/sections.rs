//! The six section renderers — `ordered literal data → ordered cards`.
//!
//! Shared contract: each emits one `<section>` anchor tagged with the
//! section id (the scroll/observe target), a header, and one card per entry
//! in input order. Nothing is filtered, sorted, or deduplicated.

use crate::content::PortfolioContent;
use crate::models::entries::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory,
};
use crate::models::profile::Profile;
use crate::models::section::{IconKey, SectionId};
use crate::render::{html_escape, icon_svg};

pub fn render_section(section: SectionId, content: &PortfolioContent) -> String {
    match section {
        SectionId::About => render_about(&content.profile),
        SectionId::Experience => render_experience(&content.experience),
        SectionId::Projects => render_projects(&content.projects),
        SectionId::Skills => render_skills(&content.skills),
        SectionId::Education => render_education(&content.education),
        SectionId::Certifications => render_certifications(&content.certifications),
    }
}

fn section_open(section: SectionId, title: &str, icon: IconKey) -> String {
    format!(
        "    <section id=\"{}\" class=\"page-section\">\n      <div class=\"section-header\">{}<h2>{}</h2></div>\n",
        section.as_str(),
        icon_svg(icon),
        html_escape(title)
    )
}

fn tag_list(tags: &[&str]) -> String {
    let mut out = String::from("        <div class=\"tags\">\n");
    for tag in tags {
        out.push_str(&format!(
            "          <span class=\"tag\">{}</span>\n",
            html_escape(tag)
        ));
    }
    out.push_str("        </div>\n");
    out
}

fn bullet_list(items: &[&str]) -> String {
    let mut out = String::from("        <ul>\n");
    for item in items {
        out.push_str(&format!("          <li>{}</li>\n", html_escape(item)));
    }
    out.push_str("        </ul>\n");
    out
}

pub fn render_about(profile: &Profile) -> String {
    let mut out = section_open(SectionId::About, "About Me", IconKey::User);
    out.push_str("      <div class=\"card\">\n");
    out.push_str(&format!(
        "        <p>{}</p>\n",
        html_escape(profile.about)
    ));
    out.push_str("        <div class=\"contact-row\">\n");
    for (icon, value) in [
        (IconKey::Phone, profile.phone),
        (IconKey::MapPin, profile.location),
        (IconKey::Mail, profile.email),
    ] {
        out.push_str(&format!(
            "          <div class=\"contact\">{}<span>{}</span></div>\n",
            icon_svg(icon),
            html_escape(value)
        ));
    }
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

pub fn render_experience(entries: &[ExperienceEntry]) -> String {
    let mut out = section_open(
        SectionId::Experience,
        "Professional Experience",
        IconKey::Briefcase,
    );
    for entry in entries {
        out.push_str("      <div class=\"card\">\n");
        out.push_str(&format!(
            "        <h3>{}</h3>\n        <p class=\"subtitle\">{}</p>\n",
            html_escape(entry.title),
            html_escape(entry.company)
        ));
        out.push_str(&format!(
            "        <div class=\"duration\">{}<span>{}</span></div>\n",
            icon_svg(IconKey::Calendar),
            html_escape(entry.duration)
        ));
        out.push_str(&bullet_list(&entry.responsibilities));
        out.push_str("      </div>\n");
    }
    out.push_str("    </section>\n");
    out
}

pub fn render_projects(entries: &[ProjectEntry]) -> String {
    let mut out = section_open(SectionId::Projects, "Key Projects", IconKey::Code);
    out.push_str("      <div class=\"card-grid\">\n");
    for entry in entries {
        out.push_str("      <div class=\"card\">\n");
        out.push_str(&format!("        <h3>{}</h3>\n", html_escape(entry.name)));
        if let Some(context) = entry.context {
            out.push_str(&format!(
                "        <p class=\"subtitle\">{}</p>\n",
                html_escape(context)
            ));
        }
        out.push_str(&format!(
            "        <p>{}</p>\n",
            html_escape(entry.description)
        ));
        out.push_str(&tag_list(&entry.technologies));
        out.push_str("      </div>\n");
    }
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out
}

pub fn render_skills(categories: &[SkillCategory]) -> String {
    let mut out = section_open(SectionId::Skills, "Technical Skills", IconKey::Cpu);
    for category in categories {
        out.push_str("      <div class=\"card\">\n");
        out.push_str(&format!(
            "        <h3>{}</h3>\n",
            html_escape(category.category)
        ));
        out.push_str(&tag_list(&category.skills));
        out.push_str("      </div>\n");
    }
    out.push_str("    </section>\n");
    out
}

pub fn render_education(entries: &[EducationEntry]) -> String {
    let mut out = section_open(SectionId::Education, "Education", IconKey::GraduationCap);
    for entry in entries {
        out.push_str("      <div class=\"card\">\n");
        out.push_str(&format!(
            "        <h3>{}</h3>\n        <p class=\"subtitle\">{}</p>\n        <p class=\"duration\">{}</p>\n",
            html_escape(entry.institution),
            html_escape(entry.degree),
            html_escape(entry.duration)
        ));
        out.push_str(&bullet_list(&entry.highlights));
        out.push_str("      </div>\n");
    }
    out.push_str("    </section>\n");
    out
}

pub fn render_certifications(entries: &[CertificationEntry]) -> String {
    let mut out = section_open(SectionId::Certifications, "Certifications", IconKey::Award);
    for entry in entries {
        out.push_str("      <div class=\"card\">\n");
        out.push_str(&format!(
            "        <h3>{}</h3>\n        <p class=\"subtitle\">{}</p>\n        <p class=\"duration\">{}</p>\n",
            html_escape(entry.name),
            html_escape(entry.issuer),
            html_escape(entry.date)
        ));
        out.push_str("      </div>\n");
    }
    out.push_str("    </section>\n");
    out
}
