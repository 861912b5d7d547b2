// Scroll-spy navigation: the active sidebar item follows the section
// currently visible in the viewport; clicking an item smooth-scrolls to it.
// The Rust controller is the canonical model; the browser runs the script
// generated below from the same constants, so the two cannot drift.

pub mod controller;
pub mod observer;
pub mod simulator;

pub use controller::NavController;
pub use observer::{ObserverConfig, ScrollBehavior, VisibilityChange, VISIBILITY_THRESHOLD};

use crate::models::section::SectionId;

/// Generates the browser-side projection of the navigation contract.
///
/// Interpolates the section ids and the visibility threshold from the Rust
/// definitions. The handler applies intersecting entries in report order
/// (last one wins) and every observed target is unobserved on unload, the
/// same pairing guarantee `NavController::teardown` makes.
pub fn client_script() -> String {
    let ids = SectionId::ALL
        .iter()
        .map(|s| format!("\"{}\"", s.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str("\"use strict\";\n");
    out.push_str(&format!("const SECTION_IDS = [{ids}];\n"));
    out.push_str(&format!(
        "const VISIBILITY_THRESHOLD = {VISIBILITY_THRESHOLD};\n"
    ));
    out.push_str("\n");
    out.push_str("function setActive(sectionId) {\n");
    out.push_str("  document.querySelectorAll(\"[data-section]\").forEach((item) => {\n");
    out.push_str("    item.classList.toggle(\"active\", item.dataset.section === sectionId);\n");
    out.push_str("  });\n");
    out.push_str("}\n");
    out.push_str("\n");
    out.push_str("const observer = new IntersectionObserver(\n");
    out.push_str("  (entries) => {\n");
    out.push_str("    entries.forEach((entry) => {\n");
    out.push_str("      if (entry.isIntersecting) {\n");
    out.push_str("        setActive(entry.target.id);\n");
    out.push_str("      }\n");
    out.push_str("    });\n");
    out.push_str("  },\n");
    out.push_str("  { root: null, rootMargin: \"0px\", threshold: VISIBILITY_THRESHOLD }\n");
    out.push_str(");\n");
    out.push_str("\n");
    out.push_str("const anchors = SECTION_IDS\n");
    out.push_str("  .map((id) => document.getElementById(id))\n");
    out.push_str("  .filter((el) => el !== null);\n");
    out.push_str("anchors.forEach((el) => observer.observe(el));\n");
    out.push_str("\n");
    out.push_str("document.querySelectorAll(\"[data-section]\").forEach((item) => {\n");
    out.push_str("  item.addEventListener(\"click\", () => {\n");
    out.push_str("    const target = document.getElementById(item.dataset.section);\n");
    out.push_str("    if (target) {\n");
    out.push_str("      target.scrollIntoView({ behavior: \"smooth\" });\n");
    out.push_str("    }\n");
    out.push_str("  });\n");
    out.push_str("});\n");
    out.push_str("\n");
    out.push_str("window.addEventListener(\"pagehide\", () => {\n");
    out.push_str("  anchors.forEach((el) => observer.unobserve(el));\n");
    out.push_str("});\n");
    out
}
