//! Entry types for the five data-driven sections.
//!
//! Pure literal data: constructed once at startup, never mutated, never
//! filtered or reordered by the renderers. Field order inside each struct's
//! `Vec`s is the render order.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub responsibilities: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub name: &'static str,
    /// Employer or client context, when the project had one.
    pub context: Option<&'static str>,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
}
