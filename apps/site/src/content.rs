//! The portfolio dataset — literal tables, built once at startup.
//!
//! Nothing here is fetched, validated, or mutated at runtime; authoring
//! errors are a build-time concern. The renderers consume these collections
//! exactly as given, in order.

use std::sync::Arc;

use serde::Serialize;

use crate::models::entries::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory,
};
use crate::models::profile::{Profile, SocialLink};
use crate::models::section::IconKey;

/// Everything the page renders, behind one `Arc` in `AppState`.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
}

pub fn portfolio() -> Arc<PortfolioContent> {
    Arc::new(PortfolioContent {
        profile: profile(),
        experience: experience(),
        projects: projects(),
        skills: skills(),
        education: education(),
        certifications: certifications(),
    })
}

fn profile() -> Profile {
    Profile {
        name: "Amrendra Yadav",
        headline: "Software Engineer",
        photo_url: "https://media.licdn.com/dms/image/D5603AQHk0gNyiYxkag/profile-displayphoto-shrink_800_800/0/1692873278163?e=1706140800&v=beta&t=5r_-RR_BVnmyMB0jNoY8VCEhKVx-VkQfJh4IjRU1vSE",
        about: "Highly motivated and detail-oriented software engineer with 2+ years of \
                experience in developing scalable web applications. Proficient in both \
                frontend and backend development, with expertise in Ruby on Rails, Golang, \
                React, and JavaScript technologies. Strong problem-solver with a passion \
                for creating efficient, user-friendly solutions.",
        phone: "+977 9869063995",
        location: "Koteshwor-32, Kathmandu",
        email: "yadavamrendra789@gmail.com",
        social_links: vec![
            SocialLink {
                label: "GitHub",
                href: "https://github.com/yadavamrendra123",
                icon: IconKey::Github,
            },
            SocialLink {
                label: "LinkedIn",
                href: "https://www.linkedin.com/in/amrendra-yadav-332120198/",
                icon: IconKey::Linkedin,
            },
            SocialLink {
                label: "Email",
                href: "mailto:yadavamrendra789@gmail.com",
                icon: IconKey::Mail,
            },
        ],
    }
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "Cloco Nepal Inc Pvt Ltd",
            title: "Software Engineer",
            duration: "July 2023 - Present",
            responsibilities: vec![
                "Developed scalable web applications using Ruby on Rails and Golang",
                "Implemented background jobs and performance optimizations",
                "Designed and optimized database schemas for efficient data storage",
                "Deployed backend services on AWS (EC2, S3, Lambda, RDS, ECS)",
                "Maintained microservices architectures",
            ],
        },
        ExperienceEntry {
            company: "Logicurv Technologies",
            title: "Frontend Developer (Part-Time)",
            duration: "August 2023 - June 2024",
            responsibilities: vec![
                "Built responsive components using React and TypeScript",
                "Converted UI/UX designs into interactive web pages",
                "Optimized applications with lazy loading and code splitting",
                "Developed mobile app interfaces using React Native",
                "Integrated RESTful APIs",
            ],
        },
        ExperienceEntry {
            company: "Aeon Soft Solution Technology Pvt Ltd",
            title: "Junior Frontend Developer",
            duration: "Sept 2022 - June 2023",
            responsibilities: vec![
                "Implemented server-side rendering with Next.js",
                "Converted Figma designs to code",
                "Implemented responsive design principles",
                "Managed application state with Zustand",
                "Integrated GraphQL APIs and authentication mechanisms",
            ],
        },
    ]
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            name: "Book@TableRequest, SmartRequest, AppRequest",
            context: Some("Bespo Inc at Cloco Nepal Inc"),
            description: "Developed web and mobile applications for user request \
                          functionalities, including table bookings and smart automation.",
            technologies: vec!["Ruby on Rails", "Vue.js", "AWS", "Docker", "SQL"],
        },
        ProjectEntry {
            name: "Welby Project",
            context: None,
            description: "Comprehensive hospital management system with patient management, \
                          appointment scheduling, and medical record keeping.",
            technologies: vec!["Golang", "SQL", "Healthcare Standards"],
        },
        ProjectEntry {
            name: "Basiyo Project",
            context: None,
            description: "Hotel booking and hosting platform with user registration, booking \
                          management, and payment gateway integration.",
            technologies: vec!["React", "Django", "AWS", "Payment Systems"],
        },
        ProjectEntry {
            name: "Smart Metering with Cloud Computation",
            context: None,
            description: "Cloud-based smart metering system with real-time electricity usage \
                          monitoring and visualization.",
            technologies: vec!["Python", "AWS", "IoT", "Cloud Services"],
        },
        ProjectEntry {
            name: "Car Showroom Management System",
            context: None,
            description: "Database system for managing inventory, customer information, sales \
                          tracking, and service scheduling.",
            technologies: vec!["MySQL", "Database Design", "User Interface"],
        },
    ]
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            category: "Programming Languages",
            skills: vec!["Ruby", "Golang", "JavaScript", "Python", "C", "C++"],
        },
        SkillCategory {
            category: "Backend Technologies",
            skills: vec!["Ruby on Rails", "Golang (Gin, Fiber)", "Django", "Next.js"],
        },
        SkillCategory {
            category: "Frontend Technologies",
            skills: vec!["React.js", "Vue.js", "Tailwind CSS", "Material UI", "Shadcn UI"],
        },
        SkillCategory {
            category: "Databases",
            skills: vec!["PostgreSQL", "MySQL", "MongoDB"],
        },
        SkillCategory {
            category: "DevOps & Cloud",
            skills: vec!["Docker", "Git", "AWS", "Linux", "EC2", "Lambda", "S3"],
        },
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        institution: "Pokhara University",
        degree: "Bachelor of Science in Computer Science and Information Technology (BSc CSIT)",
        duration: "2018 - 2022",
        highlights: vec![
            "Specialized in software engineering and system design.",
            "GPA: 3.75/4.0.",
            "Final year project: Smart Metering with Cloud Computation.",
        ],
    }]
}

fn certifications() -> Vec<CertificationEntry> {
    vec![
        CertificationEntry {
            name: "AWS Certified Solutions Architect – Associate",
            issuer: "Amazon Web Services",
            date: "July 2023",
        },
        CertificationEntry {
            name: "Certified Kubernetes Administrator (CKA)",
            issuer: "Linux Foundation",
            date: "June 2023",
        },
        CertificationEntry {
            name: "JavaScript Algorithms and Data Structures",
            issuer: "freeCodeCamp",
            date: "March 2022",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_sizes_match_dataset() {
        let content = portfolio();
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.skills.len(), 5);
        assert_eq!(content.education.len(), 1);
        assert_eq!(content.certifications.len(), 3);
        assert_eq!(content.profile.social_links.len(), 3);
    }

    #[test]
    fn test_experience_order_is_preserved() {
        let companies: Vec<&str> = experience().iter().map(|e| e.company).collect();
        assert_eq!(
            companies,
            vec![
                "Cloco Nepal Inc Pvt Ltd",
                "Logicurv Technologies",
                "Aeon Soft Solution Technology Pvt Ltd",
            ]
        );
    }

    #[test]
    fn test_databases_category_has_only_its_tags() {
        let categories = skills();
        let databases = categories
            .iter()
            .find(|c| c.category == "Databases")
            .expect("Databases category present");
        assert_eq!(databases.skills, vec!["PostgreSQL", "MySQL", "MongoDB"]);
    }
}
