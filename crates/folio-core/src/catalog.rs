//! Static portfolio content.
//!
//! Read-only configuration data behind every section: loaded once, never
//! mutated. Colors and layout live in the front end; this module is pure
//! content.

/// Skill category groupings. Every skill belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
}

impl SkillCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::Database];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
        }
    }
}

/// A single skill with a self-assessed proficiency level (0-100).
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: SkillCategory,
}

pub const SKILLS: [Skill; 9] = [
    Skill { name: "HTML", level: 95, category: SkillCategory::Frontend },
    Skill { name: "CSS", level: 92, category: SkillCategory::Frontend },
    Skill { name: "JavaScript", level: 85, category: SkillCategory::Frontend },
    Skill { name: "React", level: 90, category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", level: 80, category: SkillCategory::Frontend },
    Skill { name: "Node.js", level: 75, category: SkillCategory::Backend },
    Skill { name: "Express", level: 70, category: SkillCategory::Backend },
    Skill { name: "MongoDB", level: 70, category: SkillCategory::Database },
    Skill { name: "Firebase", level: 78, category: SkillCategory::Database },
];

/// Skills in one category, preserving declared order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

/// A portfolio project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "ApplyWise Job Portal",
        desc: "A full-featured job portal enabling job seekers to browse listings, submit \
               applications, and track statuses, while employers can post jobs and manage \
               candidates.",
        tags: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Quick-Bill SaaS App",
        desc: "A comprehensive billing solution for small businesses, featuring invoicing, \
               payment tracking, and client management.",
        tags: &["Firebase", "Tailwind", "React"],
    },
    Project {
        title: "Ecommerce Website",
        desc: "A modern ecommerce platform with product listings, shopping cart, and secure \
               checkout functionality.",
        tags: &["React", "MongoDB", "Firebase"],
    },
];

/// A certification entry.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
}

pub const CERTIFICATIONS: [Certification; 3] = [
    Certification {
        title: "Software Development Certification",
        issuer: "Microsoft",
        date: "Dec 2025",
    },
    Certification {
        title: "Responsive Web Design Certification",
        issuer: "FreecodeCamp",
        date: "Oct 2025",
    },
    Certification {
        title: "Front End Development Certification",
        issuer: "SimpliLearn",
        date: "Oct 2025",
    },
];

/// A professional experience entry on the timeline.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 1] = [ExperienceEntry {
    role: "Frontend Developer Intern",
    company: "Appverse Technologies",
    period: "Jan 2026 — Mar 2026",
    summary: "Contributed to frontend web application development, working with React and CSS \
              to build scalable features. Collaborated with senior developers to implement \
              APIs, integrated Firebase for authentication and real-time database operations, \
              and participated in agile sprint cycles. Gained hands-on experience with code \
              reviews, version control, and production deployments.",
    tags: &["React", "Node.js", "Firebase", "MongoDB", "Git"],
}];

/// An outbound link in the footer.
#[derive(Debug, Clone, Copy)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "GitHub", href: "https://github.com/mdqasim786" },
    FooterLink { label: "LinkedIn", href: "https://linkedin.com/in/md-qasim" },
    FooterLink { label: "Email", href: "mailto:mdqasim5911@gmail.com" },
];

/// The hero and contact copy.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub availability: &'static str,
    pub email: &'static str,
    pub contact_blurb: &'static str,
    pub resume_blurb: &'static str,
    pub copyright: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Muhammad Qasim",
    role: "MERN-Stack Web Developer & UI Craftsman",
    bio: "I craft immersive digital experiences with clean code, intuitive design, and a \
          passion for turning ideas into reality. From concept to deployment, I build \
          solutions that users love.",
    availability: "Available for opportunities",
    email: "mdqasim5911@gmail.com",
    contact_blurb: "I'm currently open to new opportunities and collaborations. Whether you \
                    have a project in mind or just want to say hi, my inbox is always open.",
    resume_blurb: "Have a look at my full resume to explore my complete experience, \
                   education, and qualifications.",
    copyright: "© 2026 Muhammad Qasim. All rights reserved.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_skills_in_declared_order() {
        let names: Vec<&str> = skills_in(SkillCategory::Frontend)
            .map(|skill| skill.name)
            .collect();
        assert_eq!(names, ["HTML", "CSS", "JavaScript", "React", "Tailwind CSS"]);
    }

    #[test]
    fn test_no_skill_in_two_categories() {
        let mut seen = Vec::new();
        for category in SkillCategory::ALL {
            for skill in skills_in(category) {
                assert!(!seen.contains(&skill.name), "{} appears twice", skill.name);
                seen.push(skill.name);
            }
        }
        assert_eq!(seen.len(), SKILLS.len());
    }

    #[test]
    fn test_levels_are_percentages() {
        for skill in &SKILLS {
            assert!(skill.level <= 100);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(CERTIFICATIONS.len(), 3);
        assert_eq!(FOOTER_LINKS.len(), 3);
        assert_eq!(EXPERIENCE.len(), 1);
    }

    #[test]
    fn test_projects_carry_tags() {
        for project in &PROJECTS {
            assert!(!project.tags.is_empty());
        }
    }
}
