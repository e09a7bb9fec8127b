use crate::assets::Asset;

/// Link target used for profiles that have not been set up yet.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub linkedin: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
}

/// Whether a link points somewhere real rather than at the placeholder.
pub fn is_configured(link: &str) -> bool {
    !link.is_empty() && link != PLACEHOLDER_LINK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: Asset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub links: Links,
    pub summary: &'static str,
    pub portrait: Asset,
    pub roles: &'static [&'static str],
    pub skills: &'static [SkillGroup],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub achievements: &'static [&'static str],
}

impl Profile {
    /// Every image the page references: the portrait first, then one per project.
    pub fn assets(&self) -> impl Iterator<Item = Asset> + '_ {
        std::iter::once(self.portrait).chain(self.projects.iter().map(|p| p.image))
    }
}

pub static PROFILE: Profile = Profile {
    name: "ROBERT JOHNN C. LLEMIT",
    brand: "Robert.dev",
    title: "UI Designer & Frontend Developer",
    location: "Tagum City, Davao del Norte, Philippines",
    email: "robert.llemit@gmail.com",
    phone: "+63 963 509 5073",
    links: Links {
        linkedin: PLACEHOLDER_LINK,
        github: PLACEHOLDER_LINK,
        resume: PLACEHOLDER_LINK,
    },
    summary: "Creative UI Designer and Frontend Developer with hands-on experience in React.js, modern JavaScript, and responsive design. Skilled in crafting intuitive, user-friendly interfaces that balance aesthetics with functionality.",
    portrait: Asset::new("me.svg"),
    roles: &["UI Designer", "Frontend Developer", "React Enthusiast"],
    skills: &[
        SkillGroup {
            category: "Frontend / UI",
            skills: &["React.js", "JavaScript", "HTML5", "CSS3", "TailwindCSS", "Figma"],
        },
        SkillGroup {
            category: "Backend / Integration",
            skills: &["Node.js", "REST APIs", "Database Connectivity"],
        },
        SkillGroup {
            category: "Design Tools",
            skills: &["Photoshop", "Canva"],
        },
        SkillGroup {
            category: "Other",
            skills: &["Git / GitHub", "Project management"],
        },
    ],
    projects: &[
        Project {
            title: "Personal Portfolio Website",
            period: "2024–2025",
            description: "A responsive portfolio built with React and TailwindCSS.",
            tags: &["React", "TailwindCSS", "Framer Motion"],
            image: Asset::new("me.svg"),
        },
        Project {
            title: "UI/UX Practice – Codefest Entries",
            period: "2020, 2023",
            description: "Competition prototypes showcasing UI patterns and accessibility, A mobile platform integration",
            tags: &["UI/UX", "Prototyping", "Performance"],
            image: Asset::new("codefest.svg"),
        },
        Project {
            title: "Interactive Learning",
            period: "2023",
            description: "A web-based interactive learning game for teachers towards the vision of students' activities.",
            tags: &["React", "Redux", "TailwindCSS"],
            image: Asset::new("interact.svg"),
        },
        Project {
            title: "Barangay Health Center Record Management System",
            period: "2025",
            description: "A full website development project for the Barangay Health Center, featuring a Geospatial Map and Record Management System that interacts with every citizen.",
            tags: &["React", "Firebase", "Material UI"],
            image: Asset::new("health.svg"),
        },
        Project {
            title: "Glow Learning Payroll System",
            period: "2025",
            description: "A fully integrated payroll system for Glow Learning English teachers that automatically generates payroll for their class sessions.",
            tags: &["React", "Node.js", "MongoDB"],
            image: Asset::new("payroll.svg"),
        },
    ],
    experience: &[
        Experience {
            company: "GC-TECH",
            role: "Frontend / Backend Web Developer",
            period: "2018–2019",
            bullets: &[
                "Developed responsive websites with HTML, CSS, and JavaScript.",
                "Integrated backend services with optimized database queries.",
                "Improved UI/UX performance, reducing load time and enhancing experience.",
            ],
        },
        Experience {
            company: "City Government of Tagum",
            role: "Administrative Assistant",
            period: "2024–2025",
            bullets: &[
                "Ensured accuracy of data elements.",
                "Optimized data workflows.",
                "Collaborated with teams to streamline processes.",
            ],
        },
    ],
    education: &[Education {
        school: "STI Tagum College",
        degree: "Bachelor of Science in Information Systems",
        period: "2019–2024",
    }],
    achievements: &[
        "Codefest Runner-up (2020, 2023)",
        "Official Tabulator, STI College Tagum (since 2018)",
    ],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_unique<'a>(mut keys: impl Iterator<Item = &'a str>) -> bool {
        let mut seen = HashSet::new();
        keys.all(|k| seen.insert(k))
    }

    #[test]
    fn test_collection_keys_are_unique() {
        assert!(all_unique(PROFILE.projects.iter().map(|p| p.title)));
        assert!(all_unique(PROFILE.experience.iter().map(|e| e.company)));
        assert!(all_unique(PROFILE.education.iter().map(|e| e.school)));
        assert!(all_unique(PROFILE.skills.iter().map(|g| g.category)));
    }

    #[test]
    fn test_roles_are_not_empty() {
        assert_eq!(
            PROFILE.roles,
            &["UI Designer", "Frontend Developer", "React Enthusiast"]
        );
    }

    #[test]
    fn test_skill_categories_keep_order() {
        let categories = PROFILE
            .skills
            .iter()
            .map(|g| g.category)
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec!["Frontend / UI", "Backend / Integration", "Design Tools", "Other"]
        );
        assert_eq!(PROFILE.skills[2].skills, &["Photoshop", "Canva"]);
    }

    #[test]
    fn test_interactive_learning_project() {
        let project = PROFILE
            .projects
            .iter()
            .find(|p| p.title == "Interactive Learning")
            .expect("project should exist");
        assert_eq!(project.period, "2023");
        assert_eq!(project.tags, &["React", "Redux", "TailwindCSS"]);
    }

    #[test]
    fn test_assets_lists_portrait_then_projects() {
        let assets = PROFILE.assets().collect::<Vec<_>>();
        assert_eq!(assets.len(), PROFILE.projects.len() + 1);
        assert_eq!(assets[0], PROFILE.portrait);
        assert_eq!(assets[3], Asset::new("interact.svg"));
    }

    #[test]
    fn test_every_asset_resolves() {
        for asset in PROFILE.assets() {
            assert!(
                asset.resolve().is_ok(),
                "missing image {}",
                asset.file_name()
            );
        }
    }

    #[test]
    fn test_placeholder_links_are_not_configured() {
        assert!(!is_configured(PROFILE.links.linkedin));
        assert!(!is_configured(PROFILE.links.github));
        assert!(!is_configured(""));
        assert!(is_configured("https://github.com/example"));
    }
}
