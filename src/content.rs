use crate::showcase::{ProjectLinks, ShowcaseItem};
use crate::skills::SkillCategory::{Backend, Database, Frontend, Tools};
use crate::skills::{Skill, SkillCategory};

pub static OWNER: &str = "Mohit Bhatt";
pub static AVATAR: &str = "https://via.placeholder.com/400x400/4c1d95/ffffff?text=MB";

pub static HERO_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "React & Node Enthusiast",
    "UI/UX Designer",
    "Tech Explorer",
];

pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "GitHub",
        href: "#github",
        icon: "devicon-github-plain",
    },
    SocialLink {
        platform: "LinkedIn",
        href: "#linkedin",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        platform: "Twitter",
        href: "#twitter",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        platform: "Instagram",
        href: "#instagram",
        icon: "devicon-instagram-plain",
    },
];

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "mohit@example.com",
        icon: "✉️",
    },
    ContactInfo {
        label: "Phone",
        value: "+1 (555) 000-0000",
        icon: "📞",
    },
    ContactInfo {
        label: "Location",
        value: "San Francisco, CA",
        icon: "📍",
    },
];

pub static PROJECTS: &[ShowcaseItem] = &[
    ShowcaseItem {
        id: 1,
        title: "Portfolio Website",
        tagline: "My digital home on the web",
        description: "A creative showcase of my work featuring interactive elements and smooth animations",
        tech: &["React", "Tailwind CSS", "Framer Motion"],
        color: "#60a5fa",
        media: "https://via.placeholder.com/1200x800/1e3a8a/ffffff?text=Portfolio",
        links: ProjectLinks {
            repository: "#",
            demo: "#",
        },
        highlights: &[
            "Responsive design with dark/light mode",
            "Interactive 3D elements",
            "Performance optimized animations",
        ],
    },
    ShowcaseItem {
        id: 2,
        title: "HR Management System",
        tagline: "Simplifying workplace management",
        description: "A comprehensive platform that streamlines HR processes and improves employee experience",
        tech: &["MongoDB", "Express", "React", "Node.js", "MySQL"],
        color: "#34d399",
        media: "https://via.placeholder.com/1200x800/065f46/ffffff?text=HRMS",
        links: ProjectLinks {
            repository: "#",
            demo: "#",
        },
        highlights: &[
            "Employee dashboard with real-time updates",
            "Automated reporting system",
            "Advanced data visualization",
        ],
    },
    ShowcaseItem {
        id: 3,
        title: "Menu Generator",
        tagline: "AI-powered menu creation",
        description: "Smart catering service tool that creates balanced menus based on preferences and dietary needs",
        tech: &["JavaScript", "Firebase", "React", "OpenAI API"],
        color: "#f97316",
        media: "https://via.placeholder.com/1200x800/7c2d12/ffffff?text=Menu+Gen",
        links: ProjectLinks {
            repository: "#",
            demo: "#",
        },
        highlights: &[
            "AI recommendation engine",
            "Nutritional analysis",
            "Drag-and-drop interface",
        ],
    },
    ShowcaseItem {
        id: 4,
        title: "Weather Dashboard",
        tagline: "Weather at a glance",
        description: "Beautiful weather visualization with forecasting, historical data, and location awareness",
        tech: &["React", "Chart.js", "Weather API", "Geolocation"],
        color: "#8b5cf6",
        media: "https://via.placeholder.com/1200x800/5b21b6/ffffff?text=Weather",
        links: ProjectLinks {
            repository: "#",
            demo: "#",
        },
        highlights: &[
            "Interactive weather maps",
            "Customizable widgets",
            "Severe weather alerts",
        ],
    },
];

const fn skill(
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    level: u8,
    category: SkillCategory,
) -> Skill {
    Skill {
        name,
        icon,
        color,
        level,
        category,
    }
}

pub static TECHNOLOGIES: &[Skill] = &[
    skill("HTML", "devicon-html5-plain", "#E34F26", 95, Frontend),
    skill("CSS", "devicon-css3-plain", "#1572B6", 90, Frontend),
    skill("JavaScript", "devicon-javascript-plain", "#F7DF1E", 92, Frontend),
    skill("React", "devicon-react-original", "#61DAFB", 88, Frontend),
    skill("Tailwind CSS", "devicon-tailwindcss-original", "#38B2AC", 85, Frontend),
    skill("TypeScript", "devicon-typescript-plain", "#3178C6", 78, Frontend),
    skill("Node.js", "devicon-nodejs-plain", "#339933", 82, Backend),
    skill("PHP", "devicon-php-plain", "#777BB4", 75, Backend),
    skill("Python", "devicon-python-plain", "#3776AB", 80, Backend),
    skill("Java", "devicon-java-plain", "#007396", 70, Backend),
    skill("MySQL", "devicon-mysql-plain", "#4479A1", 85, Database),
    skill("MongoDB", "devicon-mongodb-plain", "#47A248", 78, Database),
    skill("Firebase", "devicon-firebase-plain", "#FFCA28", 80, Database),
    skill("Git", "devicon-git-plain", "#F05032", 90, Tools),
    skill("Docker", "devicon-docker-plain", "#2496ED", 65, Tools),
    skill("Figma", "devicon-figma-plain", "#F24E1E", 75, Tools),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::Showcase;
    use std::collections::HashSet;

    #[test]
    fn test_projects_form_a_valid_showcase() {
        assert!(Showcase::new(PROJECTS).is_ok());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(TECHNOLOGIES.iter().all(|s| s.level <= 100));
        let names = TECHNOLOGIES.iter().map(|s| s.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), TECHNOLOGIES.len());
    }

    #[test]
    fn test_accent_colors_are_hex() {
        let colors = PROJECTS
            .iter()
            .map(|p| p.color)
            .chain(TECHNOLOGIES.iter().map(|s| s.color));
        for color in colors {
            assert_eq!(color.len(), 7, "{color}");
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{color}");
        }
    }
}
