//! Skill categories rendered by the About mini-app and the website skills grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A titled group of skills.
pub struct SkillCategory {
    /// Category heading.
    pub title: &'static str,
    /// Icon token understood by the UI icon set.
    pub icon: &'static str,
    /// Skills in display order.
    pub skills: &'static [&'static str],
}

const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        icon: "code",
        skills: &[
            "React / Next.js / Vue.js",
            "TypeScript",
            "JavaScript",
            "Tailwind CSS",
            "HTML / CSS",
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "server",
        skills: &["Node.js", "Express", "Spring Boot", "Django", "REST APIs"],
    },
    SkillCategory {
        title: "Database",
        icon: "database",
        skills: &["MongoDB", "PostgreSQL", "NeonDB", "Supabase"],
    },
    SkillCategory {
        title: "Tools",
        icon: "settings",
        skills: &[
            "Git / GitHub",
            "VS Code",
            "Figma",
            "Docker",
            "Vercel / Netlify",
        ],
    },
];

/// Returns all skill categories.
pub fn skill_categories() -> &'static [SkillCategory] {
    &SKILL_CATEGORIES
}
