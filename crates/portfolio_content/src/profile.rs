//! Owner profile and contact details.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// External profile link.
pub struct SocialLink {
    /// Accessible label.
    pub label: &'static str,
    /// Icon token understood by the UI icon set.
    pub icon: &'static str,
    /// Target URL.
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Portfolio owner details.
pub struct Profile {
    /// Full name.
    pub name: &'static str,
    /// Header brand, rendered as accent + rest.
    pub brand: (&'static str, &'static str),
    /// Job title.
    pub role: &'static str,
    /// Short pitch used by the hero and About app.
    pub tagline: &'static str,
    /// About-section paragraphs.
    pub about: &'static [&'static str],
    /// Degree line.
    pub education_degree: &'static str,
    /// Institution and years.
    pub education_school: &'static str,
    /// Address used by the contact form `mailto:` link.
    pub email: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// City shown on the contact section.
    pub location: &'static str,
    /// Downloadable CV path.
    pub cv_path: &'static str,
    /// External profiles.
    pub socials: &'static [SocialLink],
}

/// The site owner.
pub const PROFILE: Profile = Profile {
    name: "Mikhail Haritz",
    brand: ("Mikhail", "JBS"),
    role: "Full Stack Developer",
    tagline: "I craft robust and scalable web applications with modern technologies. Passionate about creating seamless user experiences and solving complex problems through code.",
    about: &[
        "I'm a web developer with a passion for creating functional, user-friendly, and secure websites. I specialize in modern frontend and backend frameworks, mainly working with Javascript and Typescript.",
        "I've worked on a variety of projects ranging from personal fun projects, complex multiservices, to enterprise level projects with some renowned clients.",
    ],
    education_degree: "Bachelor in Information Systems",
    education_school: "University Indonesia, 2022-2026",
    email: "mikhailharitz@gmail.com",
    phone: "+6281222439087",
    location: "Depok, Jawa Barat",
    cv_path: "/cv.pdf",
    socials: &[
        SocialLink {
            label: "GitHub",
            icon: "github",
            url: "https://github.com/MikhailJBS",
        },
        SocialLink {
            label: "LinkedIn",
            icon: "linkedin",
            url: "https://www.linkedin.com/in/mikhailharitz77/",
        },
        SocialLink {
            label: "Twitter",
            icon: "twitter",
            url: "https://twitter.com",
        },
    ],
};
