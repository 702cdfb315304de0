//! Project catalog records and slug lookup.

use thiserror::Error;

/// Fallback image used when a project ships without a screenshot.
pub const PLACEHOLDER_IMAGE_PATH: &str = "/assets/placeholder.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery category shown as a badge on cards and detail pages.
pub enum ProjectKind {
    /// Interactive web application.
    WebApplication,
    /// Content-oriented website.
    Website,
    /// Native or cross-platform mobile app.
    MobileApplication,
}

impl ProjectKind {
    /// Human-readable badge label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebApplication => "Web Application",
            Self::Website => "Website",
            Self::MobileApplication => "Mobile Application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A single portfolio project.
pub struct Project {
    /// Stable catalog id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// URL slug used by `/projects/{slug}`.
    pub slug: &'static str,
    /// One-line summary for cards.
    pub description: &'static str,
    /// Full description for the detail view.
    pub long_description: &'static str,
    /// Site-relative image path.
    pub image: &'static str,
    /// Technology tags in display order.
    pub technologies: &'static [&'static str],
    /// Year the project shipped.
    pub year: u16,
    /// Client or course the project was built for.
    pub client: &'static str,
    /// Delivery category.
    pub kind: ProjectKind,
    /// Live deployment link or a plain label when no public URL exists.
    pub live_url: Option<&'static str>,
    /// Source link or a plain label when the repository is private.
    pub github_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendering target for a project link field.
pub enum LinkTarget<'a> {
    /// Navigable `http(s)` URL.
    Url(&'a str),
    /// Free-text label that must not be rendered as a hyperlink.
    Label(&'a str),
}

impl Project {
    /// Tags shown on compact cards, plus how many were left out.
    pub fn card_technologies(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }

    /// Classifies the live link, if any.
    pub fn live_link(&self) -> Option<LinkTarget<'static>> {
        self.live_url.map(classify_link)
    }

    /// Classifies the source link, if any.
    pub fn source_link(&self) -> Option<LinkTarget<'static>> {
        self.github_url.map(classify_link)
    }

    /// Canonical detail route for this project.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

fn classify_link(value: &str) -> LinkTarget<'_> {
    if value.starts_with("https://") || value.starts_with("http://") {
        LinkTarget::Url(value)
    } else {
        LinkTarget::Label(value)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Catalog lookup failures.
pub enum CatalogError {
    /// No project carries the requested slug.
    #[error("project `{0}` not found")]
    ProjectNotFound(String),
}

const PROJECTS: [Project; 7] = [
    Project {
        id: "1",
        title: "SiRek Tandika",
        slug: "sirek",
        description: "A modern job hunting site for Tandika Learning Institute",
        long_description: "This project is a modern job hunting site designed for Tandika Learning Institute. It features a user-friendly interface, advanced search capabilities, and a responsive design. The site allows users to create profiles, upload resumes, and apply for jobs directly through the platform. It also includes an admin panel for managing job listings and user accounts.",
        image: "/assets/sirek.png",
        technologies: &[
            "React JS",
            "Javascript",
            "Tailwind CSS",
            "Nodemailer",
            "MongoDB",
            "Express JS",
            "Docker",
            "AWS S3",
            "Puppeteer",
        ],
        year: 2025,
        client: "Tandika Learning Institute",
        kind: ProjectKind::WebApplication,
        live_url: Some("https://sirek.site"),
        github_url: Some("Private GitLab Repository"),
    },
    Project {
        id: "2",
        title: "Fontana Website",
        slug: "fontana-web",
        description: "A website for book listing and community",
        long_description: "This project is a website for Fontana, a community-focused platform for book lovers. The site features a clean and modern design, allowing users to browse and list books easily. It includes user profiles, book reviews, and a community forum for discussions. The website is built with a focus on performance and accessibility.",
        image: "/assets/fontana-web.jpg",
        technologies: &["Django", "Tailwind CSS", "PostgreSQL"],
        year: 2023,
        client: "PBP Fasilkom UI",
        kind: ProjectKind::Website,
        live_url: Some("https://fontana.com"),
        github_url: Some("https://github.com/PBP-F12/fontana-django"),
    },
    Project {
        id: "3",
        title: "Fontana Mobile",
        slug: "fontana-mobile",
        description: "A mobile app for Fontana, a book listing and community platform",
        long_description: "This project is a mobile application for Fontana, designed to complement the web platform. The app allows users to browse and list books, read reviews, and participate in community discussions on the go. It features a user-friendly interface and integrates with the existing web platform for seamless user experience.",
        image: "/assets/fontana-mobile.png",
        technologies: &["Flutter", "Dart", "Django REST Framework", "PostgreSQL"],
        year: 2023,
        client: "PBP Fasilkom UI",
        kind: ProjectKind::MobileApplication,
        live_url: Some("Mobile Application"),
        github_url: Some("https://github.com/PBP-F12/fontana-flutter"),
    },
    Project {
        id: "4",
        title: "no_bs",
        slug: "no-bs",
        description: "A Simple chat application with no bs",
        long_description: "This project is a simple chat application designed to provide a no-frills messaging experience. It features real-time messaging, user authentication, and a clean interface. The app is built with a focus on performance and ease of use, making it ideal for quick conversations without unnecessary distractions. It includes features like direct messaging, group chats, and access to some LLM Models.",
        image: PLACEHOLDER_IMAGE_PATH,
        technologies: &[
            "React JS",
            "Tailwind CSS",
            "Express JS",
            "Socket.IO",
            "MongoDB",
            "OpenRouter API",
            "Cloudinary",
        ],
        year: 2025,
        client: "Personal Project",
        kind: ProjectKind::WebApplication,
        live_url: Some("https://no_bs.vercel.app"),
        github_url: Some("https://github.com/"),
    },
    Project {
        id: "5",
        title: "Bujaopedia",
        slug: "bujaopedia",
        description: "A simple digital marketplace for buying and selling products",
        long_description: "This project is a digital marketplace designed for buying and selling products. It features a user-friendly interface, product listings, and a promo system. The site allows users to create accounts, list products, and manage their orders. It also includes an admin panel for managing product listings and user accounts.",
        image: "/assets/bujaopedia.png",
        technologies: &[
            "Express JS",
            "Tailwind CSS",
            "PostgreSQL",
            "Docker",
            "Next JS",
            "Redis",
        ],
        year: 2025,
        client: "PKPL Fasilkom UI",
        kind: ProjectKind::WebApplication,
        live_url: Some("https://kelompok-2-bujaopedia-fe.pkpl.cs.ui.ac.id/"),
        github_url: Some("Private GitLab Repository"),
    },
    Project {
        id: "6",
        title: "Apapmedika",
        slug: "apapmedika",
        description: "A complex medical platform for managing patient data, appointments, prescriptions, insurance, and more",
        long_description: "This is a multi-service project designed to manage various aspects of a medical platform. It includes features for managing patient data, appointments, prescriptions, insurance, and more. The platform is built with a focus on security and scalability, ensuring that sensitive medical data is handled appropriately. It includes an admin panel for managing user accounts and system settings.",
        image: "/assets/apapmedika.png",
        technologies: &["Spring Boot", "Vue JS", "PostgreSQL", "Docker"],
        year: 2024,
        client: "APAP Fasilkom UI",
        kind: ProjectKind::Website,
        live_url: Some("https://apapmedika-a10.cs.ui.ac.id"),
        github_url: Some("Private GitLab Repository"),
    },
    Project {
        id: "7",
        title: "Pacilflix E10",
        slug: "pacilflix",
        description: "A simple movie listing website with a modern design",
        long_description: "This project is a movie listing website designed to provide users with an easy way to browse and discover movies. It features a modern design, allowing users to search for movies, view details, and read reviews. The site is built with a focus on performance and user experience, ensuring that users can find the information they need quickly and easily.",
        image: "/assets/pacilflix.png",
        technologies: &["Next JS", "Tailwind CSS", "PostgreSQL", "NeonDB"],
        year: 2024,
        client: "Databases Fasilkom UI",
        kind: ProjectKind::WebApplication,
        live_url: Some("https://pacilflix-e10.vercel.app/"),
        github_url: Some("https://github.com/Pacilflix-E10/pacilflix-e10"),
    },
];

/// Returns the full catalog in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Looks up a project by its URL slug.
///
/// # Errors
///
/// Returns [`CatalogError::ProjectNotFound`] when no project carries `slug`.
pub fn project_by_slug(slug: &str) -> Result<&'static Project, CatalogError> {
    projects()
        .iter()
        .find(|project| project.slug == slug)
        .ok_or_else(|| CatalogError::ProjectNotFound(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_slug_returns_matching_record() {
        let project = project_by_slug("pacilflix").expect("pacilflix exists");
        assert_eq!(project.title, "Pacilflix E10");
        assert_eq!(project.year, 2024);
        assert_eq!(project.kind, ProjectKind::WebApplication);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert_eq!(
            project_by_slug("does-not-exist"),
            Err(CatalogError::ProjectNotFound("does-not-exist".to_string()))
        );
        assert_eq!(
            CatalogError::ProjectNotFound("x".to_string()).to_string(),
            "project `x` not found"
        );
    }

    #[test]
    fn slugs_and_ids_are_unique() {
        let slugs: HashSet<_> = projects().iter().map(|p| p.slug).collect();
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(slugs.len(), projects().len());
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn card_technologies_reports_overflow() {
        let sirek = project_by_slug("sirek").unwrap();
        let (shown, hidden) = sirek.card_technologies(3);
        assert_eq!(shown, &["React JS", "Javascript", "Tailwind CSS"]);
        assert_eq!(hidden, 6);

        let fontana = project_by_slug("fontana-web").unwrap();
        assert_eq!(fontana.card_technologies(3).1, 0);
    }

    #[test]
    fn non_url_link_values_render_as_labels() {
        let sirek = project_by_slug("sirek").unwrap();
        assert_eq!(sirek.live_link(), Some(LinkTarget::Url("https://sirek.site")));
        assert_eq!(
            sirek.source_link(),
            Some(LinkTarget::Label("Private GitLab Repository"))
        );
        let mobile = project_by_slug("fontana-mobile").unwrap();
        assert_eq!(mobile.live_link(), Some(LinkTarget::Label("Mobile Application")));
        assert_eq!(mobile.detail_path(), "/projects/fontana-mobile");
    }
}
