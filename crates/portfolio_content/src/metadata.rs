//! Per-route document metadata (title, description, Open Graph).

use crate::projects::{project_by_slug, Project};

/// Canonical site origin.
pub const SITE_URL: &str = "https://mikhailjbs.my.id";
/// Open Graph site name.
pub const SITE_NAME: &str = "Mikhail Haritz Portfolio";

const HOME_TITLE: &str = "Mikhail Haritz | Full Stack Developer";
const HOME_DESCRIPTION: &str =
    "Portfolio of Mikhail Haritz, a Full Stack Developer specializing in modern web technologies.";
const PROJECTS_TITLE: &str = "Projects | Portfolio";
const PROJECTS_DESCRIPTION: &str = "Showcasing my creative journey and technical projects.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Open Graph fields for a page.
pub struct OpenGraph {
    /// `og:title`.
    pub title: String,
    /// `og:description`.
    pub description: String,
    /// `og:type` (`website` or `article`).
    pub kind: &'static str,
    /// `og:url`, when the page has a canonical URL.
    pub url: Option<String>,
    /// `og:image` path with its pixel size.
    pub image: Option<(&'static str, u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Document metadata applied by the router for a page.
pub struct PageMetadata {
    /// `<title>` text.
    pub title: String,
    /// `<meta name="description">`, if any.
    pub description: Option<String>,
    /// Open Graph block, if any.
    pub open_graph: Option<OpenGraph>,
}

/// Metadata for `/`.
pub fn home_metadata() -> PageMetadata {
    PageMetadata {
        title: HOME_TITLE.to_string(),
        description: Some(HOME_DESCRIPTION.to_string()),
        open_graph: Some(OpenGraph {
            title: HOME_TITLE.to_string(),
            description: HOME_DESCRIPTION.to_string(),
            kind: "website",
            url: Some(SITE_URL.to_string()),
            image: Some(("/og-image.jpg", 1200, 630)),
        }),
    }
}

/// Metadata for `/projects`.
pub fn projects_index_metadata() -> PageMetadata {
    PageMetadata {
        title: PROJECTS_TITLE.to_string(),
        description: Some(PROJECTS_DESCRIPTION.to_string()),
        open_graph: Some(OpenGraph {
            title: PROJECTS_TITLE.to_string(),
            description: PROJECTS_DESCRIPTION.to_string(),
            kind: "website",
            url: None,
            image: None,
        }),
    }
}

/// Metadata for `/projects/{slug}`; unknown slugs get the not-found title.
pub fn project_metadata(slug: &str) -> PageMetadata {
    match project_by_slug(slug) {
        Ok(project) => detail_metadata(project),
        Err(_) => PageMetadata {
            title: "Project Not Found".to_string(),
            description: None,
            open_graph: None,
        },
    }
}

/// Metadata for unmatched routes.
pub fn not_found_metadata() -> PageMetadata {
    PageMetadata {
        title: "Not Found | Portfolio".to_string(),
        description: None,
        open_graph: None,
    }
}

fn detail_metadata(project: &Project) -> PageMetadata {
    let title = format!("{} | Portfolio", project.title);
    PageMetadata {
        title: title.clone(),
        description: Some(project.description.to_string()),
        open_graph: Some(OpenGraph {
            title,
            description: project.description.to_string(),
            kind: "article",
            url: None,
            image: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_detail_metadata_uses_article_graph() {
        let meta = project_metadata("bujaopedia");
        assert_eq!(meta.title, "Bujaopedia | Portfolio");
        let og = meta.open_graph.expect("open graph");
        assert_eq!(og.kind, "article");
        assert_eq!(
            og.description,
            "A simple digital marketplace for buying and selling products"
        );
    }

    #[test]
    fn unknown_project_gets_not_found_title() {
        let meta = project_metadata("nope");
        assert_eq!(meta.title, "Project Not Found");
        assert_eq!(meta.description, None);
        assert_eq!(meta.open_graph, None);
    }

    #[test]
    fn home_metadata_carries_og_image() {
        let og = home_metadata().open_graph.expect("open graph");
        assert_eq!(og.image, Some(("/og-image.jpg", 1200, 630)));
        assert_eq!(og.url.as_deref(), Some(SITE_URL));
    }
}
