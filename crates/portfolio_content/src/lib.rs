//! Static portfolio content shared by the desktop mini-apps and the website routes.
//!
//! Everything here is immutable, compiled-in data: the project catalog, skill categories, owner
//! profile/contact details, and per-route document metadata. Nothing is fetched at runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod metadata;
pub mod profile;
pub mod projects;
pub mod skills;

pub use metadata::{
    home_metadata, not_found_metadata, project_metadata, projects_index_metadata, OpenGraph,
    PageMetadata, SITE_NAME, SITE_URL,
};
pub use profile::{Profile, SocialLink, PROFILE};
pub use projects::{
    project_by_slug, projects, CatalogError, LinkTarget, Project, ProjectKind,
    PLACEHOLDER_IMAGE_PATH,
};
pub use skills::{skill_categories, SkillCategory};
