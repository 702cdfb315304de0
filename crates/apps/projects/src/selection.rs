use portfolio_content::{project_by_slug, Project};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// In-window navigation state: the list, or the detail view of one project.
pub struct ProjectSelection {
    selected: Option<&'static str>,
}

impl ProjectSelection {
    /// Shows the detail view for `slug`. Unknown slugs leave the list showing.
    pub fn select(&mut self, slug: &'static str) {
        if project_by_slug(slug).is_ok() {
            self.selected = Some(slug);
        }
    }

    /// Returns to the list.
    pub fn back(&mut self) {
        self.selected = None;
    }

    /// The project whose detail view is showing, if any.
    pub fn current(&self) -> Option<&'static Project> {
        self.selected.and_then(|slug| project_by_slug(slug).ok())
    }

    /// `"list"` or `"detail"`, for styling hooks.
    pub fn view_token(&self) -> &'static str {
        if self.selected.is_some() {
            "detail"
        } else {
            "list"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_then_back_returns_to_list() {
        let mut selection = ProjectSelection::default();
        assert_eq!(selection.view_token(), "list");

        selection.select("sirek");
        assert_eq!(selection.current().map(|p| p.title), Some("SiRek Tandika"));
        assert_eq!(selection.view_token(), "detail");

        selection.back();
        assert_eq!(selection.current(), None);
        assert_eq!(selection.view_token(), "list");
    }

    #[test]
    fn unknown_slug_keeps_current_view() {
        let mut selection = ProjectSelection::default();
        selection.select("missing");
        assert_eq!(selection, ProjectSelection::default());

        selection.select("pacilflix");
        selection.select("missing");
        assert_eq!(selection.current().map(|p| p.slug), Some("pacilflix"));
    }
}
