//! Leptos components shared by the desktop shell, the mini-apps, and the website.
//!
//! Every primitive renders a `ui-<kind>` class followed by the caller's `layout_class`. Tokens go
//! out as short `data-*` attributes (`data-gap="md"`). Boolean state such as `data-maximized` is
//! present when set and absent otherwise.

use leptos::*;

use crate::{tokens::*, Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod shell;

pub use controls::{Button, Form, FormField, IconButton, LinkButton};
pub use data_display::{Badge, Card, EmptyState, Heading, Text};
pub use layout::{Cluster, Grid, Stack};
pub use shell::{
    DesktopIconButton, DesktopRoot, DesktopWindowLayer, LauncherItem, LauncherMenu, MenuToggle,
    StatusBar, Taskbar, TaskbarButton, TaskbarGroup, TaskbarSeparator, WindowControl, WindowFrame,
};

/// `ui-<kind>` followed by the caller's layout hook, if any.
pub(crate) fn class_list(kind: &str, layout_class: Option<&'static str>) -> String {
    match layout_class.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("ui-{kind} {extra}"),
        None => format!("ui-{kind}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_hook_follows_the_kind_class() {
        assert_eq!(class_list("card", None), "ui-card");
        assert_eq!(class_list("card", Some("")), "ui-card");
        assert_eq!(class_list("card", Some("project-card")), "ui-card project-card");
    }
}
