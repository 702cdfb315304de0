//! Shared UI primitive library for the portfolio desktop shell and website.
//!
//! The crate owns reusable Leptos primitives, the design tokens they render, and a centralized
//! icon API. Apps compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod tokens;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, Card, Cluster, DesktopIconButton, DesktopRoot, DesktopWindowLayer, EmptyState,
    Form, FormField, Grid, Heading, IconButton, LauncherItem, LauncherMenu, LinkButton,
    MenuToggle, Stack, StatusBar, Taskbar, TaskbarButton, TaskbarGroup, TaskbarSeparator, Text,
    WindowControl, WindowFrame,
};
pub use tokens::{
    ButtonSize, ButtonVariant, FieldKind, LayoutAlign, LayoutGap, LayoutJustify, LinkOpens,
    SurfaceVariant, TextRole, TextTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, FieldKind, Form,
        FormField, Grid, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LinkButton, LinkOpens, Stack, SurfaceVariant, Text, TextRole, TextTone,
    };
}
