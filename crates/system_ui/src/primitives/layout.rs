use leptos::html::{div, Div, HtmlElement};

use super::*;

fn flow_box(
    kind: &'static str,
    gap: LayoutGap,
    layout_class: Option<&'static str>,
    children: Children,
) -> HtmlElement<Div> {
    div()
        .attr("class", class_list(kind, layout_class))
        .attr("data-gap", gap.token())
        .child(children())
}

#[component]
/// Vertical stack. `padded` insets the content.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] align: LayoutAlign,
    #[prop(optional)] padded: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    flow_box("stack", gap, layout_class, children)
        .attr("data-align", align.token())
        .attr("data-padded", padded)
}

#[component]
/// Wrapping row, vertically centered unless told otherwise.
pub fn Cluster(
    #[prop(optional)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(optional)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    flow_box("cluster", gap, layout_class, children)
        .attr("data-align", align.token())
        .attr("data-justify", justify.token())
}

#[component]
/// Grid that collapses to one column on narrow screens; `columns` applies at full width.
pub fn Grid(
    #[prop(optional)] gap: LayoutGap,
    #[prop(default = 2)] columns: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    flow_box("grid", gap, layout_class, children).attr("style", format!("--ui-columns:{columns};"))
}
