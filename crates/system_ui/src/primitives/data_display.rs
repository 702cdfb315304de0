use leptos::html::{self, AnyElement, HtmlElement};

use super::*;

fn heading_level(level: u8) -> u8 {
    level.clamp(1, 3)
}

#[component]
/// Card surface for project tiles, skill groups, and contact details.
pub fn Card(
    #[prop(optional)] variant: SurfaceVariant,
    #[prop(default = true)] padded: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=class_list("card", layout_class)
            data-variant=variant.token()
            data-padded=padded
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text run styled by role and tone.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=class_list("text", layout_class) data-role=role.token() data-tone=tone.token()>
            {children()}
        </span>
    }
}

#[component]
/// `h1`-`h3` heading; out-of-range levels clamp into that range.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let element: HtmlElement<AnyElement> = match heading_level(level) {
        1 => html::h1().into_any(),
        2 => html::h2().into_any(),
        _ => html::h3().into_any(),
    };
    element
        .attr("class", class_list("heading", layout_class))
        .attr("data-tone", tone.token())
        .child(children())
}

#[component]
/// Pill for technology tags and overflow counts.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! { <span class="ui-badge" data-tone=tone.token()>{children()}</span> }
}

#[component]
/// Centered placeholder for lists and windows with nothing to show.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class_list("empty-state", layout_class) role="status">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_levels_clamp_to_h1_through_h3() {
        let levels: Vec<_> = [0, 1, 2, 3, 6].into_iter().map(heading_level).collect();
        assert_eq!(levels, vec![1, 1, 2, 3, 3]);
    }
}
