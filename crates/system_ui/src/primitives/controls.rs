use leptos::ev::{MouseEvent, SubmitEvent};

use super::*;

fn button_face(
    leading_icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <>
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span class="ui-button-label">{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </>
    }
}

#[component]
/// Text button. `submit` turns it into the enclosing form's submit control.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class_list("button", layout_class)
            data-variant=variant.token()
            data-size=size.token()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {button_face(None, trailing_icon, children)}
        </button>
    }
}

#[component]
/// Icon-only button; `label` is both the accessible name and the tooltip.
pub fn IconButton(
    icon: IconName,
    label: &'static str,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(optional, into)] aria_expanded: Option<Signal<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class_list("icon-button", layout_class)
            aria-label=label
            title=label
            aria-expanded=move || aria_expanded.map(|open| open.get().to_string())
            data-variant=variant.token()
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Anchor dressed as a button, for routes, external pages, and downloads.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] opens: LinkOpens,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=opens.target()
            rel=opens.rel()
            download=opens.downloads()
            class=class_list("button", layout_class)
            data-variant=variant.token()
            data-size=size.token()
        >
            {button_face(leading_icon, trailing_icon, children)}
        </a>
    }
}

#[component]
/// Form that never navigates on submit; the event goes to `on_submit` instead.
pub fn Form(
    aria_label: &'static str,
    on_submit: Callback<SubmitEvent>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class=class_list("form", layout_class)
            aria-label=aria_label
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(ev);
            }
        >
            {children()}
        </form>
    }
}

#[component]
/// Labeled, required input bound to `value`. `name` doubles as the element id.
///
/// `on_input` receives the field's new text.
pub fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(optional)] kind: FieldKind,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let forward = move |ev: web_sys::Event| on_input.call(event_target_value(&ev));
    let input = match kind {
        FieldKind::Multiline => view! {
            <textarea
                class="ui-field"
                id=name
                name=name
                placeholder=placeholder
                rows=5
                required=true
                prop:value=move || value.get()
                on:input=forward
            ></textarea>
        }
        .into_view(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                class="ui-field"
                type=kind.token()
                id=name
                name=name
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=forward
            />
        }
        .into_view(),
    };

    view! {
        <div class="ui-form-field" data-kind=kind.token()>
            <label class="ui-field-label" for=name>{label}</label>
            {input}
        </div>
    }
}
