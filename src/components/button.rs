//! Button Component
//!
//! Reusable button with visual variants.

use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Reusable button
///
/// # Arguments
/// * `variant` - Visual style, primary by default
/// * `on_click` - Optional click callback (omit for form submit buttons)
/// * `disabled` - Optional reactive disabled flag
/// * `submit` - Render as `type="submit"` instead of `type="button"`
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] submit: bool,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=button_type
            class=variant.class()
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
