//! Card Component
//!
//! Boxed layout container with an optional title.

use leptos::prelude::*;

/// Content card with optional heading
#[component]
pub fn Card(
    #[prop(into, optional)] title: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    let heading = (!title.is_empty()).then(|| view! { <h2 class="card-title">{title}</h2> });

    view! {
        <div class=class>
            {heading}
            {children()}
        </div>
    }
}
