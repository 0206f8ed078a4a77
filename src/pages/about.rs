//! About Page

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Card};
use crate::theme::use_theme;

#[component]
pub fn AboutPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page">
            <Card title="About This Project">
                <p class="card-text">
                    "This project showcases a client-side Leptos setup: reusable UI \
                     components, signal-based navigation, context for theme management, \
                     and a local-storage-backed task list."
                </p>
                <div class="button-row">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |()| theme.toggle())
                    >
                        "Toggle Theme"
                    </Button>
                </div>
            </Card>
        </div>
    }
}
