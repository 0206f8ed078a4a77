//! Home Page
//!
//! Welcome card plus the task manager.

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Card, TaskManager};
use crate::theme::use_theme;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page">
            <Card title="Welcome to Our App!" class="intro-card">
                <p class="card-text">
                    "A small app demonstrating reusable components, navigation, and persisted state."
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

            <TaskManager />
        </div>
    }
}
