//! Taskdeck App
//!
//! Root component: theme context, page navigation, and the shell layout.

use leptos::prelude::*;

use crate::components::{Footer, Navbar};
use crate::models::Page;
use crate::pages::{AboutPage, HomePage, PostsPage};
use crate::theme::provide_theme;

#[component]
pub fn App() -> impl IntoView {
    provide_theme();

    let (current_page, set_current_page) = signal(Page::default());

    view! {
        <div class="app-layout">
            <Navbar current_page=current_page set_current_page=set_current_page />

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Posts => view! { <PostsPage /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
