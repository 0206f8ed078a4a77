//! Navbar Component
//!
//! Site navigation with active-page highlight and theme toggle.

use leptos::prelude::*;

use crate::models::Page;
use crate::theme::{use_theme, Theme};

const LINKS: [Page; 3] = [Page::Home, Page::About, Page::Posts];

/// Navigation bar switching the active page signal
#[component]
pub fn Navbar(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class="navbar">
            <ul class="nav-links">
                {LINKS.into_iter().map(|page| {
                    let is_active = move || current_page.get() == page;
                    view! {
                        <li>
                            <button
                                class=move || {
                                    if is_active() { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |_| set_current_page.set(page)
                            >
                                {page.title()}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button class="theme-toggle" on:click=move |_| theme.toggle()>
                {move || match theme.theme.get() {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                }}
            </button>
        </nav>
    }
}
