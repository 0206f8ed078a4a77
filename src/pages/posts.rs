//! Posts Page
//!
//! Search plus offset pagination over the remote posts resource. One fetch
//! per page or search change; overlapping requests race and the last
//! response to arrive wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Button, ButtonVariant, Card};
use crate::models::Post;

#[component]
pub fn PostsPage() -> impl IntoView {
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search_term, set_search_term) = signal(String::new());
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(0u32);

    // Fetch on mount and whenever the page or search term changes
    Effect::new(move |_| {
        let page = current_page.get();
        let term = search_term.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_posts(page, &term).await {
                Ok(fetched) => {
                    set_total_pages.set(fetched.total_pages);
                    set_posts.set(fetched.posts);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_posts.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let on_search = move |ev: web_sys::Event| {
        set_search_term.set(event_target_value(&ev));
        // A new search always restarts from the first page
        set_current_page.set(1);
    };

    let idle = move || !loading.get() && error.get().is_none();
    let prev_disabled = Signal::derive(move || current_page.get() <= 1);
    let next_disabled = Signal::derive(move || current_page.get() >= total_pages.get());

    view! {
        <div class="page">
            <Card title="Public Posts" class="posts-card">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search posts..."
                    prop:value=move || search_term.get()
                    on:input=on_search
                />

                <Show when=move || loading.get()>
                    <p class="loading-state">"Loading posts..."</p>
                </Show>

                {move || error.get().map(|message| view! {
                    <p class="error-state">"Error: " {message}</p>
                })}

                <Show when=move || idle() && posts.with(|posts| posts.is_empty())>
                    <p class="empty-state">"No posts found."</p>
                </Show>

                <Show when=idle>
                    <ul class="post-list">
                        <For
                            each=move || posts.get()
                            key=|post| post.id
                            children=|post| {
                                view! {
                                    <li class="post-item">
                                        <h3 class="post-title">{post.title.clone()}</h3>
                                        <p class="post-body">{post.body.clone()}</p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>

                <Show when=move || idle() && (total_pages.get() > 1)>
                    <div class="pagination-row">
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=prev_disabled
                            on_click=Callback::new(move |()| {
                                if current_page.get_untracked() > 1 {
                                    set_current_page.update(|page| *page -= 1);
                                }
                            })
                        >
                            "Previous"
                        </Button>
                        <span class="page-indicator">
                            {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                        </span>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=next_disabled
                            on_click=Callback::new(move |()| {
                                if current_page.get_untracked() < total_pages.get_untracked() {
                                    set_current_page.update(|page| *page += 1);
                                }
                            })
                        >
                            "Next"
                        </Button>
                    </div>
                </Show>
            </Card>
        </div>
    }
}
