//! Task Manager Component
//!
//! Add form, status filter buttons, and the task list itself. The list
//! controller persists after every mutation; the component only routes
//! events into it.

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Card};
use crate::models::Filter;
use crate::storage::{LocalStorage, PersistedStore};
use crate::tasks::BrowserTaskList;

const FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

/// Task manager card: add, toggle, delete, filter
#[component]
pub fn TaskManager() -> impl IntoView {
    let list = RwSignal::new(BrowserTaskList::load(PersistedStore::new(LocalStorage)));
    let (new_task, set_new_task) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_task.get();
        let mut added = false;
        list.update(|list| added = list.add(&text));
        if added {
            set_new_task.set(String::new());
        }
    };

    let visible = move || list.with(|list| list.visible());

    view! {
        <Card title="Task Manager" class="task-manager">
            <form class="task-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || new_task.get()
                    on:input=move |ev| set_new_task.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Primary submit=true>
                    "Add Task"
                </Button>
            </form>

            <div class="filter-row">
                {FILTERS.into_iter().map(|filter| {
                    let is_active = move || list.with(|list| list.filter()) == filter;
                    view! {
                        <button
                            class=move || {
                                if is_active() { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| list.update(|list| list.set_filter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No tasks to display."</p>
            </Show>

            <ul class="task-list">
                <For
                    each=visible
                    // Completion is part of the key so a toggle re-renders the row
                    key=|task| (task.id, task.completed)
                    children=move |task| {
                        let id = task.id;
                        let text_class = if task.completed {
                            "task-text completed"
                        } else {
                            "task-text"
                        };
                        view! {
                            <li class="task-item">
                                <span
                                    class=text_class
                                    on:click=move |_| list.update(|list| list.toggle(id))
                                >
                                    {task.text.clone()}
                                </span>
                                <Button
                                    variant=ButtonVariant::Danger
                                    on_click=Callback::new(move |()| {
                                        list.update(|list| list.remove(id));
                                    })
                                >
                                    "Delete"
                                </Button>
                            </li>
                        }
                    }
                />
            </ul>
        </Card>
    }
}
