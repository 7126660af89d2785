//! Cleaning List Component
//!
//! Locations overdue for cleaning, with one-click mark-cleaned.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format::{cleaning_status, type_icon};
use crate::models::Location;

#[component]
pub fn CleaningList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (locations, set_locations) = signal(Vec::<Location>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        ctx.track_reload();
        spawn_local(async move {
            match api::needing_cleaning().await {
                Ok(page) => set_locations.set(page.results),
                Err(err) => {
                    web_sys::console::error_1(&format!("[CLEANING] load failed: {}", err).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="cleaning-list">
            <h3>"نیازمند تمیزکاری"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading small">"بارگذاری..."</div> }
            >
                <Show
                    when=move || !locations.get().is_empty()
                    fallback=|| view! { <div class="cleaning-empty">"همه‌چیز تمیز است ✨"</div> }
                >
                    <For
                        each=move || locations.get()
                        key=|loc| (loc.id, loc.cleaned_time.clone())
                        children=move |location| {
                            let id = location.id;
                            let status =
                                cleaning_status(location.cleaned_time.as_deref(), location.cleaned_duration);
                            let mark = move |_| {
                                spawn_local(async move {
                                    if api::mark_cleaned(id).await.is_ok() {
                                        ctx.reload();
                                    }
                                });
                            };
                            view! {
                                <div class="cleaning-row">
                                    <span class="type-icon">{type_icon(location.location_type)}</span>
                                    <span class="row-name">{location.name.clone()}</span>
                                    <span class="cleaning-message">{status.message()}</span>
                                    <button class="action-btn" title="تمیز شد" on:click=mark>"✓"</button>
                                </div>
                            }
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}
