//! Search Bar Component
//!
//! Debounced text search with type and cleaning/barcode filters.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::format::type_label;
use crate::models::{Location, LocationType, SearchParams};

const DEBOUNCE_MS: u32 = 300;

#[component]
pub fn SearchBar(
    /// `None` while no search is active, `Some` with the matching locations
    set_results: WriteSignal<Option<Vec<Location>>>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (type_filter, set_type_filter) = signal(None::<LocationType>);
    let (needs_cleaning, set_needs_cleaning) = signal(false);
    let (has_barcode, set_has_barcode) = signal(false);
    let (searching, set_searching) = signal(false);
    // Bumped on every input; stale debounce runs bail out
    let (generation, set_generation) = signal(0u32);

    Effect::new(move |_| {
        let text = query.get();
        let ty = type_filter.get();
        let cleaning = needs_cleaning.get();
        let barcode = has_barcode.get();

        set_generation.update(|g| *g += 1);
        let my_generation = generation.get_untracked();

        let active = !text.trim().is_empty() || ty.is_some() || cleaning || barcode;
        if !active {
            set_results.set(None);
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_untracked() != my_generation {
                return;
            }
            set_searching.set(true);
            let params = SearchParams {
                query: (!text.trim().is_empty()).then(|| text.trim().to_string()),
                location_type: ty,
                needs_cleaning: cleaning.then_some(true),
                has_barcode: barcode.then_some(true),
                page_size: Some(50),
                ..Default::default()
            };
            match api::search_locations(&params).await {
                Ok(page) => set_results.set(Some(page.results)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[SEARCH] failed: {}", err).into());
                }
            }
            set_searching.set(false);
        });
    });

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="جستجوی مکان‌ها..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                set_type_filter.set(
                    LocationType::ALL.iter().copied().find(|ty| ty.as_str() == value),
                );
            }>
                <option value="">"همه انواع"</option>
                {LocationType::ALL.iter().map(|ty| view! {
                    <option value=ty.as_str()>{type_label(*ty)}</option>
                }).collect_view()}
            </select>

            <label class="filter-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || needs_cleaning.get()
                    on:change=move |_| set_needs_cleaning.update(|v| *v = !*v)
                />
                "نیاز به تمیزکاری"
            </label>
            <label class="filter-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || has_barcode.get()
                    on:change=move |_| set_has_barcode.update(|v| *v = !*v)
                />
                "دارای بارکد"
            </label>

            {move || searching.get().then_some(view! {
                <span class="search-spinner">"..."</span>
            })}
        </div>
    }
}
