//! Type Selector Component
//!
//! Reusable location-type selector buttons.

use leptos::prelude::*;

use crate::format::{type_icon, type_label};
use crate::models::LocationType;

/// Type selector buttons for locations
#[component]
pub fn TypeSelector(
    current_type: ReadSignal<LocationType>,
    on_change: impl Fn(LocationType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {LocationType::ALL.iter().map(|ty| {
                let ty = *ty;
                let is_selected = move || current_type.get() == ty;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(ty)
                    >
                        <span class="type-icon">{type_icon(ty)}</span>
                        {type_label(ty)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
