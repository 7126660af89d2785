//! Location Card Component
//!
//! Grid card for one location with its cleaning status and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format::{cleaning_status, format_currency, type_icon, type_label, CleaningStatus};
use crate::models::Location;
use crate::store::{store_remove_location, store_toggle_selected, store_update_location, use_app_store, AppStateStoreFields};

#[component]
pub fn LocationCard(
    location: Location,
    bulk_mode: Signal<bool>,
    /// Browse into this container
    on_open: Callback<u32>,
    /// Open the read-only detail view
    on_view: Callback<Location>,
    on_edit: Callback<Location>,
    on_move: Callback<Location>,
    /// Start creating a child under this container
    on_add_child: Callback<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = location.id;
    let is_container = location.is_container;
    let status = cleaning_status(location.cleaned_time.as_deref(), location.cleaned_duration);
    let status_class = match status {
        CleaningStatus::NeedsCleaning(_) => "cleaning-status overdue",
        CleaningStatus::Clean(_) => "cleaning-status ok",
        CleaningStatus::Unknown => "cleaning-status unknown",
    };

    let is_checked = Signal::derive(move || {
        store.selected_ids().with(|ids| ids.contains(&id))
    });

    // Mutations patch the grid in place with the server's response, then
    // broadcast a reload for the tree, cleaning list and statistics
    let mark_cleaned = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        spawn_local(async move {
            match api::mark_cleaned(id).await {
                Ok(updated) => {
                    store_update_location(&store, updated);
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CARD] mark cleaned failed: {}", err).into());
                }
            }
        });
    };

    let delete_location = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        spawn_local(async move {
            match api::delete_location(id).await {
                Ok(()) => {
                    store_remove_location(&store, id);
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[CARD] delete failed: {}", err).into());
                }
            }
        });
    };

    let view_location = location.clone();
    let edit_location = location.clone();
    let move_location = location.clone();

    view! {
        <div
            class="location-card"
            on:click={
                let clicked = location.clone();
                move |_| {
                    if is_container {
                        on_open.run(id);
                    } else {
                        on_view.run(clicked.clone());
                    }
                }
            }
        >
            <div class="card-header">
                {move || bulk_mode.get().then(|| view! {
                    <input
                        type="checkbox"
                        prop:checked=move || is_checked.get()
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                        on:change=move |_| store_toggle_selected(&store, id)
                    />
                })}
                <span class="type-icon">{type_icon(location.location_type)}</span>
                <span class="card-name">{location.name.clone()}</span>
                {location.needs_cleaning.then(|| view! {
                    <span class="needs-cleaning" title="نیاز به تمیزکاری">"⚠"</span>
                })}
            </div>

            <div class="card-meta">
                <span class="card-type">{type_label(location.location_type)}</span>
                {(location.quantity > 1).then(|| view! {
                    <span class="card-quantity">"تعداد: " {location.quantity}</span>
                })}
                {location.value.map(|value| view! {
                    <span class="card-value">{format_currency(value)}</span>
                })}
                {location.barcode.clone().map(|barcode| view! {
                    <span class="card-barcode">{barcode}</span>
                })}
            </div>

            {(!location.breadcrumb.is_empty()).then(|| view! {
                <div class="card-breadcrumb">{location.breadcrumb.clone()}</div>
            })}

            <div class=status_class>{status.message()}</div>

            <div class="card-actions">
                <button class="action-btn" title="جزئیات" on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    on_view.run(view_location.clone());
                }>"👁"</button>
                {is_container.then(|| view! {
                    <button class="action-btn" title="افزودن زیرمجموعه" on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_add_child.run(id);
                    }>"+"</button>
                })}
                <button class="action-btn" title="تمیز شد" on:click=mark_cleaned>"✓"</button>
                <button class="action-btn" title="ویرایش" on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(edit_location.clone());
                }>"✎"</button>
                <button class="action-btn" title="جابجایی" on:click=move |ev| {
                    ev.stop_propagation();
                    on_move.run(move_location.clone());
                }>"⇄"</button>
                <button class="action-btn delete" title="حذف" on:click=delete_location>"×"</button>
            </div>
        </div>
    }
}
