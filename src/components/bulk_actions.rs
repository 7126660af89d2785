//! Bulk Actions Component
//!
//! Group operations over the card selection: mark cleaned, delete,
//! move to a parent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{BulkOperation, BulkOperationData};
use crate::store::{store_clear_selection, use_app_store, AppStateStoreFields};

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let selected_count = move || store.selected_ids().with(|ids| ids.len());

    let run_operation = move |operation: BulkOperation| {
        let location_ids = store.selected_ids().get_untracked();
        if location_ids.is_empty() {
            return;
        }
        // Bulk move targets the level currently browsed into
        let new_parent_id = match operation {
            BulkOperation::MoveToParent => ctx.current_parent.get_untracked(),
            _ => None,
        };
        spawn_local(async move {
            let data = BulkOperationData {
                operation,
                location_ids,
                new_parent_id,
            };
            match api::bulk_operations(&data).await {
                Ok(result) if result.success => {
                    store_clear_selection(&store);
                    ctx.reload();
                }
                Ok(result) => {
                    web_sys::console::error_1(
                        &format!("[BULK] server refused: {}", result.message).into(),
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BULK] failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <div class="bulk-actions">
            <span class="bulk-count">{move || format!("{} انتخاب شده", selected_count())}</span>
            <button
                disabled=move || selected_count() == 0
                on:click=move |_| run_operation(BulkOperation::MarkCleaned)
            >
                "تمیز شد"
            </button>
            <button
                disabled=move || selected_count() == 0
                on:click=move |_| run_operation(BulkOperation::MoveToParent)
            >
                "انتقال به اینجا"
            </button>
            <button
                class="delete"
                disabled=move || selected_count() == 0
                on:click=move |_| run_operation(BulkOperation::Delete)
            >
                "حذف"
            </button>
            <button class="cancel-btn" on:click=move |_| store_clear_selection(&store)>
                "پاک کردن انتخاب"
            </button>
        </div>
    }
}
