//! Move Location Modal
//!
//! Destination picker for moving a location. Containers outside the moving
//! location's own (loaded) subtree are the only valid targets.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TreeSelector;
use crate::context::AppContext;
use crate::models::{Location, MoveLocationData, TreeNode};
use crate::tree::filter_move_target;

#[component]
pub fn MoveModal(
    location: Location,
    root_data: Signal<Option<Vec<TreeNode>>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = location.id;
    let current_parent = location.parent_id;
    let selected = RwSignal::new(current_parent);
    let (moving, set_moving) = signal(false);

    let submit = move |_| {
        if moving.get() {
            return;
        }
        set_moving.set(true);
        spawn_local(async move {
            let data = MoveLocationData {
                new_parent_id: selected.get_untracked(),
            };
            match api::move_location(id, &data).await {
                Ok(_) => {
                    ctx.reload();
                    on_close.run(());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[MOVE] move {} failed: {}", id, err).into());
                }
            }
            set_moving.set(false);
        });
    };

    // Moving to the parent it already has is pointless
    let unchanged = move || selected.get() == current_parent;

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>"جابجایی: " {location.name.clone()}</h2>

                {(!location.breadcrumb.is_empty()).then(|| view! {
                    <div class="modal-current">
                        <span class="form-label">"مکان فعلی:"</span>
                        <p>{location.breadcrumb.clone()}</p>
                    </div>
                })}

                <span class="form-label">"انتخاب مکان مقصد:"</span>
                <TreeSelector
                    root_data=root_data
                    selected=selected
                    select_filter=filter_move_target(id)
                />

                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "انصراف"
                    </button>
                    <button
                        disabled=move || unchanged() || moving.get()
                        on:click=submit
                    >
                        {move || if moving.get() { "در حال جابجایی..." } else { "جابجایی" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
