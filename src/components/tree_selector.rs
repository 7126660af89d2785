//! Lazy Tree Selector Component
//!
//! Renders the location hierarchy with on-demand child loading and drives
//! the [`LazyTree`] state container. Children of a node are fetched the
//! first time it is expanded and cached for the rest of the session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TreeRow;
use crate::models::TreeNode;
use crate::tree::{filter_any, flatten_visible, LazyTree, SelectFilter, ToggleAction};

#[component]
pub fn TreeSelector(
    /// Root nodes from the server; `None` while the initial load is running
    root_data: Signal<Option<Vec<TreeNode>>>,
    /// Currently selected location; `None` means the root option
    selected: RwSignal<Option<u32>>,
    #[prop(default = true)] show_root: bool,
    #[prop(default = "ریشه (بدون والد)")] root_label: &'static str,
    #[prop(default = "مکانی برای انتخاب موجود نیست")] empty_message: &'static str,
    /// Selection-eligibility predicate, checked fresh on every render
    #[prop(optional)] select_filter: Option<SelectFilter>,
) -> impl IntoView {
    let tree = RwSignal::new(LazyTree::new());
    let filter = StoredValue::new_local(select_filter.unwrap_or_else(filter_any));

    // Rebuild the forest whenever fresh root data arrives. All view state
    // (expansion, caches) is intentionally discarded with the old forest.
    Effect::new(move |_| {
        let roots = root_data.get().unwrap_or_default();
        tree.update(|t| t.initialize(roots));
    });

    // Keep the container's selection in sync with the owning form/modal
    Effect::new(move |_| {
        let sel = selected.get();
        tree.update(|t| t.select(sel));
    });

    let on_toggle = Callback::new(move |id: u32| {
        match tree.with_untracked(|t| t.toggle_action(id)) {
            ToggleAction::Ignore => {}
            ToggleAction::Collapse => tree.update(|t| t.collapse(id)),
            ToggleAction::Expand => tree.update(|t| t.expand(id)),
            ToggleAction::Fetch => {
                tree.update(|t| t.begin_load(id));
                spawn_local(async move {
                    match api::fetch_tree(Some(id)).await {
                        Ok(children) => tree.update(|t| t.attach_children(id, children)),
                        Err(err) => {
                            // Leave the node collapsed/unloaded; the next
                            // toggle retries the fetch.
                            web_sys::console::error_1(
                                &format!("[TREE] loading children of {} failed: {}", id, err)
                                    .into(),
                            );
                            tree.update(|t| t.load_failed(id));
                        }
                    }
                });
            }
        }
    });

    let on_select = Callback::new(move |id: u32| {
        selected.set(Some(id));
    });

    let is_root_loading = move || root_data.get().is_none();
    let rows = move || tree.with(|t| flatten_visible(t.nodes()));

    view! {
        <div class="tree-selector">
            {show_root.then(|| {
                let root_selected = move || selected.get().is_none();
                view! {
                    <div
                        class=move || if root_selected() { "tree-row root selected" } else { "tree-row root" }
                        on:click=move |_| selected.set(None)
                    >
                        <span class="type-icon">"🏠"</span>
                        <span class="row-name">{root_label}</span>
                        {move || root_selected().then_some(view! {
                            <span class="selected-mark">"✔"</span>
                        })}
                    </div>
                }
            })}

            <Show
                when=move || !is_root_loading()
                fallback=|| view! {
                    <div class="tree-loading">"بارگذاری درخت مکان‌ها..."</div>
                }
            >
                <Show
                    when=move || !rows().is_empty()
                    fallback=move || view! {
                        <div class="tree-empty">{empty_message}</div>
                    }
                >
                    <For
                        each=rows
                        key=|(node, depth)| {
                            // Every field a toggle or fetch can change is in
                            // the key so the row re-renders on transitions
                            (
                                node.id,
                                *depth,
                                node.is_expanded,
                                node.is_loading,
                                node.has_loaded_children,
                                node.needs_cleaning,
                                node.children_count,
                            )
                        }
                        children=move |(node, depth)| {
                            let id = node.id;
                            let can_select =
                                tree.with_untracked(|t| filter.with_value(|f| f(t.nodes(), &node)));
                            let is_selected = Signal::derive(move || selected.get() == Some(id));
                            view! {
                                <TreeRow
                                    node=node
                                    depth=depth
                                    can_select=can_select
                                    is_selected=is_selected
                                    on_toggle=on_toggle
                                    on_select=on_select
                                />
                            }
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}
