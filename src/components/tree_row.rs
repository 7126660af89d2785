//! Tree Row Component
//!
//! A single location row in the lazy tree selector.

use leptos::prelude::*;

use crate::format::{type_icon, type_label};
use crate::tree::LazyNode;

/// One row of the lazy tree: caret, icon, name, badges.
///
/// The caret is only drawn for containers with declared children; while a
/// child fetch is in flight it turns into a spinner and the button is
/// disabled so no second fetch can start from the UI.
#[component]
pub fn TreeRow(
    node: LazyNode,
    depth: usize,
    can_select: bool,
    is_selected: Signal<bool>,
    on_toggle: Callback<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    let id = node.id;
    let has_children = node.is_container && node.children_count > 0;
    let is_expanded = node.is_expanded;
    let is_loading = node.is_loading;
    let indent = depth * 20;

    let row_class = move || {
        let mut c = String::from("tree-row");
        if is_selected.get() {
            c.push_str(" selected");
        }
        if !can_select {
            c.push_str(" disabled");
        }
        c
    };

    view! {
        <div
            class=row_class
            style=format!("margin-right: {}px;", indent)
            on:click=move |_| {
                if can_select {
                    on_select.run(id);
                }
            }
        >
            // Expand/collapse caret (spinner while loading)
            {if has_children {
                view! {
                    <button
                        class="collapse-btn"
                        disabled=is_loading
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_toggle.run(id);
                        }
                    >
                        {if is_loading { "⌛" } else if is_expanded { "▼" } else { "◀" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <span class="type-icon">{type_icon(node.location_type)}</span>

            <div class="row-main">
                <span class="row-name">{node.name.clone()}</span>
                {(node.is_container && node.children_count > 0).then(|| view! {
                    <span class="children-count">"(" {node.children_count} ")"</span>
                })}
                {node.needs_cleaning.then(|| view! {
                    <span class="needs-cleaning" title="نیاز به تمیزکاری">"⚠"</span>
                })}
            </div>

            <span class="row-type">
                {type_label(node.location_type)}
                {(!can_select).then_some(" (غیر قابل انتخاب)")}
            </span>

            {move || is_selected.get().then_some(view! {
                <span class="selected-mark">"✔"</span>
            })}
        </div>
    }
}
