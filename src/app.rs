//! JaayBaan Frontend App
//!
//! Main application component: sidebar tree, location grid, modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    Breadcrumb, BulkActions, CleaningList, DetailModal, ExportButton, LocationCard, LocationForm,
    MoveModal, SearchBar, StatisticsPanel, TreeSelector,
};
use crate::context::AppContext;
use crate::models::{Location, SearchParams, TreeNode};
use crate::store::{store_clear_selection, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (current_parent, set_current_parent) = signal::<Option<u32>>(None);
    let (root_tree, set_root_tree) = signal::<Option<Vec<TreeNode>>>(None);
    let (search_results, set_search_results) = signal::<Option<Vec<Location>>>(None);
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Location>>(None);
    let (viewing, set_viewing) = signal::<Option<Location>>(None);
    let (moving, set_moving) = signal::<Option<Location>>(None);
    let (show_stats, set_show_stats) = signal(false);
    let (bulk_mode, set_bulk_mode) = signal(false);

    // Sidebar tree selection mirrors the browsed-into parent
    let selected_nav = RwSignal::new(None::<u32>);

    // Provide context to all children
    let store = Store::new(AppState::new());
    provide_context(store);
    let ctx = AppContext::provide(current_parent);

    // Load tree roots on mount and after every mutation
    Effect::new(move |_| {
        ctx.track_reload();
        spawn_local(async move {
            match api::fetch_tree(None).await {
                Ok(roots) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tree roots", roots.len()).into(),
                    );
                    set_root_tree.set(Some(roots));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] tree load failed: {}", err).into());
                }
            }
        });
    });

    // Load the location grid for the current parent
    Effect::new(move |_| {
        ctx.track_reload();
        let parent = current_parent.get();
        spawn_local(async move {
            let params = SearchParams {
                parent_id: Some(parent),
                page_size: Some(50),
                ..Default::default()
            };
            match api::list_locations(&params).await {
                Ok(page) => store.locations().set(page.results),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] locations load failed: {}", err).into(),
                    );
                }
            }
        });
    });

    // Browsing through the sidebar tree
    Effect::new(move |_| {
        set_current_parent.set(selected_nav.get());
    });

    let navigate = Callback::new(move |parent: Option<u32>| {
        selected_nav.set(parent);
        set_search_results.set(None);
    });

    let open_location = Callback::new(move |id: u32| {
        selected_nav.set(Some(id));
        set_search_results.set(None);
    });

    let edit_location = Callback::new(move |location: Location| {
        set_editing.set(Some(location));
        set_show_form.set(true);
    });

    let view_location = Callback::new(move |location: Location| {
        set_viewing.set(Some(location));
    });

    let add_child = Callback::new(move |parent_id: u32| {
        ctx.begin_adding(Some(parent_id));
        set_editing.set(None);
        set_show_form.set(true);
    });

    let move_location = Callback::new(move |location: Location| {
        set_moving.set(Some(location));
    });

    let close_form = Callback::new(move |_| {
        set_show_form.set(false);
        set_editing.set(None);
        ctx.cancel_adding();
    });

    let displayed = move || {
        search_results
            .get()
            .unwrap_or_else(|| store.locations().get())
    };

    view! {
        <div class="app-layout" dir="rtl">
            // Right (RTL): location tree + cleaning sidebar
            <aside class="sidebar">
                <h1>"جای بان"</h1>
                <TreeSelector
                    root_data=Signal::derive(move || root_tree.get())
                    selected=selected_nav
                    root_label="همه مکان‌ها"
                />
                <CleaningList/>
            </aside>

            // Main content
            <main class="main-content">
                <header class="toolbar">
                    <SearchBar set_results=set_search_results/>
                    // New locations default under the parent being browsed
                    <button on:click=move |_| {
                        ctx.begin_adding(current_parent.get_untracked());
                        set_editing.set(None);
                        set_show_form.set(true);
                    }>"مکان جدید"</button>
                    <button
                        class=move || if bulk_mode.get() { "toggle active" } else { "toggle" }
                        on:click=move |_| {
                            set_bulk_mode.update(|v| *v = !*v);
                            store_clear_selection(&store);
                        }
                    >"انتخاب گروهی"</button>
                    <button
                        class=move || if show_stats.get() { "toggle active" } else { "toggle" }
                        on:click=move |_| set_show_stats.update(|v| *v = !*v)
                    >"آمار"</button>
                    <ExportButton/>
                </header>

                <Breadcrumb on_navigate=navigate/>

                {move || bulk_mode.get().then(|| view! { <BulkActions/> })}

                <Show
                    when=move || !show_stats.get()
                    fallback=|| view! { <StatisticsPanel/> }
                >
                    <div class="location-grid">
                        <For
                            each=displayed
                            key=|loc| (loc.id, loc.updated_at.clone())
                            children=move |location| view! {
                                <LocationCard
                                    location=location
                                    bulk_mode=Signal::derive(move || bulk_mode.get())
                                    on_open=open_location
                                    on_view=view_location
                                    on_edit=edit_location
                                    on_move=move_location
                                    on_add_child=add_child
                                />
                            }
                        />
                        <Show when=move || displayed().is_empty()>
                            <div class="grid-empty">"هیچ مکانی یافت نشد"</div>
                        </Show>
                    </div>
                </Show>
            </main>

            // Modals
            {move || show_form.get().then(|| view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <LocationForm
                            editing=Signal::derive(move || editing.get())
                            root_data=Signal::derive(move || root_tree.get())
                            on_close=close_form
                        />
                    </div>
                </div>
            })}
            {move || viewing.get().map(|location| view! {
                <DetailModal
                    location=location
                    on_edit=edit_location
                    on_close=Callback::new(move |_| set_viewing.set(None))
                />
            })}
            {move || moving.get().map(|location| view! {
                <MoveModal
                    location=location
                    root_data=Signal::derive(move || root_tree.get())
                    on_close=Callback::new(move |_| set_moving.set(None))
                />
            })}
        </div>
    }
}
