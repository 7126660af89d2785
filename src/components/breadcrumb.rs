//! Breadcrumb Component
//!
//! Ancestor chain for the location currently browsed into.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format::type_icon;
use crate::models::BreadcrumbItem;

#[component]
pub fn Breadcrumb(
    /// Jump to a crumb; `None` is the root level
    on_navigate: Callback<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (crumbs, set_crumbs) = signal(Vec::<BreadcrumbItem>::new());

    Effect::new(move |_| {
        let parent = ctx.current_parent.get();
        spawn_local(async move {
            match parent {
                Some(id) => match api::get_breadcrumb(id).await {
                    Ok(chain) => set_crumbs.set(chain),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[CRUMB] breadcrumb for {} failed: {}", id, err).into(),
                        );
                    }
                },
                None => set_crumbs.set(Vec::new()),
            }
        });
    });

    view! {
        <nav class="breadcrumb">
            <span class="crumb" on:click=move |_| on_navigate.run(None)>"🏠 خانه"</span>
            <For
                each=move || crumbs.get()
                key=|crumb| crumb.id
                children=move |crumb| {
                    let id = crumb.id;
                    view! {
                        <span class="crumb-sep">"‹"</span>
                        <span class="crumb" on:click=move |_| on_navigate.run(Some(id))>
                            {type_icon(crumb.location_type)} " " {crumb.name.clone()}
                        </span>
                    }
                }
            />
        </nav>
    }
}
