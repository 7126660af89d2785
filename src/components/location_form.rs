//! Location Form Component
//!
//! Create/edit form for a location, with the lazy tree as parent picker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TreeSelector, TypeSelector};
use crate::context::AppContext;
use crate::models::{CreateLocationData, Location, LocationType, TreeNode, UpdateLocationData};
use crate::tree::filter_containers;

#[component]
pub fn LocationForm(
    /// `Some` puts the form in edit mode
    editing: Signal<Option<Location>>,
    /// Root nodes for the parent picker
    root_data: Signal<Option<Vec<TreeNode>>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (location_type, set_location_type) = signal(LocationType::Box);
    let (is_container, set_is_container) = signal(false);
    let (description, set_description) = signal(String::new());
    let (barcode, set_barcode) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);
    let (value, set_value) = signal(String::new());
    let (cleaned_duration, set_cleaned_duration) = signal(30u32);
    let parent = RwSignal::new(None::<u32>);
    let (saving, set_saving) = signal(false);

    // Prefill from the location being edited, or from the "add child under"
    // target for a new one
    Effect::new(move |_| {
        if let Some(location) = editing.get() {
            set_name.set(location.name);
            set_location_type.set(location.location_type);
            set_is_container.set(location.is_container);
            set_description.set(location.description);
            set_barcode.set(location.barcode.unwrap_or_default());
            set_quantity.set(location.quantity);
            set_value.set(location.value.map(|v| v.to_string()).unwrap_or_default());
            set_cleaned_duration.set(location.cleaned_duration);
            parent.set(location.parent_id);
        } else {
            parent.set(ctx.adding_under());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.trim().is_empty() || saving.get() {
            return;
        }
        set_saving.set(true);

        let editing_id = editing.get_untracked().map(|loc| loc.id);
        let description_value = description.get();
        let barcode_value = barcode.get();
        let parsed_value = value.get().trim().parse::<f64>().ok();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => {
                    let data = UpdateLocationData {
                        name: Some(name_value),
                        location_type: Some(location_type.get_untracked()),
                        description: Some(description_value),
                        is_container: Some(is_container.get_untracked()),
                        parent_id: parent.get_untracked(),
                        barcode: (!barcode_value.is_empty()).then_some(barcode_value),
                        quantity: Some(quantity.get_untracked()),
                        value: parsed_value,
                        cleaned_duration: Some(cleaned_duration.get_untracked()),
                    };
                    api::update_location(id, &data).await.map(|_| ())
                }
                None => {
                    let data = CreateLocationData {
                        name: name_value,
                        location_type: location_type.get_untracked(),
                        description: (!description_value.is_empty()).then_some(description_value),
                        is_container: is_container.get_untracked(),
                        parent_id: parent.get_untracked(),
                        barcode: (!barcode_value.is_empty()).then_some(barcode_value),
                        quantity: Some(quantity.get_untracked()),
                        value: parsed_value,
                        cleaned_duration: Some(cleaned_duration.get_untracked()),
                    };
                    api::create_location(&data).await.map(|_| ())
                }
            };

            set_saving.set(false);
            match result {
                Ok(()) => {
                    ctx.cancel_adding();
                    ctx.reload();
                    on_close.run(());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] save failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <form class="location-form" on:submit=submit>
            <h2>{move || if editing.get().is_some() { "ویرایش مکان" } else { "مکان جدید" }}</h2>

            <input
                type="text"
                placeholder="نام مکان..."
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />

            <TypeSelector
                current_type=location_type
                on_change=move |ty| set_location_type.set(ty)
            />

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || is_container.get()
                    on:change=move |_| set_is_container.update(|v| *v = !*v)
                />
                "می‌تواند شامل مکان‌های دیگر باشد"
            </label>

            <div class="form-section">
                <span class="form-label">"مکان والد"</span>
                <TreeSelector
                    root_data=root_data
                    selected=parent
                    select_filter=filter_containers()
                />
            </div>

            <div class="form-row">
                <input
                    type="text"
                    placeholder="بارکد"
                    prop:value=move || barcode.get()
                    on:input=move |ev| set_barcode.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="تعداد"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse() {
                            set_quantity.set(parsed);
                        }
                    }
                />
            </div>

            <div class="form-row">
                <input
                    type="text"
                    placeholder="ارزش (تومان)"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="بازه تمیزکاری (روز)"
                    prop:value=move || cleaned_duration.get().to_string()
                    on:input=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse() {
                            set_cleaned_duration.set(parsed);
                        }
                    }
                />
            </div>

            <textarea
                placeholder="توضیحات..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                    "انصراف"
                </button>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "در حال ذخیره..." } else { "ذخیره" }}
                </button>
            </div>
        </form>
    }
}
