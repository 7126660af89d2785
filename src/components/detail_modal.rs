//! Location Detail Modal
//!
//! Read-only view of one location: description, images, identifiers and
//! cleaning schedule. Image upload happens outside this frontend.

use leptos::prelude::*;

use crate::format::{cleaning_status, format_currency, type_icon, type_label, CleaningStatus};
use crate::models::{Location, LocationImage};

/// Images with the primary one first, the rest in server order.
pub fn primary_first(images: &[LocationImage]) -> Vec<LocationImage> {
    let mut ordered: Vec<LocationImage> = Vec::with_capacity(images.len());
    ordered.extend(images.iter().filter(|img| img.is_primary).cloned());
    ordered.extend(images.iter().filter(|img| !img.is_primary).cloned());
    ordered
}

fn date_part(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[component]
pub fn DetailModal(
    location: Location,
    on_edit: Callback<Location>,
    on_close: Callback<()>,
) -> impl IntoView {
    let status = cleaning_status(location.cleaned_time.as_deref(), location.cleaned_duration);
    let status_class = match status {
        CleaningStatus::NeedsCleaning(_) => "cleaning-status overdue",
        CleaningStatus::Clean(_) => "cleaning-status ok",
        CleaningStatus::Unknown => "cleaning-status unknown",
    };
    let images = primary_first(&location.images);
    let edit_target = location.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal detail-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="detail-header">
                    <span class="type-icon">{type_icon(location.location_type)}</span>
                    <h2>{location.name.clone()}</h2>
                    {location.needs_cleaning.then(|| view! {
                        <span class="needs-cleaning" title="نیاز به تمیزکاری">"⚠"</span>
                    })}
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                {(!location.breadcrumb.is_empty()).then(|| view! {
                    <div class="detail-breadcrumb">{location.breadcrumb.clone()}</div>
                })}

                {(!images.is_empty()).then(|| view! {
                    <div class="image-gallery">
                        <For
                            each=move || images.clone()
                            key=|img| img.id
                            children=|img| view! {
                                <figure class=if img.is_primary { "gallery-item primary" } else { "gallery-item" }>
                                    <img
                                        src=img.image.clone()
                                        alt=img.description.clone().unwrap_or_else(|| "تصویر مکان".to_string())
                                    />
                                    {img.is_primary.then(|| view! {
                                        <span class="primary-badge">"اصلی"</span>
                                    })}
                                </figure>
                            }
                        />
                    </div>
                })}

                {(!location.description.is_empty()).then(|| view! {
                    <p class="detail-description">{location.description.clone()}</p>
                })}

                <dl class="detail-grid">
                    <dt>"نوع"</dt>
                    <dd>{type_label(location.location_type)}</dd>
                    <dt>"تعداد"</dt>
                    <dd>{location.quantity}</dd>
                    {location.value.map(|value| view! {
                        <dt>"ارزش"</dt>
                        <dd>{format_currency(value)}</dd>
                    })}
                    {location.barcode.clone().map(|barcode| view! {
                        <dt>"بارکد"</dt>
                        <dd class="barcode">{barcode}</dd>
                    })}
                    <dt>"بازه تمیزکاری"</dt>
                    <dd>{location.cleaned_duration} " روز"</dd>
                    <dt>"ایجاد"</dt>
                    <dd>{date_part(&location.created_at)}</dd>
                    <dt>"آخرین تغییر"</dt>
                    <dd>{date_part(&location.updated_at)}</dd>
                </dl>

                <div class=status_class>{status.message()}</div>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "بستن"
                    </button>
                    <button type="button" on:click=move |_| {
                        on_edit.run(edit_target.clone());
                        on_close.run(());
                    }>"ویرایش"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_image(id: u32, is_primary: bool) -> LocationImage {
        LocationImage {
            id,
            image: format!("/media/{}.jpg", id),
            description: None,
            is_primary,
            created_at: "2026-08-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn primary_image_leads_the_gallery() {
        let images = vec![make_image(1, false), make_image(2, true), make_image(3, false)];
        let ids: Vec<u32> = primary_first(&images).iter().map(|img| img.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn gallery_order_is_stable_without_a_primary() {
        let images = vec![make_image(1, false), make_image(2, false)];
        let ids: Vec<u32> = primary_first(&images).iter().map(|img| img.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn date_part_drops_the_time() {
        assert_eq!(date_part("2026-08-28T09:30:00Z"), "2026-08-28");
        assert_eq!(date_part("2026-08-28"), "2026-08-28");
    }
}
