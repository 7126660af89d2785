//! Statistics Panel Component
//!
//! Overview of the inventory: totals and a per-type breakdown with bars.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatisticsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        ctx.track_reload();
        spawn_local(async move {
            match api::get_statistics().await {
                Ok(stats) => store.statistics().set(Some(stats)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[STATS] load failed: {}", err).into());
                }
            }
            set_loading.set(false);
        });
    });

    // (label, count, percent) rows sorted by count, recomputed per snapshot
    let chart_rows = move || {
        store.statistics().with(|stats| {
            let Some(stats) = stats else {
                return Vec::new();
            };
            let total = stats.total_locations.max(1);
            let mut rows: Vec<(String, u32, f64)> = stats
                .by_type
                .values()
                .map(|info| {
                    (
                        info.name.clone(),
                        info.count,
                        info.count as f64 * 100.0 / total as f64,
                    )
                })
                .collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1));
            rows
        })
    };

    view! {
        <div class="statistics-panel">
            <h2>"آمار سیستم"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"بارگذاری آمار..."</div> }
            >
                {move || store.statistics().get().map(|stats| view! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-value">{stats.total_locations}</span>
                            <span class="stat-label">"کل مکان‌ها"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{stats.containers}</span>
                            <span class="stat-label">"ظرف‌ها"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{stats.items}</span>
                            <span class="stat-label">"آیتم‌ها"</span>
                        </div>
                        <div class="stat-card warn">
                            <span class="stat-value">{stats.locations_needing_cleaning}</span>
                            <span class="stat-label">"نیازمند تمیزکاری"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{stats.locations_with_barcode}</span>
                            <span class="stat-label">"دارای بارکد"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{stats.locations_with_images}</span>
                            <span class="stat-label">"دارای تصویر"</span>
                        </div>
                    </div>
                })}

                <div class="type-chart">
                    <For
                        each=chart_rows
                        key=|(label, count, _)| (label.clone(), *count)
                        children=|(label, count, percent)| view! {
                            <div class="chart-row">
                                <span class="chart-label">{label}</span>
                                <div class="chart-bar-track">
                                    <div
                                        class="chart-bar"
                                        style=format!("width: {:.1}%;", percent)
                                    />
                                </div>
                                <span class="chart-count">{count}</span>
                            </div>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
