//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Location, Statistics};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Locations under the current parent (grid view)
    pub locations: Vec<Location>,
    /// Latest statistics snapshot
    pub statistics: Option<Statistics>,
    /// Bulk-mode selection
    pub selected_ids: Vec<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update a location in the store by ID (no-op when it is not in the grid)
pub fn store_update_location(store: &AppStore, updated: Location) {
    let locations_field = store.locations();
    let mut locations = locations_field.write();
    if let Some(location) = locations.iter_mut().find(|loc| loc.id == updated.id) {
        *location = updated;
    }
}

/// Remove a location from the store by ID
pub fn store_remove_location(store: &AppStore, location_id: u32) {
    store.locations().write().retain(|loc| loc.id != location_id);
    store.selected_ids().write().retain(|id| *id != location_id);
}

/// Toggle a location's membership in the bulk selection
pub fn store_toggle_selected(store: &AppStore, location_id: u32) {
    let selected_field = store.selected_ids();
    let mut selected = selected_field.write();
    if selected.contains(&location_id) {
        selected.retain(|id| *id != location_id);
    } else {
        selected.push(location_id);
    }
}

/// Clear the bulk selection
pub fn store_clear_selection(store: &AppStore) {
    store.selected_ids().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationType;

    fn make_location(id: u32, needs_cleaning: bool) -> Location {
        Location {
            id,
            name: format!("مکان {}", id),
            location_type: LocationType::Box,
            description: String::new(),
            is_container: true,
            barcode: None,
            quantity: 1,
            value: None,
            cleaned_time: None,
            cleaned_duration: 30,
            created_at: "2026-08-01T12:00:00Z".to_string(),
            updated_at: "2026-08-01T12:00:00Z".to_string(),
            breadcrumb: String::new(),
            children_count: 0,
            needs_cleaning,
            images: Vec::new(),
            parent_id: None,
        }
    }

    fn store_with(locations: Vec<Location>) -> AppStore {
        let store = Store::new(AppState::new());
        *store.locations().write() = locations;
        store
    }

    #[test]
    fn update_replaces_matching_location_only() {
        let store = store_with(vec![make_location(1, true), make_location(2, false)]);

        let mut cleaned = make_location(1, false);
        cleaned.cleaned_time = Some("2026-08-28T12:00:00Z".to_string());
        store_update_location(&store, cleaned.clone());

        let locations = store.locations().read();
        assert_eq!(locations[0], cleaned);
        assert_eq!(locations[1], make_location(2, false));
    }

    #[test]
    fn update_ignores_locations_outside_the_grid() {
        let store = store_with(vec![make_location(1, false)]);
        store_update_location(&store, make_location(99, true));
        assert_eq!(store.locations().read().len(), 1);
        assert_eq!(store.locations().read()[0].id, 1);
    }

    #[test]
    fn remove_drops_location_and_its_selection() {
        let store = store_with(vec![make_location(1, false), make_location(2, false)]);
        store_toggle_selected(&store, 1);
        store_toggle_selected(&store, 2);

        store_remove_location(&store, 1);

        let ids: Vec<u32> = store.locations().read().iter().map(|loc| loc.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(*store.selected_ids().read(), vec![2]);
    }

    #[test]
    fn toggle_selected_flips_membership() {
        let store = store_with(vec![make_location(1, false)]);
        store_toggle_selected(&store, 1);
        assert_eq!(*store.selected_ids().read(), vec![1]);
        store_toggle_selected(&store, 1);
        assert!(store.selected_ids().read().is_empty());

        store_toggle_selected(&store, 1);
        store_clear_selection(&store);
        assert!(store.selected_ids().read().is_empty());
    }
}
