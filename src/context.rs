//! Application Context
//!
//! App-wide invalidation and form-target state, provided via Leptos context.

use leptos::prelude::*;

/// Shared handle for cross-component concerns: server-data invalidation
/// and the "add a child under X" form target.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every mutation; loaders subscribe via [`track_reload`](Self::track_reload)
    reload_epoch: RwSignal<u32>,
    /// Parent for the next created location (None = root)
    adding_under: RwSignal<Option<u32>>,
    /// Parent currently browsed into (None = root level)
    pub current_parent: ReadSignal<Option<u32>>,
}

impl AppContext {
    /// Build the context and hand it to all child components.
    pub fn provide(current_parent: ReadSignal<Option<u32>>) -> Self {
        let ctx = Self {
            reload_epoch: RwSignal::new(0),
            adding_under: RwSignal::new(None),
            current_parent,
        };
        provide_context(ctx);
        ctx
    }

    /// Invalidate server data; every loader that called
    /// [`track_reload`](Self::track_reload) runs again.
    pub fn reload(&self) {
        self.reload_epoch.update(|v| *v += 1);
    }

    /// Subscribe the current effect to reload broadcasts.
    pub fn track_reload(&self) {
        self.reload_epoch.track();
    }

    /// Aim the creation form at a parent location.
    pub fn begin_adding(&self, parent_id: Option<u32>) {
        self.adding_under.set(parent_id);
    }

    pub fn cancel_adding(&self) {
        self.adding_under.set(None);
    }

    /// Current target for a new child location, read untracked.
    pub fn adding_under(&self) -> Option<u32> {
        self.adding_under.get_untracked()
    }
}
