//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumb;
mod bulk_actions;
mod cleaning_list;
mod detail_modal;
mod export_button;
mod location_card;
mod location_form;
mod move_modal;
mod search_bar;
mod statistics_panel;
mod tree_row;
mod tree_selector;
mod type_selector;

pub use breadcrumb::Breadcrumb;
pub use bulk_actions::BulkActions;
pub use cleaning_list::CleaningList;
pub use detail_modal::DetailModal;
pub use export_button::ExportButton;
pub use location_card::LocationCard;
pub use location_form::LocationForm;
pub use move_modal::MoveModal;
pub use search_bar::SearchBar;
pub use statistics_panel::StatisticsPanel;
pub use tree_row::TreeRow;
pub use tree_selector::TreeSelector;
pub use type_selector::TypeSelector;
