//! Smart inventory detail page
//!
//! MVVM layout:
//! - model.rs: API functions and transport errors
//! - routing.rs, load_state.rs, loader.rs, tab_registry.rs, composer.rs:
//!   the load/render state machine, free of UI types
//! - view_model.rs: reactive wrapper that runs the loader
//! - page.rs, error_presenter.rs, tabs/: Leptos components

pub mod composer;
pub mod error_presenter;
pub mod load_state;
pub mod loader;
pub mod model;
mod page;
pub mod routing;
pub mod tab_registry;
mod tabs;
mod view_model;

pub use page::SmartInventoryDetail;
pub use view_model::SmartInventoryDetailsVm;
