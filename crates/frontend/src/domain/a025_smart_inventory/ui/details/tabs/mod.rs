//! Sub-views of the smart inventory detail page

mod access;
mod completed_jobs;
mod details;
mod edit;
mod hosts;

pub use access::AccessTab;
pub use completed_jobs::CompletedJobsTab;
pub use details::DetailsTab;
pub use edit::EditTab;
pub use hosts::HostsTab;

use super::model::FetchError;
use contracts::domain::a025_smart_inventory::ListPage;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// State of a related list owned by one tab.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(ListPage<T>),
    Failed(String),
}

/// Creates the list signal and fills it from `request`.
pub fn load_list<T, F>(request: F) -> RwSignal<ListState<T>>
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<ListPage<T>, FetchError>> + 'static,
{
    let list = RwSignal::new(ListState::Loading);
    spawn_local(async move {
        let state = match request.await {
            Ok(page) => ListState::Ready(page),
            Err(e) => {
                log::error!("a025: failed to load related list: {}", e);
                ListState::Failed(e.to_string())
            }
        };
        list.set(state);
    });
    list
}
