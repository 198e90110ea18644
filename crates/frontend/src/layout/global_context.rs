use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::i18n::I18n;

/// Navigation chrome state shared by the header and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub breadcrumb: RwSignal<Option<Breadcrumb>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    pub link: String,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            breadcrumb: RwSignal::new(None),
        }
    }

    pub fn set_breadcrumb(&self, crumb: Breadcrumb) {
        log::debug!("breadcrumb: '{}' -> {}", crumb.title, crumb.link);
        self.breadcrumb.set(Some(crumb));
    }

    pub fn clear_breadcrumb(&self) {
        self.breadcrumb.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

pub fn use_i18n() -> Arc<I18n> {
    use_context::<Arc<I18n>>().expect("I18n context not found")
}
