pub mod global_context;
pub mod header;

use global_context::use_i18n;
use header::Header;
use leptos::prelude::*;

/// Application shell: breadcrumb header on top, routed page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let lang = use_i18n().locale().to_string();

    view! {
        <div class="app-layout" lang=lang>
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
