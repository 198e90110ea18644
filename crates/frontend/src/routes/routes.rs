use crate::domain::a025_smart_inventory::ui::details::routing::INVENTORIES_LIST_PATH;
use crate::domain::a025_smart_inventory::ui::details::SmartInventoryDetail;
use crate::domain::a025_smart_inventory::ui::list::SmartInventoryList;
use crate::layout::global_context::use_i18n;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();
    view! { <div class="page">{i18n.tr("route-not-found")}</div> }
}

/// The detail page stays mounted while its sub-route changes, so tab switches
/// never remount it. Both children are empty: the page resolves the
/// sub-route from the pathname itself.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=INVENTORIES_LIST_PATH /> } />
                    <Route path=path!("/inventories") view=SmartInventoryList />
                    <ParentRoute path=path!("/inventories/smart_inventory/:id") view=SmartInventoryDetail>
                        <Route path=path!("") view=|| () />
                        <Route path=path!("/*any") view=|| () />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
