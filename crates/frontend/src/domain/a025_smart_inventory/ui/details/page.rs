//! Main page component for the smart inventory detail page

use super::composer::{compose, PageBody};
use super::error_presenter::{ErrorPresenter, RouteNotFound};
use super::loader::{LocationSnapshot, NavigationSnapshot};
use super::routing::{RouteContext, SmartInventoryRoute, INVENTORIES_LIST_PATH};
use super::tab_registry::tabs_for;
use super::tabs::{AccessTab, CompletedJobsTab, DetailsTab, EditTab, HostsTab};
use super::view_model::SmartInventoryDetailsVm;
use crate::layout::global_context::{use_global_context, use_i18n};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::{use_location, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

#[component]
pub fn SmartInventoryDetail() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let params = use_params_map();
    let vm = SmartInventoryDetailsVm::new();

    let route = Memo::new(move |_| RouteContext::parse(&location.pathname.get()));

    // Runs once per navigation; the loader decides whether it needs a fetch.
    Effect::new(move |_| {
        let snapshot = NavigationSnapshot {
            id: params.read().get("id").unwrap_or_default(),
            location: LocationSnapshot {
                pathname: location.pathname.get(),
                search: location.search.get(),
                hash: location.hash.get(),
            },
        };
        vm.navigate(snapshot, ctx);
    });

    on_cleanup(move || ctx.clear_breadcrumb());

    let plan = Memo::new(move |_| compose(&vm.state.get(), &route.get()));

    view! {
        <PageFrame page_id="a025_smart_inventory--detail" category=PAGE_CAT_DETAIL>
            {move || {
                let plan = plan.get();
                let current = route.get();
                let chrome = match (plan.show_chrome, current.id) {
                    (true, Some(id)) => Some(view! { <TabChrome id=id active=current.route /> }),
                    _ => None,
                };
                view! {
                    {chrome}
                    <div class="page__content">
                        {render_body(plan.body)}
                    </div>
                }
            }}
        </PageFrame>
    }
}

fn render_body(body: PageBody) -> AnyView {
    match body {
        PageBody::Redirect { to } => view! {
            <Redirect path=to options={NavigateOptions { replace: true, ..Default::default() }} />
        }
        .into_any(),
        PageBody::Loading => view! { <LoadingIndicator /> }.into_any(),
        PageBody::Error(error) => view! { <ErrorPresenter error=error /> }.into_any(),
        PageBody::Details(inventory) => view! { <DetailsTab inventory=inventory /> }.into_any(),
        PageBody::Edit(inventory) => view! { <EditTab inventory=inventory /> }.into_any(),
        PageBody::Access(inventory) => view! { <AccessTab inventory=inventory /> }.into_any(),
        PageBody::Hosts(inventory) => view! { <HostsTab inventory=inventory /> }.into_any(),
        PageBody::CompletedJobs { inventory, filter } => {
            view! { <CompletedJobsTab inventory=inventory filter=filter /> }.into_any()
        }
        PageBody::NotFound { details_link } => {
            view! { <RouteNotFound details_link=details_link /> }.into_any()
        }
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
            <Spinner />
            <span>{i18n.tr("loading")}</span>
        </Flex>
    }
}

/// Tab header with the close link back to the listing.
#[component]
fn TabChrome(id: String, active: SmartInventoryRoute) -> impl IntoView {
    let i18n = use_i18n();
    let tabs = tabs_for(&id, &i18n);

    view! {
        <div class="page__header">
            <nav class="page__header-left tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let class = if tab.route == active { "tabs__item tabs__item--active" } else { "tabs__item" };
                        view! {
                            <A href=tab.path attr:class=class attr:data-order=tab.order.to_string()>
                                {tab.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="page__header-right">
                <A href=INVENTORIES_LIST_PATH attr:class="button button--ghost" attr:aria-label=i18n.tr("action-close")>
                    "✕"
                </A>
            </div>
        </div>
    }
}
