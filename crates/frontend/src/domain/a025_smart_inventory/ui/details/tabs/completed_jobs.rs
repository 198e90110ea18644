//! Completed jobs tab - unified jobs filtered by the inventory

use super::{load_list, ListState};
use crate::domain::a025_smart_inventory::ui::details::model::fetch_completed_jobs;
use crate::layout::global_context::use_i18n;
use crate::shared::date_utils::format_optional_datetime;
use contracts::domain::a025_smart_inventory::{JobSourceFilter, SmartInventory, UnifiedJobSummary};
use leptos::prelude::*;
use thaw::*;

/// `"ad_hoc_command"` -> `"ad hoc command"`.
fn job_type_label(job_type: &str) -> String {
    job_type.replace('_', " ")
}

#[component]
pub fn CompletedJobsTab(inventory: SmartInventory, filter: JobSourceFilter) -> impl IntoView {
    let i18n = use_i18n();
    let title = format!("{}: {}", i18n.tr("jobs-title"), inventory.name);
    let jobs = load_list(async move { fetch_completed_jobs::<UnifiedJobSummary>(&filter).await });

    view! {
        <Card>
            <h4 class="details-section__title">{title}</h4>
            {move || match jobs.get() {
                ListState::Loading => view! { <Spinner /> }.into_any(),
                ListState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                ListState::Ready(page) if page.results.is_empty() => {
                    view! { <div class="empty">{i18n.tr("jobs-empty")}</div> }.into_any()
                }
                ListState::Ready(page) => view! {
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th>{i18n.tr("field-name")}</th>
                                <th>{i18n.tr("column-type")}</th>
                                <th>{i18n.tr("column-status")}</th>
                                <th>{i18n.tr("column-finished")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page
                                .results
                                .into_iter()
                                .map(|job| {
                                    let finished = format_optional_datetime(job.finished.as_deref());
                                    view! {
                                        <tr>
                                            <td>{job.name}</td>
                                            <td>{job_type_label(&job.job_type)}</td>
                                            <td class=format!("job-status job-status--{}", job.status)>{job.status.clone()}</td>
                                            <td>{finished}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_label() {
        assert_eq!(job_type_label("ad_hoc_command"), "ad hoc command");
        assert_eq!(job_type_label("job"), "job");
    }
}
