use leptos::prelude::*;
use thaw::*;

use super::filter_panel::FilterPanel;
use super::metrics::MetricsSummary;
use super::viewer::SnapshotViewer;
use crate::dashboards::d400_pl_report::context::use_report;

/// P&L report page: filter, optional summary, spreadsheet
#[component]
pub fn PlReportPage() -> impl IntoView {
    let report = use_report();

    let reload_note = move || {
        report.with(|s| {
            s.last_reload.as_ref().map(|r| {
                let details = r
                    .statistics
                    .as_ref()
                    .map(|st| format!(" ({} rows, {} business groups)", st.total_rows, st.business_groups))
                    .unwrap_or_default();
                format!("{}{}", r.message, details)
            })
        })
    };

    view! {
        <div class="report-page">
            <Flex vertical=true gap=FlexGap::Medium>
                <FilterPanel />
                {move || reload_note().map(|note| view! {
                    <div class="report-page__note">{note}</div>
                })}
                <MetricsSummary />
                <SnapshotViewer />
            </Flex>
        </div>
    }
}
