use chrono::Utc;
use contracts::dashboards::d400_pl_report::ReportFilter;
use leptos::prelude::*;

use super::api;
use super::state::ReportState;
use crate::shared::export::{download_blob, export_filename};
use crate::shared::http::ApiClient;

/// Report context provider component
///
/// Mounted inside the signed-in layout, so a logout drops the report state.
#[component]
pub fn ReportProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(ReportState::default()));
    children()
}

/// Hook to access report state
pub fn use_report() -> RwSignal<ReportState> {
    use_context::<RwSignal<ReportState>>().expect("ReportProvider not found in component tree")
}

pub async fn load_filter_options(
    client: &ApiClient,
    state: RwSignal<ReportState>,
) -> Result<(), String> {
    state.update(|s| s.begin());
    match api::get_filter_options(client).await {
        Ok(options) => {
            log::info!(
                "Filter options: {} years, {} business groups",
                options.available_years.len(),
                options.available_business_groups.len()
            );
            state.update(|s| s.options_loaded(options));
            Ok(())
        }
        Err(e) => {
            let message = e.user_message("Failed to load filter options.");
            log::warn!("Loading filter options failed: {}", e);
            state.update(|s| s.failed(message.clone()));
            Err(message)
        }
    }
}

/// Fetch the report figures as JSON
pub async fn generate_report(
    client: &ApiClient,
    state: RwSignal<ReportState>,
    filter: ReportFilter,
) -> Result<(), String> {
    state.update(|s| s.begin_request(filter.clone()));
    match api::generate_report(client, &filter).await {
        Ok(data) => {
            log::info!("Report generated for {} ({})", filter.year, filter.months_label());
            state.update(|s| s.report_loaded(data));
            Ok(())
        }
        Err(e) => {
            let message = e.user_message("Failed to generate report.");
            log::warn!("Report generation failed: {}", e);
            state.update(|s| s.report_failed(message.clone()));
            Err(message)
        }
    }
}

/// Fetch the report as a spreadsheet snapshot for the viewer
pub async fn generate_snapshot(
    client: &ApiClient,
    state: RwSignal<ReportState>,
    filter: ReportFilter,
) -> Result<(), String> {
    state.update(|s| s.begin_request(filter.clone()));
    match api::generate_snapshot(client, &filter).await {
        Ok(snapshot) => {
            log::info!(
                "Snapshot '{}' received with {} sheet(s)",
                snapshot.name,
                snapshot.sheet_count()
            );
            state.update(|s| s.snapshot_loaded(snapshot));
            Ok(())
        }
        Err(e) => {
            let message = e.user_message("Failed to generate spreadsheet snapshot.");
            log::warn!("Snapshot generation failed: {}", e);
            state.update(|s| s.snapshot_failed(message.clone()));
            Err(message)
        }
    }
}

/// Download the report as an `.xlsx` file
pub async fn export_report(
    client: &ApiClient,
    state: RwSignal<ReportState>,
    filter: ReportFilter,
) -> Result<(), String> {
    state.update(|s| s.begin_export());

    let result = match api::export_excel(client, &filter).await {
        Ok(blob) => {
            let filename = export_filename(&filter, Utc::now());
            download_blob(&blob, &filename).map(|_| filename)
        }
        Err(e) => {
            log::warn!("Export failed: {}", e);
            Err(e.user_message("Failed to export report."))
        }
    };

    match result {
        Ok(filename) => {
            log::info!("Exported {}", filename);
            state.update(|s| s.export_finished(None));
            Ok(())
        }
        Err(message) => {
            state.update(|s| s.export_finished(Some(message.clone())));
            Err(message)
        }
    }
}

/// Reload the service's source data, then refresh the filter options
pub async fn reload_data(client: &ApiClient, state: RwSignal<ReportState>) -> Result<(), String> {
    state.update(|s| s.begin());
    match api::reload_data(client).await {
        Ok(response) => {
            log::info!("{}", response.message);
            state.update(|s| s.reloaded(response));
            load_filter_options(client, state).await
        }
        Err(e) => {
            let message = e.user_message("Failed to reload data.");
            log::warn!("Data reload failed: {}", e);
            state.update(|s| s.failed(message.clone()));
            Err(message)
        }
    }
}
