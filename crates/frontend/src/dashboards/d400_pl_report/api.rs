use contracts::dashboards::d400_pl_report::{
    FilterOptions, ReloadDataResponse, ReportData, ReportFilter, WorkbookSnapshot,
};
use web_sys::Blob;

use crate::shared::api_error::ApiError;
use crate::shared::export::xlsx_blob;
use crate::shared::http::ApiClient;

/// Years and business groups the service has data for
pub async fn get_filter_options(client: &ApiClient) -> Result<FilterOptions, ApiError> {
    client.get_json("/report/filters").await
}

/// Report figures as JSON
pub async fn generate_report(
    client: &ApiClient,
    filter: &ReportFilter,
) -> Result<ReportData, ApiError> {
    client.post_json("/report/generate", filter).await
}

/// Report laid out as a spreadsheet workbook
pub async fn generate_snapshot(
    client: &ApiClient,
    filter: &ReportFilter,
) -> Result<WorkbookSnapshot, ApiError> {
    client.post_json("/report/univer", filter).await
}

/// Report as an `.xlsx` file
pub async fn export_excel(client: &ApiClient, filter: &ReportFilter) -> Result<Blob, ApiError> {
    let bytes = client.post_for_bytes("/report/export", filter).await?;
    log::debug!("export returned {} bytes", bytes.len());
    xlsx_blob(&bytes).map_err(ApiError::Browser)
}

/// Ask the service to reload its source data
pub async fn reload_data(client: &ApiClient) -> Result<ReloadDataResponse, ApiError> {
    client.post_empty("/report/reload-data").await
}
