//! Browser downloads for the Excel export
use chrono::{DateTime, Utc};
use contracts::dashboards::d400_pl_report::ReportFilter;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `P&L_Report_{year}_{months}_{timestamp}.xlsx`, timestamp in UTC with `-` instead of `:`
pub fn export_filename(filter: &ReportFilter, now: DateTime<Utc>) -> String {
    format!(
        "P&L_Report_{}_{}_{}.xlsx",
        filter.year,
        filter.months_label(),
        now.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Wrap the workbook bytes returned by the service in a Blob
pub fn xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Save a Blob under `filename` through a temporary anchor
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_filename() {
        let filter = ReportFilter {
            year: 2025,
            months: vec![1, 2, 3],
            business_groups: None,
        };
        let now = Utc.with_ymd_and_hms(2025, 4, 2, 9, 5, 7).unwrap();

        assert_eq!(
            export_filename(&filter, now),
            "P&L_Report_2025_1-2-3_2025-04-02T09-05-07.xlsx"
        );
    }

    #[test]
    fn test_export_filename_single_month() {
        let filter = ReportFilter {
            year: 2024,
            months: vec![12],
            business_groups: Some(vec!["Retail".to_string()]),
        };
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        assert_eq!(
            export_filename(&filter, now),
            "P&L_Report_2024_12_2024-12-31T23-59-59.xlsx"
        );
    }
}
