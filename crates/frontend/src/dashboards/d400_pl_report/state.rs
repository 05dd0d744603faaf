use contracts::dashboards::d400_pl_report::{
    FilterOptions, ReloadDataResponse, ReportData, ReportFilter, WorkbookSnapshot,
};

/// Report page state shared through `ReportProvider`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub filter_options: Option<FilterOptions>,
    /// Filter of the last generate request
    pub current_filter: Option<ReportFilter>,
    pub report_data: Option<ReportData>,
    pub snapshot: Option<WorkbookSnapshot>,
    pub is_loading: bool,
    pub is_exporting: bool,
    pub error: Option<String>,
    pub last_reload: Option<ReloadDataResponse>,
}

impl ReportState {
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Start a generate request; the filter is remembered even if it fails
    pub fn begin_request(&mut self, filter: ReportFilter) {
        self.begin();
        self.current_filter = Some(filter);
    }

    pub fn options_loaded(&mut self, options: FilterOptions) {
        self.filter_options = Some(options);
        self.is_loading = false;
    }

    pub fn report_loaded(&mut self, data: ReportData) {
        self.report_data = Some(data);
        self.is_loading = false;
    }

    pub fn snapshot_loaded(&mut self, snapshot: WorkbookSnapshot) {
        self.snapshot = Some(snapshot);
        self.is_loading = false;
    }

    pub fn report_failed(&mut self, message: String) {
        self.report_data = None;
        self.failed(message);
    }

    pub fn snapshot_failed(&mut self, message: String) {
        self.snapshot = None;
        self.failed(message);
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.is_loading = false;
    }

    pub fn finish(&mut self) {
        self.is_loading = false;
    }

    pub fn begin_export(&mut self) {
        self.is_exporting = true;
        self.error = None;
    }

    pub fn export_finished(&mut self, error: Option<String>) {
        self.is_exporting = false;
        if error.is_some() {
            self.error = error;
        }
    }

    /// The shown report was built from the previous data; drop it
    pub fn reloaded(&mut self, response: ReloadDataResponse) {
        self.last_reload = Some(response);
        self.clear_report();
        self.is_loading = false;
    }

    pub fn clear_report(&mut self) {
        self.report_data = None;
        self.snapshot = None;
        self.current_filter = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_exporting
    }

    /// Viewer heading for the current filter,
    /// e.g. `P&L report 2025 (3 months, all business groups)`
    pub fn title(&self) -> Option<String> {
        self.current_filter.as_ref().map(|filter| {
            let groups = if filter.covers_all_groups() {
                "all business groups".to_string()
            } else {
                match filter.business_groups.as_ref().map_or(0, Vec::len) {
                    1 => "1 business group".to_string(),
                    n => format!("{} business groups", n),
                }
            };
            let n = filter.months.len();
            let unit = if n == 1 { "month" } else { "months" };
            format!("P&L report {} ({} {}, {})", filter.year, n, unit, groups)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filter(months: Vec<u32>) -> ReportFilter {
        ReportFilter {
            year: 2025,
            months,
            business_groups: None,
        }
    }

    fn snapshot() -> WorkbookSnapshot {
        serde_json::from_str(r#"{"id":"wb","name":"P&L","sheetOrder":[],"sheets":{}}"#).unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ReportState::default();
        assert!(state.filter_options.is_none());
        assert!(state.current_filter.is_none());
        assert!(state.snapshot.is_none());
        assert!(!state.is_loading);
        assert!(!state.is_busy());
        assert!(state.error.is_none());
        assert_eq!(state.title(), None);
    }

    #[test]
    fn test_snapshot_request_lifecycle() {
        let mut state = ReportState::default();
        state.error = Some("old".to_string());

        state.begin_request(filter(vec![1, 2, 3]));
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.current_filter, Some(filter(vec![1, 2, 3])));

        state.snapshot_loaded(snapshot());
        assert!(!state.is_loading);
        assert!(state.snapshot.is_some());
        assert_eq!(state.title().as_deref(), Some("P&L report 2025 (3 months, all business groups)"));
    }

    #[test]
    fn test_failed_snapshot_clears_previous_one() {
        let mut state = ReportState::default();
        state.snapshot_loaded(snapshot());

        state.begin_request(filter(vec![4]));
        state.snapshot_failed("Failed to generate snapshot.".to_string());

        assert!(state.snapshot.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Failed to generate snapshot."));
        assert_eq!(state.title().as_deref(), Some("P&L report 2025 (1 month, all business groups)"));
    }

    #[test]
    fn test_failed_options_keep_report() {
        let mut state = ReportState::default();
        state.snapshot_loaded(snapshot());
        state.begin();
        state.failed("Failed to load filter options.".to_string());
        assert!(state.snapshot.is_some());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_export_does_not_touch_loading() {
        let mut state = ReportState::default();
        state.begin_export();
        assert!(state.is_exporting);
        assert!(!state.is_loading);
        assert!(state.is_busy());

        state.export_finished(Some("Failed to export report.".to_string()));
        assert!(!state.is_exporting);
        assert_eq!(state.error.as_deref(), Some("Failed to export report."));

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_title_counts_selected_groups() {
        let mut state = ReportState::default();
        state.begin_request(ReportFilter {
            year: 2024,
            months: vec![1, 2],
            business_groups: Some(vec!["Retail".to_string(), "Wholesale".to_string()]),
        });
        assert_eq!(state.title().as_deref(), Some("P&L report 2024 (2 months, 2 business groups)"));
    }

    #[test]
    fn test_reload_clears_report() {
        let mut state = ReportState::default();
        state.begin_request(filter(vec![1]));
        state.snapshot_loaded(snapshot());
        state.filter_options = Some(FilterOptions::default());

        state.begin();
        state.reloaded(ReloadDataResponse {
            message: "Data reloaded successfully".to_string(),
            statistics: None,
        });
        assert!(!state.is_loading);
        assert!(state.snapshot.is_none());
        assert!(state.report_data.is_none());
        assert!(state.current_filter.is_none());
        assert!(state.filter_options.is_some());
        assert!(state.last_reload.is_some());
    }
}
