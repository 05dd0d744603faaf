pub mod api;
pub mod context;
pub mod filter_form;
pub mod state;
pub mod ui;

pub use context::{use_report, ReportProvider};
pub use ui::PlReportPage;
