pub mod filter_panel;
pub mod metrics;
pub mod page;
pub mod viewer;

pub use page::PlReportPage;
