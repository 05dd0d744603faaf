pub mod d400_pl_report;

pub use d400_pl_report::PlReportPage;
