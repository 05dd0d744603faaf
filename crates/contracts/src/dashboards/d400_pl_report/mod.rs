//! P&L report contract: filter, generated report data and the spreadsheet
//! snapshot document rendered by the client.

pub mod data;
pub mod filter;
pub mod snapshot;

pub use data::{
    BusinessGroups, CommonSize, DataStatistics, ReloadDataResponse, ReportBody, ReportData,
    ReportMetadata, ReportMetrics,
};
pub use filter::{all_months, FilterOptions, Quarter, ReportFilter, MONTH_NAMES};
pub use snapshot::{CellData, SheetSnapshot, WorkbookSnapshot};
