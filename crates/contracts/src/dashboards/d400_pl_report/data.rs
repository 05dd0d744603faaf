use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the grand-total entry in every per-group section
pub const TOTAL_KEY: &str = "Total";

/// Response of `POST /report/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub metadata: ReportMetadata,
    pub data: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub year: i32,
    pub months: Vec<u32>,
    pub business_groups: BusinessGroups,
    #[serde(default)]
    pub view_type: String,
    #[serde(default)]
    pub display_type: String,
    #[serde(default)]
    pub show_common_size: bool,
    pub generated_at: String,
}

/// The service sends the literal `"All"` when no group filter was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BusinessGroups {
    Selected(Vec<String>),
    All(String),
}

impl BusinessGroups {
    pub fn label(&self) -> String {
        match self {
            BusinessGroups::Selected(groups) => groups.join(", "),
            BusinessGroups::All(label) => label.clone(),
        }
    }
}

/// Amounts per business group; each section carries a `Total` entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportBody {
    #[serde(default)]
    pub revenue: BTreeMap<String, f64>,
    #[serde(default)]
    pub cost_of_service: BTreeMap<String, f64>,
    #[serde(default)]
    pub selling_expense: BTreeMap<String, f64>,
    #[serde(default)]
    pub admin_expense: BTreeMap<String, f64>,
    #[serde(default)]
    pub metrics: ReportMetrics,
    #[serde(default)]
    pub common_size: Option<CommonSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetrics {
    pub gross_profit: f64,
    pub profit_after_selling: f64,
    pub ebit: f64,
    pub ebitda: f64,
    pub ebt: f64,
    pub net_profit: f64,
}

/// Percentages of revenue per business group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommonSize {
    #[serde(default)]
    pub revenue: BTreeMap<String, f64>,
    #[serde(default)]
    pub cost_of_service: BTreeMap<String, f64>,
}

impl ReportBody {
    pub fn total_revenue(&self) -> f64 {
        section_total(&self.revenue)
    }

    pub fn total_cost(&self) -> f64 {
        section_total(&self.cost_of_service)
            + section_total(&self.selling_expense)
            + section_total(&self.admin_expense)
    }

    /// Metric as a percentage of total revenue; `None` when revenue is zero.
    pub fn margin(&self, value: f64) -> Option<f64> {
        let revenue = self.total_revenue();
        if revenue == 0.0 {
            None
        } else {
            Some(value / revenue * 100.0)
        }
    }
}

fn section_total(section: &BTreeMap<String, f64>) -> f64 {
    section.get(TOTAL_KEY).copied().unwrap_or(0.0)
}

/// Response of `POST /report/reload-data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadDataResponse {
    pub message: String,
    #[serde(default)]
    pub statistics: Option<DataStatistics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStatistics {
    pub total_rows: u64,
    pub years: Vec<i32>,
    pub business_groups: u32,
    pub last_load_time: Option<String>,
}
