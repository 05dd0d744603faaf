use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// Years accepted by the report service
pub const MIN_YEAR: i32 = 2020;
pub const MAX_YEAR: i32 = 2030;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn all_months() -> Vec<u32> {
    (1..=12).collect()
}

/// Body of `POST /report/generate`, `/report/univer` and `/report/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub year: i32,
    pub months: Vec<u32>,
    /// `None` = all business groups
    #[serde(default)]
    pub business_groups: Option<Vec<String>>,
}

impl ReportFilter {
    /// Check the filter against the rules the service enforces.
    ///
    /// Returns a copy with months sorted ascending.
    pub fn validate(&self) -> Result<ReportFilter, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange(self.year, MIN_YEAR, MAX_YEAR));
        }
        if self.months.is_empty() {
            return Err(ValidationError::NoMonths);
        }

        let mut months = self.months.clone();
        months.sort_unstable();
        for pair in months.windows(2) {
            if pair[0] == pair[1] {
                return Err(ValidationError::DuplicateMonth(pair[0]));
            }
        }
        if let Some(bad) = months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(ValidationError::InvalidMonth(*bad));
        }

        if let Some(groups) = &self.business_groups {
            if groups.is_empty() {
                return Err(ValidationError::NoBusinessGroups);
            }
        }

        Ok(ReportFilter {
            year: self.year,
            months,
            business_groups: self.business_groups.clone(),
        })
    }

    /// Months joined with `-`, e.g. `1-2-3`
    pub fn months_label(&self) -> String {
        self.months
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn covers_all_groups(&self) -> bool {
        self.business_groups.is_none()
    }
}

/// Response of `GET /report/filters`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub available_years: Vec<i32>,
    pub available_business_groups: Vec<String>,
    #[serde(default)]
    pub available_services: Vec<String>,
    #[serde(default)]
    pub min_date: String,
    #[serde(default)]
    pub max_date: String,
}

impl FilterOptions {
    /// Current year when the service has data for it, otherwise the first available year.
    pub fn default_year(&self, current_year: i32) -> Option<i32> {
        if self.available_years.contains(&current_year) {
            Some(current_year)
        } else {
            self.available_years.first().copied()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn months(self) -> [u32; 3] {
        match self {
            Quarter::Q1 => [1, 2, 3],
            Quarter::Q2 => [4, 5, 6],
            Quarter::Q3 => [7, 8, 9],
            Quarter::Q4 => [10, 11, 12],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}
