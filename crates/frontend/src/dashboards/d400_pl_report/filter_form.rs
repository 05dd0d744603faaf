//! Editable form state behind the filter panel

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_pl_report::{all_months, FilterOptions, Quarter, ReportFilter};
use contracts::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub year: i32,
    pub months: BTreeSet<u32>,
    /// Checked "all business groups"; `groups` is ignored while set
    pub all_groups: bool,
    pub groups: BTreeSet<String>,
}

impl FilterForm {
    /// Current year if the service has it (else the first available year),
    /// the current month, all business groups.
    pub fn with_defaults(options: &FilterOptions, today: NaiveDate) -> Self {
        Self {
            year: options.default_year(today.year()).unwrap_or(today.year()),
            months: BTreeSet::from([today.month()]),
            all_groups: true,
            groups: BTreeSet::new(),
        }
    }

    pub fn toggle_month(&mut self, month: u32) {
        if !self.months.remove(&month) {
            self.months.insert(month);
        }
    }

    pub fn select_all_months(&mut self) {
        self.months = all_months().into_iter().collect();
    }

    /// Replaces the month selection with the quarter's three months
    pub fn select_quarter(&mut self, quarter: Quarter) {
        self.months = quarter.months().into_iter().collect();
    }

    pub fn set_all_groups(&mut self, all: bool) {
        self.all_groups = all;
        if all {
            self.groups.clear();
        }
    }

    pub fn toggle_group(&mut self, group: &str) {
        if !self.groups.remove(group) {
            self.groups.insert(group.to_string());
        }
    }

    pub fn has_month(&self, month: u32) -> bool {
        self.months.contains(&month)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Build the request body, applying the service's validation rules
    pub fn to_filter(&self) -> Result<ReportFilter, ValidationError> {
        let business_groups = if self.all_groups {
            None
        } else {
            Some(self.groups.iter().cloned().collect())
        };
        ReportFilter {
            year: self.year,
            months: self.months.iter().copied().collect(),
            business_groups,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(years: &[i32]) -> FilterOptions {
        FilterOptions {
            available_years: years.to_vec(),
            available_business_groups: vec!["Retail".to_string(), "Wholesale".to_string()],
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_use_current_year_and_month() {
        let form = FilterForm::with_defaults(&options(&[2024, 2025]), date(2025, 5, 14));
        assert_eq!(form.year, 2025);
        assert_eq!(form.months, BTreeSet::from([5]));
        assert!(form.all_groups);
    }

    #[test]
    fn test_defaults_fall_back_to_first_available_year() {
        let form = FilterForm::with_defaults(&options(&[2023, 2024]), date(2026, 1, 3));
        assert_eq!(form.year, 2023);

        let empty = FilterForm::with_defaults(&options(&[]), date(2026, 1, 3));
        assert_eq!(empty.year, 2026);
    }

    #[test]
    fn test_toggle_month() {
        let mut form = FilterForm::with_defaults(&options(&[2025]), date(2025, 3, 1));
        form.toggle_month(1);
        assert!(form.has_month(1));
        form.toggle_month(3);
        assert!(!form.has_month(3));
        assert_eq!(form.months, BTreeSet::from([1]));
    }

    #[test]
    fn test_quarter_and_full_year() {
        let mut form = FilterForm::with_defaults(&options(&[2025]), date(2025, 3, 1));
        form.select_quarter(Quarter::Q3);
        assert_eq!(form.months, BTreeSet::from([7, 8, 9]));

        form.select_all_months();
        assert_eq!(form.months.len(), 12);
    }

    #[test]
    fn test_all_groups_sends_none() {
        let form = FilterForm::with_defaults(&options(&[2025]), date(2025, 2, 1));
        let filter = form.to_filter().unwrap();
        assert_eq!(
            filter,
            ReportFilter {
                year: 2025,
                months: vec![2],
                business_groups: None,
            }
        );
    }

    #[test]
    fn test_selected_groups_are_sent() {
        let mut form = FilterForm::with_defaults(&options(&[2025]), date(2025, 2, 1));
        form.set_all_groups(false);
        form.toggle_group("Wholesale");
        form.toggle_group("Retail");

        let filter = form.to_filter().unwrap();
        assert_eq!(
            filter.business_groups,
            Some(vec!["Retail".to_string(), "Wholesale".to_string()])
        );
    }

    #[test]
    fn test_checking_all_groups_clears_selection() {
        let mut form = FilterForm::with_defaults(&options(&[2025]), date(2025, 2, 1));
        form.set_all_groups(false);
        form.toggle_group("Retail");
        form.set_all_groups(true);
        assert!(form.groups.is_empty());
        assert!(!form.has_group("Retail"));
    }

    #[test]
    fn test_invalid_forms_are_rejected() {
        let mut form = FilterForm::with_defaults(&options(&[2025]), date(2025, 2, 1));
        form.toggle_month(2);
        assert_eq!(form.to_filter(), Err(ValidationError::NoMonths));

        form.toggle_month(4);
        form.set_all_groups(false);
        assert_eq!(form.to_filter(), Err(ValidationError::NoBusinessGroups));
    }
}
