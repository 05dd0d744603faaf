use thiserror::Error;

/// Client-side form validation failures.
///
/// `Display` output is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("The code must be exactly {0} digits")]
    CodeLength(usize),

    #[error("The code must contain digits only")]
    CodeNotNumeric,

    #[error("Year {0} is outside the supported range {1}-{2}")]
    YearOutOfRange(i32, i32, i32),

    #[error("Select at least one month")]
    NoMonths,

    #[error("Month {0} is not a valid month")]
    InvalidMonth(u32),

    #[error("Month {0} is selected more than once")]
    DuplicateMonth(u32),

    #[error("Select at least one business group")]
    NoBusinessGroups,
}
