//! Pagination and sorting parameters for list endpoints.

use crate::validate::{is_one_of, Validator};

/// Upper bound on `page`.
pub const MAX_PAGE: i64 = 10_000_000;

/// Upper bound on `page_size`.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated paging and sort parameters.
///
/// `sort_safelist` is the closed set of accepted `sort` values for the
/// resource; a leading `-` selects descending order.
#[derive(Debug, Clone)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Record range and safelist failures on `v`.
    pub fn validate(&self, v: &mut Validator) {
        v.check(self.page > 0, "page", "must be greater than zero");
        v.check(self.page <= MAX_PAGE, "page", "must be a maximum of 10 million");
        v.check(self.page_size > 0, "page_size", "must be greater than zero");
        v.check(
            self.page_size <= MAX_PAGE_SIZE,
            "page_size",
            "must be a maximum of 100",
        );
        v.check(
            is_one_of(&self.sort, self.sort_safelist),
            "sort",
            "invalid sort value",
        );
    }

    /// The column to sort by, with the direction prefix stripped.
    ///
    /// Panics on a value outside the safelist so a raw `sort` string can
    /// never reach the SQL layer. Callers validate first; this is a
    /// backstop, not a reachable path.
    pub fn sort_column(&self) -> &str {
        for safe in self.sort_safelist {
            if self.sort == *safe {
                return self.sort.trim_start_matches('-');
            }
        }
        panic!("unsafe sort parameter: {}", self.sort);
    }

    /// `"DESC"` when the sort value carries a `-` prefix, else `"ASC"`.
    pub fn sort_direction(&self) -> &'static str {
        if self.sort.starts_with('-') {
            "DESC"
        } else {
            "ASC"
        }
    }

    /// Row cap for the current page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip before the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}
