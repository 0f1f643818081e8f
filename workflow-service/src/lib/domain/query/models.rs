use serde::Serialize;

/// Sort direction for paginated queries.
///
/// Anything that does not denote descending is ascending, so an
/// unrecognized direction value degrades to the default order instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a direction value case-insensitively.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Parameters for one paginated listing call. Transient, never persisted.
#[derive(Debug, Clone)]
pub struct QueryParams {
    /// Free-text search term; empty or absent means no filtering
    pub search: Option<String>,
    /// 1-based page number
    pub page_number: usize,
    /// Items per page
    pub page_size: usize,
    /// Name of the field to sort by; unknown names keep the input order
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
}

impl QueryParams {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Parameters for the first page with the default size, no filter.
    pub fn first_page() -> Self {
        Self {
            search: None,
            page_number: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
            sort_field: None,
            sort_direction: SortDirection::Ascending,
        }
    }

    pub fn with_search(mut self, term: impl ToString) -> Self {
        self.search = Some(term.to_string());
        self
    }

    pub fn with_page(mut self, page_number: usize, page_size: usize) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, field: impl ToString, direction: SortDirection) -> Self {
        self.sort_field = Some(field.to_string());
        self.sort_direction = direction;
        self
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::first_page()
    }
}

/// One page of a filtered, sorted collection plus page metadata.
///
/// `total_pages` is computed from the full filtered count, so a page
/// beyond the data still reports the arithmetic for the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}
