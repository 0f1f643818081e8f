use super::errors::QueryError;
use super::fields::Queryable;
use super::models::PagedResult;
use super::models::QueryParams;
use super::models::SortDirection;

/// Filter, sort, and paginate a collection snapshot.
///
/// - Filtering: when the search term is non-empty, an item survives if any
///   of its searchable field values contains the term, case-insensitively.
/// - Sorting: applied only when the requested field name is one the
///   resource recognizes; otherwise the input order is kept. The sort is
///   stable, so ties keep their pre-sort relative order in both directions
///   and repeated calls over the same snapshot return identical pages.
/// - Paging: `total_pages = ceil(matches / page_size)`, 0 when nothing
///   matches. A page number beyond the data yields an empty item list and
///   still echoes the requested page number and size.
///
/// The input collection is never mutated.
///
/// # Errors
/// * `InvalidPageNumber` / `InvalidPageSize` - Non-positive paging values
pub fn paginate<T>(items: &[T], params: &QueryParams) -> Result<PagedResult<T>, QueryError>
where
    T: Queryable + Clone,
{
    if params.page_number == 0 {
        return Err(QueryError::InvalidPageNumber);
    }
    if params.page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }

    let mut matches: Vec<&T> = match params.search.as_deref().filter(|term| !term.is_empty()) {
        Some(term) => {
            let needle = term.to_lowercase();
            items
                .iter()
                .filter(|item| {
                    item.search_text()
                        .iter()
                        .any(|value| value.to_lowercase().contains(&needle))
                })
                .collect()
        }
        None => items.iter().collect(),
    };

    if let Some(accessor) = params
        .sort_field
        .as_deref()
        .and_then(|field| T::sort_accessor(field))
    {
        // Vec::sort_by is stable; reversing the comparator flips the order
        // while equal keys still keep their input order.
        match params.sort_direction {
            SortDirection::Ascending => matches.sort_by(|a, b| accessor(a).cmp(&accessor(b))),
            SortDirection::Descending => matches.sort_by(|a, b| accessor(b).cmp(&accessor(a))),
        }
    }

    let total_pages = matches.len().div_ceil(params.page_size);
    let offset = params
        .page_number
        .saturating_sub(1)
        .saturating_mul(params.page_size);

    let page_items = matches
        .into_iter()
        .skip(offset)
        .take(params.page_size)
        .cloned()
        .collect();

    Ok(PagedResult {
        page_number: params.page_number,
        page_size: params.page_size,
        total_pages,
        items: page_items,
    })
}
