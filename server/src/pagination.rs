//! Next-page estimation for list responses.
//!
//! The upstream search does not return a usable total count at this tier,
//! so pagination is a heuristic: if the raw fetch filled the requested page
//! size, assume more results may exist. The estimate can be wrong when the
//! upstream truncates exactly at a page boundary.

/// Highest page from which a next page is ever offered.
///
/// Pages past this are not worth paging into; the upstream's deep-offset
/// queries degrade quickly.
const PAGE_CEILING: u32 = 4;

/// Estimates whether a next page exists after the current one.
///
/// Returns `current_page + 1` when the raw (pre-filter) event count reached
/// the requested page size and the current page is below the ceiling;
/// otherwise `None`.
pub fn next_page(current_page: u32, raw_count: usize, page_size: usize) -> Option<u32> {
    if raw_count >= page_size && current_page < PAGE_CEILING {
        Some(current_page + 1)
    } else {
        None
    }
}
