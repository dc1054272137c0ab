//! Pagination helpers for PayDash list views.
//!
//! A paginated control shows a compressed, ellipsis-bearing window of page
//! numbers rather than every page. [`page_window`] computes that window;
//! [`page_count`] and [`page_slice`] cover the bookkeeping every list view
//! otherwise reimplements inline.

use serde::Serialize;

/// Number of pages below which the window is shown uncompressed.
const COMPRESSION_THRESHOLD: u32 = 7;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageItem {
    /// A selectable page number.
    Page(u32),
    /// A gap hiding at least one page.
    Ellipsis,
}

/// Computes the window of page numbers a pagination control should show.
///
/// With seven or fewer pages the full range `1..=total_pages` is returned.
/// Otherwise the window always contains page 1, page `total_pages`, and a
/// centered band `[current_page - 1, current_page + 1]` clamped to the
/// interior; an [`PageItem::Ellipsis`] marks each side whose gap hides at
/// least one page. Output is strictly ascending with at most two ellipses.
pub fn page_window(total_pages: u32, current_page: u32) -> Vec<PageItem> {
    if total_pages <= COMPRESSION_THRESHOLD {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let left_bound = 2.max(current_page.saturating_sub(1));
    let right_bound = (total_pages - 1).min(current_page + 1);

    let mut items = vec![PageItem::Page(1)];
    if left_bound > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in left_bound..=right_bound {
        items.push(PageItem::Page(page));
    }
    if right_bound < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));

    items
}

/// Number of pages needed to show `len` items at `per_page` items per page.
///
/// An empty list (or a zero page size) has zero pages.
pub fn page_count(len: usize, per_page: usize) -> u32 {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page) as u32
}

/// The slice of `items` shown on 1-based page `page`.
///
/// Pages outside `1..=page_count` yield an empty slice.
pub fn page_slice<T>(items: &[T], page: u32, per_page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
