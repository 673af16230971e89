//! Fixed-size pages over a post listing

use serde::Serialize;

/// One page of a listing, numbered from 1
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub per_page: usize,
    pub current: usize,
    pub total: usize,
    /// Previous page number, 0 on the first page
    pub prev: usize,
    /// Next page number, 0 on the last page
    pub next: usize,
}

/// Cut page `page_num` out of `items`
///
/// An empty listing still has a single empty first page. Returns `None` for
/// page 0, pages past the end, and a zero page size.
pub fn paginate<T: Clone>(items: &[T], per_page: usize, page_num: usize) -> Option<Page<T>> {
    if per_page == 0 || page_num == 0 {
        return None;
    }

    let total = items.len().div_ceil(per_page).max(1);
    if page_num > total {
        return None;
    }

    let start = (page_num - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Some(Page {
        items: items[start..end].to_vec(),
        per_page,
        current: page_num,
        total,
        prev: page_num.saturating_sub(1),
        next: if page_num < total { page_num + 1 } else { 0 },
    })
}
