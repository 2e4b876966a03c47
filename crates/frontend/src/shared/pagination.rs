//! 1-based page arithmetic and the numbered page strip.

/// Rows per table page
pub const ITEMS_PER_PAGE: usize = 10;

/// Up to this many pages every number is shown without ellipsis
pub const PAGE_WINDOW_THRESHOLD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Clamped into `1..=total_pages`
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Inclusive start offset into the filtered list
    pub start_index: usize,
    /// Exclusive end offset, may exceed `total_items` on the last page
    pub end_index: usize,
}

/// An entry of the numbered page strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// `ceil(total / per_page)`, at least 1 so an empty list still has page 1
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    total_items.div_ceil(per_page).max(1)
}

pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Page window for `total_items` rows with the requested page clamped
pub fn paginate(total_items: usize, per_page: usize, requested_page: usize) -> PageWindow {
    let per_page = per_page.max(1);
    let total_pages = total_pages(total_items, per_page);
    let current_page = clamp_page(requested_page, total_pages);
    let start_index = (current_page - 1) * per_page;
    PageWindow {
        current_page,
        total_pages,
        total_items,
        start_index,
        end_index: start_index + per_page,
    }
}

/// Page to request again when the server answered for a page past its last
/// one (e.g. the result set shrank under the user). `None` when in range.
pub fn server_page_overshoot(current_page: usize, last_page: usize) -> Option<usize> {
    let last_page = last_page.max(1);
    (current_page > last_page).then_some(last_page)
}

/// Following page of a server-paginated walk, `None` after the last one
pub fn next_server_page(current_page: usize, last_page: usize) -> Option<usize> {
    (current_page.max(1) < last_page).then(|| current_page.max(1) + 1)
}

/// Window described by server pagination metadata, where the slice was
/// already cut by the backend
pub fn server_window(
    current_page: usize,
    last_page: usize,
    total_items: usize,
    per_page: usize,
) -> PageWindow {
    let per_page = per_page.max(1);
    let total_pages = last_page.max(1);
    let current_page = clamp_page(current_page, total_pages);
    let start_index = (current_page - 1) * per_page;
    PageWindow {
        current_page,
        total_pages,
        total_items,
        start_index,
        end_index: start_index + per_page,
    }
}

impl PageWindow {
    /// Rows of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index.min(items.len());
        let end = self.end_index.min(items.len());
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether a click on `page` should change anything
    pub fn can_go_to(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages && page != self.current_page
    }

    /// 1-based number of the first visible row, 0 when there are no rows
    pub fn first_row(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.start_index + 1
        }
    }

    pub fn last_row(&self) -> usize {
        self.end_index.min(self.total_items)
    }
}

/// Page numbers to render for `current` of `total` pages.
///
/// Up to 5 pages are all listed. Beyond that only the first page, the last
/// page and the neighbours of the current page are shown, with an ellipsis
/// in every gap.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let current = clamp_page(current, total);

    if total <= PAGE_WINDOW_THRESHOLD {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut shown = vec![1, current.saturating_sub(1), current, current + 1, total];
    shown.retain(|p| (1..=total).contains(p));
    shown.sort_unstable();
    shown.dedup();

    let mut items = Vec::with_capacity(shown.len() * 2);
    let mut previous = 0;
    for page in shown {
        if previous != 0 && page > previous + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn pages(items: &[PageItem]) -> Vec<usize> {
        items
            .iter()
            .filter_map(|i| match i {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn empty_list_has_one_page() {
        let w = paginate(0, ITEMS_PER_PAGE, 1);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.current_page, 1);
        assert_eq!(w.first_row(), 0);
        assert_eq!(w.last_row(), 0);
        let empty: [u8; 0] = [];
        assert!(w.slice(&empty).is_empty());
    }

    #[test]
    fn requested_page_is_clamped() {
        assert_eq!(paginate(25, 10, 0).current_page, 1);
        assert_eq!(paginate(25, 10, 9).current_page, 3);
        assert_eq!(paginate(1, 10, 2).current_page, 1);
    }

    #[test]
    fn visible_items_fit_the_window() {
        let data: Vec<usize> = (0..25).collect();
        for total in [0usize, 1, 9, 10, 11, 25] {
            let rows = &data[..total];
            for requested in 0..6 {
                let w = paginate(total, 10, requested);
                let visible = w.slice(rows);
                assert!(visible.len() <= 10);
                assert_eq!(w.start_index + visible.len(), w.end_index.min(total));
            }
        }
    }

    #[test]
    fn last_page_is_partial() {
        let data: Vec<usize> = (1..=25).collect();
        let w = paginate(25, 10, 3);
        assert_eq!(w.slice(&data), &[21, 22, 23, 24, 25]);
        assert_eq!((w.first_row(), w.last_row()), (21, 25));
        assert!(!w.has_next());
        assert!(w.has_prev());
        assert!(!w.can_go_to(4));
        assert!(!w.can_go_to(3));
        assert!(w.can_go_to(2));
    }

    #[test]
    fn server_window_uses_backend_metadata() {
        let w = server_window(2, 5, 47, 10);
        assert_eq!((w.first_row(), w.last_row()), (11, 20));
        assert!(w.has_next());
        let w = server_window(9, 5, 47, 10);
        assert_eq!(w.current_page, 5);
        assert_eq!(w.last_row(), 47);
        assert_eq!(server_window(1, 0, 0, 10).total_pages, 1);
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(page_numbers(2, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(page_numbers(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            page_numbers(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_numbers(9, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn strip_invariants_hold_for_every_position() {
        for total in 1..=15 {
            for current in 1..=total {
                let items = page_numbers(current, total);
                let nums = pages(&items);
                assert_eq!(nums.first(), Some(&1));
                assert_eq!(nums.last(), Some(&total));
                assert!(nums.contains(&current), "current {current} of {total}");
                assert!(nums.windows(2).all(|w| w[0] < w[1]));
                assert!(items.len() <= 7);
                assert!(nums.iter().all(|n| (1..=total).contains(n)));
                assert!(items
                    .windows(2)
                    .all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)));
                if total <= PAGE_WINDOW_THRESHOLD {
                    assert!(!items.contains(&Ellipsis));
                }
            }
        }
    }

    #[test]
    fn request_past_last_page_falls_back() {
        // page 5 asked for, the branch only has 2 pages
        assert_eq!(server_page_overshoot(5, 2), Some(2));
        // nothing left at all: back to page 1
        assert_eq!(server_page_overshoot(3, 0), Some(1));
        assert_eq!(server_page_overshoot(2, 2), None);
        assert_eq!(server_page_overshoot(1, 0), None);
    }

    #[test]
    fn server_walk_stops_at_last_page() {
        assert_eq!(next_server_page(1, 3), Some(2));
        assert_eq!(next_server_page(3, 3), None);
        assert_eq!(next_server_page(1, 1), None);
        assert_eq!(next_server_page(0, 0), None);
    }
}
