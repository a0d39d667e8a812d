//! Pagination of filtered transaction listings.

use serde::Serialize;

use crate::transaction::Transaction;

/// One page of a filtered transaction listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPage {
    /// The transactions on this page, in input order.
    pub items: Vec<Transaction>,
    /// How many transactions matched the query across all pages.
    pub total_items: u64,
    /// How many pages the matches span.
    pub total_pages: u64,
    /// The 1-indexed page these items came from.
    pub page: u64,
}

/// One slot in the page-indicator row under the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// Jump back one page.
    Back(u64),
    /// A numbered page link.
    Page(u64),
    /// The page currently shown.
    Current(u64),
    /// A gap between the visible window and the first or last page.
    Ellipsis,
    /// Jump forward one page.
    Next(u64),
}

impl TransactionPage {
    /// Slice one page out of the matched records.
    ///
    /// `page` and `page_size` of zero are clamped to one; a page past the end
    /// yields empty items with the totals intact.
    pub(super) fn assemble(matches: Vec<Transaction>, page: u64, page_size: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_items = matches.len() as u64;
        let total_pages = total_items.div_ceil(page_size);

        let offset = (page - 1).saturating_mul(page_size);
        let items = matches
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect();

        Self {
            items,
            total_items,
            total_pages,
            page,
        }
    }

    /// The page-indicator row for this page.
    ///
    /// At most `max_slots` numbered markers are shown, windowed around the
    /// current page. The first and last page stay reachable, with an ellipsis
    /// covering any gap, and back/next markers appear when there is somewhere
    /// to go.
    pub fn markers(&self, max_slots: u64) -> Vec<PageMarker> {
        if self.total_pages == 0 {
            return Vec::new();
        }

        let max_slots = max_slots.max(1);
        let current = self.page.min(self.total_pages);

        let window_start = if self.total_pages <= max_slots {
            1
        } else {
            current
                .saturating_sub(max_slots / 2)
                .clamp(1, self.total_pages - max_slots + 1)
        };
        let window_end = (window_start + max_slots - 1).min(self.total_pages);

        let mut markers = Vec::new();

        if current > 1 {
            markers.push(PageMarker::Back(current - 1));
        }

        if window_start > 1 {
            markers.push(PageMarker::Page(1));
            if window_start > 2 {
                markers.push(PageMarker::Ellipsis);
            }
        }

        for page in window_start..=window_end {
            if page == current {
                markers.push(PageMarker::Current(page));
            } else {
                markers.push(PageMarker::Page(page));
            }
        }

        if window_end < self.total_pages {
            if window_end < self.total_pages - 1 {
                markers.push(PageMarker::Ellipsis);
            }
            markers.push(PageMarker::Page(self.total_pages));
        }

        if current < self.total_pages {
            markers.push(PageMarker::Next(current + 1));
        }

        markers
    }
}
