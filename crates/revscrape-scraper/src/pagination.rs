//! Page-count arithmetic for the review fan-out.
//!
//! The first request always happens and reports `totalPages`. Everything
//! after it is derived from that number and the caller's cap.

use std::ops::RangeInclusive;

/// Number of pages to request in total, the first page included.
///
/// `min(max_pages, total_pages)`, never below 1 because the first page has
/// already been fetched by the time this is consulted.
#[must_use]
pub fn pages_to_fetch(max_pages: u32, total_pages: u32) -> u32 {
    max_pages.min(total_pages).max(1)
}

/// Page numbers still to request once page 1 is in hand.
///
/// Empty when `pages_to_fetch <= 1`.
#[must_use]
pub fn remaining_pages(pages_to_fetch: u32) -> RangeInclusive<u32> {
    2..=pages_to_fetch
}
