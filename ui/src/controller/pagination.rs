/// Most page buttons shown at once.
pub const MAX_PAGE_BUTTONS: u64 = 5;

pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The bar is only worth showing when there is something on screen and
/// somewhere else to go.
pub fn show_pagination(shown: usize, total_pages: u64) -> bool {
    shown > 0 && total_pages > 1
}

/// Page numbers to offer as buttons: every page when there are few, otherwise
/// a window of five that sticks to either end and centres on `page` in between.
pub fn page_buttons(page: u64, total_pages: u64) -> Vec<u64> {
    let count = total_pages.min(MAX_PAGE_BUTTONS);
    if count == 0 {
        return Vec::new();
    }

    let first = if total_pages <= MAX_PAGE_BUTTONS || page <= 3 {
        1
    } else if page + 2 >= total_pages {
        total_pages - 4
    } else {
        page - 2
    };

    (first..first + count).collect()
}

pub fn next_page(page: u64, total_pages: u64) -> u64 {
    (page + 1).min(total_pages).max(1)
}

pub fn prev_page(page: u64) -> u64 {
    page.saturating_sub(1).max(1)
}
