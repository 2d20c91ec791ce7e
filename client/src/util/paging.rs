//! Page-number window math for the pagination widget.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// One rendered control in the pagination row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    /// A clickable page number (1-based).
    Number(u32),
    /// A non-clickable gap marker.
    Ellipsis,
}

/// Compute the controls to render for `current` of `total_pages`.
///
/// Shows the first and last page, a window of one page around the current
/// one, and ellipsis markers over the gaps. A single page (or none) renders
/// no controls at all — there is nothing to navigate.
#[must_use]
pub fn page_controls(current: u32, total_pages: u32) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);

    let mut controls = Vec::new();
    let mut last_shown = 0_u32;
    for page in 1..=total_pages {
        let in_window = page.abs_diff(current) <= 1;
        if page != 1 && page != total_pages && !in_window {
            continue;
        }
        if page != last_shown + 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Number(page));
        last_shown = page;
    }
    controls
}
