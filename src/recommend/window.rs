//! Mapping application pages onto the catalog's native pages.

/// Where an application page lives in the catalog's native pagination.
///
/// A window either sits inside one native page, or straddles the boundary
/// between `first_native_page` and `native_page`. In the latter case the
/// first `head_len` items come from the end of the first native page and the
/// remaining `tail_len` from the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    pub app_page: u32,
    /// Native page holding the first item of the window.
    pub first_native_page: u32,
    /// Native page holding the last item: `ceil(app_page * page_size / source_page_size)`.
    pub native_page: u32,
    /// Index of the first item within `first_native_page`.
    pub offset: usize,
    pub head_len: usize,
    pub tail_len: usize,
}

impl WindowPlan {
    pub fn new(app_page: u32, page_size: u32, source_page_size: u32) -> Self {
        let app_page = app_page.max(1) as u64;
        let page_size = page_size as u64;
        let source_page_size = source_page_size as u64;

        let start = (app_page - 1) * page_size;
        let offset = start % source_page_size;
        let head_len = page_size.min(source_page_size - offset);

        Self {
            app_page: app_page as u32,
            first_native_page: (start / source_page_size + 1) as u32,
            native_page: (app_page * page_size).div_ceil(source_page_size) as u32,
            offset: offset as usize,
            head_len: head_len as usize,
            tail_len: (page_size - head_len) as usize,
        }
    }

    pub fn spans_boundary(&self) -> bool {
        self.tail_len > 0
    }
}

/// Take up to `len` items starting at `offset`, clamped to the slice.
pub fn take_window<T: Clone>(items: &[T], offset: usize, len: usize) -> Vec<T> {
    items.iter().skip(offset).take(len).cloned().collect()
}

/// Application page count for a result total, capped at `max_pages`.
pub fn total_pages(total_results: u64, page_size: u32, max_pages: u32) -> u32 {
    let pages = total_results.div_ceil(page_size.max(1) as u64);
    pages.min(max_pages as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let plan = WindowPlan::new(1, 6, 20);
        assert_eq!(plan.first_native_page, 1);
        assert_eq!(plan.native_page, 1);
        assert_eq!(plan.offset, 0);
        assert_eq!(plan.head_len, 6);
        assert!(!plan.spans_boundary());
    }

    #[test]
    fn test_page_straddling_native_boundary() {
        let plan = WindowPlan::new(4, 6, 20);
        assert_eq!(plan.native_page, 2);
        assert_eq!(plan.first_native_page, 1);
        assert_eq!(plan.offset, 18);
        assert_eq!(plan.head_len, 2);
        assert_eq!(plan.tail_len, 4);
        assert!(plan.spans_boundary());
    }

    #[test]
    fn test_page_inside_later_native_page() {
        let plan = WindowPlan::new(10, 6, 20);
        assert_eq!(plan.first_native_page, 3);
        assert_eq!(plan.native_page, 3);
        assert_eq!(plan.offset, 14);
        assert_eq!(plan.head_len, 6);
        assert!(!plan.spans_boundary());
    }

    #[test]
    fn test_native_page_matches_last_item() {
        for page in 1..=200 {
            let plan = WindowPlan::new(page, 6, 20);
            let last = (page as u64 * 6 - 1) / 20 + 1;
            assert_eq!(plan.native_page as u64, last, "page {}", page);
            assert_eq!(plan.head_len + plan.tail_len, 6);
            assert_eq!(plan.spans_boundary(), plan.native_page != plan.first_native_page);
        }
    }

    #[test]
    fn test_take_window_clamps() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(take_window(&items, 18, 6), vec![18, 19]);
        assert_eq!(take_window(&items, 25, 6), Vec::<u32>::new());
        assert_eq!(take_window(&items[..3], 0, 6), vec![0, 1, 2]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6, 500), 0);
        assert_eq!(total_pages(6, 6, 500), 1);
        assert_eq!(total_pages(7, 6, 500), 2);
        assert_eq!(total_pages(10_000, 6, 500), 500);
    }
}
