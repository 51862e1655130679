//! Tests for the pagination primitives.

#[cfg(test)]
mod tests {
    use crate::views::{HistoryPager, Pager};
    use proptest::prelude::*;

    fn pager_with(n: usize, page_size: usize) -> Pager<usize> {
        let mut pager = Pager::new(page_size);
        pager.replace((0..n).collect());
        pager
    }

    #[test]
    fn test_page_windows_in_fetch_order() {
        let mut pager = pager_with(7, 3);
        assert_eq!(pager.page(), &[0, 1, 2]);
        pager.next_page();
        assert_eq!(pager.page(), &[3, 4, 5]);
        pager.next_page();
        assert_eq!(pager.page(), &[6]);
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let mut pager = pager_with(7, 3);
        pager.prev_page();
        assert_eq!(pager.current_page(), 0);

        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 2);
        pager.next_page();
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_replace_resets_to_first_page() {
        let mut pager = pager_with(9, 3);
        pager.next_page();
        assert_eq!(pager.current_page(), 1);

        pager.replace(vec![1, 2]);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.page(), &[1, 2]);
    }

    #[test]
    fn test_empty_set_yields_empty_page() {
        let mut pager: Pager<usize> = Pager::new(3);
        assert!(pager.page().is_empty());
        assert_eq!(pager.total_pages(), 0);
        // Navigation on an empty set stays put
        pager.next_page();
        pager.prev_page();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_history_pager_total_pages_from_server_count() {
        // Page size 5, server total 12 -> 3 pages
        let mut history = HistoryPager::new(5);
        history.replace(Vec::new(), 12);
        assert_eq!(history.total_pages(), 3);

        // Requesting page 4 is a no-op
        assert!(!history.set_page(4));
        assert_eq!(history.page_num(), 1);

        assert!(history.set_page(3));
        assert_eq!(history.page_num(), 3);

        // Page 0 does not exist in the one-based scheme
        assert!(!history.set_page(0));
        assert_eq!(history.page_num(), 3);
    }

    #[test]
    fn test_history_pager_set_same_page_is_noop() {
        let mut history = HistoryPager::new(5);
        history.replace(Vec::new(), 12);
        assert!(history.set_page(2));
        assert!(!history.set_page(2));
    }

    proptest! {
        // totalPages == ceil(n / p) for the locally windowed collections.
        #[test]
        fn prop_total_pages_is_ceil(n in 0usize..200, p in 1usize..10) {
            let pager = pager_with(n, p);
            prop_assert_eq!(pager.total_pages(), n.div_ceil(p));
        }

        // Every page is at most p items and the windows cover the set in
        // order without overlap.
        #[test]
        fn prop_pages_partition_the_set(n in 0usize..200, p in 1usize..10) {
            let mut pager = pager_with(n, p);
            let mut seen = Vec::new();
            for _ in 0..pager.total_pages() {
                let page = pager.page();
                prop_assert!(page.len() <= p);
                seen.extend_from_slice(page);
                pager.next_page();
            }
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        }
    }
}
