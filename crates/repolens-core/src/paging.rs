//! Fixed-size pagination over an already-fetched repository list.
//!
//! Pure slicing; no re-fetch is involved. Pages are 1-based to match the
//! page buttons shown to the user.

/// Repositories shown per page.
pub const PAGE_SIZE: usize = 9;

/// The slice of `items` belonging to 1-based `page`.
///
/// Page 0 and pages past the end return an empty slice.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pages_then_remainder() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, 1), (0..9).collect::<Vec<u32>>());
        assert_eq!(paginate(&items, 2), [9, 10, 11]);
        assert_eq!(total_pages(items.len()), 2);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, 3).is_empty());
        assert!(paginate::<u32>(&[], 1).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..18).collect();
        assert_eq!(total_pages(items.len()), 2);
        assert_eq!(paginate(&items, 2).len(), 9);
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn last_page_size_formula_holds() {
        for n in [1usize, 8, 9, 10, 17, 27, 28] {
            let items: Vec<usize> = (0..n).collect();
            let pages = total_pages(n);
            for page in 1..=pages {
                let expected = if page == pages {
                    n - PAGE_SIZE * (page - 1)
                } else {
                    PAGE_SIZE
                };
                assert_eq!(paginate(&items, page).len(), expected.min(PAGE_SIZE));
            }
        }
    }
}
