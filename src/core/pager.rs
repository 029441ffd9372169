//! Fixed-size raw-data paging

/// Rows per page of the raw-data viewer
pub(crate) const PAGE_SIZE: usize = 5;

/// Forward-only cursor over a dataset's rows. A new dataset gets a new
/// pager; there is no way back.
#[derive(Debug)]
pub(crate) struct Pager<'a, T> {
    rows: &'a [T],
    cursor: usize,
}

impl<'a, T> Pager<'a, T> {
    pub(crate) fn new(rows: &'a [T]) -> Self {
        Pager { rows, cursor: 0 }
    }

    /// Next up-to-`PAGE_SIZE` rows; empty once the cursor is past the end,
    /// and empty forever after.
    pub(crate) fn next_page(&mut self) -> &'a [T] {
        let start = self.cursor.min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        self.cursor = end;
        &self.rows[start..end]
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.cursor >= self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_pages() {
        let rows: Vec<u32> = vec![];
        let mut pager = Pager::new(&rows);
        assert!(pager.exhausted());
        assert!(pager.next_page().is_empty());
        assert!(pager.next_page().is_empty());
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let rows: Vec<u32> = (0..10).collect();
        let mut pager = Pager::new(&rows);
        assert_eq!(pager.next_page(), &[0, 1, 2, 3, 4]);
        assert_eq!(pager.next_page(), &[5, 6, 7, 8, 9]);
        assert!(pager.next_page().is_empty());
    }

    #[test]
    fn final_partial_page() {
        let rows: Vec<u32> = (0..7).collect();
        let mut pager = Pager::new(&rows);
        assert_eq!(pager.next_page().len(), 5);
        assert_eq!(pager.next_page(), &[5, 6]);
        assert!(pager.exhausted());
        assert!(pager.next_page().is_empty());
    }

    #[test]
    fn concatenated_pages_reproduce_input() {
        for n in [0usize, 1, 4, 5, 6, 12, 23] {
            let rows: Vec<usize> = (0..n).collect();
            let mut pager = Pager::new(&rows);
            let mut pages = 0;
            let mut collected = Vec::new();
            loop {
                let page = pager.next_page();
                if page.is_empty() {
                    break;
                }
                pages += 1;
                collected.extend_from_slice(page);
            }
            assert_eq!(pages, n.div_ceil(PAGE_SIZE));
            assert_eq!(collected, rows);
            // stays empty indefinitely
            assert!(pager.next_page().is_empty());
            assert!(pager.next_page().is_empty());
        }
    }
}
