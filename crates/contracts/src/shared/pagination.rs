//! Pagination label math.

/// "`{from}-{to} of {count}`", 1-based and inclusive. An empty result reads
/// `0-0 of 0`; a page past the end (after deleting the last row of the last
/// page) reads `0-0 of {count}`.
pub fn displayed_rows_label(page_index: usize, page_size: usize, total: u64) -> String {
    let (from, to) = displayed_range(page_index, page_size, total);
    format!("{}-{} of {}", from, to, total)
}

/// 1-based inclusive bounds of the rows shown on `page_index`.
pub fn displayed_range(page_index: usize, page_size: usize, total: u64) -> (u64, u64) {
    if total == 0 || page_size == 0 {
        return (0, 0);
    }
    let start = (page_index as u64) * (page_size as u64);
    if start >= total {
        return (0, 0);
    }
    (start + 1, (start + page_size as u64).min(total))
}

/// Never below 1 so that "page 1 of 1" is shown for an empty table.
pub fn total_pages(page_size: usize, total: u64) -> usize {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(page_size as u64) as usize;
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        assert_eq!(displayed_rows_label(2, 10, 47), "21-30 of 47");
    }

    #[test]
    fn test_last_partial_page() {
        assert_eq!(displayed_rows_label(4, 10, 47), "41-47 of 47");
    }

    #[test]
    fn test_empty() {
        assert_eq!(displayed_rows_label(0, 10, 0), "0-0 of 0");
    }

    #[test]
    fn test_page_beyond_total() {
        assert_eq!(displayed_range(9, 10, 47), (0, 0));
        // the only row of page 5 was deleted, the table still sits on page 5
        assert_eq!(displayed_rows_label(4, 10, 40), "0-0 of 40");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(10, 47), 5);
        assert_eq!(total_pages(25, 50), 2);
        assert_eq!(total_pages(10, 0), 1);
    }
}
