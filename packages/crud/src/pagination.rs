use serde::{Deserialize, Serialize};

/// Position within a server-paginated list.
///
/// Pages are 1-based. `total_pages` and `total_items` come from the server's
/// pagination block and are authoritative; the client never recomputes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            page_size: page_size.max(1),
        }
    }

    /// Take totals from a server response. Current page is clamped into range.
    pub fn apply(&mut self, total_pages: u32, total_items: u64) {
        self.total_pages = total_pages.max(1);
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Move to `page`, clamped to `1..=total_pages`. Returns whether the page
    /// actually changed, i.e. whether a reload is needed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages.max(1));
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages.max(1)
    }

    /// 1-based index of the first row on the current page, for "Showing x-y of z".
    pub fn first_row(&self) -> u64 {
        if self.total_items == 0 {
            0
        } else {
            u64::from(self.current_page - 1) * u64::from(self.page_size) + 1
        }
    }

    pub fn last_row(&self) -> u64 {
        (u64::from(self.current_page) * u64::from(self.page_size)).min(self.total_items)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_on_page_one() {
        let cursor = PageCursor::new(10);
        assert_eq!(cursor.current_page, 1);
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_go_to_is_clamped() {
        let mut cursor = PageCursor::new(10);
        cursor.apply(3, 25);

        assert!(cursor.go_to(3));
        assert!(!cursor.has_next());
        assert!(cursor.has_prev());

        assert!(!cursor.go_to(9));
        assert_eq!(cursor.current_page, 3);

        assert!(cursor.go_to(0));
        assert_eq!(cursor.current_page, 1);
    }

    #[test]
    fn test_apply_shrinks_current_page() {
        let mut cursor = PageCursor::new(10);
        cursor.apply(5, 50);
        cursor.go_to(5);
        cursor.apply(2, 11);
        assert_eq!(cursor.current_page, 2);
        assert_eq!(cursor.pages().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_row_range() {
        let mut cursor = PageCursor::new(10);
        cursor.apply(3, 25);
        cursor.go_to(3);
        assert_eq!((cursor.first_row(), cursor.last_row()), (21, 25));

        let empty = PageCursor::new(10);
        assert_eq!((empty.first_row(), empty.last_row()), (0, 0));
    }
}
