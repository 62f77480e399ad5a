//! Shared sorting and pagination primitives for the table screens.

use serde::{Deserialize, Serialize};

/// Page sizes the table screens offer
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction for one screen.
///
/// Selecting the already-active column flips the direction; selecting a
/// different column resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C: Copy + PartialEq> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> SortState<C> {
    pub fn new(column: C) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn select(&mut self, column: C) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Stable sort with absent keys ordered after present ones.
///
/// Rows whose key is `None` sink to the bottom for BOTH directions, so a
/// direction flip never surfaces a wall of blank cells at the top.
pub fn sort_rows<T, K, F>(rows: &mut [T], key: F, direction: SortDirection)
where
    K: Ord,
    F: Fn(&T) -> Option<K>,
{
    rows.sort_by(|a, b| {
        use std::cmp::Ordering;
        match (key(a), key(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(ka), Some(kb)) => match direction {
                SortDirection::Ascending => ka.cmp(&kb),
                SortDirection::Descending => kb.cmp(&ka),
            },
        }
    });
}

/// Current page and page size for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl Pager {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size jumps back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// The page actually shown, clamped so a shrinking filtered set can never
    /// leave the screen on a page past the end.
    pub fn effective_page(&self, total_rows: usize) -> usize {
        if total_rows == 0 {
            return 0;
        }
        let last_page = (total_rows - 1) / self.page_size;
        self.page.min(last_page)
    }

    /// Slice the visible page out of the full filtered/sorted set
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let page = self.effective_page(rows.len());
        let start = page * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}
