//! Windowed view over the repository list.

use serde::Deserialize;

/// How far one navigation step moves the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Paging {
    /// A step moves a whole page; the last page may be shorter than the
    /// page size.
    #[default]
    Paged,

    /// A step moves one item; the window is always full once the list is
    /// at least a page long.
    Sliding,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn signum(self) -> isize {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// The displayed subrange of a list.
///
/// `offset` stays within `0..=max_offset()` through every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow {
    total: usize,
    page_size: usize,
    offset: usize,
    paging: Paging,
}

impl CarouselWindow {
    /// Creates a window at offset 0. A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(total: usize, page_size: usize, paging: Paging) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            offset: 0,
            paging,
        }
    }

    /// Replaces the item count and returns to the first page.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.offset = 0;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        match self.paging {
            Paging::Paged => self.page_count().saturating_sub(1) * self.page_size,
            Paging::Sliding => self.total.saturating_sub(self.page_size),
        }
    }

    /// Number of pages, 0 for an empty list.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Index of the page the window currently shows.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.total > 0 && self.offset == self.max_offset() {
            self.page_count() - 1
        } else {
            self.offset / self.page_size
        }
    }

    /// Index range of the displayed items.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.offset.min(self.total);
        let end = (self.offset + self.page_size).min(self.total);
        start..end
    }

    /// The displayed items of `items`, clamped to its bounds.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Items after the window.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.visible_range().end)
    }

    /// Moves the window by `delta` items, clamped to `0..=max_offset()`.
    ///
    /// Returns `false` when the clamped offset equals the current one.
    pub fn advance(&mut self, delta: isize) -> bool {
        let target = self.offset.saturating_add_signed(delta).min(self.max_offset());
        self.set_offset(target)
    }

    /// Moves one step in `direction` according to the paging mode.
    pub fn step(&mut self, direction: Direction) -> bool {
        let size = match self.paging {
            Paging::Paged => self.page_size as isize,
            Paging::Sliding => 1,
        };
        self.advance(direction.signum() * size)
    }

    /// Jumps directly to the start of `page`, clamped to the last page.
    pub fn jump_to_page(&mut self, page: usize) -> bool {
        let target = page.saturating_mul(self.page_size).min(self.max_offset());
        self.set_offset(target)
    }

    fn set_offset(&mut self, target: usize) -> bool {
        if target == self.offset {
            return false;
        }
        self.offset = target;
        true
    }
}
