// ABOUTME: Circular cursor over the picker rows

/// Selection index over a fixed number of rows.
///
/// Movement wraps around in both directions. Every operation is a no-op when
/// there are no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListNavigator {
    selected: usize,
    count: usize,
}

impl ListNavigator {
    pub const fn new(count: usize) -> Self {
        Self { selected: 0, count }
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.selected = (self.selected + 1) % self.count;
        }
    }

    pub fn prev(&mut self) {
        if self.count > 0 {
            self.selected = (self.selected + self.count - 1) % self.count;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.count > 0 {
            self.selected = self.count - 1;
        }
    }

    /// Raw selection index; only meaningful when `count() > 0`
    pub const fn current(&self) -> usize {
        self.selected
    }

    /// Selected index, or `None` when there is nothing to select
    pub const fn selected(&self) -> Option<usize> {
        if self.count > 0 {
            Some(self.selected)
        } else {
            None
        }
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Adopt a new row count, keeping the selection in range
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}
