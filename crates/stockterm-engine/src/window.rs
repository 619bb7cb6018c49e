//! Virtualized render window over a long view.
//!
//! Only the slice of rows intersecting the viewport (plus overscan on both
//! sides) is materialized. All offsets are in the same abstract extent unit
//! (terminal lines in the TUI, pixels elsewhere).

/// Inclusive range of view indices to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub lo: usize,
    pub hi: usize,
}

impl WindowRange {
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.lo && index <= self.hi
    }
}

/// A materialized row: its view index and start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualRow {
    pub index: usize,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWindow {
    len: usize,
    row_extent: usize,
    viewport: usize,
    scroll_offset: usize,
    overscan: usize,
    total_extent: usize,
}

impl RenderWindow {
    pub fn new(row_extent: usize, overscan: usize) -> Self {
        Self {
            len: 0,
            row_extent: row_extent.max(1),
            viewport: 0,
            scroll_offset: 0,
            overscan,
            total_extent: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn row_extent(&self) -> usize {
        self.row_extent
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn total_extent(&self) -> usize {
        self.total_extent
    }

    /// Rows that fit in the viewport; at least one.
    pub fn page_rows(&self) -> usize {
        (self.viewport / self.row_extent).max(1)
    }

    /// New view length. Total extent is re-measured only here.
    pub fn set_len(&mut self, len: usize) {
        if len != self.len {
            self.len = len;
            self.total_extent = len.saturating_mul(self.row_extent);
        }
        self.clamp_offset();
    }

    pub fn set_viewport(&mut self, viewport: usize) {
        self.viewport = viewport;
        self.clamp_offset();
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.clamp_offset();
    }

    pub fn max_offset(&self) -> usize {
        self.total_extent.saturating_sub(self.viewport)
    }

    /// Scroll by `delta` extent units, clamped to `[0, max_offset]`.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_offset();
    }

    /// Bring row `index` into view, aligning it to the nearest viewport edge.
    /// No-op when the row is already fully visible.
    pub fn scroll_to_index(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        let start = index * self.row_extent;
        let end = start + self.row_extent;
        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset + self.viewport {
            self.scroll_offset = end.saturating_sub(self.viewport);
        }
        self.clamp_offset();
    }

    /// First and last rows intersecting the viewport, without overscan.
    pub fn visible(&self) -> Option<WindowRange> {
        if self.len == 0 {
            return None;
        }
        let last_index = self.len - 1;
        let first = (self.scroll_offset / self.row_extent).min(last_index);
        let last = ((self.scroll_offset + self.viewport) / self.row_extent).min(last_index);
        Some(WindowRange { lo: first, hi: last })
    }

    /// The rows to materialize: visible rows widened by overscan and clamped
    /// to `[0, len-1]`.
    pub fn range(&self) -> Option<WindowRange> {
        let visible = self.visible()?;
        Some(WindowRange {
            lo: visible.lo.saturating_sub(self.overscan),
            hi: (visible.hi + self.overscan).min(self.len - 1),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = VirtualRow> + '_ {
        let (lo, hi) = match self.range() {
            Some(r) => (r.lo, r.hi + 1),
            None => (0, 0),
        };
        (lo..hi).map(move |index| VirtualRow {
            index,
            start: index * self.row_extent,
        })
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }
}

impl Default for RenderWindow {
    fn default() -> Self {
        Self::new(1, 20)
    }
}
