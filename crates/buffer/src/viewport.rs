use std::ops::Range;

/// Visible window over the document lines
///
/// The line capacity comes from layout metrics supplied by the renderer;
/// the horizontal offset is recomputed per render from advance widths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    /// First visible line (0-based)
    pub skip: usize,
    /// Number of visible lines
    pub max_lines: usize,
    /// Height of the text area in pixels
    pub height: f32,
    /// Height of one rendered row in pixels
    pub line_height: f32,
    /// Code points hidden at the left edge in non-wrapping mode
    pub x_offset: usize,
    /// Advance width of the hidden code points
    pub x_skip: f32,
}

impl Viewport {
    /// Create a viewport showing `max_lines` lines from the top
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            ..Self::default()
        }
    }

    /// Update capacity from pixel metrics
    pub fn set_bounds(&mut self, height: f32, line_height: f32) {
        self.height = height;
        self.line_height = line_height;
        let next = if line_height > 0.0 {
            (height / line_height).floor().max(0.0) as usize
        } else {
            0
        };
        self.set_bounds_direct(next);
    }

    /// Update capacity; a shrinking window scrolls down by the difference
    pub fn set_bounds_direct(&mut self, next: usize) {
        if self.max_lines != 0 && next < self.max_lines {
            self.skip += self.max_lines - next;
        }
        self.max_lines = next;
    }

    /// Check if line is inside the window (the line right below it counts)
    pub fn contains(&self, line: usize) -> bool {
        line >= self.skip && line <= self.skip + self.max_lines
    }

    /// Scroll so `line` is visible, centering it when far from both ends.
    ///
    /// Does nothing while the line is already inside the window.
    pub fn center(&mut self, line: usize, line_count: usize) {
        if self.contains(line) {
            return;
        }
        let half = self.max_lines / 2;
        if line < half || line_count < line {
            self.skip = 0;
        } else if line_count - line < half {
            self.skip = line_count.saturating_sub(self.max_lines);
        } else {
            self.skip = line - half;
        }
    }

    /// Adjust the window before rendering and return the visible line range.
    ///
    /// Pins the window to the document end, then scrolls until the cursor
    /// line is inside it. Nothing is visible before the bounds are set.
    pub fn follow(&mut self, cursor_y: usize, line_count: usize) -> Range<usize> {
        if self.max_lines == 0 {
            return self.skip..self.skip;
        }
        let mut end = self.skip + self.max_lines;
        if end >= line_count {
            end = line_count;
            self.skip = end.saturating_sub(self.max_lines);
        }
        if cursor_y >= end && end < line_count {
            self.skip += cursor_y + 1 - end;
            end = cursor_y + 1;
        } else if cursor_y < self.skip {
            end -= self.skip - cursor_y;
            self.skip = cursor_y;
        }
        self.skip..end
    }

    /// Compute the horizontal offset for non-wrapping rendering.
    ///
    /// `prefix` holds the advances of the code points before the cursor.
    /// Skips the fewest leading code points that bring the cursor within
    /// `max_width`, and stores the count and their total advance.
    pub fn scroll_horizontal(&mut self, prefix: &[f32], max_width: f32) -> usize {
        let mut needed: f32 = prefix.iter().sum();
        self.x_offset = 0;
        self.x_skip = 0.0;
        for advance in prefix {
            if needed <= max_width {
                break;
            }
            needed -= advance;
            self.x_offset += 1;
            self.x_skip += advance;
        }
        self.x_offset
    }

    /// Reset to the document top
    pub fn reset(&mut self) {
        self.skip = 0;
        self.x_offset = 0;
        self.x_skip = 0.0;
    }
}
