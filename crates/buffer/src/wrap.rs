//! Advance-width collaborator and the wrapped-layout simulation
//!
//! The renderer owns font metrics. This module only consumes per-character
//! advance widths through [`AdvanceSource`] and replays the renderer's
//! wrap rule so that cursor placement and pointer mapping stay
//! pixel-consistent with what is drawn.

use unicode_width::UnicodeWidthChar;

use super::{LineSource, Position};

/// Per-character advance widths supplied by the renderer
pub trait AdvanceSource {
    /// Advance width of a single code point
    fn advance(&self, ch: char) -> f32;

    /// Advance widths of every code point of `line`, rendered on `row`
    fn advances(&self, line: &str, _row: usize) -> Vec<f32> {
        line.chars().map(|ch| self.advance(ch)).collect()
    }

    /// Total advance of `text`
    fn text_advance(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}

/// Monospace advances: a fixed cell width times the terminal column width.
///
/// Control characters occupy one cell, zero-width marks occupy none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAdvance {
    pub cell_width: f32,
}

impl CellAdvance {
    pub fn new(cell_width: f32) -> Self {
        Self { cell_width }
    }
}

impl Default for CellAdvance {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl AdvanceSource for CellAdvance {
    fn advance(&self, ch: char) -> f32 {
        self.cell_width * ch.width().unwrap_or(1) as f32
    }
}

/// Geometry of the wrapped text area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapLayout {
    /// Left edge of the text area
    pub x_base: f32,
    /// Top edge of the text area
    pub y_base: f32,
    /// Usable width before wrapping
    pub max_width: f32,
    /// Height of one rendered row
    pub line_height: f32,
}

impl WrapLayout {
    pub fn new(x_base: f32, y_base: f32, max_width: f32, line_height: f32) -> Self {
        Self {
            x_base,
            y_base,
            max_width,
            line_height,
        }
    }

    /// Whether a glyph of width `w` placed at `pen_x` moves to a new row.
    ///
    /// A glyph never wraps at the start of a row, so every row holds at
    /// least one code point.
    fn wraps(&self, pen_x: f32, w: f32) -> bool {
        pen_x > self.x_base && pen_x + w > self.x_base + self.max_width
    }

    /// Advance the pen over one glyph, wrapping first if needed.
    ///
    /// Returns the x where the glyph is drawn.
    fn place(&self, pen_x: &mut f32, pen_y: &mut f32, w: f32) -> f32 {
        if self.wraps(*pen_x, w) {
            *pen_y += self.line_height;
            *pen_x = self.x_base;
        }
        let at = *pen_x;
        *pen_x += w;
        at
    }

    /// Pixel position of the cursor at (x, y) when lines wrap.
    ///
    /// # Arguments
    /// * `source` - Lines being rendered
    /// * `advances` - Advance widths of the renderer's font
    /// * `skip` - First visible line
    /// * `x`, `y` - Cursor position in code points
    ///
    /// # Returns
    /// `(x, y)` pixel coordinates of the cursor's left edge and row top
    pub fn position<S, A>(
        &self,
        source: &S,
        advances: &A,
        skip: usize,
        x: usize,
        y: usize,
    ) -> (f32, f32)
    where
        S: LineSource + ?Sized,
        A: AdvanceSource + ?Sized,
    {
        let mut pen_x = self.x_base;
        let mut pen_y = self.y_base;
        for line in skip..y {
            for ch in source.line_chars(line) {
                self.place(&mut pen_x, &mut pen_y, advances.advance(ch));
            }
            pen_y += self.line_height;
            pen_x = self.x_base;
        }
        for ch in source.line_chars(y).into_iter().take(x) {
            self.place(&mut pen_x, &mut pen_y, advances.advance(ch));
        }
        (pen_x, pen_y)
    }

    /// Number of rows line `y` occupies
    pub fn rows<S, A>(&self, source: &S, advances: &A, y: usize) -> usize
    where
        S: LineSource + ?Sized,
        A: AdvanceSource + ?Sized,
    {
        let mut pen_x = self.x_base;
        let mut pen_y = 0.0;
        let mut rows = 1;
        for ch in source.line_chars(y) {
            let before = pen_y;
            self.place(&mut pen_x, &mut pen_y, advances.advance(ch));
            if pen_y != before {
                rows += 1;
            }
        }
        rows
    }

    /// How many lines starting at `skip` fit into `height` pixels.
    ///
    /// The last line counted may be partially visible.
    pub fn max_lines<S, A>(&self, source: &S, advances: &A, skip: usize, height: f32) -> usize
    where
        S: LineSource + ?Sized,
        A: AdvanceSource + ?Sized,
    {
        if self.line_height <= 0.0 {
            return 0;
        }
        let mut remaining = height;
        let mut count = 0;
        for y in skip..source.line_count() {
            remaining -= self.rows(source, advances, y) as f32 * self.line_height;
            count += 1;
            if remaining <= 0.0 {
                break;
            }
        }
        count
    }

    /// Resolve a pointer coordinate to a cursor position when lines wrap.
    ///
    /// Returns `None` above the text area. Past the right end of a row the
    /// position snaps to that row's last code point (or the line end on the
    /// line's final row); below the last line it snaps to the document end.
    pub fn hit<S, A>(
        &self,
        source: &S,
        advances: &A,
        skip: usize,
        px: f32,
        py: f32,
    ) -> Option<Position>
    where
        S: LineSource + ?Sized,
        A: AdvanceSource + ?Sized,
    {
        if py < self.y_base || self.line_height <= 0.0 {
            return None;
        }
        let count = source.line_count();
        let mut row_top = self.y_base;
        for y in skip.min(count.saturating_sub(1))..count {
            let chars = source.line_chars(y);
            let mut pen_x = self.x_base;
            for (i, ch) in chars.iter().enumerate() {
                let w = advances.advance(*ch);
                let before = row_top;
                let at = self.place(&mut pen_x, &mut row_top, w);
                if row_top != before && py < before + self.line_height {
                    return Some(Position::at(i.saturating_sub(1), y));
                }
                if py < row_top + self.line_height && px < at + w {
                    return Some(Position::at(i, y));
                }
            }
            if py < row_top + self.line_height {
                return Some(Position::at(chars.len(), y));
            }
            row_top += self.line_height;
        }
        let last = count.saturating_sub(1);
        Some(Position::at(source.line_len(last), last))
    }
}

/// Column under `px` given the advances of the visible code points.
///
/// Counts glyphs whose right edge lies at or left of `px`.
pub fn column_at(advances: &[f32], px: f32) -> usize {
    let mut acc = 0.0f32;
    let mut column = 0;
    for advance in advances {
        acc += *advance;
        if acc > px {
            break;
        }
        column += 1;
    }
    column
}
