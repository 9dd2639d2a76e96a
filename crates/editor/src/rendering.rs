//! Per-render viewport queries.
//!
//! The editor never rasterizes; it only decides which lines are visible and
//! how far the text is scrolled horizontally, using advance widths supplied
//! by the renderer.

use linedit_buffer::{AdvanceSource, WrapLayout};

use crate::{EditTarget, Editor};

impl Editor {
    /// Adjust the window to the cursor and return the visible lines.
    ///
    /// Each entry is the line's full length in code points and its text.
    /// Without wrapping the text is shifted left just enough to keep the
    /// cursor column within `max_width`.
    pub fn visible_content<A>(
        &mut self,
        advances: &A,
        max_width: f32,
        line_wrapping: bool,
    ) -> Vec<(usize, String)>
    where
        A: AdvanceSource + ?Sized,
    {
        let range = self.viewport.follow(self.y, self.store.line_count());
        self.render_cache.max_width = max_width;

        let mut content: Vec<(usize, String)> = range
            .filter_map(|y| self.store.line(y))
            .map(|line| (line.chars().count(), line))
            .collect();

        if line_wrapping {
            self.viewport.x_offset = 0;
            self.viewport.x_skip = 0.0;
            return content;
        }

        let column = match &self.target {
            EditTarget::Document => self.x,
            EditTarget::ExternalLine(bound) if bound.use_x_save => self.x_save,
            EditTarget::ExternalLine(_) => 0,
        };
        let line = self.store.line(self.y).unwrap_or_default();
        let row = self.y.saturating_sub(self.viewport.skip);
        let widths = advances.advances(&line, row);
        let prefix = &widths[..column.min(widths.len())];

        let offset = self.viewport.scroll_horizontal(prefix, max_width);
        if offset > 0 {
            for (_, text) in content.iter_mut() {
                *text = text.chars().skip(offset).collect();
            }
        }
        content
    }

    /// Code points (plus one per line break) before the first visible line
    pub fn total_char_offset(&mut self) -> usize {
        let key = (self.x, self.y, self.viewport.max_lines, self.viewport.skip);
        if self.render_cache.offset_key != Some(key) {
            self.render_cache.total_char_offset =
                self.store.char_offset_of_line(self.viewport.skip);
            self.render_cache.offset_key = Some(key);
        }
        self.render_cache.total_char_offset
    }

    /// Pixel position of (x, y) when lines wrap at the layout width
    pub fn pos_line_wrapped<A>(
        &self,
        advances: &A,
        layout: &WrapLayout,
        x: usize,
        y: usize,
    ) -> (f32, f32)
    where
        A: AdvanceSource + ?Sized,
    {
        layout.position(&self.store, advances, self.viewport.skip, x, y)
    }

    /// Number of lines from the first visible one that fit in `height`
    pub fn max_lines_wrapped<A>(&self, advances: &A, layout: &WrapLayout, height: f32) -> usize
    where
        A: AdvanceSource + ?Sized,
    {
        layout.max_lines(&self.store, advances, self.viewport.skip, height)
    }
}
