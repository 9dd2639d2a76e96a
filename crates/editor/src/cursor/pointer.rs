//! Mapping pointer coordinates to document positions.

use linedit_buffer::{column_at, AdvanceSource, WrapLayout};

use crate::Editor;

impl Editor {
    /// Set the pixel origin of the text area
    pub fn set_render_start(&mut self, x: f32, y: f32) {
        self.render_cache.start_x = x;
        self.render_cache.start_y = y;
    }

    /// Layout used for wrapped rendering with the current metrics
    pub fn wrap_layout(&self) -> WrapLayout {
        WrapLayout::new(
            self.render_cache.start_x,
            self.render_cache.start_y,
            self.render_cache.max_width,
            self.viewport.line_height,
        )
    }

    /// Move the cursor to the glyph under pixel (px, py).
    ///
    /// Ignored while bound or above the text area. Wrapped layouts replay the
    /// renderer's wrap accumulation so the hit matches what is on screen.
    pub fn set_pos_from_pointer<A>(&mut self, px: f32, py: f32, advances: &A, line_wrapping: bool)
    where
        A: AdvanceSource + ?Sized,
    {
        let start_x = self.render_cache.start_x;
        let start_y = self.render_cache.start_y;
        let line_height = self.viewport.line_height;
        if self.is_bound() || py < start_y || line_height <= 0.0 {
            return;
        }

        if line_wrapping {
            let layout = self.wrap_layout();
            let Some(hit) = layout.hit(&self.store, advances, self.viewport.skip, px, py) else {
                return;
            };
            self.x = hit.x;
            self.y = hit.y;
        } else {
            let row = ((py - start_y) / line_height).floor() as usize;
            let y = self.viewport.skip.saturating_add(row).min(self.store.last_line());
            let x = if px > start_x {
                let line = self.store.line(y).unwrap_or_default();
                let widths = advances.advances(&line, y.saturating_sub(self.viewport.skip));
                let skipped = self.viewport.x_offset.min(widths.len());
                skipped + column_at(&widths[skipped..], px - start_x)
            } else {
                self.viewport.x_offset
            };
            self.y = y;
            self.x = x;
        }
        self.clamp_cursor();
        self.selection.diff(self.x, self.y);
    }
}
