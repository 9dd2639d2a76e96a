//! Rendering state for the editor.

/// Layout values supplied by the renderer and derived caches.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderingCache {
    /// Left edge of the text area
    pub start_x: f32,
    /// Top edge of the text area
    pub start_y: f32,
    /// Width available for text at the last render
    pub max_width: f32,
    /// Characters before the first visible line
    pub total_char_offset: usize,
    /// (x, y, max_lines, skip) the offset was computed for
    pub offset_key: Option<(usize, usize, usize, usize)>,
}

impl RenderingCache {
    /// Drop derived values after the document changed wholesale.
    pub fn invalidate(&mut self) {
        self.offset_key = None;
    }
}
