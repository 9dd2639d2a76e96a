use std::cmp::{max, min};

/// Position in document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Offset in line in code points (0-based, may equal line length)
    pub x: usize,
    /// Line number (0-based)
    pub y: usize,
}

impl Position {
    /// Document start
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create position at (x, y)
    pub fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.y.cmp(&other.y) {
            std::cmp::Ordering::Equal => self.x.cmp(&other.x),
            other => other,
        }
    }
}

/// Text selection anchored at a start point.
///
/// The end point follows cursor motion through [`Selection::diff`] and its
/// per-axis variants, but only while the selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
    /// Whether the selection tracks cursor motion
    pub active: bool,
}

impl Selection {
    /// Anchor a new selection at (x, y)
    pub fn start(&mut self, x: usize, y: usize) {
        self.x_start = x;
        self.y_start = y;
        self.x_end = x;
        self.y_end = y;
        self.active = true;
    }

    /// Deactivate selection
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Move the end point to (x, y)
    pub fn diff(&mut self, x: usize, y: usize) {
        self.diff_x(x);
        self.diff_y(y);
    }

    /// Move the end point horizontally
    pub fn diff_x(&mut self, x: usize) {
        if self.active {
            self.x_end = x;
        }
    }

    /// Move the end point vertically
    pub fn diff_y(&mut self, y: usize) {
        if self.active {
            self.y_end = y;
        }
    }

    /// Anchor point
    pub fn anchor(&self) -> Position {
        Position::at(self.x_start, self.y_start)
    }

    /// Moving end point
    pub fn head(&self) -> Position {
        Position::at(self.x_end, self.y_end)
    }

    /// Start of selection (minimum position)
    pub fn smaller(&self) -> Position {
        min(self.anchor(), self.head())
    }

    /// End of selection (maximum position)
    pub fn bigger(&self) -> Position {
        max(self.anchor(), self.head())
    }

    pub fn x_smaller(&self) -> usize {
        self.smaller().x
    }

    pub fn x_bigger(&self) -> usize {
        self.bigger().x
    }

    pub fn y_smaller(&self) -> usize {
        min(self.y_start, self.y_end)
    }

    pub fn y_bigger(&self) -> usize {
        max(self.y_start, self.y_end)
    }

    /// Selection is on a single line
    pub fn is_single_line(&self) -> bool {
        self.y_start == self.y_end
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor() == self.head()
    }
}
