//! Drawing surfaces.
//!
//! The geometry never renders anything itself. [`Polygon::draw`] walks its
//! rings and calls into whatever implements [`DrawSurface`]: a canvas, a
//! plotter driver, or the SVG path builder below.
//!
//! [`Polygon::draw`]: crate::polygon::Polygon::draw

use std::fmt::Write;

use crate::geometry::Point;

/// Pen-style drawing commands, one ring at a time.
///
/// ## Rust Lesson #9: Traits as capabilities
///
/// A trait here plays the role an interface or a duck-typed object would in
/// other languages. Callers pass `&mut impl DrawSurface`, and the compiler
/// generates one `draw` per surface type (no virtual calls unless you ask
/// for `dyn DrawSurface`).
pub trait DrawSurface {
    /// Lift the pen and put it down at `p`.
    fn move_to(&mut self, p: Point);

    /// Draw a straight line from the current position to `p`.
    fn line_to(&mut self, p: Point);

    /// Finish the current ring. Surfaces that don't care can ignore it.
    fn close_path(&mut self) {}
}

/// Builds the `d` attribute of an SVG `<path>`.
#[derive(Debug, Clone)]
pub struct SvgPathBuilder {
    data: String,
    precision: usize,
}

impl SvgPathBuilder {
    pub fn new(precision: usize) -> Self {
        Self { data: String::new(), precision }
    }

    fn command(&mut self, cmd: char, p: Point) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        let prec = self.precision;
        // Writing into a String cannot fail
        let _ = write!(self.data, "{cmd}{:.prec$},{:.prec$}", p.x, p.y);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn finish(self) -> String {
        self.data
    }
}

impl Default for SvgPathBuilder {
    fn default() -> Self {
        Self::new(2)
    }
}

impl DrawSurface for SvgPathBuilder {
    fn move_to(&mut self, p: Point) {
        self.command('M', p);
    }

    fn line_to(&mut self, p: Point) {
        self.command('L', p);
    }

    fn close_path(&mut self) {
        if !self.data.is_empty() {
            self.data.push_str(" Z");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
