//! Drawing Surface
//!
//! The only drawing vocabulary the simulation needs: clear, line and filled
//! rectangle, all in screen pixels. [`DrawList`] records these commands so a
//! frame can be inspected in tests or handed to the GPU renderer.

use glam::Vec2;

use super::color::Color;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of the given half extent around `center`.
    pub fn centered(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            size: half_extent * 2.0,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Screen-space drawing primitives.
pub trait DrawSurface {
    /// Fill the whole surface with one colour, discarding everything drawn so far.
    fn clear(&mut self, color: Color);
    /// Draw a line segment between two points.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Draw a solid rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { from: Vec2, to: Vec2, color: Color },
    FilledRect { rect: Rect, color: Color },
}

/// A [`DrawSurface`] that records commands in submission order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every recorded command so the list can be reused next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded line segments in submission order.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    /// Recorded filled rectangles in submission order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::FilledRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, color: Color) {
        // Everything before a clear is overdrawn anyway
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FilledRect { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Vec2::new(10.0, 20.0), Vec2::splat(4.0));
        assert_eq!(r.min, Vec2::new(6.0, 16.0));
        assert_eq!(r.size, Vec2::splat(8.0));
        assert_eq!(r.max(), Vec2::new(14.0, 24.0));
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw_line(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        list.fill_rect(Rect::new(Vec2::ZERO, Vec2::ONE), Color::BLACK);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::FilledRect { .. }));
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.rects().count(), 1);
    }

    #[test]
    fn test_clear_discards_earlier_commands() {
        let mut list = DrawList::new();
        list.draw_line(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        list.clear(Color::rgb(1, 2, 3));

        assert_eq!(list.len(), 1);
        assert_eq!(list.commands()[0], DrawCommand::Clear(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_reset_empties() {
        let mut list = DrawList::new();
        list.clear(Color::BLACK);
        list.reset();
        assert!(list.is_empty());
    }
}
