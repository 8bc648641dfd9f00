//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split horizontally at ratio (0.0 - 1.0), returns (left, right)
    pub fn split_h(&self, ratio: f32) -> (Self, Self) {
        let split_x = self.w * ratio.clamp(0.0, 1.0);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// The largest square centered inside this rect
    pub fn centered_square(&self) -> Self {
        let side = self.w.min(self.h);
        Self::new(
            self.x + (self.w - side) * 0.5,
            self.y + (self.h - side) * 0.5,
            side,
            side,
        )
    }

    /// A fixed-height strip off the top, returns (strip, rest)
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let height = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, height),
            Self::new(self.x, self.y + height, self.w, self.h - height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 30.0));
        assert!(!r.contains(9.9, 15.0));
    }

    #[test]
    fn test_centered_square() {
        let r = Rect::new(0.0, 0.0, 100.0, 60.0);
        let sq = r.centered_square();
        assert!((sq.w - 60.0).abs() < 0.001);
        assert!((sq.h - 60.0).abs() < 0.001);
        assert!((sq.x - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_take_top() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (strip, rest) = r.take_top(20.0);
        assert!((strip.h - 20.0).abs() < 0.001);
        assert!((rest.y - 20.0).abs() < 0.001);
        assert!((rest.h - 30.0).abs() < 0.001);
    }
}
