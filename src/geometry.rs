//! Plane geometry primitives

/// A 2D point in drawing units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point halfway between this point and another
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Shift by a displacement
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Unsigned area of the triangle spanned by three points (shoelace formula)
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(2.0, 2.0).midpoint(Point::new(102.0, 2.0));
        assert_eq!(m, Point::new(52.0, 2.0));
    }

    #[test]
    fn test_translate() {
        assert_eq!(Point::new(1.0, 1.0).translate(-1.0, 2.5), Point::new(0.0, 3.5));
    }

    #[test]
    fn test_triangle_area_orientation_independent() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 3.0);
        assert_eq!(triangle_area(a, b, c), 6.0);
        assert_eq!(triangle_area(a, c, b), 6.0);
    }

    #[test]
    fn test_degenerate_area() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(triangle_area(p, p, p), 0.0);
    }
}
