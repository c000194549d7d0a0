use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x: x, y: y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Slope of the segment joining the two points, zero for a vertical pair.
    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        if rhs_pt.x == lhs_pt.x {
            0.0
        } else {
            (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
        }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
