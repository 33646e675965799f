use std::fmt;

/// A location on the plane. Two points with equal coordinates are
/// interchangeable; coincident points are valid input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance. `hypot` keeps large but finite legs from
    /// overflowing through the squares.
    #[inline]
    pub fn dist(self, rhs: &Self) -> f64 {
        (rhs.x - self.x).hypot(rhs.y - self.y)
    }

    pub(crate) fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `(x, y)` form used in step listings.
    pub fn display_pair(&self) -> String {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        format!("({}, {})", b1.format(self.x), b2.format(self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.x), b2.format(self.y))
    }
}
