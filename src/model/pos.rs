use std::ops;

/// Simple (x, y) coordinate / vector
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pos2 {
    /// Position on the x-axis.
    pub x: f32,
    /// Position on the y-axis.
    pub y: f32,
}

impl Pos2 {
    /// Create a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return the position's length squared.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Return the position's length.
    pub fn length(self) -> f32 {
        f64::from(self.x * self.x + self.y * self.y).sqrt() as f32
    }

    /// Return the dot product.
    pub fn dot(self, other: Self) -> f32 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Return the distance to another position.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl ops::Add<Pos2> for Pos2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Pos2> for Pos2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl ops::Mul<f32> for Pos2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
