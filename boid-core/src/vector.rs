/// A 2D vector used for position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Vector of length `length` pointing at `angle` radians from the +x axis.
    pub fn from_angle(angle: f32, length: f32) -> Self {
        #[cfg(feature = "std")]
        let (sin, cos) = angle.sin_cos();
        #[cfg(not(feature = "std"))]
        let (sin, cos) = (libm::sinf(angle), libm::cosf(angle));

        Self {
            x: cos * length,
            y: sin * length,
        }
    }

    pub fn dot(&self, other: &Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    pub fn normalize(&self) -> Self {
        match self.magnitude() {
            mag if mag > 0.0 => *self / mag,
            _ => Self::zero(),
        }
    }

    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait for Vector2D {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                Self::new(self.x $op other.x, self.y $op other.y)
            }
        }
    };
}

macro_rules! scalar {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait<f32> for Vector2D {
            type Output = Self;

            fn $method(self, scalar: f32) -> Self {
                Self::new(self.x $op scalar, self.y $op scalar)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
scalar!(Mul, mul, *);
scalar!(Div, div, /);

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
