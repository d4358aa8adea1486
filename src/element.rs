//! Numeric element types accepted by the norm evaluator.
//!
//! [`Element`] abstracts over real and complex scalars so the norm
//! functions can treat "absolute value" uniformly: plain `abs` for real
//! elements, modulus for complex ones.

use num_complex::{Complex32, Complex64};
use num_traits::Float;

/// A numeric array element with a real-valued magnitude.
///
/// Implemented for `f32`, `f64`, [`Complex32`] and [`Complex64`].
pub trait Element: Copy {
    /// Real scalar type carrying magnitudes and norm values.
    type Real: Float;

    /// Absolute value of the element; modulus for complex elements.
    fn magnitude(self) -> Self::Real;
}

impl Element for f32 {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Element for f64 {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Element for Complex32 {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.norm()
    }
}

impl Element for Complex64 {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }
}
