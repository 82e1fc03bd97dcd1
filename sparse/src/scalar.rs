use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex;
use num_traits::{One, Zero};

/// Element type stored in sparse containers
///
/// Absent regions read as `Zero::zero()`.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// complex conjugate, identity for real scalars
    fn conj(self) -> Self;
}

macro_rules! real_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn conj(self) -> Self {
                    self
                }
            }
        )*
    };
}
real_scalar!(i32, i64, f32, f64);

impl Scalar for Complex<f32> {
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}
impl Scalar for Complex<f64> {
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}
