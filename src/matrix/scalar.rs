//! Element types a [`Matrix`](super::Matrix) can hold.

use std::fmt::{Debug, Display};

/// A numeric element with an additive identity, a multiplicative identity
/// and a fused accumulate step.
///
/// Integer implementations wrap on overflow in every build profile, so a
/// product never panics halfway through a worker. Floating point follows
/// IEEE 754.
pub trait Scalar: Copy + Send + Sync + PartialEq + Debug + Display + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// Returns `acc + a * b`.
    fn mul_add(acc: Self, a: Self, b: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn mul_add(acc: Self, a: Self, b: Self) -> Self {
                    acc.wrapping_add(a.wrapping_mul(b))
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline(always)]
                fn mul_add(acc: Self, a: Self, b: Self) -> Self {
                    acc + a * b
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);
