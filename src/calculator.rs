//! Arithmetic operations.
//!
//! Every operation is a pure function over any primitive integer or float.
//! Only [`divide`] can fail. Integer arithmetic wraps on overflow, so
//! `divide(i64::MIN, -1) == Ok(i64::MIN)` and `add(i64::MAX, 1) == i64::MIN`.

use std::fmt::Debug;

use num_traits::Num;
use tracing::debug;

use crate::error::{CalculatorError, Result};

/// Bound shared by every operand type.
pub trait Operand: Num + Copy + Debug {
    fn sum(self, rhs: Self) -> Self;
    fn difference(self, rhs: Self) -> Self;
    fn product(self, rhs: Self) -> Self;
    /// Quotient for a divisor already known to be non-zero.
    fn quotient(self, rhs: Self) -> Self;
}

macro_rules! wrapping_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            fn sum(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            fn difference(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            fn product(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            fn quotient(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
        }
    )*};
}

macro_rules! float_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            fn sum(self, rhs: Self) -> Self { self + rhs }
            fn difference(self, rhs: Self) -> Self { self - rhs }
            fn product(self, rhs: Self) -> Self { self * rhs }
            fn quotient(self, rhs: Self) -> Self { self / rhs }
        }
    )*};
}

wrapping_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_operand!(f32, f64);

/// Add two numbers and return the sum.
pub fn add<T: Operand>(a: T, b: T) -> T {
    debug!(?a, ?b, "performing addition");
    a.sum(b)
}

/// Subtract `b` from `a` and return the difference.
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    debug!(?a, ?b, "performing subtraction");
    a.difference(b)
}

/// Multiply two numbers and return the product.
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    debug!(?a, ?b, "performing multiplication");
    a.product(b)
}

/// Divide `a` by `b` and return the quotient.
///
/// Integer operands truncate toward zero. A zero divisor (including `-0.0`)
/// is rejected with [`CalculatorError::InvalidArgument`].
pub fn divide<T: Operand>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(CalculatorError::divide_by_zero());
    }
    debug!(?a, ?b, "performing division");
    Ok(a.quotient(b))
}
