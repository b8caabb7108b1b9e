//! Component-wise arithmetic for points of equal dimension.
//!
//! The binary operators apply the compound form to an owned left operand.
//! Mixing dimensions does not type check:
//!
//! ```compile_fail
//! let a = ndpoint::make_point2(1, 2);
//! let b = ndpoint::make_point3(1, 2, 3);
//! let _ = a + b;
//! ```

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::point::Point;

/// Implement a component-wise binary operator and its compound form.
macro_rules! componentwise {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl<T: $assign_op, const N: usize> $assign_op for Point<T, N> {
            fn $assign_method(&mut self, rhs: Self) {
                for (lhs, rhs) in self.iter_mut().zip(rhs) {
                    lhs.$assign_method(rhs);
                }
            }
        }

        impl<T: $assign_op + Clone, const N: usize> $assign_op<&Point<T, N>> for Point<T, N> {
            fn $assign_method(&mut self, rhs: &Self) {
                for (lhs, rhs) in self.iter_mut().zip(rhs) {
                    lhs.$assign_method(rhs.clone());
                }
            }
        }

        impl<T: $assign_op, const N: usize> $op for Point<T, N> {
            type Output = Self;
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: $assign_op + Clone, const N: usize> $op<&Point<T, N>> for Point<T, N> {
            type Output = Self;
            fn $method(mut self, rhs: &Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: $assign_op + Clone, const N: usize> $op for &Point<T, N> {
            type Output = Point<T, N>;
            fn $method(self, rhs: Self) -> Point<T, N> {
                self.clone().$method(rhs)
            }
        }
    };
}

componentwise!(Add, add, AddAssign, add_assign);
componentwise!(Sub, sub, SubAssign, sub_assign);

impl<T: MulAssign + Clone, const N: usize> MulAssign<T> for Point<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        for component in self.iter_mut() {
            *component *= scalar.clone();
        }
    }
}

impl<T: MulAssign + Clone, const N: usize> Mul<T> for Point<T, N> {
    type Output = Self;
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: MulAssign + Clone, const N: usize> Mul<T> for &Point<T, N> {
    type Output = Point<T, N>;
    fn mul(self, scalar: T) -> Point<T, N> {
        self.clone() * scalar
    }
}
