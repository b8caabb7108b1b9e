//! Fixed-dimension points over a generic scalar type.
//!
//! [`Point<T, N>`](point::Point) stores exactly `N` components inline. Named
//! axis accessors and the two/three value constructors are gated on `N` at
//! compile time: asking a 2D point for its `z` component does not build.
//!
//! ```
//! use ndpoint::{Point2, Point3, make_point2, point3_from};
//!
//! let a = Point2::from_xy(1, 2);
//! let b = make_point2(3, 4);
//! let c = a + b;
//! assert_eq!((*c.x(), *c.y()), (4, 6));
//!
//! let lifted: Point3<i32> = point3_from(&c);
//! assert_eq!(lifted.as_array(), &[4, 6, 0]);
//! ```

/// Conversions between points of different dimensions and other containers.
pub mod convert;
/// Error types used across the crate.
pub mod error;
/// Component-wise arithmetic operators.
mod ops;
/// The fixed-dimension point type.
pub mod point;

pub use crate::{
    convert::{make_point2, make_point3, point2_from, point3_from},
    point::{Point, Point2, Point3},
};

/// Build a [`Point`] from a list of components.
///
/// The dimension is the number of components given.
///
/// ```
/// let p = ndpoint::point![1.0, 2.0, 3.0];
/// assert_eq!(p.dimension(), 3);
/// assert_eq!(*p.z(), 3.0);
/// ```
#[macro_export]
macro_rules! point {
    ($($component:expr),+ $(,)?) => {
        $crate::Point::new([$($component),+])
    };
}
