//! Building 2D and 3D points, and moving components between points and
//! other containers.

use crate::{
    error::{Error, Result},
    point::{Point, Point2, Point3},
};

/// Construct a 2D point from `x` and `y`.
pub const fn make_point2<T>(x: T, y: T) -> Point2<T> {
    Point::new([x, y])
}

/// Construct a 3D point from `x`, `y` and `z`.
pub const fn make_point3<T>(x: T, y: T, z: T) -> Point3<T> {
    Point::new([x, y, z])
}

/// Build a 2D point from a point of any dimension.
///
/// A 1D source is padded with `T::default()`; anything wider is truncated.
///
/// ```
/// use ndpoint::{make_point3, point2_from};
///
/// let p = point2_from(&make_point3(1, 2, 3));
/// assert_eq!(p.as_array(), &[1, 2]);
/// ```
pub fn point2_from<T: Clone + Default, const M: usize>(point: &Point<T, M>) -> Point2<T> {
    point.resize()
}

/// Build a 3D point from a point of any dimension.
///
/// Missing components are `T::default()`; components past index 2 are
/// dropped.
///
/// ```
/// use ndpoint::{make_point2, point3_from};
///
/// let p = point3_from(&make_point2(5, 6));
/// assert_eq!(p.as_array(), &[5, 6, 0]);
/// ```
pub fn point3_from<T: Clone + Default, const M: usize>(point: &Point<T, M>) -> Point3<T> {
    point.resize()
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.into_array()
    }
}

impl<T, const N: usize> From<Point<T, N>> for Vec<T> {
    fn from(point: Point<T, N>) -> Self {
        point.into_iter().collect()
    }
}

impl<T: Clone, const N: usize> From<&Point<T, N>> for Vec<T> {
    fn from(point: &Point<T, N>) -> Self {
        point.to_vec()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Point<T, N> {
    type Error = Error;

    /// Fails unless `components` holds exactly `N` values.
    fn try_from(components: &[T]) -> Result<Self> {
        let array = <&[T; N]>::try_from(components).map_err(|_| Error::DimensionMismatch {
            expected: N,
            got: components.len(),
        })?;
        Ok(Self::new(array.clone()))
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Point<T, N> {
    type Error = Error;

    /// Fails unless `components` holds exactly `N` values.
    fn try_from(components: Vec<T>) -> Result<Self> {
        <[T; N]>::try_from(components)
            .map(Self::new)
            .map_err(|rejected| Error::DimensionMismatch {
                expected: N,
                got: rejected.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_points_in_const_context() {
        const ORIGIN: Point2<i32> = make_point2(0, 0);
        const ORIGIN_X: i32 = *ORIGIN.x();
        const UP: Point3<f64> = make_point3(0.0, 0.0, 1.0);
        const UP_Z: f64 = *UP.z();
        assert_eq!(ORIGIN_X, 0);
        assert_eq!(*ORIGIN.y(), 0);
        assert_eq!(UP_Z, 1.0);
        assert_eq!(point2_from(&UP), make_point2(0.0, 0.0));
    }

    #[test]
    fn make_points() {
        let p = make_point2(1.5, -2.5);
        assert_eq!((*p.x(), *p.y()), (1.5, -2.5));

        let p = make_point3(String::from("x"), String::from("y"), String::from("z"));
        assert_eq!(p.z(), "z");
    }

    #[test]
    fn shrink_to_2d() {
        let p = point2_from(&make_point3(1, 2, 3));
        assert_eq!(p, make_point2(1, 2));
    }

    #[test]
    fn grow_to_3d() {
        let p = point3_from(&make_point2(5, 6));
        assert_eq!(p, make_point3(5, 6, 0));
    }

    #[test]
    fn from_1d_and_wide() {
        let one = Point::new([9u8]);
        assert_eq!(point2_from(&one).as_array(), &[9, 0]);
        assert_eq!(point3_from(&one).as_array(), &[9, 0, 0]);

        let wide: Point<u8, 6> = Point::from_fn(|i| i as u8 + 1);
        assert_eq!(point2_from(&wide).as_array(), &[1, 2]);
        assert_eq!(point3_from(&wide).as_array(), &[1, 2, 3]);
    }

    #[test]
    fn same_dimension_is_a_copy() {
        let p = make_point3(1, 2, 3);
        assert_eq!(point3_from(&p), p);
        assert_eq!(point2_from(&make_point2(4, 5)), make_point2(4, 5));
    }

    #[test]
    fn arrays_and_vecs() {
        let p: Point3<i32> = [1, 2, 3].into();
        let arr: [i32; 3] = p.into();
        assert_eq!(arr, [1, 2, 3]);

        let v: Vec<i32> = (&p).into();
        assert_eq!(v, vec![1, 2, 3]);
        let v: Vec<i32> = p.into();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn try_from_slice() -> Result<()> {
        let p = Point3::try_from(&[1, 2, 3][..])?;
        assert_eq!(p, make_point3(1, 2, 3));

        let err = Point3::<i32>::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 3 components, got 2"
        );
        Ok(())
    }

    #[test]
    fn try_from_vec() -> Result<()> {
        let p = Point2::try_from(vec![String::from("a"), String::from("b")])?;
        assert_eq!(p.as_slice(), ["a", "b"]);

        let err = Point2::<u8>::try_from(vec![1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got: 4
            }
        );
        Ok(())
    }
}
