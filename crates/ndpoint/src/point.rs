//! Fixed-dimension point stored inline.
//!
//! Every accessor and constructor that needs a minimum dimension checks it
//! with a `const` assertion. The assertion is evaluated when the generic code
//! is instantiated, so misuse is a build error rather than a runtime panic:
//!
//! ```compile_fail
//! let p = ndpoint::Point2::from_xy(1, 2);
//! let _ = p.z();
//! ```

use std::{
    array, fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice,
};

/// A point in `N`-dimensional space over scalar type `T`.
///
/// `N` defaults to 2, so `Point<T>` and [`Point2<T>`] name the same type.
///
/// Components live in an inline `[T; N]`; there is no heap indirection.
/// Cloning or moving a point yields an independent value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T, const N: usize = 2>([T; N]);

/// A point in 2D space.
pub type Point2<T> = Point<T, 2>;

/// A point in 3D space.
pub type Point3<T> = Point<T, 3>;

impl<T, const N: usize> Point<T, N> {
    /// Number of components in this point type.
    pub const DIMENSION: usize = N;

    /// Create a point from its components.
    ///
    /// ```compile_fail
    /// let _ = ndpoint::Point::<i32, 0>::new([]);
    /// ```
    pub const fn new(components: [T; N]) -> Self {
        const { assert!(N != 0, "Dimension is 0.") }
        Self(components)
    }

    /// Create a point whose component `i` is `f(i)`, called in index order.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(array::from_fn(f))
    }

    /// Create a point from `x` and `y`, taking ownership of both.
    ///
    /// Components past index 1 are `T::default()`.
    ///
    /// ```compile_fail
    /// let _ = ndpoint::Point::<i32, 1>::from_xy(1, 2);
    /// ```
    pub fn from_xy(x: T, y: T) -> Self
    where
        T: Default,
    {
        const { assert!(N >= 2, "Dimension is less than 2.") }
        let mut point = Self::default();
        point.0[0] = x;
        point.0[1] = y;
        point
    }

    /// Create a point from `x`, `y` and `z`, taking ownership of all three.
    ///
    /// Components past index 2 are `T::default()`.
    ///
    /// ```compile_fail
    /// let _ = ndpoint::Point2::from_xyz(1, 2, 3);
    /// ```
    pub fn from_xyz(x: T, y: T, z: T) -> Self
    where
        T: Default,
    {
        const { assert!(N >= 3, "Dimension is less than 3.") }
        let mut point = Self::default();
        point.0[0] = x;
        point.0[1] = y;
        point.0[2] = z;
        point
    }

    /// Create a point by cloning borrowed `x` and `y`.
    pub fn from_xy_ref(x: &T, y: &T) -> Self
    where
        T: Clone + Default,
    {
        Self::from_xy(x.clone(), y.clone())
    }

    /// Create a point by cloning borrowed `x`, `y` and `z`.
    pub fn from_xyz_ref(x: &T, y: &T, z: &T) -> Self
    where
        T: Clone + Default,
    {
        Self::from_xyz(x.clone(), y.clone(), z.clone())
    }

    /// Dimensionality of the point.
    pub const fn dimension(&self) -> usize {
        N
    }

    /// The X axis component.
    pub const fn x(&self) -> &T {
        const { assert!(N >= 1, "Dimension is less than 1.") }
        &self.0[0]
    }

    /// Mutable X axis component.
    pub const fn x_mut(&mut self) -> &mut T {
        const { assert!(N >= 1, "Dimension is less than 1.") }
        &mut self.0[0]
    }

    /// The Y axis component.
    ///
    /// ```compile_fail
    /// let p = ndpoint::point![7];
    /// let _ = p.y();
    /// ```
    pub const fn y(&self) -> &T {
        const { assert!(N >= 2, "Dimension is less than 2.") }
        &self.0[1]
    }

    /// Mutable Y axis component.
    pub const fn y_mut(&mut self) -> &mut T {
        const { assert!(N >= 2, "Dimension is less than 2.") }
        &mut self.0[1]
    }

    /// The Z axis component.
    ///
    /// ```compile_fail
    /// let p = ndpoint::make_point2(1.0, 2.0);
    /// let _ = p.z();
    /// ```
    pub const fn z(&self) -> &T {
        const { assert!(N >= 3, "Dimension is less than 3.") }
        &self.0[2]
    }

    /// Mutable Z axis component.
    ///
    /// ```compile_fail
    /// let mut p = ndpoint::make_point2(1.0, 2.0);
    /// *p.z_mut() = 3.0;
    /// ```
    pub const fn z_mut(&mut self) -> &mut T {
        const { assert!(N >= 3, "Dimension is less than 3.") }
        &mut self.0[2]
    }

    /// Component at `index`, or `None` if `index >= N`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Mutable component at `index`, or `None` if `index >= N`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Component at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Any other index is undefined behavior.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.0.get_unchecked(index) }
    }

    /// Mutable component at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Any other index is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.0.get_unchecked_mut(index) }
    }

    /// Return the point's components as a slice.
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Return the point's components as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Return the point's components as an array reference.
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Consume the point, returning its components.
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Copy this point into a point of dimension `K`.
    ///
    /// The first `min(N, K)` components are cloned in order; any remaining
    /// components are `T::default()`.
    pub fn resize<const K: usize>(&self) -> Point<T, K>
    where
        T: Clone + Default,
    {
        let mut source = self.0.iter().cloned();
        Point::from_fn(|_| source.next().unwrap_or_default())
    }

    /// Move this point into a point of dimension `K`.
    ///
    /// Same layout rule as [`resize`](Self::resize); truncated components are
    /// dropped.
    pub fn into_resized<const K: usize>(self) -> Point<T, K>
    where
        T: Default,
    {
        let mut source = self.0.into_iter();
        Point::from_fn(|_| source.next().unwrap_or_default())
    }
}

impl<T: Default, const N: usize> Default for Point<T, N> {
    /// A point with every component set to `T::default()`.
    ///
    /// ```compile_fail
    /// let _ = ndpoint::Point::<f64, 0>::default();
    /// ```
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

/// Panic for an out-of-range indexed access.
#[cold]
#[track_caller]
fn index_out_of_range(index: usize, dimension: usize) -> ! {
    panic!("index {index} out of range for point of dimension {dimension}")
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    /// Panics if `index >= N`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.0.get(index) {
            Some(component) => component,
            None => index_out_of_range(index, N),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    /// Panics if `index >= N`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.0.get_mut(index) {
            Some(component) => component,
            None => index_out_of_range(index, N),
        }
    }
}

impl<T, const N: usize> Deref for Point<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Point<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T, const N: usize> IntoIterator for Point<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Point<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Point<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point").field(&self.0).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
    /// Formats as `(c0, c1, ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}
