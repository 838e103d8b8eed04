use core::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::traits::{FloatScalar, Scalar};

/// Fixed-size numeric vector.
///
/// Stack-allocated, no-std compatible. Supports the elementwise algebra the
/// ODE engine needs from a state container (addition, subtraction, scalar
/// multiply) plus single-index access.
///
/// # Examples
///
/// ```
/// use butcher::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from an array.
    ///
    /// ```
    /// use butcher::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create a vector filled with a single value.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Create a zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    pub fn norm(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * self.data[i];
        }
        sum.sqrt()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Elementwise algebra ─────────────────────────────────────────────

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.data[i] = out.data[i] + rhs.data[i];
        }
        out
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] + rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.data[i] = out.data[i] - rhs.data[i];
        }
        out
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] - rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.data[i] = T::zero() - out.data[i];
        }
        out
    }
}

/// Scalar multiply: `v * s`, elementwise.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..N {
            out.data[i] = out.data[i] * rhs;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementwise_algebra() {
        let a = Vector::from_array([1.0_f64, 2.0, 3.0]);
        let b = Vector::from_array([4.0_f64, 5.0, 6.0]);
        assert_eq!(a + b, Vector::from_array([5.0, 7.0, 9.0]));
        assert_eq!(b - a, Vector::from_array([3.0, 3.0, 3.0]));
        assert_eq!(a * 2.0, Vector::from_array([2.0, 4.0, 6.0]));
        assert_eq!(-a, Vector::from_array([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vector::from_array([1.0_f64, 1.0]);
        v += Vector::from_array([1.0, 2.0]);
        assert_eq!(v, Vector::from_array([2.0, 3.0]));
        v -= Vector::from_array([2.0, 2.0]);
        assert_eq!(v, Vector::from_array([0.0, 1.0]));
    }

    #[test]
    fn norm_and_indexing() {
        let mut v = Vector::<f64, 2>::zeros();
        v[0] = 3.0;
        v[1] = 4.0;
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }
}
