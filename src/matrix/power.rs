use crate::matrix::element::Element;
use crate::matrix::matrix::ZMatrix;
use log::trace;
use num_traits::{One, Pow};

impl<T: Element, const N: usize> ZMatrix<T, N, N> {
    /// `N x N` identity matrix.
    pub fn identity() -> Self {
        ZMatrix::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Raises the matrix to `exponent` by repeated squaring.
    ///
    /// `pow(0)` is the identity whatever the contents of `self`.
    pub fn pow(&self, mut exponent: usize) -> Self {
        let mut ret = Self::identity();
        let mut cur = self.clone();
        let mut multiplications = 0usize;

        trace!("raising {}x{} matrix to the power {}", N, N, exponent);
        while exponent > 0 {
            if exponent & 1 == 1 {
                ret *= &cur;
                multiplications += 1;
            }
            exponent >>= 1;
            // The last squaring would never be used
            if exponent > 0 {
                cur = &cur * &cur;
                multiplications += 1;
            }
        }
        trace!("power computed with {} matrix products", multiplications);

        ret
    }
}

/// `N x N` identity matrix over `T`.
pub fn eye<T: Element, const N: usize>() -> ZMatrix<T, N, N> {
    ZMatrix::identity()
}

/// `base` raised to `exponent`, see [`ZMatrix::pow`].
pub fn pow<T: Element, const N: usize>(base: &ZMatrix<T, N, N>, exponent: usize) -> ZMatrix<T, N, N> {
    base.pow(exponent)
}

impl<T: Element, const N: usize> One for ZMatrix<T, N, N> {
    fn one() -> Self {
        Self::identity()
    }
}

// Only the borrowed form: an owned impl would shadow the inherent `pow` in
// method calls and consume the receiver.
impl<T: Element, const N: usize> Pow<usize> for &ZMatrix<T, N, N> {
    type Output = ZMatrix<T, N, N>;

    fn pow(self, exponent: usize) -> ZMatrix<T, N, N> {
        ZMatrix::pow(self, exponent)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
