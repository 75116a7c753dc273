//! Fixed-size dense matrices whose dimensions are part of the type.
//!
//! Integer matrices are not closed under multiplicative inverse, so no
//! inverse is offered.

pub mod error;
pub mod matrix {
    pub mod element;
    pub mod matrix;
    pub mod ops;
    pub mod power;
    pub mod render;
}
pub mod rings {
    pub mod zmod;
}

pub use error::{MatrixError, MatrixResult};
pub use matrix::element::Element;
pub use matrix::matrix::ZMatrix;
pub use matrix::power::{eye, pow};
pub use matrix::render::RenderConfig;
pub use rings::zmod::Zmod;

/// Builds a [`ZMatrix`] from rows written as array literals.
///
/// ```
/// let m = zmatrix::zmat![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.dim(), (2, 3));
/// ```
#[macro_export]
macro_rules! zmat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::ZMatrix::from([$([$($x,)*],)*])
    }};
}

// Aliases
pub type NVectorC<T, const N: usize> = ZMatrix<T, N, 1>;
pub type NVectorR<T, const N: usize> = ZMatrix<T, 1, N>;
pub type NSquareMatrix<T, const N: usize> = ZMatrix<T, N, N>;

pub type IMatrix<const M: usize, const N: usize> = ZMatrix<i32, M, N>;
pub type IVectorC<const N: usize> = IMatrix<N, 1>;
pub type IVectorR<const N: usize> = IMatrix<1, N>;
pub type ISquareMatrix<const N: usize> = IMatrix<N, N>;
