use crate::matrix::element::Element;
use crate::matrix::matrix::ZMatrix;
use crate::rings::zmod::Zmod;
use num_traits::Zero;
use std::ops;

// Element-wise operations are implemented on references, the owned forms
// below forward to them.

impl<T: Element, const M: usize, const N: usize> ops::Add<&ZMatrix<T, M, N>> for &ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn add(self, rhs: &ZMatrix<T, M, N>) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(
            self.cells()
                .iter()
                .zip(rhs.cells().iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        )
    }
}

impl<T: Element, const M: usize, const N: usize> ops::Sub<&ZMatrix<T, M, N>> for &ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn sub(self, rhs: &ZMatrix<T, M, N>) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(
            self.cells()
                .iter()
                .zip(rhs.cells().iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        )
    }
}

macro_rules! forward_elementwise_binop {
    ($imp:ident, $method:ident) => {
        impl<T: Element, const M: usize, const N: usize> ops::$imp<ZMatrix<T, M, N>>
            for ZMatrix<T, M, N>
        {
            type Output = ZMatrix<T, M, N>;

            fn $method(self, rhs: ZMatrix<T, M, N>) -> ZMatrix<T, M, N> {
                ops::$imp::$method(&self, &rhs)
            }
        }

        impl<T: Element, const M: usize, const N: usize> ops::$imp<&ZMatrix<T, M, N>>
            for ZMatrix<T, M, N>
        {
            type Output = ZMatrix<T, M, N>;

            fn $method(self, rhs: &ZMatrix<T, M, N>) -> ZMatrix<T, M, N> {
                ops::$imp::$method(&self, rhs)
            }
        }

        impl<T: Element, const M: usize, const N: usize> ops::$imp<ZMatrix<T, M, N>>
            for &ZMatrix<T, M, N>
        {
            type Output = ZMatrix<T, M, N>;

            fn $method(self, rhs: ZMatrix<T, M, N>) -> ZMatrix<T, M, N> {
                ops::$imp::$method(self, &rhs)
            }
        }
    };
}

forward_elementwise_binop!(Add, add);
forward_elementwise_binop!(Sub, sub);

impl<T: Element, const M: usize, const N: usize> ops::AddAssign<&ZMatrix<T, M, N>>
    for ZMatrix<T, M, N>
{
    fn add_assign(&mut self, rhs: &ZMatrix<T, M, N>) {
        for (a, b) in self.cells_mut().iter_mut().zip(rhs.cells().iter()) {
            *a = a.clone() + b.clone();
        }
    }
}

impl<T: Element, const M: usize, const N: usize> ops::AddAssign<ZMatrix<T, M, N>>
    for ZMatrix<T, M, N>
{
    fn add_assign(&mut self, rhs: ZMatrix<T, M, N>) {
        *self += &rhs;
    }
}

impl<T: Element, const M: usize, const N: usize> ops::SubAssign<&ZMatrix<T, M, N>>
    for ZMatrix<T, M, N>
{
    fn sub_assign(&mut self, rhs: &ZMatrix<T, M, N>) {
        for (a, b) in self.cells_mut().iter_mut().zip(rhs.cells().iter()) {
            *a = a.clone() - b.clone();
        }
    }
}

impl<T: Element, const M: usize, const N: usize> ops::SubAssign<ZMatrix<T, M, N>>
    for ZMatrix<T, M, N>
{
    fn sub_assign(&mut self, rhs: ZMatrix<T, M, N>) {
        *self -= &rhs;
    }
}

impl<T: Element, const M: usize, const N: usize> ops::Neg for &ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn neg(self) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(self.cells().iter().map(|k| -k.clone()).collect())
    }
}

impl<T: Element, const M: usize, const N: usize> ops::Neg for ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn neg(self) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(self.into_cells().into_iter().map(|k| -k).collect())
    }
}

// Scalar product, matrix on the left

impl<T: Element, const M: usize, const N: usize> ops::Mul<T> for &ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn mul(self, n: T) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(self.cells().iter().map(|k| k.clone() * n.clone()).collect())
    }
}

impl<T: Element, const M: usize, const N: usize> ops::Mul<T> for ZMatrix<T, M, N> {
    type Output = ZMatrix<T, M, N>;

    fn mul(self, n: T) -> ZMatrix<T, M, N> {
        ZMatrix::from_cells(
            self.into_cells()
                .into_iter()
                .map(|k| k * n.clone())
                .collect(),
        )
    }
}

impl<T: Element, const M: usize, const N: usize> ops::MulAssign<T> for ZMatrix<T, M, N> {
    fn mul_assign(&mut self, n: T) {
        for k in self.cells_mut().iter_mut() {
            *k = k.clone() * n.clone();
        }
    }
}

// Scalar product, scalar on the left. Coherence rules out a blanket impl
// over `T`, so each element type gets its own.

macro_rules! left_scalar_mul {
    ($($t:ty),*) => {$(
        impl<const M: usize, const N: usize> ops::Mul<&ZMatrix<$t, M, N>> for $t {
            type Output = ZMatrix<$t, M, N>;

            fn mul(self, rhs: &ZMatrix<$t, M, N>) -> ZMatrix<$t, M, N> {
                ZMatrix::from_cells(rhs.cells().iter().map(|k| self * *k).collect())
            }
        }

        impl<const M: usize, const N: usize> ops::Mul<ZMatrix<$t, M, N>> for $t {
            type Output = ZMatrix<$t, M, N>;

            fn mul(self, rhs: ZMatrix<$t, M, N>) -> ZMatrix<$t, M, N> {
                self * &rhs
            }
        }
    )*};
}

left_scalar_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<const P: u64, const M: usize, const N: usize> ops::Mul<&ZMatrix<Zmod<P>, M, N>> for Zmod<P> {
    type Output = ZMatrix<Zmod<P>, M, N>;

    fn mul(self, rhs: &ZMatrix<Zmod<P>, M, N>) -> ZMatrix<Zmod<P>, M, N> {
        ZMatrix::from_cells(rhs.cells().iter().map(|k| self * *k).collect())
    }
}

impl<const P: u64, const M: usize, const N: usize> ops::Mul<ZMatrix<Zmod<P>, M, N>> for Zmod<P> {
    type Output = ZMatrix<Zmod<P>, M, N>;

    fn mul(self, rhs: ZMatrix<Zmod<P>, M, N>) -> ZMatrix<Zmod<P>, M, N> {
        self * &rhs
    }
}

// Matrix product: (M x N) * (N x P) -> (M x P)

impl<T: Element, const M: usize, const N: usize, const P: usize> ops::Mul<&ZMatrix<T, N, P>>
    for &ZMatrix<T, M, N>
{
    type Output = ZMatrix<T, M, P>;

    fn mul(self, rhs: &ZMatrix<T, N, P>) -> ZMatrix<T, M, P> {
        let lhs = self.cells();
        let rhs = rhs.cells();

        ZMatrix::from_cells(
            (0..M)
                .flat_map(|i| {
                    (0..P).map(move |j| {
                        (0..N).fold(T::zero(), |acc, k| {
                            acc + lhs[i * N + k].clone() * rhs[k * P + j].clone()
                        })
                    })
                })
                .collect(),
        )
    }
}

impl<T: Element, const M: usize, const N: usize, const P: usize> ops::Mul<ZMatrix<T, N, P>>
    for ZMatrix<T, M, N>
{
    type Output = ZMatrix<T, M, P>;

    fn mul(self, rhs: ZMatrix<T, N, P>) -> ZMatrix<T, M, P> {
        &self * &rhs
    }
}

impl<T: Element, const M: usize, const N: usize, const P: usize> ops::Mul<&ZMatrix<T, N, P>>
    for ZMatrix<T, M, N>
{
    type Output = ZMatrix<T, M, P>;

    fn mul(self, rhs: &ZMatrix<T, N, P>) -> ZMatrix<T, M, P> {
        &self * rhs
    }
}

impl<T: Element, const M: usize, const N: usize, const P: usize> ops::Mul<ZMatrix<T, N, P>>
    for &ZMatrix<T, M, N>
{
    type Output = ZMatrix<T, M, P>;

    fn mul(self, rhs: ZMatrix<T, N, P>) -> ZMatrix<T, M, P> {
        self * &rhs
    }
}

impl<T: Element, const M: usize, const N: usize> ops::MulAssign<&ZMatrix<T, N, N>>
    for ZMatrix<T, M, N>
{
    fn mul_assign(&mut self, rhs: &ZMatrix<T, N, N>) {
        *self = &*self * rhs;
    }
}

impl<T: PartialEq, const M: usize, const N: usize> PartialEq for ZMatrix<T, M, N> {
    fn eq(&self, rhs: &ZMatrix<T, M, N>) -> bool {
        self.cells() == rhs.cells()
    }
}

impl<T: Eq, const M: usize, const N: usize> Eq for ZMatrix<T, M, N> {}

impl<T: Element, const M: usize, const N: usize> Zero for ZMatrix<T, M, N> {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|k| k.is_zero())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
