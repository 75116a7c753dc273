use crate::error::{MatrixError, MatrixResult};
use num_traits::Zero;
use std::ops::{Index, IndexMut};

/// Dense `M x N` matrix, stored row-major.
///
/// The matrix owns its backing store exclusively: `clone` deep-copies it and
/// dropping the matrix releases it once. Both dimensions are part of the type,
/// so operands of incompatible shapes are rejected at compile time.
///
/// A matrix emptied by [`ZMatrix::take`] only supports being dropped or
/// reassigned; every other use panics.
#[derive(Debug, Clone)]
pub struct ZMatrix<T, const M: usize, const N: usize> {
    cells: Vec<T>,
}

impl<T, const M: usize, const N: usize> ZMatrix<T, M, N> {
    pub const ROWS: usize = M;
    pub const COLS: usize = N;
    pub const SIZE: usize = M * N;

    /// Builds a matrix from `M * N` values in row-major order.
    ///
    /// Panics if the number of values differs from `M * N`.
    pub fn from_vec(cells: Vec<T>) -> Self {
        match Self::try_from_vec(cells) {
            Ok(mat) => mat,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_from_vec(cells: Vec<T>) -> MatrixResult<Self> {
        if cells.len() != Self::SIZE {
            return Err(MatrixError::ElementCount {
                expected: Self::SIZE,
                actual: cells.len(),
            });
        }
        Ok(ZMatrix { cells })
    }

    /// Builds a matrix whose entry `(i, j)` is `func(i, j)`.
    /// Entries are generated row by row.
    pub fn from_fn<F>(mut func: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(Self::SIZE);
        for i in 0..M {
            for j in 0..N {
                cells.push(func(i, j));
            }
        }
        ZMatrix { cells }
    }

    // Caller guarantees `cells.len() == M * N`
    #[inline(always)]
    pub(crate) fn from_cells(cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), Self::SIZE);
        ZMatrix { cells }
    }

    #[inline(always)]
    pub(crate) fn cells(&self) -> &[T] {
        assert!(!self.is_taken(), "{}", MatrixError::MovedFrom);
        &self.cells
    }

    #[inline(always)]
    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        assert!(!self.is_taken(), "{}", MatrixError::MovedFrom);
        &mut self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<T> {
        assert!(!self.is_taken(), "{}", MatrixError::MovedFrom);
        self.cells
    }

    /// Total number of entries, `M * N`.
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// `(rows, columns)`.
    pub const fn dim(&self) -> (usize, usize) {
        (M, N)
    }

    /// Transfers the backing store into a new matrix without copying any
    /// element, leaving `self` empty.
    ///
    /// An empty matrix may be dropped or assigned a new value; any other use
    /// panics. Taking from an empty matrix panics as well.
    pub fn take(&mut self) -> Self {
        assert!(!self.is_taken(), "{}", MatrixError::MovedFrom);
        ZMatrix {
            cells: std::mem::take(&mut self.cells),
        }
    }

    /// Whether the storage of this matrix was handed off by [`ZMatrix::take`].
    pub fn is_taken(&self) -> bool {
        self.cells.len() != Self::SIZE
    }

    fn offset(&self, i: usize, j: usize) -> MatrixResult<usize> {
        if self.is_taken() {
            return Err(MatrixError::MovedFrom);
        }
        if i >= M || j >= N {
            return Err(MatrixError::OutOfBounds {
                row: i,
                col: j,
                rows: M,
                cols: N,
            });
        }
        Ok(i * N + j)
    }

    /// Reference to entry `(i, j)`, or the reason it cannot be accessed.
    pub fn try_at(&self, i: usize, j: usize) -> MatrixResult<&T> {
        let offset = self.offset(i, j)?;
        Ok(&self.cells[offset])
    }

    pub fn try_at_mut(&mut self, i: usize, j: usize) -> MatrixResult<&mut T> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.cells[offset])
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.try_at(i, j).ok()
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        self.try_at_mut(i, j).ok()
    }

    /// Mutable reference to entry `(i, j)`. Panics when out of bounds.
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        match self.try_at_mut(i, j) {
            Ok(elem) => elem,
            Err(error) => panic!("{}", error),
        }
    }

    /// Entry `(i, j)` without any bounds check.
    ///
    /// # Safety
    ///
    /// `i < M`, `j < N`, and the matrix must not have been taken from.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize, j: usize) -> &T {
        self.cells.get_unchecked(i * N + j)
    }

    /// Mutable counterpart of [`ZMatrix::get_unchecked`].
    ///
    /// # Safety
    ///
    /// Same contract as [`ZMatrix::get_unchecked`].
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize, j: usize) -> &mut T {
        self.cells.get_unchecked_mut(i * N + j)
    }

    /// Row `i` as a slice of length `N`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(
            i < M,
            "{}",
            MatrixError::RowOutOfBounds {
                row: i,
                rows: M,
                cols: N
            }
        );
        &self.cells()[i * N..(i + 1) * N]
    }

    /// Row `i` as a mutable slice; `mat.row_mut(i)[j] = x` assigns entry `(i, j)`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(
            i < M,
            "{}",
            MatrixError::RowOutOfBounds {
                row: i,
                rows: M,
                cols: N
            }
        );
        &mut self.cells_mut()[i * N..(i + 1) * N]
    }

    /// All entries in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.cells()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells().iter()
    }
}

impl<T: Clone, const M: usize, const N: usize> ZMatrix<T, M, N> {
    /// Matrix with every entry set to `value`.
    pub fn filled(value: T) -> Self {
        ZMatrix {
            cells: vec![value; M * N],
        }
    }

    /// Value of entry `(i, j)`. Panics when out of bounds.
    pub fn at(&self, i: usize, j: usize) -> T {
        match self.try_at(i, j) {
            Ok(elem) => elem.clone(),
            Err(error) => panic!("{}", error),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..M).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn transpose(&self) -> ZMatrix<T, N, M> {
        let cells = self.cells();
        ZMatrix::from_fn(|i, j| cells[j * N + i].clone())
    }
}

impl<T: Zero + Clone, const M: usize, const N: usize> ZMatrix<T, M, N> {
    /// Matrix with every entry set to the additive identity.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Zero + Clone, const M: usize, const N: usize> Default for ZMatrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for ZMatrix<T, M, N> {
    fn from(rows: [[T; N]; M]) -> Self {
        ZMatrix {
            cells: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T, const M: usize, const N: usize> TryFrom<Vec<T>> for ZMatrix<T, M, N> {
    type Error = MatrixError;

    fn try_from(cells: Vec<T>) -> MatrixResult<Self> {
        Self::try_from_vec(cells)
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for ZMatrix<T, M, N> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.try_at(i, j) {
            Ok(elem) => elem,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for ZMatrix<T, M, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        self.at_mut(i, j)
    }
}

impl<'a, T, const M: usize, const N: usize> IntoIterator for &'a ZMatrix<T, M, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zmat;

    fn sample() -> ZMatrix<i32, 3, 3> {
        ZMatrix::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])
    }

    #[test]
    fn test_construct() {
        let zeros = ZMatrix::<i32, 2, 3>::zeros();
        assert!(zeros.iter().all(|x| *x == 0));
        assert_eq!(zeros.as_slice(), ZMatrix::<i32, 2, 3>::default().as_slice());

        let sevens = ZMatrix::<i64, 2, 2>::filled(7);
        assert_eq!(sevens.to_list(), vec![vec![7, 7], vec![7, 7]]);

        let generated = ZMatrix::<usize, 2, 3>::from_fn(|i, j| 10 * i + j);
        assert_eq!(generated.to_list(), vec![vec![0, 1, 2], vec![10, 11, 12]]);

        let mut counter = 0;
        let counted = ZMatrix::<i32, 2, 2>::from_fn(|_, _| {
            counter += 1;
            counter
        });
        assert_eq!(counted.as_slice(), &[1, 2, 3, 4]);

        let nested = ZMatrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(nested.as_slice(), sample().as_slice());
        assert_eq!(zmat![[1, 2, 3], [4, 5, 6], [7, 8, 9]].as_slice(), sample().as_slice());
    }

    #[test]
    fn test_from_vec_row_major() {
        let values: Vec<i32> = (0..12).collect();
        let mat = ZMatrix::<i32, 3, 4>::from_vec(values.clone());
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(mat.at(i, j), values[i * 4 + j]);
            }
        }
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(
            ZMatrix::<i32, 2, 2>::try_from_vec(vec![1, 2, 3]).unwrap_err(),
            MatrixError::ElementCount {
                expected: 4,
                actual: 3
            }
        );
        let mat: ZMatrix<i32, 1, 2> = vec![5, 6].try_into().unwrap();
        assert_eq!(mat.at(0, 1), 6);
    }

    #[test]
    #[should_panic(expected = "expected 9 elements, got 8")]
    fn test_from_vec_wrong_count() {
        ZMatrix::<i32, 3, 3>::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_size_dim() {
        let mat = ZMatrix::<i32, 3, 4>::zeros();
        assert_eq!(mat.size(), 12);
        assert_eq!(mat.dim(), (3, 4));
        assert_eq!(ZMatrix::<i32, 3, 4>::SIZE, 12);
    }

    #[test]
    fn test_access() {
        let mut mat = sample();
        assert_eq!(mat.at(1, 2), 6);
        assert_eq!(mat[(2, 0)], 7);
        assert_eq!(mat.get(0, 3), None);
        assert_eq!(mat.get(2, 2), Some(&9));

        *mat.at_mut(0, 0) = 10;
        mat[(1, 1)] = 50;
        mat.row_mut(2)[1] = 80;
        *mat.get_mut(2, 2).unwrap() = 90;
        assert_eq!(
            mat.to_list(),
            vec![vec![10, 2, 3], vec![4, 50, 6], vec![7, 80, 90]]
        );
        assert_eq!(mat.row(1), &[4, 50, 6]);
        assert_eq!(unsafe { *mat.get_unchecked(1, 2) }, 6);

        unsafe { *mat.get_unchecked_mut(0, 1) = 20 };
        assert_eq!(mat.at(0, 1), 20);

        assert_eq!(
            mat.try_at(3, 0).unwrap_err(),
            MatrixError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    #[should_panic(expected = "index (0, 3) out of bounds for 3x3 matrix")]
    fn test_at_column_out_of_bounds() {
        sample().at(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_mut_out_of_bounds() {
        let mut mat = sample();
        mat[(3, 1)] = 0;
    }

    #[test]
    #[should_panic(expected = "row 3 out of bounds for 3x3 matrix")]
    fn test_row_out_of_bounds() {
        sample().row(3);
    }

    #[test]
    #[should_panic(expected = "row 2 out of bounds for 2x4 matrix")]
    fn test_row_mut_out_of_bounds() {
        let mut mat = ZMatrix::<i32, 2, 4>::zeros();
        mat.row_mut(2)[0] = 1;
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_row_column_out_of_bounds() {
        let mut mat = sample();
        mat.row_mut(0)[3] = 1;
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy[(0, 0)] = 100;
        assert_eq!(original.at(0, 0), 1);
        assert_eq!(copy.at(0, 0), 100);
    }

    #[test]
    fn test_take() {
        let mut source = sample();
        let target = source.take();
        assert!(source.is_taken());
        assert!(!target.is_taken());
        assert_eq!(target.as_slice(), sample().as_slice());
        assert_eq!(source.try_at(0, 0).unwrap_err(), MatrixError::MovedFrom);
        assert_eq!(source.get(0, 0), None);

        // Reassigning restores a usable matrix
        source = ZMatrix::filled(4);
        assert!(!source.is_taken());
        assert_eq!(source.at(2, 2), 4);

        let mut dropped = sample();
        let _ = dropped.take();
        drop(dropped);
    }

    #[test]
    #[should_panic(expected = "use of a matrix whose storage was taken")]
    fn test_take_then_access() {
        let mut source = sample();
        let _target = source.take();
        source.at(0, 0);
    }

    #[test]
    #[should_panic(expected = "use of a matrix whose storage was taken")]
    fn test_take_twice() {
        let mut source = sample();
        let _target = source.take();
        source.take();
    }

    #[test]
    fn test_empty_shape_is_never_taken() {
        let mut empty = ZMatrix::<i32, 0, 3>::zeros();
        let other = empty.take();
        assert!(!empty.is_taken());
        assert_eq!(other.size(), 0);
        assert!(other.to_list().is_empty());
    }

    #[test]
    fn test_transpose() {
        let mat = ZMatrix::<i32, 2, 3>::from_vec(vec![1, 2, 3, 4, 5, 6]);
        let transposed = mat.transpose();
        assert_eq!(transposed.dim(), (3, 2));
        assert_eq!(
            transposed.to_list(),
            vec![vec![1, 4], vec![2, 5], vec![3, 6]]
        );
        assert_eq!(transposed.transpose().as_slice(), mat.as_slice());
    }
}
