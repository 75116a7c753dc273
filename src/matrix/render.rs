use crate::matrix::matrix::ZMatrix;
use itertools::Itertools;
use std::fmt;

/// Separators used by [`ZMatrix::render`].
///
/// The default layout is the one `Display` produces: entries of a row
/// separated by a single space, rows separated by a newline, nothing trailing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub column_separator: String,
    pub row_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            column_separator: " ".into(),
            row_separator: "\n".into(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> ZMatrix<T, M, N> {
    pub fn render(&self, config: &RenderConfig) -> String {
        (0..M)
            .map(|i| self.row(i).iter().join(&config.column_separator))
            .join(&config.row_separator)
    }
}

// Formatter flags apply to every entry, `{:>4}` right-aligns each of them.
impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for ZMatrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..M {
            for (j, elem) in self.row(i).iter().enumerate() {
                fmt::Display::fmt(elem, f)?;
                if j != N - 1 {
                    f.write_str(" ")?;
                }
            }
            if i != M - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
