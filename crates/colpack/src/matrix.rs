//! Packed output of the matrix packer.
//!
//! A `Matrix` is a flat column-major buffer tagged with its element type.
//! Dimensions are not stored; the caller knows `nrow` and attaches them,
//! either by hand or through [`shape_column_major`].
use ndarray::{Array2, ShapeBuilder, ShapeError};
use num_complex::Complex64;

use crate::column::{ElementType, Item, Text};

#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    Logical(Vec<bool>),
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Complex(Vec<Complex64>),
    Character(Vec<Text>),
    List(Vec<Item>),
}

/// Borrowed view of one column inside a packed `Matrix`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixColumn<'a> {
    Logical(&'a [bool]),
    Integer(&'a [i32]),
    Double(&'a [f64]),
    Complex(&'a [Complex64]),
    Character(&'a [Text]),
    List(&'a [Item]),
}

impl Matrix {
    pub fn element_type(&self) -> ElementType {
        match self {
            Matrix::Logical(_) => ElementType::Logical,
            Matrix::Integer(_) => ElementType::Integer,
            Matrix::Double(_) => ElementType::Double,
            Matrix::Complex(_) => ElementType::Complex,
            Matrix::Character(_) => ElementType::Character,
            Matrix::List(_) => ElementType::List,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matrix::Logical(v) => v.len(),
            Matrix::Integer(v) => v.len(),
            Matrix::Double(v) => v.len(),
            Matrix::Complex(v) => v.len(),
            Matrix::Character(v) => v.len(),
            Matrix::List(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_logical(&self) -> Option<&[bool]> {
        match self {
            Matrix::Logical(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&[i32]> {
        match self {
            Matrix::Integer(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<&[f64]> {
        match self {
            Matrix::Double(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            Matrix::Complex(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<&[Text]> {
        match self {
            Matrix::Character(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Matrix::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Column `col` of the packed buffer, given the row count it was packed with.
    ///
    /// Panics if the column lies past the end of the buffer.
    pub fn column(&self, col: usize, nrow: usize) -> MatrixColumn<'_> {
        let range = col
            .checked_mul(nrow)
            .and_then(|start| start.checked_add(nrow).map(|end| (start, end)));
        let Some((start, end)) = range.filter(|&(_, end)| end <= self.len()) else {
            panic!("column index out of bounds");
        };
        match self {
            Matrix::Logical(v) => MatrixColumn::Logical(&v[start..end]),
            Matrix::Integer(v) => MatrixColumn::Integer(&v[start..end]),
            Matrix::Double(v) => MatrixColumn::Double(&v[start..end]),
            Matrix::Complex(v) => MatrixColumn::Complex(&v[start..end]),
            Matrix::Character(v) => MatrixColumn::Character(&v[start..end]),
            Matrix::List(v) => MatrixColumn::List(&v[start..end]),
        }
    }
}

/// Reinterpret a packed buffer as an `nrow x ncol` array in Fortran order.
///
/// The buffer is moved, not copied; `a[[i, j]]` is element `j * nrow + i`.
pub fn shape_column_major<T>(
    data: Vec<T>,
    nrow: usize,
    ncol: usize,
) -> Result<Array2<T>, ShapeError> {
    Array2::from_shape_vec((nrow, ncol).f(), data)
}
