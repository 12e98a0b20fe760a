//! The matrix packer.
//!
//! [`pack`] detects the element type from the first retained column and
//! dispatches to [`pack_as`], instantiated once per supported element type.
//! Shapes and column kinds are the caller's responsibility: a retained column
//! that is shorter than `nrow` or of another kind than the detected one is a
//! contract violation and panics.
use num_complex::Complex64;

use crate::column::{Column, ElementType, Item, Text};
use crate::error::PackError;
use crate::matrix::Matrix;

/// An element type with a copy routine.
trait PackElement: Clone {
    const TYPE: ElementType;

    /// The column's values, if the column holds this element type.
    fn values(column: &Column) -> Option<&[Self]>;

    fn into_matrix(mat: Vec<Self>) -> Matrix;
}

impl PackElement for bool {
    const TYPE: ElementType = ElementType::Logical;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Logical(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::Logical(mat)
    }
}

impl PackElement for i32 {
    const TYPE: ElementType = ElementType::Integer;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Integer(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::Integer(mat)
    }
}

impl PackElement for f64 {
    const TYPE: ElementType = ElementType::Double;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Double(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::Double(mat)
    }
}

impl PackElement for Complex64 {
    const TYPE: ElementType = ElementType::Complex;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Complex(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::Complex(mat)
    }
}

// Cloning a handle aliases the string.
impl PackElement for Text {
    const TYPE: ElementType = ElementType::Character;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::Character(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::Character(mat)
    }
}

impl PackElement for Item {
    const TYPE: ElementType = ElementType::List;

    fn values(column: &Column) -> Option<&[Self]> {
        match column {
            Column::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn into_matrix(mat: Vec<Self>) -> Matrix {
        Matrix::List(mat)
    }
}

/// Pack `columns` into a column-major matrix, skipping column `exclude`.
///
/// # Arguments
///
/// * `columns` - The table columns, in matrix column order.
/// * `nrow` - Rows per column; exactly this many elements are read from each retained column.
/// * `ncol` - Column count the host expects. Informational only: the buffer holds
///   `nrow` times the number of retained columns.
/// * `exclude` - Zero-based index of the row-name column. `None` or an index past
///   the end excludes nothing.
///
/// # Returns
///
/// A `Matrix` typed after the first retained column, or
/// `PackError::UnsupportedType` when that type cannot be packed. An input without
/// retained columns packs to an empty logical matrix.
///
/// # Panics
///
/// If a retained column has fewer than `nrow` elements, is of another kind than
/// the first retained column, or `nrow` times the retained column count overflows.
pub fn pack(
    columns: &[Column],
    nrow: usize,
    ncol: usize,
    exclude: Option<usize>,
) -> Result<Matrix, PackError> {
    let retained = retained_columns(columns, exclude).count();
    let matlen = nrow
        .checked_mul(retained)
        .unwrap_or_else(|| panic!("matrix of {} x {} elements overflows", nrow, retained));

    let element_type = retained_columns(columns, exclude)
        .next()
        .map(|(_, column)| column.element_type())
        .unwrap_or(ElementType::Logical);

    log::debug!(
        "Packing {} of {} columns ({} rows, element type {}, excluded column {:?})",
        retained,
        columns.len(),
        nrow,
        element_type,
        exclude
    );
    if retained != ncol {
        log::debug!(
            "Host expects {} columns but {} are retained; packing {} elements",
            ncol,
            retained,
            matlen
        );
    }

    let mat = match element_type {
        ElementType::Logical => pack_as::<bool>(columns, nrow, matlen, exclude),
        ElementType::Integer => pack_as::<i32>(columns, nrow, matlen, exclude),
        ElementType::Double => pack_as::<f64>(columns, nrow, matlen, exclude),
        ElementType::Complex => pack_as::<Complex64>(columns, nrow, matlen, exclude),
        ElementType::Character => pack_as::<Text>(columns, nrow, matlen, exclude),
        ElementType::List => pack_as::<Item>(columns, nrow, matlen, exclude),
        unsupported => {
            log::warn!("Cannot pack columns of type '{}'", unsupported);
            return Err(PackError::UnsupportedType(unsupported));
        }
    };

    Ok(mat)
}

/// Host entry point: `rownames` is the 1-based position of the row-name column,
/// with `0` or any position past the last column meaning there is none.
pub fn pack_one_based(
    columns: &[Column],
    nrow: usize,
    ncol: usize,
    rownames: usize,
) -> Result<Matrix, PackError> {
    pack(columns, nrow, ncol, rownames.checked_sub(1))
}

/// The column the host uses for row names, if `rownames` points at one.
pub fn row_name_column(columns: &[Column], rownames: usize) -> Option<&Column> {
    rownames.checked_sub(1).and_then(|idx| columns.get(idx))
}

fn retained_columns(
    columns: &[Column],
    exclude: Option<usize>,
) -> impl Iterator<Item = (usize, &Column)> + '_ {
    columns
        .iter()
        .enumerate()
        .filter(move |(jj, _)| Some(*jj) != exclude)
}

fn pack_as<T: PackElement>(
    columns: &[Column],
    nrow: usize,
    matlen: usize,
    exclude: Option<usize>,
) -> Matrix {
    let mut mat: Vec<T> = Vec::with_capacity(matlen);

    for (jj, column) in retained_columns(columns, exclude) {
        let Some(values) = T::values(column) else {
            panic!(
                "column {} is of type '{}', expected '{}'",
                jj,
                column.element_type(),
                T::TYPE
            );
        };
        assert!(
            values.len() >= nrow,
            "column {} has {} elements, expected {}",
            jj,
            values.len(),
            nrow
        );
        log::trace!("Copying column {} into slots {}..{}", jj, mat.len(), mat.len() + nrow);
        mat.extend_from_slice(&values[..nrow]);
    }

    T::into_matrix(mat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retained_columns_skips_only_the_excluded_index() {
        let columns = vec![
            Column::Integer(vec![1]),
            Column::Integer(vec![2]),
            Column::Integer(vec![3]),
        ];
        let kept: Vec<usize> = retained_columns(&columns, Some(1)).map(|(j, _)| j).collect();
        assert_eq!(kept, vec![0, 2]);

        let kept: Vec<usize> = retained_columns(&columns, Some(3)).map(|(j, _)| j).collect();
        assert_eq!(kept, vec![0, 1, 2]);
    }

    #[test]
    fn copy_routine_reads_exactly_nrow_elements() {
        let columns = vec![
            Column::Double(vec![1.0, 2.0, 3.0]),
            Column::Double(vec![4.0, 5.0, 6.0]),
        ];
        let mat = pack_as::<f64>(&columns, 2, 4, None);
        assert_eq!(mat, Matrix::Double(vec![1.0, 2.0, 4.0, 5.0]));
    }

    #[test]
    fn element_tags_match_matrix_variants() {
        assert_eq!(bool::into_matrix(vec![]).element_type(), bool::TYPE);
        assert_eq!(i32::into_matrix(vec![]).element_type(), i32::TYPE);
        assert_eq!(f64::into_matrix(vec![]).element_type(), f64::TYPE);
        assert_eq!(Complex64::into_matrix(vec![]).element_type(), Complex64::TYPE);
        assert_eq!(Text::into_matrix(vec![]).element_type(), Text::TYPE);
        assert_eq!(Item::into_matrix(vec![]).element_type(), Item::TYPE);
    }
}
