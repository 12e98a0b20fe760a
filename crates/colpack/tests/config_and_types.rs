//! Integration tests for pack configuration, element types and matrix views.

use std::io::Write;

use colpack::{
    load_pack_config, pack, pack_with_config, shape_column_major, Column, ElementType, Matrix,
    MatrixColumn, PackConfig,
};

// ---------------------------------------------------------------------------
// PackConfig
// ---------------------------------------------------------------------------

#[test]
fn pack_config_default_has_no_row_names() {
    let cfg = PackConfig::default();
    assert_eq!(cfg.nrow, 0);
    assert_eq!(cfg.ncol, 0);
    assert_eq!(cfg.rownames, 0);
}

#[test]
fn pack_config_rownames_defaults_when_missing() {
    let cfg: PackConfig = serde_json::from_str(r#"{"nrow": 3, "ncol": 2}"#).unwrap();
    assert_eq!(cfg, PackConfig::new(3, 2, 0));
}

#[test]
fn pack_config_round_trips_json() {
    let cfg = PackConfig::new(5, 4, 1);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("rownames"));
    let cfg2: PackConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn load_pack_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pack.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, r#"{{"nrow": 2, "ncol": 2, "rownames": 1}}"#).unwrap();

    let cfg = load_pack_config(&path).unwrap();
    assert_eq!(cfg, PackConfig::new(2, 2, 1));
}

#[test]
fn load_pack_config_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pack.json");
    std::fs::write(&path, "not json").unwrap();

    let err = load_pack_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn load_pack_config_missing_file_errors() {
    assert!(load_pack_config("/nonexistent/path/pack.json").is_err());
}

#[test]
fn pack_config_from_columns_skips_row_names() {
    let columns = vec![
        Column::text(["a", "b", "c"]),
        Column::Integer(vec![1, 2, 3]),
        Column::Integer(vec![4, 5, 6]),
    ];
    let cfg = PackConfig::from_columns(&columns, 1);
    assert_eq!(cfg, PackConfig::new(3, 2, 1));

    let mat = pack_with_config(&columns, &cfg).unwrap();
    assert_eq!(mat, Matrix::Integer(vec![1, 2, 3, 4, 5, 6]));
}

#[test]
fn pack_config_from_no_columns() {
    let cfg = PackConfig::from_columns(&[], 0);
    assert_eq!(cfg, PackConfig::new(0, 0, 0));
}

// ---------------------------------------------------------------------------
// ElementType
// ---------------------------------------------------------------------------

#[test]
fn element_type_parses_host_names() {
    assert_eq!("logical".parse::<ElementType>().unwrap(), ElementType::Logical);
    assert_eq!("numeric".parse::<ElementType>().unwrap(), ElementType::Double);
    assert_eq!("Double".parse::<ElementType>().unwrap(), ElementType::Double);
    assert_eq!("NULL".parse::<ElementType>().unwrap(), ElementType::Null);
    assert!("data.frame".parse::<ElementType>().is_err());
}

#[test]
fn element_type_display_round_trips() {
    for ty in [
        ElementType::Logical,
        ElementType::Integer,
        ElementType::Double,
        ElementType::Complex,
        ElementType::Character,
        ElementType::List,
        ElementType::Raw,
        ElementType::Null,
        ElementType::Closure,
    ] {
        assert_eq!(ty.to_string().parse::<ElementType>().unwrap(), ty);
    }
}

#[test]
fn only_vector_kinds_are_supported() {
    assert!(ElementType::Character.is_supported());
    assert!(ElementType::List.is_supported());
    assert!(!ElementType::Raw.is_supported());
    assert!(!ElementType::Closure.is_supported());
}

#[test]
fn column_len_follows_host_semantics() {
    assert_eq!(Column::Null.len(), 0);
    assert!(Column::Null.is_empty());
    assert_eq!(Column::from(vec![1u8, 2, 3]).len(), 3);
    assert_eq!(Column::from(vec![true]).element_type(), ElementType::Logical);
}

// ---------------------------------------------------------------------------
// Matrix views
// ---------------------------------------------------------------------------

#[test]
fn matrix_column_view_slices_the_buffer() {
    let columns = vec![
        Column::Integer(vec![1, 2, 3]),
        Column::Integer(vec![4, 5, 6]),
    ];
    let mat = pack(&columns, 3, 2, None).unwrap();
    assert_eq!(mat.column(1, 3), MatrixColumn::Integer(&[4, 5, 6]));
    assert!(mat.as_double().is_none());
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn matrix_column_view_out_of_bounds_panics() {
    let mat = Matrix::Double(vec![1.0, 2.0]);
    let _ = mat.column(1, 2);
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn matrix_column_view_offset_overflow_panics() {
    let mat = Matrix::Integer(vec![1, 2, 3, 4]);
    let _ = mat.column(usize::MAX / 2 + 1, 2);
}

#[test]
fn shape_column_major_indexes_by_row_then_column() {
    let columns = vec![
        Column::Double(vec![1.0, 2.0]),
        Column::Double(vec![3.0, 4.0]),
        Column::Double(vec![5.0, 6.0]),
    ];
    let Matrix::Double(data) = pack(&columns, 2, 3, None).unwrap() else {
        panic!("expected a double matrix");
    };
    let a = shape_column_major(data, 2, 3).unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a[[0, 0]], 1.0);
    assert_eq!(a[[1, 0]], 2.0);
    assert_eq!(a[[0, 2]], 5.0);
    assert_eq!(a[[1, 2]], 6.0);
}

#[test]
fn shape_column_major_rejects_wrong_length() {
    assert!(shape_column_major(vec![1, 2, 3], 2, 2).is_err());
}
