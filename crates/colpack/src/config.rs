use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::PackError;
use crate::matrix::Matrix;
use crate::pack::pack_one_based;

/// Shape and row-name settings for one packing call.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PackConfig {
    pub nrow: usize,
    pub ncol: usize,

    /// 1-based position of the row-name column; 0 means none.
    #[serde(default)]
    pub rownames: usize,
}

impl PackConfig {
    pub fn new(nrow: usize, ncol: usize, rownames: usize) -> Self {
        Self {
            nrow,
            ncol,
            rownames,
        }
    }

    /// Derive the shape from the columns themselves: `nrow` is the length of
    /// the first retained column and `ncol` the number of retained columns.
    pub fn from_columns(columns: &[Column], rownames: usize) -> Self {
        let exclude = rownames.checked_sub(1);
        let retained: Vec<&Column> = columns
            .iter()
            .enumerate()
            .filter(|(jj, _)| Some(*jj) != exclude)
            .map(|(_, column)| column)
            .collect();

        let nrow = retained.first().map(|column| column.len()).unwrap_or(0);
        let ncol = retained.len();

        Self {
            nrow,
            ncol,
            rownames,
        }
    }
}

pub fn load_pack_config<P: AsRef<Path>>(path: P) -> Result<PackConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PackConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Pack `columns` using the shape and row-name position from `config`.
pub fn pack_with_config(columns: &[Column], config: &PackConfig) -> Result<Matrix, PackError> {
    pack_one_based(columns, config.nrow, config.ncol, config.rownames)
}
