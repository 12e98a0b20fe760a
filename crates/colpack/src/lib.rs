//! colpack: pack table columns into a flat column-major matrix buffer.
//!
//! The host hands over an ordered set of columns that already share one
//! atomic element type, the target row count, and the position of an
//! optional row-name column. [`pack`] copies every retained column into a
//! single buffer, column after column, and returns it as a typed [`Matrix`].
//!
//! Text and list elements are shared handles (`Arc`), so the packed matrix
//! aliases the source values instead of duplicating them.
pub mod column;
pub mod config;
pub mod error;
pub mod matrix;
pub mod pack;

pub use column::{Column, ElementType, Item, Text, Value};
pub use config::{load_pack_config, pack_with_config, PackConfig};
pub use error::PackError;
pub use matrix::{shape_column_major, Matrix, MatrixColumn};
pub use pack::{pack, pack_one_based, row_name_column};
