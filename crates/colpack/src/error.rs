use std::error::Error;
use std::fmt;

use crate::column::ElementType;

/// Failure raised by the matrix packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The detected element type has no copy routine.
    UnsupportedType(ElementType),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PackError::UnsupportedType(ty) => write!(f, "Unsupported matrix type '{}'", ty),
        }
    }
}

impl Error for PackError {}
