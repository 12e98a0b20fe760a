//! Host-side column model.
//!
//! A `Column` is one homogeneous vector of the host table. Only the first six
//! kinds can be packed; the remaining ones exist because the host can hand
//! them over and the packer must reject them.
use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use num_complex::Complex64;

/// Shared text handle. Cloning aliases the same string.
pub type Text = Arc<str>;

/// Shared handle to a generic list element.
pub type Item = Arc<Value>;

/// Element of a list column: a nested or mixed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Logical(bool),
    Integer(i32),
    Double(f64),
    Complex(Complex64),
    Character(Text),
    List(Vec<Item>),
}

/// Atomic type tag of a column, named after the host's type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    List,
    Raw,
    Null,
    Closure,
}

impl ElementType {
    /// Whether the packer has a copy routine for this type.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            ElementType::Raw | ElementType::Null | ElementType::Closure
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementType::Logical => "logical",
            ElementType::Integer => "integer",
            ElementType::Double => "double",
            ElementType::Complex => "complex",
            ElementType::Character => "character",
            ElementType::List => "list",
            ElementType::Raw => "raw",
            ElementType::Null => "NULL",
            ElementType::Closure => "closure",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logical" => Ok(ElementType::Logical),
            "integer" => Ok(ElementType::Integer),
            "double" | "numeric" => Ok(ElementType::Double),
            "complex" => Ok(ElementType::Complex),
            "character" => Ok(ElementType::Character),
            "list" => Ok(ElementType::List),
            "raw" => Ok(ElementType::Raw),
            "null" => Ok(ElementType::Null),
            "closure" => Ok(ElementType::Closure),
            _ => Err(format!("Unknown element type: {}", s)),
        }
    }
}

/// One column of the host table.
#[derive(Debug, Clone)]
pub enum Column {
    Logical(Vec<bool>),
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Complex(Vec<Complex64>),
    Character(Vec<Text>),
    List(Vec<Item>),
    Raw(Vec<u8>),
    Null,
    /// A function object stored where a vector was expected.
    Closure(Arc<dyn Any + Send + Sync>),
}

impl Column {
    /// Build a character column, allocating one handle per string.
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Column::Character(values.into_iter().map(|s| Text::from(s.as_ref())).collect())
    }

    /// Build a list column, allocating one handle per value.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Column::List(values.into_iter().map(Arc::new).collect())
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Column::Logical(_) => ElementType::Logical,
            Column::Integer(_) => ElementType::Integer,
            Column::Double(_) => ElementType::Double,
            Column::Complex(_) => ElementType::Complex,
            Column::Character(_) => ElementType::Character,
            Column::List(_) => ElementType::List,
            Column::Raw(_) => ElementType::Raw,
            Column::Null => ElementType::Null,
            Column::Closure(_) => ElementType::Closure,
        }
    }

    /// Number of elements, with host semantics for non-vectors
    /// (`NULL` is empty, a closure counts as one).
    pub fn len(&self) -> usize {
        match self {
            Column::Logical(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Double(v) => v.len(),
            Column::Complex(v) => v.len(),
            Column::Character(v) => v.len(),
            Column::List(v) => v.len(),
            Column::Raw(v) => v.len(),
            Column::Null => 0,
            Column::Closure(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<bool>> for Column {
    fn from(value: Vec<bool>) -> Self {
        Column::Logical(value)
    }
}

impl From<Vec<i32>> for Column {
    fn from(value: Vec<i32>) -> Self {
        Column::Integer(value)
    }
}

impl From<Vec<f64>> for Column {
    fn from(value: Vec<f64>) -> Self {
        Column::Double(value)
    }
}

impl From<Vec<Complex64>> for Column {
    fn from(value: Vec<Complex64>) -> Self {
        Column::Complex(value)
    }
}

impl From<Vec<Text>> for Column {
    fn from(value: Vec<Text>) -> Self {
        Column::Character(value)
    }
}

impl From<Vec<Item>> for Column {
    fn from(value: Vec<Item>) -> Self {
        Column::List(value)
    }
}

impl From<Vec<u8>> for Column {
    fn from(value: Vec<u8>) -> Self {
        Column::Raw(value)
    }
}
