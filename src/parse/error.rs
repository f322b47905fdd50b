use crate::data::Section;
use crate::prelude::*;

use super::line_summary::LineSummary;

/// Everything that can stop a legacy file from being read.
///
/// Every variant wraps a small struct holding the structured context of the failure (line
/// numbers, expected and found tokens, counts) so callers can inspect it without parsing
/// the message.
#[derive(Debug, thiserror::Error, From)]
pub enum ParseError {
    #[error("{0}")]
    UnsupportedFormat(UnsupportedFormat),
    #[error("{0}")]
    UnsupportedDataset(UnsupportedDataset),
    #[error("{0}")]
    StructuralMismatch(StructuralMismatch),
    #[error("{0}")]
    InconsistentCellCount(InconsistentCellCount),
    #[error("{0}")]
    InconsistentDataCount(InconsistentDataCount),
    #[error("{0}")]
    DuplicateDataParent(DuplicateDataParent),
    #[error("{0}")]
    DuplicateArrayName(DuplicateArrayName),
    #[error("{0}")]
    UnsupportedLookup(UnsupportedLookup),
    #[error("{0}")]
    MalformedNumber(MalformedNumber),
    #[error("{0}")]
    ValueCount(ValueCount),
    #[error("{0}")]
    PointIndexOutOfRange(PointIndexOutOfRange),
    #[error("failed to read from the vtk source: {0}")]
    Io(std::io::Error),
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "line {line}: unsupported file format `{found}`, only ASCII files can be read")]
pub struct UnsupportedFormat {
    pub line: usize,
    pub found: String,
}

#[derive(From, Display, Debug, Constructor)]
#[display(
    fmt = "line {line}: unsupported dataset `{found}`, only UNSTRUCTURED_GRID can be read"
)]
pub struct UnsupportedDataset {
    pub line: usize,
    pub found: String,
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "unexpected input. Expected {expected}, got {found}")]
pub struct StructuralMismatch {
    pub expected: String,
    pub found: LineSummary,
}

impl StructuralMismatch {
    pub(crate) fn at<T: Into<String>>(expected: T, found: &super::Line) -> Self {
        Self::new(expected.into(), LineSummary::new(found))
    }

    pub(crate) fn eof<T: Into<String>>(expected: T) -> Self {
        Self::new(expected.into(), LineSummary::eof())
    }
}

#[derive(From, Display, Debug, Constructor)]
#[display(
    fmt = "line {line}: CELL_TYPES declares {cell_types} types but CELLS declared {cells} cells"
)]
pub struct InconsistentCellCount {
    pub line: usize,
    pub cells: usize,
    pub cell_types: usize,
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "line {line}: {section} declares {declared} entries but the grid has {expected}")]
pub struct InconsistentDataCount {
    pub line: usize,
    pub section: Section,
    pub declared: usize,
    pub expected: usize,
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "line {line}: second {section} section, only one is allowed per file")]
pub struct DuplicateDataParent {
    pub line: usize,
    pub section: Section,
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "line {line}: array `{name}` appears twice in {parent}")]
pub struct DuplicateArrayName {
    pub line: usize,
    pub parent: String,
    pub name: String,
}

#[derive(From, Display, Debug, Constructor)]
#[display(
    fmt = "SCALARS `{name}` must be followed by `LOOKUP_TABLE <name>`, got {found}"
)]
pub struct UnsupportedLookup {
    pub name: String,
    pub found: LineSummary,
}

#[derive(From, Display, Debug, Constructor)]
#[display(fmt = "line {line}: could not parse `{token}` as {expected}")]
pub struct MalformedNumber {
    pub line: usize,
    pub token: String,
    pub expected: &'static str,
}

#[derive(From, Display, Debug, Constructor)]
#[display(
    fmt = "line {line}: {section} expects {expected} values, but the input holds {found}"
)]
pub struct ValueCount {
    pub line: usize,
    pub section: String,
    pub expected: usize,
    pub found: usize,
}

#[derive(From, Display, Debug, Constructor)]
#[display(
    fmt = "line {line}: cell {cell} references point {index} but there are only {points} points"
)]
pub struct PointIndexOutOfRange {
    pub line: usize,
    pub cell: usize,
    pub index: usize,
    pub points: usize,
}
