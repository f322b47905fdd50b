//! Non-fatal problems found while reading or writing a file.

use crate::data::Section;
use crate::prelude::*;

/// A problem that does not stop a read or write but that the caller should know about.
///
/// Every warning is logged through `tracing` at the `WARN` level as it is raised and is
/// also handed back to the caller (see [Report](`crate::Report`)).
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Warning {
    /// a point or cell field does not have one entry per point or cell. The field was
    /// written anyway.
    #[display(
        fmt = "{section} field `{name}` has {found} entries but the section describes {expected}"
    )]
    FieldSizeMismatch {
        section: Section,
        name: String,
        expected: usize,
        found: usize,
    },
    /// a FIELD array declared a datatype other than `double`
    #[display(
        fmt = "line {line}: array `{array}` in FIELD `{field}` has datatype `{datatype}`, values were read as double"
    )]
    CoercedDatatype {
        line: usize,
        field: String,
        array: String,
        datatype: String,
    },
    /// the `CELLS` header declared a list size that does not match the cells that followed
    #[display(
        fmt = "line {line}: CELLS declares a list size of {declared} but the cells add up to {actual}"
    )]
    ListSizeMismatch {
        line: usize,
        declared: usize,
        actual: usize,
    },
}

impl Warning {
    /// log the warning and keep it for the caller
    pub(crate) fn raise(self, sink: &mut Vec<Warning>) {
        tracing::warn!("{}", self);
        sink.push(self);
    }
}
