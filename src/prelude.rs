//! Common traits and types that are useful for working with `legacy-vtk`
#![allow(unused_imports)]

pub use crate::array::{DataSet, Field, FieldArray, FieldKind};
pub use crate::data::{Attributes, Report, Section, VtkData};
pub use crate::mesh::{CellType, Geometry, GridDimension, UnstructuredGrid};
pub use crate::options::WriteOptions;
pub use crate::traits::Array;
pub use crate::warning::Warning;

pub(crate) use crate::Error;
pub(crate) use std::io::{BufRead, Write};

pub(crate) use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};

pub(crate) use indexmap::IndexMap;
pub(crate) use ndarray::Array2;
