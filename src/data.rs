use crate::array::{DataSet, Field, FieldArray, FieldBlock};
use crate::mesh::UnstructuredGrid;
use crate::prelude::*;
use crate::warning::Warning;

#[derive(Debug, Default, Clone, PartialEq, Constructor)]
/// Container type to read and write vtk files from.
///
/// `VtkData` contains two objects: the typed grid in `domain` and everything attached to it
/// in `data`. This is what [read_vtk](`crate::read_vtk()`) returns and what
/// [write_grid](`crate::write_grid()`) writes.
pub struct VtkData {
    pub domain: UnstructuredGrid,
    pub data: Attributes,
}

impl VtkData {
    /// change the attributes stored in this container while leaving the
    /// grid constant
    pub fn new_data(self, new_data: Attributes) -> VtkData {
        VtkData {
            domain: self.domain,
            data: new_data,
        }
    }
}

/// Everything attached to a grid: dataset wide FIELD arrays, and the
/// fields in the `POINT_DATA` and `CELL_DATA` sections
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    /// FIELD blocks keyed by their name, in file order
    pub field_data: IndexMap<String, FieldBlock>,
    pub point_data: DataSet,
    pub cell_data: DataSet,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point_data(mut self, point_data: DataSet) -> Self {
        self.point_data = point_data;
        self
    }

    pub fn with_cell_data(mut self, cell_data: DataSet) -> Self {
        self.cell_data = cell_data;
        self
    }

    /// add a single field to the `POINT_DATA` section
    pub fn with_point_field<T: Into<String>>(mut self, name: T, field: Field) -> Self {
        self.point_data.insert(name, field);
        self
    }

    /// add a single field to the `CELL_DATA` section
    pub fn with_cell_field<T: Into<String>>(mut self, name: T, field: Field) -> Self {
        self.cell_data.insert(name, field);
        self
    }

    /// add an array to the FIELD block `block`, creating the block if required
    pub fn with_field_array<B: Into<String>, T: Into<String>>(
        mut self,
        block: B,
        name: T,
        array: FieldArray,
    ) -> Self {
        self.field_data
            .entry(block.into())
            .or_default()
            .insert(name.into(), array);
        self
    }

    /// the time stamp stored in the conventional `FieldData` / `TimeValue` array, if any
    pub fn time_value(&self) -> Option<f64> {
        self.field_data
            .get(crate::FIELD_DATA_BLOCK)
            .and_then(|block| block.get(crate::TIME_VALUE_ARRAY))
            .and_then(|array| array.iter().next().copied())
    }
}

/// The two sections that attach fields to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Section {
    #[display(fmt = "POINT_DATA")]
    PointData,
    #[display(fmt = "CELL_DATA")]
    CellData,
}

impl Section {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::PointData => "POINT_DATA",
            Self::CellData => "CELL_DATA",
        }
    }
}

/// A value together with the non-fatal [`Warning`]s raised while producing it
#[derive(Debug, Clone, PartialEq, Deref, Constructor)]
pub struct Report<T> {
    #[deref]
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Report<T> {
    /// discard the warnings
    pub fn into_inner(self) -> T {
        self.value
    }

    /// true if nothing was reported
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
