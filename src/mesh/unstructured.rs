use super::CellType;
use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Constructor)]
/// Points and fully typed cells of an unstructured grid.
///
/// `cells[i]` is a list of indices into `points` and `cell_types[i]` is its VTK type code.
pub struct UnstructuredGrid {
    pub points: Vec<[f64; 3]>,
    pub cells: Vec<Vec<usize>>,
    pub cell_types: Vec<CellType>,
}

impl UnstructuredGrid {
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// The `listsize` of the `CELLS` header: every cell contributes its node count
    /// plus one for the leading count itself
    pub fn list_size(&self) -> usize {
        list_size(self.cells.iter().map(Vec::len))
    }
}

/// Points plus the polylines and cells a producer wants written.
///
/// The type code of every entry is decided when writing: polylines are always `POLY_LINE`,
/// and `cells` take their type from the [WriteOptions](`crate::WriteOptions`).
#[derive(Debug, Clone, Default, PartialEq, Constructor)]
pub struct Geometry {
    pub points: Vec<[f64; 3]>,
    pub lines: Vec<Vec<usize>>,
    pub cells: Vec<Vec<usize>>,
}

impl Geometry {
    /// a point cloud with no connectivity
    pub fn from_points(points: Vec<[f64; 3]>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn with_lines(mut self, lines: Vec<Vec<usize>>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_cells(mut self, cells: Vec<Vec<usize>>) -> Self {
        self.cells = cells;
        self
    }

    /// true if there is any explicit connectivity (lines or cells)
    pub fn has_connectivity(&self) -> bool {
        !self.lines.is_empty() || !self.cells.is_empty()
    }
}

pub(crate) fn list_size<I: Iterator<Item = usize>>(lengths: I) -> usize {
    lengths.map(|len| len + 1).sum()
}
