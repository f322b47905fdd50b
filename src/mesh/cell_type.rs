use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
/// A VTK cell type code as it appears in the `CELL_TYPES` section
pub struct CellType(pub u8);

impl CellType {
    /// single point
    pub const VERTEX: CellType = CellType(1);
    /// two point line segment
    pub const LINE: CellType = CellType(3);
    /// ordered sequence of connected line segments
    pub const POLY_LINE: CellType = CellType(4);
    /// planar polygon with any number of points
    pub const POLYGON: CellType = CellType(7);
    /// four point quadrilateral
    pub const QUAD: CellType = CellType(9);
    /// eight point hexahedron
    pub const HEXAHEDRON: CellType = CellType(12);

    /// the raw code written to a file
    pub fn code(&self) -> u8 {
        self.0
    }
}

impl Default for CellType {
    fn default() -> Self {
        CellType::POLYGON
    }
}

/// Declared dimensionality of the cells of a grid.
///
/// When set on [WriteOptions](`crate::WriteOptions`) every entry of the `cells` block is
/// written with the fixed type for that dimension, and points are never duplicated as
/// vertex cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridDimension {
    /// 1D grids, cells are line segments
    Line,
    /// 2D grids, cells are quadrilaterals
    Surface,
    /// 3D grids, cells are hexahedra
    Volume,
}

impl GridDimension {
    /// map a numeric rank (`1`, `2`, `3`) to a dimension. Any other rank means the grid
    /// has no declared dimensionality.
    pub fn from_rank(rank: i32) -> Option<Self> {
        match rank {
            1 => Some(Self::Line),
            2 => Some(Self::Surface),
            3 => Some(Self::Volume),
            _ => None,
        }
    }

    pub fn rank(&self) -> i32 {
        match self {
            Self::Line => 1,
            Self::Surface => 2,
            Self::Volume => 3,
        }
    }

    /// the fixed cell type used for cells of a grid with this dimensionality
    pub fn cell_type(&self) -> CellType {
        match self {
            Self::Line => CellType::LINE,
            Self::Surface => CellType::QUAD,
            Self::Volume => CellType::HEXAHEDRON,
        }
    }
}
