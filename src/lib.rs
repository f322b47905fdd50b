//! Read and write legacy (version 4.0) ASCII VTK files describing unstructured grids.
//!
//! ```no_run
//! use legacy_vtk::prelude::*;
//!
//! let geometry = Geometry::from_points(vec![[0., 0., 0.], [1., 0., 0.], [1., 1., 0.]])
//!     .with_lines(vec![vec![0, 1, 2]]);
//!
//! let data = Attributes::new()
//!     .with_point_field("pressure", Field::Scalars(vec![1.0, 0.5, 0.25]));
//!
//! let options = WriteOptions::default().time(0.5).comment("three points");
//!
//! let written = legacy_vtk::write_vtk_file("./output", "line", Some(4), &geometry, &data, &options)
//!     .unwrap();
//! assert_eq!(written.value, "line.4.vtk;");
//!
//! let parsed = legacy_vtk::read_vtk(std::path::Path::new("./output/line.4.vtk")).unwrap();
//! assert_eq!(parsed.domain.points.len(), 3);
//! ```

pub mod array;
mod data;
pub mod mesh;
mod options;
pub mod parse;
pub mod prelude;
pub mod stitch;
mod traits;
mod utils;
mod warning;
mod write_vtk;

pub use traits::Array;

pub use data::{Attributes, Report, Section, VtkData};
pub use options::WriteOptions;
pub use warning::Warning;

pub use mesh::{CellType, Geometry, GridDimension, UnstructuredGrid};

pub use array::{DataSet, Field, FieldArray, FieldBlock, FieldKind};

pub use write_vtk::{output_file_name, write_grid, write_vtk, write_vtk_file};

pub use parse::parse_legacy_document;
pub use parse::read_and_parse as read_vtk;
pub use parse::ParseError;

pub use stitch::{
    pair_polylines_to_cells, stitch_multiple_polylines, stitch_with_rows, uniform_rows, Polyline,
    StitchError, StitchedMesh,
};

pub use indexmap;
pub use ndarray;

/// version line every file starts with
pub const VERSION_LINE: &str = "# vtk DataFile Version 4.0";
/// name of the FIELD block the writer emits the time stamp in
pub const FIELD_DATA_BLOCK: &str = "FieldData";
/// name of the time stamp array inside [`FIELD_DATA_BLOCK`]
pub const TIME_VALUE_ARRAY: &str = "TimeValue";

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Error while parsing legacy VTK: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("unknown field type `{0}`, expected `scalar` or `vector`")]
    UnknownFieldType(String),
    #[error("vector field has {0} values, which cannot be grouped into triples")]
    IncompleteVector(usize),
    #[error("grid has {cells} cells but {cell_types} cell types")]
    CellTypeCount { cells: usize, cell_types: usize },
    #[error("entry {entry} of the CELLS block references point {index} but there are only {points} points")]
    PointIndexOutOfRange {
        entry: usize,
        index: usize,
        points: usize,
    },
    #[error("empty array name in {0}")]
    EmptyName(String),
    #[error("Could not stitch polylines: {0}")]
    Stitch(#[from] stitch::StitchError),
}
