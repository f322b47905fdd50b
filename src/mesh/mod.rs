//! # Mesh Information
//!
//! An unstructured grid is described by two parallel pieces of information: a list of point
//! coordinates, and a list of cells referencing those points by their (0-based) position.
//! Every cell carries a VTK type code ([`CellType`]) describing its topology.
//!
//! There are two ways of describing a grid in `legacy-vtk`:
//!
//! * [`UnstructuredGrid`] is the fully typed form. Every cell already has a type code, which
//!   is what you get back from [read_vtk](`crate::read_vtk()`) and what
//!   [write_grid](`crate::write_grid()`) writes verbatim.
//! * [`Geometry`] is the form most producers hold: a set of points, some polylines, and some
//!   cells whose type is decided at write time by the [WriteOptions](`crate::WriteOptions`).
//!   Points may additionally be written as degenerate vertex cells so that a file with only
//!   points is still a valid, non-empty grid.
//!
//! ## Cell types
//!
//! Only the codes this crate synthesizes are named as constants. Any other code found in a
//! file is preserved as-is.

mod cell_type;
mod unstructured;

pub use cell_type::{CellType, GridDimension};
pub use unstructured::{Geometry, UnstructuredGrid};

pub(crate) use unstructured::list_size;
