//! container types for data to be read / written from files
//!
//! A legacy file attaches data to a grid in two ways. `POINT_DATA` and `CELL_DATA` sections
//! hold named [`Field`]s with exactly one scalar or one 3-vector per point or cell, collected
//! in a [`DataSet`]. `FIELD` blocks hold dataset wide arrays of any shape ([`FieldArray`]),
//! such as the simulation time.

mod field;
mod field_array;

pub use field::{DataSet, Field, FieldKind};
pub use field_array::{FieldArray, FieldBlock};

use crate::traits::Array;
use crate::utils;

impl Array for [f64] {
    fn write_ascii(&self, out: &mut String, precision: usize) {
        for value in self {
            utils::push_tuple(out, std::slice::from_ref(value), precision);
        }
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl Array for [[f64; 3]] {
    fn write_ascii(&self, out: &mut String, precision: usize) {
        for triple in self {
            utils::push_tuple(out, triple, precision);
        }
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn components(&self) -> usize {
        3
    }
}
