use crate::prelude::*;
use crate::traits::Array;
use crate::utils;

/// Arrays of one FIELD block, keyed by array name in file order
pub type FieldBlock = IndexMap<String, FieldArray>;

#[derive(Debug, Clone, PartialEq, Constructor, Deref, DerefMut, Into)]
/// A dataset wide array from a `FIELD` block.
///
/// The array is shaped `(tuples, components)`: the simulation time is stored as a single
/// tuple with a single component.
pub struct FieldArray(Array2<f64>);

impl FieldArray {
    /// a 1x1 array holding a single value
    pub fn scalar(value: f64) -> Self {
        Self(Array2::from_elem((1, 1), value))
    }

    /// Shape flat values (tuple major) into an array. Returns `None` if there are not
    /// exactly `tuples * components` values.
    pub fn from_values(tuples: usize, components: usize, values: Vec<f64>) -> Option<Self> {
        Array2::from_shape_vec((tuples, components), values)
            .ok()
            .map(Self)
    }

    pub fn tuples(&self) -> usize {
        self.0.nrows()
    }

    /// get the array that this type wraps.
    pub fn inner(self) -> Array2<f64> {
        self.0
    }
}

impl Array for FieldArray {
    fn write_ascii(&self, out: &mut String, precision: usize) {
        let mut tuple = Vec::with_capacity(self.0.ncols());
        for row in self.0.rows() {
            tuple.clear();
            tuple.extend(row.iter().copied());
            utils::push_tuple(out, &tuple, precision);
        }
    }

    fn length(&self) -> usize {
        self.tuples()
    }

    fn components(&self) -> usize {
        self.0.ncols()
    }
}
