//! # Traits
//!
//! General purpose traits used when writing legacy files.
//!

/// describes how the body of an array is written to a legacy file
///
/// Every array in a legacy ASCII file is written as one line per tuple: a point is three
/// numbers on one line, a scalar value is one number on one line. The header line that
/// introduces the array (`POINTS`, `SCALARS`, `VECTORS`, a FIELD array header) is written by
/// the caller, since it depends on which section the array appears in.
///
/// Implemented for the coordinate lists (`[[f64; 3]]`), scalar values (`[f64]`),
/// [Field](`crate::array::Field`) and [FieldArray](`crate::array::FieldArray`).
///
/// ```ignore
/// let mut body = String::new();
/// vec![1.0, 2.5].as_slice().write_ascii(&mut body, 32);
/// assert_eq!(body, "1.0\n2.5\n");
/// ```
pub trait Array {
    /// append the tuples of this array to `out`, one tuple per line, each value rounded to
    /// `precision` decimal places
    fn write_ascii(&self, out: &mut String, precision: usize);

    /// number of tuples in the array
    fn length(&self) -> usize;

    /// number of values per tuple
    fn components(&self) -> usize {
        1
    }
}
