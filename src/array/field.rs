use crate::prelude::*;
use crate::traits::Array;

use std::str::FromStr;

/// A named quantity attached one-per-point or one-per-cell
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// one float per point / cell, written as `SCALARS`
    Scalars(Vec<f64>),
    /// three floats per point / cell, written as `VECTORS`
    Vectors(Vec<[f64; 3]>),
}

impl Field {
    /// Build a field from a kind tag (`"scalar"` or `"vector"`) and flat values.
    ///
    /// Vector values are grouped into consecutive triples.
    pub fn from_tagged(kind: &str, values: Vec<f64>) -> Result<Self, Error> {
        match kind.parse::<FieldKind>()? {
            FieldKind::Scalar => Ok(Field::Scalars(values)),
            FieldKind::Vector => {
                if values.len() % 3 != 0 {
                    return Err(Error::IncompleteVector(values.len()));
                }

                let triples = values
                    .chunks_exact(3)
                    .map(|chunk| [chunk[0], chunk[1], chunk[2]])
                    .collect();

                Ok(Field::Vectors(triples))
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Scalars(_) => FieldKind::Scalar,
            Self::Vectors(_) => FieldKind::Vector,
        }
    }

    /// number of points / cells this field describes
    pub fn len(&self) -> usize {
        self.length()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Array for Field {
    fn write_ascii(&self, out: &mut String, precision: usize) {
        match self {
            Self::Scalars(values) => values.as_slice().write_ascii(out, precision),
            Self::Vectors(values) => values.as_slice().write_ascii(out, precision),
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Scalars(values) => values.len(),
            Self::Vectors(values) => values.len(),
        }
    }

    fn components(&self) -> usize {
        match self {
            Self::Scalars(_) => 1,
            Self::Vectors(_) => 3,
        }
    }
}

impl From<Vec<f64>> for Field {
    fn from(values: Vec<f64>) -> Self {
        Field::Scalars(values)
    }
}

impl From<Vec<[f64; 3]>> for Field {
    fn from(values: Vec<[f64; 3]>) -> Self {
        Field::Vectors(values)
    }
}

/// The two kinds of [`Field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Scalar,
    Vector,
}

impl FieldKind {
    /// keyword introducing a field of this kind inside a data section
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALARS",
            Self::Vector => "VECTORS",
        }
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "scalar" => Ok(Self::Scalar),
            "vector" => Ok(Self::Vector),
            other => Err(Error::UnknownFieldType(other.to_string())),
        }
    }
}

/// Insertion ordered collection of named fields for one data section.
///
/// Fields are written in the order they were inserted. Names are unique: inserting a
/// second field with the same name replaces the first in place.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut, From, Into)]
pub struct DataSet(IndexMap<String, Field>);

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// add a field, returning the field previously stored under `name`
    pub fn insert<T: Into<String>>(&mut self, name: T, field: Field) -> Option<Field> {
        self.0.insert(name.into(), field)
    }

    /// builder form of [`DataSet::insert`]
    pub fn with<T: Into<String>>(mut self, name: T, field: Field) -> Self {
        self.insert(name, field);
        self
    }
}

impl<T: Into<String>> FromIterator<(T, Field)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (T, Field)>>(iter: I) -> Self {
        DataSet(
            iter.into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_scalars() {
        let field = Field::from_tagged("scalar", vec![1., 2., 3.]).unwrap();
        assert_eq!(field, Field::Scalars(vec![1., 2., 3.]));
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn tagged_vectors() {
        let field = Field::from_tagged("vector", vec![1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(field, Field::Vectors(vec![[1., 2., 3.], [4., 5., 6.]]));
        assert_eq!(field.len(), 2);
        assert_eq!(field.kind(), FieldKind::Vector);
    }

    #[test]
    fn unknown_tag() {
        let err = Field::from_tagged("tensor", vec![1.]).unwrap_err();
        assert!(matches!(err, Error::UnknownFieldType(kind) if kind == "tensor"));
    }

    #[test]
    fn ragged_vector() {
        let err = Field::from_tagged("vector", vec![1., 2.]).unwrap_err();
        assert!(matches!(err, Error::IncompleteVector(2)));
    }

    #[test]
    fn dataset_keeps_insertion_order() {
        let data: DataSet = vec![
            ("zeta", Field::Scalars(vec![0.])),
            ("alpha", Field::Scalars(vec![1.])),
            ("mid", Field::Vectors(vec![[0.; 3]])),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = data.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
