//! Building quadrilateral cells between parallel polylines
//!
//! Polylines with the same number of points are treated as rows of a structured surface. Each
//! pair of consecutive rows is bridged by one quad per segment, wound
//! `A[i], A[i+1], B[i+1], B[i]`. Intermediate rows can be interpolated between two polylines
//! at a list of parameters in `[0, 1]` (a "row spec"), for example one made by [uniform_rows].
//!
//! ```
//! use legacy_vtk::stitch::{pair_polylines_to_cells, Polyline};
//!
//! let a = Polyline::from_points(vec![[0., 0., 0.], [1., 0., 0.], [2., 0., 0.]]);
//! let b = Polyline::from_points(vec![[0., 1., 0.], [1., 1., 0.], [2., 1., 0.]]);
//!
//! let mesh = pair_polylines_to_cells(&a, &b).unwrap();
//! assert_eq!(mesh.cells, vec![[0, 1, 4, 3], [1, 2, 5, 4]]);
//! ```

use crate::prelude::*;

use ndarray::Array1;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StitchError {
    #[error("polylines have different lengths: {first} and {second} points")]
    LengthMismatch { first: usize, second: usize },
    #[error("at least two polylines are required for stitching, got {found}")]
    TooFewLines { found: usize },
    #[error("{lines} polylines have {gaps} gaps, but {specs} row specs were given")]
    RowSpecCountMismatch {
        lines: usize,
        gaps: usize,
        specs: usize,
    },
    #[error("polyline {line} has {found} points, expected {expected} like the first polyline")]
    PointCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("row spec value {value} at position {position} is outside [0, 1] or decreasing")]
    InvalidRowSpec { position: usize, value: f64 },
    #[error("point data must be given for every polyline or for none of them")]
    UnpairedData,
    #[error("polyline {line} has {points} points but {values} data values")]
    DataLengthMismatch {
        line: usize,
        points: usize,
        values: usize,
    },
}

/// An ordered sequence of points with an optional value at each point
#[derive(Debug, Clone, Default, PartialEq, Constructor)]
pub struct Polyline {
    pub points: Vec<[f64; 3]>,
    pub data: Option<Vec<f64>>,
}

impl Polyline {
    pub fn from_points(points: Vec<[f64; 3]>) -> Self {
        Self { points, data: None }
    }

    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// the polyline a fraction `t` of the way from `self` to `other`
    fn lerp(&self, other: &Polyline, t: f64) -> Polyline {
        let points = self
            .points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| {
                [
                    a[0] + t * (b[0] - a[0]),
                    a[1] + t * (b[1] - a[1]),
                    a[2] + t * (b[2] - a[2]),
                ]
            })
            .collect();

        let data = match (&self.data, &other.data) {
            (Some(a), Some(b)) => Some(a.iter().zip(b).map(|(a, b)| a + t * (b - a)).collect()),
            _ => None,
        };

        Polyline { points, data }
    }
}

/// Points and quad cells produced by stitching.
///
/// `point_data` holds the polyline values in point order. `cell_data` holds, for each cell,
/// the values at its four corners in winding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchedMesh {
    pub points: Vec<[f64; 3]>,
    pub cells: Vec<[usize; 4]>,
    pub point_data: Option<Vec<f64>>,
    pub cell_data: Option<Vec<[f64; 4]>>,
}

impl StitchedMesh {
    /// the points and cells in the form [write_vtk](`crate::write_vtk()`) expects
    pub fn geometry(&self) -> Geometry {
        Geometry::from_points(self.points.clone())
            .with_cells(self.cells.iter().map(|cell| cell.to_vec()).collect())
    }

    /// the point data as a single `POINT_DATA` scalar field called `name`
    pub fn point_attributes<T: Into<String>>(&self, name: T) -> Attributes {
        match &self.point_data {
            Some(values) => Attributes::new().with_point_field(name, Field::Scalars(values.clone())),
            None => Attributes::new(),
        }
    }
}

/// Bridge two polylines of equal length with one quad per segment.
///
/// The output points are the points of `a` followed by those of `b`. If both polylines carry
/// data, the data is concatenated the same way and every cell gets its four corner values.
pub fn pair_polylines_to_cells(a: &Polyline, b: &Polyline) -> Result<StitchedMesh, StitchError> {
    check_pair(a, b)?;
    Ok(stitch_rows(&[a.clone(), b.clone()]))
}

/// Stitch two polylines with intermediate rows interpolated at the parameters in `rows`.
///
/// `rows` must be non-decreasing values in `[0, 1]`. Parameters of exactly `0` or `1` are the
/// polylines themselves, which are always part of the output and are only emitted once.
pub fn stitch_with_rows(
    a: &Polyline,
    b: &Polyline,
    rows: &[f64],
) -> Result<StitchedMesh, StitchError> {
    check_pair(a, b)?;

    let mut all_rows = vec![a.clone()];
    all_rows.extend(interior_rows(a, b, rows)?);
    all_rows.push(b.clone());

    Ok(stitch_rows(&all_rows))
}

/// Stitch any number of polylines, with one row spec for each gap between consecutive lines.
pub fn stitch_multiple_polylines<S: AsRef<[f64]>>(
    lines: &[Polyline],
    rows_per_gap: &[S],
) -> Result<StitchedMesh, StitchError> {
    if lines.len() < 2 {
        return Err(StitchError::TooFewLines { found: lines.len() });
    }

    let gaps = lines.len() - 1;
    if rows_per_gap.len() != gaps {
        return Err(StitchError::RowSpecCountMismatch {
            lines: lines.len(),
            gaps,
            specs: rows_per_gap.len(),
        });
    }

    let expected = lines[0].len();
    if let Some((line, polyline)) = lines
        .iter()
        .enumerate()
        .find(|(_, polyline)| polyline.len() != expected)
    {
        return Err(StitchError::PointCountMismatch {
            line,
            expected,
            found: polyline.len(),
        });
    }

    check_data(&lines.iter().collect::<Vec<_>>())?;

    let mut all_rows = vec![lines[0].clone()];
    for (pair, rows) in lines.windows(2).zip(rows_per_gap) {
        all_rows.extend(interior_rows(&pair[0], &pair[1], rows.as_ref())?);
        all_rows.push(pair[1].clone());
    }

    Ok(stitch_rows(&all_rows))
}

/// Evenly spaced row spec with `intervals` gaps, from `0` to `1` inclusive
pub fn uniform_rows(intervals: usize) -> Vec<f64> {
    Array1::linspace(0., 1., intervals.max(1) + 1).to_vec()
}

fn check_pair(a: &Polyline, b: &Polyline) -> Result<(), StitchError> {
    if a.len() != b.len() {
        return Err(StitchError::LengthMismatch {
            first: a.len(),
            second: b.len(),
        });
    }

    check_data(&[a, b])
}

/// data is present on every line or on none, and always one value per point
fn check_data(lines: &[&Polyline]) -> Result<(), StitchError> {
    let with_data = lines.iter().filter(|line| line.data.is_some()).count();
    if with_data != 0 && with_data != lines.len() {
        return Err(StitchError::UnpairedData);
    }

    for (line, polyline) in lines.iter().enumerate() {
        if let Some(data) = &polyline.data {
            if data.len() != polyline.len() {
                return Err(StitchError::DataLengthMismatch {
                    line,
                    points: polyline.len(),
                    values: data.len(),
                });
            }
        }
    }

    Ok(())
}

/// the interpolated rows strictly between `a` and `b`
fn interior_rows(a: &Polyline, b: &Polyline, rows: &[f64]) -> Result<Vec<Polyline>, StitchError> {
    let mut previous = 0.;
    let mut params = Vec::new();

    for (position, &value) in rows.iter().enumerate() {
        if !(0. ..=1.).contains(&value) || value < previous {
            return Err(StitchError::InvalidRowSpec { position, value });
        }

        if value > 0. && value < 1. && value != previous {
            params.push(value);
        }

        previous = value;
    }

    Ok(params.into_iter().map(|t| a.lerp(b, t)).collect())
}

/// Stitch consecutive rows of equal length. Every row is emitted once, so rows shared by two
/// gaps do not duplicate points.
fn stitch_rows(rows: &[Polyline]) -> StitchedMesh {
    let n = rows.first().map(Polyline::len).unwrap_or(0);
    let segments = n.saturating_sub(1);

    let points: Vec<[f64; 3]> = rows
        .iter()
        .flat_map(|row| row.points.iter().copied())
        .collect();

    let mut cells = Vec::with_capacity(segments * rows.len().saturating_sub(1));
    for row in 0..rows.len().saturating_sub(1) {
        let a = row * n;
        let b = (row + 1) * n;
        cells.extend((0..segments).map(|i| [a + i, a + i + 1, b + i + 1, b + i]));
    }

    let point_data: Option<Vec<f64>> = rows
        .iter()
        .map(|row| row.data.clone())
        .collect::<Option<Vec<_>>>()
        .map(|data| data.concat());

    let cell_data = point_data.as_ref().map(|data| {
        cells
            .iter()
            .map(|cell| [data[cell[0]], data[cell[1]], data[cell[2]], data[cell[3]]])
            .collect()
    });

    tracing::debug!(rows = rows.len(), cells = cells.len(), "stitched polylines");

    StitchedMesh {
        points,
        cells,
        point_data,
        cell_data,
    }
}
