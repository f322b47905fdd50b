use crate::mesh::{CellType, Geometry, GridDimension};

/// default number of decimal places values are rounded to when written
pub const DEFAULT_PRECISION: usize = 32;

/// default title line of a written file
pub const DEFAULT_COMMENT: &str = "vtk output";

/// Settings for writing a legacy file.
///
/// ```
/// use legacy_vtk::{CellType, GridDimension, WriteOptions};
///
/// let options = WriteOptions::default()
///     .grid_dimension(GridDimension::Surface)
///     .precision(6)
///     .time(1.25);
///
/// assert_eq!(options.cells_type(), CellType::QUAD);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    /// declared dimensionality of the `cells` block. Decides the cell type of every cell,
    /// and disables writing points as vertex cells.
    pub grid_dimension: Option<GridDimension>,
    /// explicit type for every entry of the `cells` block. Takes precedence over
    /// `grid_dimension`.
    pub cell_type: Option<CellType>,
    /// write every point as an additional single-node vertex cell. `None` means the caller
    /// did not ask either way.
    pub keep_points: Option<bool>,
    /// number of decimal places each value is rounded to
    pub precision: usize,
    /// simulation time, written as the `TimeValue` array of the `FieldData` block
    pub time: Option<f64>,
    /// free text title line
    pub comment: Option<String>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            grid_dimension: None,
            cell_type: None,
            keep_points: None,
            precision: DEFAULT_PRECISION,
            time: None,
            comment: None,
        }
    }
}

impl WriteOptions {
    pub fn grid_dimension(mut self, grid_dimension: GridDimension) -> Self {
        self.grid_dimension = Some(grid_dimension);
        self
    }

    pub fn cell_type(mut self, cell_type: CellType) -> Self {
        self.cell_type = Some(cell_type);
        self
    }

    pub fn keep_points(mut self, keep_points: bool) -> Self {
        self.keep_points = Some(keep_points);
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn comment<T: Into<String>>(mut self, comment: T) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// the type written for every entry of the `cells` block
    pub fn cells_type(&self) -> CellType {
        self.cell_type
            .or_else(|| self.grid_dimension.map(|dim| dim.cell_type()))
            .unwrap_or_default()
    }

    /// Whether points are also written as single-node vertex cells.
    ///
    /// A declared grid dimension always disables it, even if `keep_points` was set. With
    /// lines or cells present, points are only kept when `keep_points` is `Some(true)`. With no
    /// connectivity at all the points are kept unconditionally, so the file is still a
    /// non-empty grid.
    pub fn writes_vertex_cells(&self, geometry: &Geometry) -> bool {
        if self.grid_dimension.is_some() {
            return false;
        }

        if geometry.has_connectivity() {
            return self.keep_points == Some(true);
        }

        true
    }

    /// the title line as written: a single line, never empty
    pub(crate) fn title(&self) -> String {
        match &self.comment {
            Some(comment) if !comment.trim().is_empty() => comment
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect(),
            _ => DEFAULT_COMMENT.to_string(),
        }
    }
}
