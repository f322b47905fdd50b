use crate::array::FieldBlock;
use crate::mesh::list_size;
use crate::prelude::*;

use std::fmt::Write as _;
use std::path::Path;

/// one entry of the `CELLS` block
#[derive(Debug, Clone, Copy)]
enum Entry<'a> {
    /// a point duplicated as a single node vertex cell
    Vertex(usize),
    Indices(&'a [usize], CellType),
}

impl Entry<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Vertex(_) => 1,
            Self::Indices(indices, _) => indices.len(),
        }
    }

    fn cell_type(&self) -> CellType {
        match self {
            Self::Vertex(_) => CellType::VERTEX,
            Self::Indices(_, cell_type) => *cell_type,
        }
    }
}

/// Write points, polylines and cells along with their attributes to a `Writer`.
///
/// The type of every entry is decided here: vertex cells (if written) are `VERTEX`, lines are
/// `POLY_LINE` and cells take [WriteOptions::cells_type]. Fields whose length does not match
/// the points or cells are written anyway and reported in the returned warnings.
pub fn write_vtk<W: Write>(
    writer: W,
    geometry: &Geometry,
    attributes: &Attributes,
    options: &WriteOptions,
) -> Result<Vec<Warning>, Error> {
    let mut entries = Vec::new();

    // the vertex counter is independent of the point count written in `POINT_DATA`
    if options.writes_vertex_cells(geometry) {
        entries.extend((0..geometry.points.len()).map(Entry::Vertex));
    }

    entries.extend(
        geometry
            .lines
            .iter()
            .map(|line| Entry::Indices(line, CellType::POLY_LINE)),
    );

    let cells_type = options.cells_type();
    entries.extend(
        geometry
            .cells
            .iter()
            .map(|cell| Entry::Indices(cell, cells_type)),
    );

    write_document(writer, &geometry.points, &entries, attributes, options)
}

/// Write an already typed grid to a `Writer`.
///
/// Every cell keeps its own type code and no vertex cells are added, so only the
/// `precision`, `time` and `comment` settings of `options` apply.
pub fn write_grid<W: Write>(
    writer: W,
    vtk: &VtkData,
    options: &WriteOptions,
) -> Result<Vec<Warning>, Error> {
    let grid = &vtk.domain;

    if grid.cells.len() != grid.cell_types.len() {
        return Err(Error::CellTypeCount {
            cells: grid.cells.len(),
            cell_types: grid.cell_types.len(),
        });
    }

    let entries: Vec<_> = grid
        .cells
        .iter()
        .zip(&grid.cell_types)
        .map(|(cell, cell_type)| Entry::Indices(cell, *cell_type))
        .collect();

    write_document(writer, &grid.points, &entries, &vtk.data, options)
}

/// name of the file written for `filename` at an (optional) time step
pub fn output_file_name(filename: &str, step: Option<usize>) -> String {
    match step {
        Some(step) => format!("{filename}.{step}.vtk"),
        None => format!("{filename}.vtk"),
    }
}

/// Write a file `<filename>[.<step>].vtk` inside `directory`, creating the directory if needed.
///
/// The file is rendered to a temporary file in the same directory and then renamed into
/// place, so an existing file is only ever replaced by a complete one. The returned value is
/// the file name followed by `;`, which can be concatenated into a list of written blocks.
pub fn write_vtk_file<P: AsRef<Path>>(
    directory: P,
    filename: &str,
    step: Option<usize>,
    geometry: &Geometry,
    attributes: &Attributes,
    options: &WriteOptions,
) -> Result<Report<String>, Error> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory)?;

    let name = output_file_name(filename, step);
    let destination = directory.join(&name);

    let mut file = tempfile::NamedTempFile::new_in(directory)?;
    let warnings = write_vtk(&mut file, geometry, attributes, options)?;
    file.as_file().sync_all()?;
    file.persist(&destination).map_err(|e| e.error)?;

    tracing::debug!(path = %destination.display(), "wrote legacy vtk file");

    Ok(Report::new(format!("{name};"), warnings))
}

fn write_document<W: Write>(
    mut writer: W,
    points: &[[f64; 3]],
    entries: &[Entry],
    attributes: &Attributes,
    options: &WriteOptions,
) -> Result<Vec<Warning>, Error> {
    check_indices(points.len(), entries)?;
    check_names(attributes)?;

    let precision = options.precision;
    let mut warnings = Vec::new();
    let mut out = String::new();

    // header
    out.push_str(crate::VERSION_LINE);
    out.push('\n');
    out.push_str(&options.title());
    out.push_str("\nASCII\nDATASET UNSTRUCTURED_GRID\n");

    write_field_data(&mut out, options.time, &attributes.field_data, precision);

    // points
    let _ = writeln!(out, "POINTS {} float", points.len());
    points.write_ascii(&mut out, precision);

    // connectivity
    let size = list_size(entries.iter().map(Entry::len));
    let _ = writeln!(out, "CELLS {} {}", entries.len(), size);

    for entry in entries {
        match entry {
            Entry::Vertex(point) => {
                let _ = writeln!(out, "1 {point}");
            }
            Entry::Indices(indices, _) => {
                let _ = write!(out, "{}", indices.len());
                for index in indices.iter() {
                    let _ = write!(out, " {index}");
                }
                out.push('\n');
            }
        }
    }

    let _ = writeln!(out, "CELL_TYPES {}", entries.len());
    for entry in entries {
        let _ = writeln!(out, "{}", entry.cell_type());
    }

    // attributes
    let sections = [
        (Section::PointData, &attributes.point_data, points.len()),
        (Section::CellData, &attributes.cell_data, entries.len()),
    ];

    for (section, data, size) in sections {
        if data.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{section} {size}");
        write_data_section(&mut out, section, data, size, precision, &mut warnings);
    }

    writer.write_all(out.as_bytes())?;
    writer.flush()?;

    tracing::debug!(
        points = points.len(),
        cells = entries.len(),
        warnings = warnings.len(),
        "wrote legacy vtk document"
    );

    Ok(warnings)
}

/// The time stamp is written first in the `FieldData` block, ahead of any other arrays of
/// that block. Without a stored `FieldData` block the time stamp gets a block of its own,
/// written before everything else.
fn write_field_data(
    out: &mut String,
    time: Option<f64>,
    field_data: &IndexMap<String, FieldBlock>,
    precision: usize,
) {
    let time_array = time.map(FieldArray::scalar);

    if time_array.is_some() && !field_data.contains_key(crate::FIELD_DATA_BLOCK) {
        write_field_block(
            out,
            crate::FIELD_DATA_BLOCK,
            time_array.as_ref(),
            &FieldBlock::new(),
            precision,
        );
    }

    for (name, block) in field_data {
        let time_here = if name == crate::FIELD_DATA_BLOCK {
            time_array.as_ref()
        } else {
            None
        };

        write_field_block(out, name, time_here, block, precision);
    }
}

fn write_field_block(
    out: &mut String,
    name: &str,
    time: Option<&FieldArray>,
    block: &FieldBlock,
    precision: usize,
) {
    // an explicit time replaces any stored time stamp
    let stored = block
        .iter()
        .filter(|(array_name, _)| time.is_none() || *array_name != crate::TIME_VALUE_ARRAY);

    let arrays: Vec<(&str, &FieldArray)> = time
        .map(|array| (crate::TIME_VALUE_ARRAY, array))
        .into_iter()
        .chain(stored.map(|(array_name, array)| (array_name.as_str(), array)))
        .collect();

    let _ = writeln!(out, "FIELD {} {}", encode_name(name), arrays.len());

    for (array_name, array) in arrays {
        let _ = writeln!(
            out,
            "{} {} {} double",
            encode_name(array_name),
            array.components(),
            array.length()
        );
        array.write_ascii(out, precision);
    }
}

fn write_data_section(
    out: &mut String,
    section: Section,
    data: &DataSet,
    size: usize,
    precision: usize,
    warnings: &mut Vec<Warning>,
) {
    for (name, field) in data.iter() {
        if field.len() != size {
            Warning::FieldSizeMismatch {
                section,
                name: name.clone(),
                expected: size,
                found: field.len(),
            }
            .raise(warnings);
        }

        let name = encode_name(name);

        match field.kind() {
            FieldKind::Scalar => {
                let _ = writeln!(out, "SCALARS {name} float");
                out.push_str("LOOKUP_TABLE default\n");
            }
            FieldKind::Vector => {
                let _ = writeln!(out, "VECTORS {name} float");
            }
        }

        field.write_ascii(out, precision);
    }
}

/// every cell and line only references existing points
fn check_indices(points: usize, entries: &[Entry]) -> Result<(), Error> {
    for (entry, cell) in entries.iter().enumerate() {
        if let Entry::Indices(indices, _) = cell {
            if let Some(&index) = indices.iter().find(|&&index| index >= points) {
                return Err(Error::PointIndexOutOfRange {
                    entry,
                    index,
                    points,
                });
            }
        }
    }

    Ok(())
}

/// names are written as single tokens, so none of them may be empty
fn check_names(attributes: &Attributes) -> Result<(), Error> {
    for (block_name, block) in &attributes.field_data {
        if block_name.is_empty() {
            return Err(Error::EmptyName("a FIELD block".into()));
        }

        if block.keys().any(String::is_empty) {
            return Err(Error::EmptyName(format!("FIELD `{block_name}`")));
        }
    }

    let sections = [
        (Section::PointData, &attributes.point_data),
        (Section::CellData, &attributes.cell_data),
    ];

    for (section, data) in sections {
        if data.keys().any(String::is_empty) {
            return Err(Error::EmptyName(section.to_string()));
        }
    }

    Ok(())
}

/// Escape a name so that it is a single whitespace free token: whitespace, control
/// characters, non-ASCII bytes, `"` and `%` become `%XX` with the byte in hex.
fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());

    for byte in name.bytes() {
        if byte <= b' ' || byte >= 0x7f || byte == b'"' || byte == b'%' {
            let _ = write!(encoded, "%{byte:02X}");
        } else {
            encoded.push(char::from(byte));
        }
    }

    encoded
}
