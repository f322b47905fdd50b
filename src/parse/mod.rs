//! reading and parsing legacy ASCII VTK files
//!
//! The grammar is positional: a fixed four line header, optional `FIELD` blocks, `POINTS`,
//! `CELLS`, `CELL_TYPES`, then any number of `POINT_DATA` / `CELL_DATA` sections. Parsing
//! is a single forward pass over the lines with one line of look-ahead. The first problem
//! found stops the parse, and no partially read grid is ever returned.

mod cursor;
mod error;
mod line_summary;

pub use error::ParseError;
pub use error::{
    DuplicateArrayName, DuplicateDataParent, InconsistentCellCount, InconsistentDataCount,
    MalformedNumber, PointIndexOutOfRange, StructuralMismatch, UnsupportedDataset,
    UnsupportedFormat, UnsupportedLookup, ValueCount,
};
pub use line_summary::LineSummary;

use cursor::{Line, LineCursor};

use crate::array::{FieldArray, FieldBlock};
use crate::mesh::list_size;
use crate::prelude::*;

use std::str::FromStr;

/// upper bound on what a declared count may preallocate, larger sections grow as they are read
const PREALLOCATION_LIMIT: usize = 1 << 16;

/// read in and parse an entire vtk file for a given path
pub fn read_and_parse(path: &std::path::Path) -> Result<Report<VtkData>, Error> {
    let file = std::fs::File::open(path)?;
    let buf_reader = std::io::BufReader::new(file);

    let parsed = parse_legacy_document(buf_reader)?;
    Ok(parsed)
}

/// Parse a complete legacy document from any buffered source.
///
/// Returns the grid and its attributes along with any non-fatal warnings (FIELD arrays
/// that were not `double`, a `CELLS` list size that did not add up).
pub fn parse_legacy_document<R: BufRead>(reader: R) -> Result<Report<VtkData>, ParseError> {
    let mut cursor = LineCursor::new(reader);

    read_header(&mut cursor)?;
    let field_data = read_field_blocks(&mut cursor)?;

    let points = read_points(&mut cursor)?;
    let cells = read_cells(&mut cursor, points.len())?;
    let cell_types = read_cell_types(&mut cursor, cells.len())?;

    let (point_data, cell_data) = read_data_sections(&mut cursor, points.len(), cells.len())?;

    tracing::debug!(
        points = points.len(),
        cells = cells.len(),
        point_fields = point_data.len(),
        cell_fields = cell_data.len(),
        "finished parsing legacy vtk document"
    );

    let domain = UnstructuredGrid::new(points, cells, cell_types);
    let data = Attributes {
        field_data,
        point_data,
        cell_data,
    };

    Ok(Report::new(VtkData::new(domain, data), cursor.into_warnings()))
}

/// the version line, title line, format line and dataset line
fn read_header<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<(), ParseError> {
    let _version = cursor.require_line("a version line")?;
    let _title = cursor.require_line("a title line")?;

    let format = cursor.require_line("ASCII")?;
    let format_token = format.text.trim();
    if format_token != "ASCII" {
        return Err(error::UnsupportedFormat::new(format.number, format_token.to_string()).into());
    }

    let dataset = cursor.require_line("DATASET UNSTRUCTURED_GRID")?;
    let mut tokens = dataset.tokens();

    if tokens.next() != Some("DATASET") {
        return Err(error::StructuralMismatch::at("DATASET UNSTRUCTURED_GRID", &dataset).into());
    }

    match tokens.next() {
        Some("UNSTRUCTURED_GRID") => Ok(()),
        other => Err(error::UnsupportedDataset::new(
            dataset.number,
            other.unwrap_or_default().to_string(),
        )
        .into()),
    }
}

fn read_field_blocks<R: BufRead>(
    cursor: &mut LineCursor<R>,
) -> Result<IndexMap<String, FieldBlock>, ParseError> {
    let mut blocks: IndexMap<String, FieldBlock> = IndexMap::new();

    while cursor.peek_keyword()?.as_deref() == Some("FIELD") {
        let header = cursor.expect_keyword("FIELD")?;
        let mut tokens = header.tokens().skip(1);

        let name = decode_name(required_token(tokens.next(), &header, "FIELD <name> <count>")?);
        let count: usize = header_value(tokens.next(), &header, "FIELD <name> <count>")?;

        let block = blocks.entry(name.clone()).or_default();

        for _ in 0..count {
            let (line, array_name, array) = read_field_array(cursor, &name)?;

            if block.contains_key(&array_name) {
                let parent = format!("FIELD {name}");
                return Err(error::DuplicateArrayName::new(line, parent, array_name).into());
            }

            block.insert(array_name, array);
        }

        tracing::debug!(field = %name, arrays = count, "read FIELD block");
    }

    Ok(blocks)
}

/// a single `<name> <components> <tuples> <datatype>` array and its values
fn read_field_array<R: BufRead>(
    cursor: &mut LineCursor<R>,
    field: &str,
) -> Result<(usize, String, FieldArray), ParseError> {
    const SHAPE: &str = "<array name> <components> <tuples> <datatype>";

    cursor.skip_blank_lines()?;
    let header = cursor.require_line(SHAPE)?;
    let mut tokens = header.tokens();

    let name = decode_name(required_token(tokens.next(), &header, SHAPE)?);
    let components: usize = header_value(tokens.next(), &header, SHAPE)?;
    let tuples: usize = header_value(tokens.next(), &header, SHAPE)?;
    let datatype = required_token(tokens.next(), &header, SHAPE)?;

    if datatype != "double" {
        cursor.warn(Warning::CoercedDatatype {
            line: header.number,
            field: field.to_string(),
            array: name.clone(),
            datatype: datatype.to_string(),
        });
    }

    let count = value_count(tuples, components, &header, SHAPE)?;
    let section = format!("FIELD array `{name}`");
    let values = read_values(cursor, count, &section, "a float")?;

    // read_values returns exactly `count` values
    let array = FieldArray::from_values(tuples, components, values)
        .ok_or_else(|| error::ValueCount::new(header.number, section, count, 0))?;

    Ok((header.number, name, array))
}

fn read_points<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<[f64; 3]>, ParseError> {
    let header = cursor.expect_keyword("POINTS")?;
    let num_points: usize = header_value(header.tokens().nth(1), &header, "POINTS <n> <type>")?;
    let count = value_count(num_points, 3, &header, "POINTS <n> <type>")?;

    let values = read_values(cursor, count, "POINTS", "a float")?;
    tracing::debug!(points = num_points, "read POINTS");

    Ok(triples(&values))
}

fn read_cells<R: BufRead>(
    cursor: &mut LineCursor<R>,
    num_points: usize,
) -> Result<Vec<Vec<usize>>, ParseError> {
    const SHAPE: &str = "CELLS <n> <size>";

    let header = cursor.expect_keyword("CELLS")?;
    let mut tokens = header.tokens().skip(1);
    let num_cells: usize = header_value(tokens.next(), &header, SHAPE)?;
    let declared_size: usize = header_value(tokens.next(), &header, SHAPE)?;

    let mut cells = Vec::with_capacity(num_cells.min(PREALLOCATION_LIMIT));

    while cells.len() < num_cells {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => {
                let remaining = num_cells - cells.len();
                return Err(error::StructuralMismatch::eof(format!("{remaining} more cells")).into());
            }
        };

        if line.is_blank() {
            continue;
        }

        let mut tokens = line.tokens();
        let num_nodes: usize = match tokens.next() {
            Some(token) => parse_number(token, line.number, "an integer")?,
            None => continue,
        };

        let indices = tokens
            .map(|token| parse_number::<usize>(token, line.number, "an integer"))
            .collect::<Result<Vec<_>, _>>()?;

        if indices.len() != num_nodes {
            let section = format!("cell {}", cells.len());
            return Err(
                error::ValueCount::new(line.number, section, num_nodes, indices.len()).into(),
            );
        }

        if let Some(&index) = indices.iter().find(|&&index| index >= num_points) {
            return Err(error::PointIndexOutOfRange::new(
                line.number,
                cells.len(),
                index,
                num_points,
            )
            .into());
        }

        cells.push(indices);
    }

    let actual_size = list_size(cells.iter().map(Vec::len));
    if actual_size != declared_size {
        cursor.warn(Warning::ListSizeMismatch {
            line: header.number,
            declared: declared_size,
            actual: actual_size,
        });
    }

    tracing::debug!(cells = num_cells, "read CELLS");

    Ok(cells)
}

fn read_cell_types<R: BufRead>(
    cursor: &mut LineCursor<R>,
    num_cells: usize,
) -> Result<Vec<CellType>, ParseError> {
    let header = cursor.expect_keyword("CELL_TYPES")?;
    let num_types: usize = header_value(header.tokens().nth(1), &header, "CELL_TYPES <n>")?;

    if num_types != num_cells {
        return Err(error::InconsistentCellCount::new(header.number, num_cells, num_types).into());
    }

    let codes: Vec<u8> = read_values(cursor, num_types, "CELL_TYPES", "a cell type code")?;

    Ok(codes.into_iter().map(CellType::from).collect())
}

/// every `POINT_DATA` / `CELL_DATA` section up to the end of the file
fn read_data_sections<R: BufRead>(
    cursor: &mut LineCursor<R>,
    num_points: usize,
    num_cells: usize,
) -> Result<(DataSet, DataSet), ParseError> {
    let mut point_data: Option<DataSet> = None;
    let mut cell_data: Option<DataSet> = None;

    loop {
        let section = match cursor.peek_keyword()?.as_deref() {
            None => break,
            Some("POINT_DATA") => Section::PointData,
            Some("CELL_DATA") => Section::CellData,
            Some(_) => {
                let line = cursor.require_line("POINT_DATA or CELL_DATA")?;
                return Err(error::StructuralMismatch::at("POINT_DATA or CELL_DATA", &line).into());
            }
        };

        let header = cursor.expect_keyword(section.keyword())?;

        let (slot, expected) = match section {
            Section::PointData => (&mut point_data, num_points),
            Section::CellData => (&mut cell_data, num_cells),
        };

        if slot.is_some() {
            return Err(error::DuplicateDataParent::new(header.number, section).into());
        }

        let shape = format!("{} <n>", section.keyword());
        let declared: usize = header_value(header.tokens().nth(1), &header, &shape)?;

        if declared != expected {
            return Err(
                error::InconsistentDataCount::new(header.number, section, declared, expected)
                    .into(),
            );
        }

        let fields = read_data_fields(cursor, section, declared)?;
        tracing::debug!(%section, fields = fields.len(), "read data section");

        *slot = Some(fields);
    }

    Ok((point_data.unwrap_or_default(), cell_data.unwrap_or_default()))
}

/// the `SCALARS` / `VECTORS` entries of one data section. Stops, without consuming it, at
/// the first line that starts neither.
fn read_data_fields<R: BufRead>(
    cursor: &mut LineCursor<R>,
    section: Section,
    size: usize,
) -> Result<DataSet, ParseError> {
    let mut data = DataSet::new();

    loop {
        let kind = match cursor.peek_keyword()?.as_deref() {
            Some("SCALARS") => FieldKind::Scalar,
            Some("VECTORS") => FieldKind::Vector,
            _ => break,
        };

        let keyword = kind.keyword();
        let shape = format!("{keyword} <name> <type>");

        let header = cursor.expect_keyword(keyword)?;
        let mut tokens = header.tokens().skip(1);
        let name = decode_name(required_token(tokens.next(), &header, &shape)?);
        let _datatype = required_token(tokens.next(), &header, &shape)?;

        if data.contains_key(&name) {
            let parent = section.to_string();
            return Err(error::DuplicateArrayName::new(header.number, parent, name).into());
        }

        let description = format!("{keyword} `{name}`");

        let field = match kind {
            FieldKind::Scalar => {
                if let Some(token) = tokens.next() {
                    let components: usize = parse_number(token, header.number, "an integer")?;
                    if components != 1 {
                        return Err(error::StructuralMismatch::at(
                            "SCALARS with a single component",
                            &header,
                        )
                        .into());
                    }
                }

                read_lookup_table(cursor, &name)?;
                Field::Scalars(read_values(cursor, size, &description, "a float")?)
            }
            FieldKind::Vector => {
                let count = value_count(size, 3, &header, &shape)?;
                let values = read_values(cursor, count, &description, "a float")?;
                Field::Vectors(triples(&values))
            }
        };

        data.insert(name, field);
    }

    Ok(data)
}

/// only the `LOOKUP_TABLE <name>` form is supported, and the table name is not used
fn read_lookup_table<R: BufRead>(cursor: &mut LineCursor<R>, name: &str) -> Result<(), ParseError> {
    cursor.skip_blank_lines()?;

    let line = match cursor.next_line()? {
        Some(line) => line,
        None => return Err(error::UnsupportedLookup::new(name.into(), LineSummary::eof()).into()),
    };

    let mut tokens = line.tokens();
    match (tokens.next(), tokens.next()) {
        (Some("LOOKUP_TABLE"), Some(_)) => Ok(()),
        _ => Err(error::UnsupportedLookup::new(name.into(), LineSummary::new(&line)).into()),
    }
}

/// Read `count` whitespace separated numbers spanning as many lines as required. Blank
/// lines are skipped, and the values must end exactly on a line boundary.
fn read_values<T: FromStr, R: BufRead>(
    cursor: &mut LineCursor<R>,
    count: usize,
    section: &str,
    expected: &'static str,
) -> Result<Vec<T>, ParseError> {
    let mut values = Vec::with_capacity(count.min(PREALLOCATION_LIMIT));

    while values.len() < count {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => {
                let remaining = count - values.len();
                let expected = format!("{remaining} more values for {section}");
                return Err(error::StructuralMismatch::eof(expected).into());
            }
        };

        for token in line.tokens() {
            values.push(parse_number(token, line.number, expected)?);
        }

        if values.len() > count {
            return Err(
                error::ValueCount::new(line.number, section.to_string(), count, values.len())
                    .into(),
            );
        }
    }

    Ok(values)
}

fn parse_number<T: FromStr>(
    token: &str,
    line: usize,
    expected: &'static str,
) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| error::MalformedNumber::new(line, token.to_string(), expected).into())
}

/// a token of a section header that must be present
fn required_token<'a>(
    token: Option<&'a str>,
    header: &Line,
    shape: &str,
) -> Result<&'a str, ParseError> {
    token.ok_or_else(|| error::StructuralMismatch::at(shape, header).into())
}

/// a count in a section header that must be present and must be an integer
fn header_value<T: FromStr>(
    token: Option<&str>,
    header: &Line,
    shape: &str,
) -> Result<T, ParseError> {
    let token = required_token(token, header, shape)?;
    parse_number(token, header.number, "an integer")
}

/// total number of values in `tuples` tuples of `components` values each. A count too large
/// to represent is a malformed header.
fn value_count(
    tuples: usize,
    components: usize,
    header: &Line,
    shape: &str,
) -> Result<usize, ParseError> {
    tuples
        .checked_mul(components)
        .ok_or_else(|| error::StructuralMismatch::at(shape, header).into())
}

/// Undo the `%XX` escaping of array names: every `%` followed by two hex digits is the byte
/// with that value. Any other `%` is kept as is.
fn decode_name(token: &str) -> String {
    let bytes = token.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        let escaped = bytes
            .get(idx + 1..idx + 3)
            .filter(|hex| bytes[idx] == b'%' && hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match escaped {
            Some(byte) => {
                decoded.push(byte);
                idx += 3;
            }
            None => {
                decoded.push(bytes[idx]);
                idx += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn triples(values: &[f64]) -> Vec<[f64; 3]> {
    values
        .chunks_exact(3)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# vtk DataFile Version 4.0\ntitle\nASCII\nDATASET UNSTRUCTURED_GRID\n";

    fn cursor(input: &str) -> LineCursor<&[u8]> {
        LineCursor::new(input.as_bytes())
    }

    #[test]
    fn header() {
        let mut cursor = cursor(HEADER);
        read_header(&mut cursor).unwrap();
        assert!(cursor.next_line().unwrap().is_none());
    }

    #[test]
    fn binary_header() {
        let input = "# vtk DataFile Version 4.0\ntitle\nBINARY\nDATASET UNSTRUCTURED_GRID\n";
        let err = read_header(&mut cursor(input)).unwrap_err();

        match err {
            ParseError::UnsupportedFormat(format) => {
                assert_eq!(format.found, "BINARY");
                assert_eq!(format.line, 3);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn polydata_header() {
        let input = "# vtk DataFile Version 4.0\ntitle\nASCII\nDATASET POLYDATA\n";
        let err = read_header(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedDataset(d) if d.found == "POLYDATA"));
    }

    #[test]
    fn missing_dataset_keyword() {
        let input = "# vtk DataFile Version 4.0\ntitle\nASCII\nPOINTS 3 float\n";
        let err = read_header(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(_)));
    }

    #[test]
    fn field_block() {
        let input = "FIELD FieldData 2\nTimeValue 1 1 double\n0.5\nforces 3 2 float\n1 2 3\n4 5 6\nPOINTS 0 float\n";
        let mut cursor = cursor(input);
        let blocks = read_field_blocks(&mut cursor).unwrap();

        let block = &blocks["FieldData"];
        assert_eq!(block["TimeValue"][[0, 0]], 0.5);
        assert_eq!(block["forces"].tuples(), 2);
        assert_eq!(block["forces"][[1, 2]], 6.);

        let warnings = cursor.into_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(&warnings[0], Warning::CoercedDatatype { datatype, .. } if datatype == "float"));
    }

    #[test]
    fn wrapped_field_values() {
        let input = "FIELD FieldData 1\nvalues 1 4 double\n1 2 3 4\n";
        let blocks = read_field_blocks(&mut cursor(input)).unwrap();
        assert_eq!(blocks["FieldData"]["values"].tuples(), 4);
    }

    #[test]
    fn duplicate_field_array() {
        let input = "FIELD FieldData 2\nTimeValue 1 1 double\n0.5\nTimeValue 1 1 double\n0.7\n";
        let err = read_field_blocks(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateArrayName(dup) if dup.line == 4));
    }

    #[test]
    fn points() {
        let input = "POINTS 2 float\n0 0 0\n1.5 -2 3e2\n";
        let points = read_points(&mut cursor(input)).unwrap();
        assert_eq!(points, vec![[0., 0., 0.], [1.5, -2., 300.]]);
    }

    #[test]
    fn malformed_point() {
        let input = "POINTS 1 float\n0 zero 0\n";
        let err = read_points(&mut cursor(input)).unwrap_err();

        match err {
            ParseError::MalformedNumber(number) => {
                assert_eq!(number.line, 2);
                assert_eq!(number.token, "zero");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn truncated_points() {
        let input = "POINTS 2 float\n0 0 0\n";
        let err = read_points(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.is_eof()));
    }

    #[test]
    fn cells_with_repeated_spaces() {
        let input = "CELLS 2 7\n1   0\n4 0  1 2    3\n";
        let mut cursor = cursor(input);
        let cells = read_cells(&mut cursor, 4).unwrap();

        assert_eq!(cells, vec![vec![0], vec![0, 1, 2, 3]]);
        assert!(cursor.into_warnings().is_empty());
    }

    #[test]
    fn cells_list_size_warning() {
        let input = "CELLS 1 9\n2 0 1\n";
        let mut cursor = cursor(input);
        read_cells(&mut cursor, 2).unwrap();

        let warnings = cursor.into_warnings();
        assert_eq!(
            warnings,
            vec![Warning::ListSizeMismatch {
                line: 1,
                declared: 9,
                actual: 3
            }]
        );
    }

    #[test]
    fn cell_with_wrong_node_count() {
        let input = "CELLS 1 4\n3 0 1\n";
        let err = read_cells(&mut cursor(input), 2).unwrap_err();
        assert!(matches!(err, ParseError::ValueCount(count) if count.expected == 3 && count.found == 2));
    }

    #[test]
    fn cell_out_of_range() {
        let input = "CELLS 1 3\n2 0 5\n";
        let err = read_cells(&mut cursor(input), 2).unwrap_err();
        assert!(matches!(err, ParseError::PointIndexOutOfRange(range) if range.index == 5));
    }

    #[test]
    fn cell_types_count() {
        let input = "CELL_TYPES 3\n1\n1\n1\n";
        let err = read_cell_types(&mut cursor(input), 2).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InconsistentCellCount(count) if count.cells == 2 && count.cell_types == 3
        ));
    }

    #[test]
    fn data_fields() {
        let input = "SCALARS p float 1\nLOOKUP_TABLE default\n1\n2\nVECTORS v double\n1 0 0\n0 1 0\nCELL_DATA 1\n";
        let mut cursor = cursor(input);
        let data = read_data_fields(&mut cursor, Section::PointData, 2).unwrap();

        assert_eq!(data["p"], Field::Scalars(vec![1., 2.]));
        assert_eq!(data["v"], Field::Vectors(vec![[1., 0., 0.], [0., 1., 0.]]));
        // the next section is left for the caller
        assert_eq!(cursor.peek_keyword().unwrap().as_deref(), Some("CELL_DATA"));
    }

    #[test]
    fn scalars_without_lookup_table() {
        let input = "SCALARS p float\n1\n2\n";
        let err = read_data_fields(&mut cursor(input), Section::PointData, 2).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedLookup(lookup) if lookup.name == "p"));
    }

    #[test]
    fn multi_component_scalars() {
        let input = "SCALARS p float 3\nLOOKUP_TABLE default\n1 2 3\n";
        let err = read_data_fields(&mut cursor(input), Section::PointData, 1).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(_)));
    }

    #[test]
    fn duplicate_point_field() {
        let input = "SCALARS p float\nLOOKUP_TABLE default\n1\nSCALARS p float\nLOOKUP_TABLE default\n2\n";
        let err = read_data_fields(&mut cursor(input), Section::PointData, 1).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateArrayName(dup) if dup.parent == "POINT_DATA"));
    }

    #[test]
    fn duplicate_data_section() {
        let input = "POINT_DATA 1\nSCALARS a float\nLOOKUP_TABLE default\n1\nPOINT_DATA 1\n";
        let err = read_data_sections(&mut cursor(input), 1, 0).unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateDataParent(dup) if dup.section == Section::PointData && dup.line == 5
        ));
    }

    #[test]
    fn junk_after_cell_types() {
        let input = "\n\nMETADATA\n";
        let err = read_data_sections(&mut cursor(input), 1, 1).unwrap_err();

        match err {
            ParseError::StructuralMismatch(mismatch) => {
                assert_eq!(mismatch.expected, "POINT_DATA or CELL_DATA");
                assert_eq!(mismatch.found.text(), "METADATA");
                assert_eq!(mismatch.found.line(), Some(3));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn overflowing_point_count() {
        let input = "POINTS 18446744073709551615 float\n0 0 0\n";
        let err = read_points(&mut cursor(input)).unwrap_err();

        match err {
            ParseError::StructuralMismatch(mismatch) => {
                assert_eq!(mismatch.expected, "POINTS <n> <type>");
                assert_eq!(mismatch.found.line(), Some(1));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn overflowing_field_array_shape() {
        let input = "FIELD FieldData 1\nhuge 4294967296 4294967296 double\n1\n";
        let err = read_field_blocks(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.line() == Some(2)));
    }

    #[test]
    fn huge_cell_count_is_not_preallocated() {
        let input = "CELLS 4611686018427387903 2\n1 0\n";
        let err = read_cells(&mut cursor(input), 1).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.is_eof()));
    }

    #[test]
    fn huge_value_count_is_not_preallocated() {
        let input = "POINTS 4611686018427387903 float\n0 0 0\n";
        let err = read_points(&mut cursor(input)).unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.is_eof()));
    }

    #[test]
    fn escaped_names() {
        assert_eq!(decode_name("wall%20shear"), "wall shear");
        assert_eq!(decode_name("100%25"), "100%");
        assert_eq!(decode_name("t%C3%A9"), "t\u{e9}");
        // not escapes
        assert_eq!(decode_name("50%"), "50%");
        assert_eq!(decode_name("%zz"), "%zz");
        assert_eq!(decode_name("%+1"), "%+1");

        let input = "SCALARS wall%20shear float\nLOOKUP_TABLE default\n1\n";
        let data = read_data_fields(&mut cursor(input), Section::PointData, 1).unwrap();
        assert_eq!(data["wall shear"], Field::Scalars(vec![1.]));
    }

    #[test]
    fn full_document() {
        let input = format!(
            "{HEADER}POINTS 3 float\n0 0 0\n1 0 0\n0 1 0\n\nCELLS 1 4\n3 0 1 2\n\nCELL_TYPES 1\n5\n\nCELL_DATA 1\nSCALARS id float\nLOOKUP_TABLE default\n7\n"
        );

        let parsed = parse_legacy_document(input.as_bytes()).unwrap();
        assert!(parsed.is_clean());

        let vtk = parsed.into_inner();
        assert_eq!(vtk.domain.cells, vec![vec![0, 1, 2]]);
        assert_eq!(vtk.domain.cell_types, vec![CellType(5)]);
        assert_eq!(vtk.data.cell_data["id"], Field::Scalars(vec![7.]));
        assert!(vtk.data.point_data.is_empty());
    }
}
