use legacy_vtk as vtk;
use vtk::parse::ParseError;
use vtk::prelude::*;

const HEADER: &str = "# vtk DataFile Version 4.0\nmalformed\nASCII\nDATASET UNSTRUCTURED_GRID\n";

const FIVE_POINTS: &str = "POINTS 5 float\n0 0 0\n1 0 0\n2 0 0\n3 0 0\n4 0 0\n\
                           CELLS 1 6\n5 0 1 2 3 4\n\
                           CELL_TYPES 1\n4\n";

fn parse(body: &str) -> Result<Report<VtkData>, ParseError> {
    let document = format!("{HEADER}{body}");
    vtk::parse_legacy_document(document.as_bytes())
}

#[test]
fn binary_files_are_rejected() {
    let document = "# vtk DataFile Version 4.0\nbinary\nBINARY\nDATASET UNSTRUCTURED_GRID\n";
    let err = vtk::parse_legacy_document(document.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedFormat(_)));
}

#[test]
fn structured_grids_are_rejected() {
    let document = "# vtk DataFile Version 4.0\ngrid\nASCII\nDATASET STRUCTURED_POINTS\n";
    let err = vtk::parse_legacy_document(document.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedDataset(d) if d.found == "STRUCTURED_POINTS"));
}

#[test]
fn truncated_header() {
    let err = vtk::parse_legacy_document("# vtk DataFile Version 4.0\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.is_eof()));
}

#[test]
fn point_data_matching_point_count() {
    let body = format!("{FIVE_POINTS}POINT_DATA 5\nSCALARS s float\nLOOKUP_TABLE default\n1\n2\n3\n4\n5\n");
    let parsed = parse(&body).unwrap();
    assert_eq!(parsed.data.point_data["s"].len(), 5);
}

#[test]
fn point_data_exceeding_point_count() {
    let body = format!("{FIVE_POINTS}POINT_DATA 6\nSCALARS s float\nLOOKUP_TABLE default\n1\n2\n3\n4\n5\n6\n");
    let err = parse(&body).unwrap_err();

    match err {
        ParseError::InconsistentDataCount(count) => {
            assert_eq!(count.section, Section::PointData);
            assert_eq!(count.declared, 6);
            assert_eq!(count.expected, 5);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn cell_data_exceeding_cell_count() {
    let body = format!("{FIVE_POINTS}CELL_DATA 2\nSCALARS a float\nLOOKUP_TABLE default\n1\n2\n");
    let err = parse(&body).unwrap_err();

    match err {
        ParseError::InconsistentDataCount(count) => {
            assert_eq!(count.section, Section::CellData);
            assert_eq!(count.declared, 2);
            assert_eq!(count.expected, 1);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn cell_type_count_mismatch() {
    let body = "POINTS 1 float\n0 0 0\nCELLS 1 2\n1 0\nCELL_TYPES 2\n1\n1\n";
    let err = parse(body).unwrap_err();
    assert!(matches!(err, ParseError::InconsistentCellCount(_)));
}

#[test]
fn cells_before_points() {
    let body = "CELLS 1 2\n1 0\n";
    let err = parse(body).unwrap_err();

    match err {
        ParseError::StructuralMismatch(mismatch) => {
            assert_eq!(mismatch.expected, "POINTS");
            assert_eq!(mismatch.found.line(), Some(5));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn malformed_cell_index() {
    let body = "POINTS 2 float\n0 0 0\n1 0 0\nCELLS 1 3\n2 0 one\nCELL_TYPES 1\n3\n";
    let err = parse(body).unwrap_err();
    assert!(matches!(err, ParseError::MalformedNumber(n) if n.token == "one" && n.line == 9));
}

#[test]
fn second_cell_data_section() {
    let body = format!(
        "{FIVE_POINTS}CELL_DATA 1\nSCALARS a float\nLOOKUP_TABLE default\n1\n\nCELL_DATA 1\nSCALARS b float\nLOOKUP_TABLE default\n2\n"
    );
    let err = parse(&body).unwrap_err();
    assert!(matches!(err, ParseError::DuplicateDataParent(d) if d.section == Section::CellData));
}

#[test]
fn repeated_field_name() {
    let body = format!(
        "{FIVE_POINTS}CELL_DATA 1\nSCALARS a float\nLOOKUP_TABLE default\n1\nVECTORS a float\n1 0 0\n"
    );
    let err = parse(&body).unwrap_err();
    assert!(matches!(err, ParseError::DuplicateArrayName(d) if d.name == "a"));
}

#[test]
fn missing_lookup_table() {
    let body = format!("{FIVE_POINTS}CELL_DATA 1\nSCALARS a float\n1\n");
    let err = parse(&body).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedLookup(_)));
}

#[test]
fn unknown_section() {
    let body = format!("{FIVE_POINTS}TENSORS t float\n");
    let err = parse(&body).unwrap_err();
    assert!(matches!(err, ParseError::StructuralMismatch(m) if m.found.text() == "TENSORS t float"));
}

#[test]
fn too_many_values_on_a_line() {
    let body = "POINTS 1 float\n0 0 0 1\n";
    let err = parse(body).unwrap_err();
    assert!(matches!(err, ParseError::ValueCount(count) if count.expected == 3 && count.found == 4));
}

#[test]
fn missing_file() {
    let err = vtk::read_vtk(std::path::Path::new("./static/does_not_exist.vtk")).unwrap_err();
    assert!(matches!(err, vtk::Error::Io(_)));
}

#[test]
fn error_messages_name_the_line() {
    let body = "POINTS 1 float\n0 0 zero\n";
    let err = parse(body).unwrap_err();
    assert_eq!(err.to_string(), "line 6: could not parse `zero` as a float");
}
