//! Loads catalog and enrollment tables from files on disk.

use std::io::Write;
use std::path::Path;

use credit_ingest::{
    CatalogSchema, IngestError, load_catalog, load_enrollments, load_table,
};
use tempfile::{NamedTempFile, TempDir};

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

#[test]
fn loads_catalog_from_csv() {
    let file = write_csv(
        "Class ID,Subject,Stream,Ability,Year,Day,Time,Duration,Class Type,Status\n\
         C1,Maths,A,higher,7,monday,09:00:00,90,Group,Active\n\
         C2,Maths,B,higher,7,tuesday,10:00:00,,Group,Inactive\n\
         ,Maths,B,core,7,friday,11:00:00,60,Group,Active\n",
    );

    let catalog = load_catalog(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.filters_type_and_status);
    let c1 = catalog.find("C1").unwrap();
    assert_eq!(c1.year.as_deref(), Some("7"));
    assert_eq!(c1.duration.as_deref(), Some("90"));
    assert_eq!(c1.start_time.as_deref(), Some("09:00:00"));
    assert_eq!(catalog.find("C2").unwrap().duration, None);
}

#[test]
fn loads_enrollments_from_csv() {
    let file = write_csv(
        "Student ID,Student Name,Year,Class ID,Time\n\
         S1,Amira Haddad,7,C1,09:00:00\n\
         S1,Amira Haddad,7,C3,\n\
         S2,Ben Ortiz,8,C7,13:00:00\n",
    );

    let records = load_enrollments(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].student_id, "S1");
    assert_eq!(records[1].time, None);
    assert_eq!(records[2].student_name.as_deref(), Some("Ben Ortiz"));
}

#[test]
fn catalog_missing_stream_column_is_a_schema_error() {
    let file = write_csv("Class ID,Subject,Ability,Year\nC1,Maths,higher,7\n");

    let err = load_catalog(file.path()).unwrap_err();

    assert!(matches!(err, IngestError::Schema(_)));
    assert!(err.to_string().contains("stream"));
}

#[test]
fn header_only_table_is_empty() {
    let file = write_csv("Student ID,Year,Class ID\n");

    let err = load_enrollments(file.path()).unwrap_err();

    assert!(matches!(err, IngestError::EmptyTable { .. }));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classes.txt");
    std::fs::write(&path, "Class ID\nC1\n").unwrap();

    let err = load_table(&path).unwrap_err();

    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_not_found() {
    let err = load_catalog(Path::new("/no/such/dir/classes.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn schema_can_be_resolved_from_loaded_headers() {
    let file = write_csv("ClassID,Subject,Stream,Ability,Year Group\nC1,Maths,A,core,7\n");

    let df = load_table(file.path()).unwrap();
    let schema = CatalogSchema::resolve(&df.get_column_names_str()).unwrap();

    assert_eq!(schema.year, "Year Group");
    assert!(!schema.filters_type_and_status());
}
