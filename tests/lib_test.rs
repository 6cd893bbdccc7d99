//! Library integration tests.

use tadc_import_validator::report::MockReporter;
use tadc_import_validator::row::{Column, ImportRow, COLUMN_COUNT};
use tadc_import_validator::validator::{CsvRowSink, CsvRowSource, FileValidator};
use tadc_import_validator::ValidatorError;

const INPUT: &str = "\
Course Code,Course Description\n\
Code,Description\n\
CS101,Intro,30,2015/01/01,2015/06/01,Jo,jo@x.com,Article,,,Journal,,,,4,Extract,Jo,,,10,20,B,a.pdf,,,\n\
CS102,Intro,30,2015/01/01,2015/06/01,Jo,jo@x.com,Article,,,Journal,Author X,,,4,Extract,,,,10,20,B,b.pdf,,,\n\
CS103,\"Intro, part 2\",30,2015/01/01,2015/06/01,Jo,jo@x.com,page range,,,Book,Author X,2001,,,,,Pub,,1,5,C,c.pdf,,,y\n\
CS104,Intro\n";

#[test]
fn error_types_are_public() {
    let err = ValidatorError::InvalidHeaderRows {
        value: "x".into(),
    };
    assert!(err.to_string().contains("x"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tadc_import_validator::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use tadc_import_validator::cli::Cli;

    let cli = Cli::parse_from(["validator", "file.csv", "2", "--fix-missing"]);
    assert_eq!(cli.header_rows, "2");
    assert!(cli.fix_missing);
}

#[test]
fn validates_csv_end_to_end() {
    let source = CsvRowSource::from_reader(INPUT.as_bytes());
    let mut reporter = MockReporter::new();

    let outcome = FileValidator::new(source, 2).validate_file(&mut reporter);

    assert_eq!(outcome.header_rows_skipped, 2);
    assert_eq!(outcome.rows_read, 4);
    assert_eq!(outcome.valid_rows, 2);
    assert_eq!(outcome.invalid_rows, 1);
    assert_eq!(outcome.skipped_rows, 1);

    // Article without an author of extract is flagged even with a book author.
    assert!(outcome.summary.get(1, Column::Q).is_some());
    assert_eq!(outcome.summary.row_count(), 1);
    assert!(reporter.contains("Row 2 column Q : Author of Extract value: ''"));
    assert!(reporter.contains("expected 26 cells, found 2"));
}

#[test]
fn fixed_output_round_trips_through_csv() {
    use tadc_import_validator::validator::RowSink;

    let valid_line = INPUT.lines().nth(4).unwrap();
    let mut source = CsvRowSource::from_reader(valid_line.as_bytes());
    let values = source.next().unwrap().unwrap();

    let mut row = ImportRow::new();
    row.load(&values).unwrap();
    assert!(row.is_valid());

    let mut sink = CsvRowSink::from_writer(Vec::new());
    sink.write_row(&row.output_for_csv()).unwrap();
    let written = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(written.trim_end(), valid_line);
}

#[test]
fn import_row_scenarios() {
    let mut values = vec![""; COLUMN_COUNT];
    let filled = [
        (Column::A, "CS101"),
        (Column::B, "Intro"),
        (Column::C, "30"),
        (Column::D, "2015/01/01"),
        (Column::E, "2015/06/01"),
        (Column::F, "Jo"),
        (Column::G, "jo@x.com"),
        (Column::H, "chapter"),
        (Column::K, "Book Title"),
        (Column::L, "Author X"),
        (Column::O, "3"),
        (Column::P, "Extract Title"),
        (Column::R, "Publisher Y"),
        (Column::T, "10"),
        (Column::U, "20"),
        (Column::V, "A"),
        (Column::W, "file.pdf"),
    ];
    for (column, value) in filled {
        values[column.index()] = value;
    }

    let mut row = ImportRow::new();
    row.load(&values).unwrap();
    assert!(row.is_valid(), "{:?}", row.errors());

    values[Column::V.index()] = "Z";
    row.load(&values).unwrap();
    assert!(!row.is_valid());
    assert_eq!(row.errors().len(), 1);
    assert_eq!(row.errors()[0].column, Column::V);
}
