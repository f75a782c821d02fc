//! CSV serialisation of report rows.
//!
//! The layout is fixed: a header line, then one line per merge request with
//! no newline after the last row. Only the URL column is quoted.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::Utf8Path;

use crate::gitlab::ReportError;

use super::model::ReportRow;

/// First line of every report.
pub const CSV_HEADER: &str =
    "Merge Request ID,Merge Request URL,State,Opened Date,Closed Date,Comments";

/// File written when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "merge_requests.csv";

/// Writes the header and rows to `writer`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing fails.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[ReportRow]) -> Result<(), ReportError> {
    writeln!(writer, "{CSV_HEADER}").map_err(|e| io_error(&e))?;
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        write_row(writer, row)?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes the report into it.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created, written or
/// flushed.
pub fn write_report_file(path: &Utf8Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::Io {
        message: format!("failed to create output file '{path}': {e}"),
    })?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, rows)?;
    writer.flush().map_err(|e| ReportError::Io {
        message: format!("failed to flush output file '{path}': {e}"),
    })
}

fn write_row<W: Write>(writer: &mut W, row: &ReportRow) -> Result<(), ReportError> {
    write!(
        writer,
        "{},{},{},{},{},{}",
        row.id,
        quote(&row.url),
        row.state,
        row.opened,
        row.closed,
        row.comments
    )
    .map_err(|e| io_error(&e))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn io_error(error: &std::io::Error) -> ReportError {
    ReportError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use camino::Utf8PathBuf;
    use rstest::rstest;

    use super::{CSV_HEADER, write_csv, write_report_file};
    use crate::gitlab::ReportError;
    use crate::report::{ClosedDate, ReportRow};

    fn row(id: u64, closed: ClosedDate, comments: usize) -> ReportRow {
        ReportRow {
            id,
            url: format!("https://gitlab.example.com/p/mr/{id}"),
            state: "opened".to_owned(),
            opened: "2023-01-01T00:00:00Z".to_owned(),
            closed,
            comments,
        }
    }

    fn render(rows: &[ReportRow]) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, rows).expect("should write CSV");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[rstest]
    fn no_rows_writes_header_only() {
        assert_eq!(render(&[]), format!("{CSV_HEADER}\n"));
    }

    #[rstest]
    fn rows_are_newline_separated_without_trailing_newline() {
        let rows = vec![
            row(1, ClosedDate::StillOpen, 5),
            row(2, ClosedDate::At("2023-05-01T00:00:00Z".to_owned()), 0),
        ];

        let output = render(&rows);

        assert_eq!(
            output,
            "Merge Request ID,Merge Request URL,State,Opened Date,Closed Date,Comments\n\
             1,\"https://gitlab.example.com/p/mr/1\",opened,2023-01-01T00:00:00Z,opened,5\n\
             2,\"https://gitlab.example.com/p/mr/2\",opened,2023-01-01T00:00:00Z,2023-05-01T00:00:00Z,0"
        );
        assert!(!output.ends_with('\n'), "last row must not end with a newline");
    }

    #[rstest]
    #[case::plain("https://gitlab.example.com/p/mr/1", "\"https://gitlab.example.com/p/mr/1\"")]
    #[case::embedded_quote("https://x/\"q\"", "\"https://x/\"\"q\"\"\"")]
    #[case::comma("https://x/a,b", "\"https://x/a,b\"")]
    fn url_field_is_quoted(#[case] url: &str, #[case] expected: &str) {
        let mut report_row = row(1, ClosedDate::StillOpen, 0);
        report_row.url = url.to_owned();

        let output = render(&[report_row]);

        let line = output.lines().nth(1).expect("data line");
        let field = line
            .strip_prefix("1,")
            .and_then(|rest| rest.strip_suffix(",opened,2023-01-01T00:00:00Z,opened,0"))
            .expect("line should have the expected shape");
        assert_eq!(field, expected);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn write_failure_maps_to_io_error() {
        let result = write_csv(&mut FailingWriter, &[]);

        assert_eq!(
            result,
            Err(ReportError::Io {
                message: "disk full".to_owned(),
            })
        );
    }

    #[rstest]
    fn report_file_is_created_and_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("merge_requests.csv"))
            .expect("utf-8 temp path");
        std::fs::write(&path, "stale contents that are longer than the report\n")
            .expect("seed file");

        write_report_file(&path, &[]).expect("should write report");

        let contents = std::fs::read_to_string(&path).expect("read report");
        assert_eq!(contents, format!("{CSV_HEADER}\n"));
    }

    #[rstest]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent").join("out.csv"))
            .expect("utf-8 temp path");

        let result = write_report_file(&path, &[]);

        assert!(
            matches!(&result, Err(ReportError::Io { message }) if message.contains("failed to create output file")),
            "expected Io error, got {result:?}"
        );
    }
}
