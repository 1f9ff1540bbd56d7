use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::{EngineError, EngineResult};

/// A delimited source split into its header and the data rows that follow.
///
/// Rows are read lazily. Field counts are not checked here; a row may be
/// shorter or longer than the header.
pub struct CsvSource<R> {
    headers: Vec<String>,
    reader: Reader<R>,
}

pub fn open_csv(path: &Path) -> EngineResult<CsvSource<File>> {
    let file = File::open(path).map_err(|err| {
        EngineError::Read(format!("failed to open {}: {}", path.display(), err))
    })?;
    CsvSource::from_reader(file)
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(input: R) -> EngineResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|err| EngineError::Read(format!("failed to read CSV header: {}", err)))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(EngineError::Read("CSV source contains no records".into()));
        }
        debug!(columns = headers.len(), "read CSV header");

        Ok(Self { headers, reader })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&mut self) -> impl Iterator<Item = EngineResult<Vec<String>>> + '_ {
        self.reader.records().map(|record| {
            record.map(record_values).map_err(|err| {
                EngineError::Read(format!("failed to parse CSV record: {}", err))
            })
        })
    }
}

fn record_values(record: StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(text: &str) -> EngineResult<CsvSource<Cursor<Vec<u8>>>> {
        CsvSource::from_reader(Cursor::new(text.as_bytes().to_vec()))
    }

    fn collect_rows<R: Read>(source: &mut CsvSource<R>) -> Vec<Vec<String>> {
        source
            .rows()
            .collect::<EngineResult<Vec<_>>>()
            .expect("rows")
    }

    #[test]
    fn header_is_trimmed_and_excluded_from_rows() {
        let mut src = source(" id , name ,score\n1, Alice ,90\n2,Bob,85\n").expect("source");
        assert_eq!(src.headers(), ["id", "name", "score"]);
        assert_eq!(
            collect_rows(&mut src),
            vec![
                vec!["1".to_string(), " Alice ".to_string(), "90".to_string()],
                vec!["2".to_string(), "Bob".to_string(), "85".to_string()],
            ]
        );
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_line_breaks() {
        let mut src =
            source("name,note\n\"Smith, J\",\"line one\nline two\"\n").expect("source");
        let rows = collect_rows(&mut src);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Smith, J");
        assert_eq!(rows[0][1], "line one\nline two");
    }

    #[test]
    fn header_only_source_has_no_rows() {
        let mut src = source("Name,Value\n").expect("source");
        assert_eq!(src.headers(), ["Name", "Value"]);
        assert!(collect_rows(&mut src).is_empty());
    }

    #[test]
    fn ragged_rows_pass_through_unchanged() {
        let mut src = source("a,b,c\n1,2\n1,2,3,4\n").expect("source");
        let rows = collect_rows(&mut src);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 4);
    }

    #[test]
    fn empty_source_is_read_error() {
        let err = source("").err().expect("empty source must fail");
        assert!(matches!(err, EngineError::Read(_)), "{err}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = open_csv(Path::new("/nonexistent/csvdb/missing.csv"))
            .err()
            .expect("missing file must fail");
        assert!(matches!(err, EngineError::Read(_)), "{err}");
    }
}
