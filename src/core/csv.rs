//! CSV input for bulk loading.
//!
//! The file has no header row. Each record is `name,value`; fields may be
//! double-quoted, in which case they can contain commas, newlines and
//! doubled quotes (`""`). Records are yielded lazily, in file order, so a
//! malformed row only stops the run when it is reached.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::types::SecretRecord;
use crate::error::{CsvError, Result};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Lazy reader of `name,value` records.
pub struct Records<R> {
    reader: R,
    line: usize,
    done: bool,
}

impl Records<BufReader<File>> {
    /// Open a CSV file for reading.
    ///
    /// # Errors
    ///
    /// Returns `CsvError::Open` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening csv");

        let file = File::open(path).map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Records<R> {
    /// Read records from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            done: false,
        }
    }

    /// Append the next physical line to `buf`. Returns `false` at EOF.
    /// Append the next physical line to `buf`, turning a `\r\n` ending into `\n`.
    fn read_line(&mut self, buf: &mut String) -> Result<bool> {
        let start = buf.len();
        let read = self
            .reader
            .read_line(buf)
            .map_err(|source| CsvError::Read {
                line: self.line + 1,
                source,
            })?;
        if read == 0 {
            return Ok(false);
        }
        if buf[start..].ends_with("\r\n") {
            buf.truncate(buf.len() - 2);
            buf.push('\n');
        }
        self.line += 1;
        Ok(true)
    }

    fn next_record(&mut self) -> Result<Option<SecretRecord>> {
        loop {
            let mut raw = String::new();
            if !self.read_line(&mut raw)? {
                return Ok(None);
            }
            let start = self.line;

            if strip_line_ending(&raw).is_empty() {
                continue;
            }

            // A quoted field may span several physical lines.
            let fields = loop {
                let parsed = split_fields(strip_line_ending(&raw));
                match parsed {
                    Some(fields) => break fields,
                    None => {
                        if !self.read_line(&mut raw)? {
                            return Err(CsvError::UnterminatedQuote { line: start }.into());
                        }
                    }
                }
            };

            let mut fields = fields.into_iter();
            let name = fields.next().unwrap_or_default();
            let value = fields
                .next()
                .ok_or(CsvError::MissingValue { line: start })?;

            let extra = fields.count();
            if extra > 0 {
                warn!(line = start, extra, "ignoring extra columns");
            }

            return Ok(Some(SecretRecord::new(name, value, start)));
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<SecretRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn strip_line_ending(raw: &str) -> &str {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    raw.strip_suffix('\r').unwrap_or(raw)
}

/// Split one logical record into fields.
///
/// Returns `None` while a quoted field is still open.
fn split_fields(record: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = record.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            DELIMITER => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
                continue;
            }
            QUOTE if at_field_start => in_quotes = true,
            _ => field.push(ch),
        }
        at_field_start = false;
    }

    if in_quotes {
        return None;
    }

    fields.push(field);
    Some(fields)
}
