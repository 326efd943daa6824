use tracing::trace;

use super::{RecordSource, EOH, EOR};
use crate::{error::LineFormatError, record::Record};

/// One `<NAME[:LEN[:TYPE]]>` specifier and the data that follows it.
#[derive(Debug)]
struct Specifier<'a> {
    name: &'a str,
    /// `None` for markers such as `<EOR>`.
    data: Option<&'a str>,
}

/// Pull-based ADI tokenizer over borrowed text.
///
/// ```
/// use qsobridge::adi::{reader::AdiReader, RecordSource};
///
/// let mut reader = AdiReader::new("<CALL:4>W1AW<BAND:3>20m<EOR>");
/// let record = reader.next_record().unwrap().unwrap();
/// assert_eq!(record.get("call"), Some("W1AW"));
/// assert!(reader.next_record().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct AdiReader<'a> {
    text: &'a str,
    pos: usize,
    header: Option<Record>,
    header_done: bool,
}

impl<'a> AdiReader<'a> {
    /// Creates a reader positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            header: None,
            header_done: false,
        }
    }

    /// Header fields, once the header has been consumed.
    ///
    /// A document whose first non-blank character is `<` has no header.
    pub fn header(&mut self) -> Result<Option<&Record>, LineFormatError> {
        self.read_header()?;
        Ok(self.header.as_ref())
    }

    fn read_header(&mut self) -> Result<(), LineFormatError> {
        if self.header_done {
            return Ok(());
        }
        self.header_done = true;
        if self.text.trim_start().starts_with('<') {
            return Ok(());
        }

        let mut header = Record::new();
        while let Some(spec) = self.next_specifier()? {
            match spec.data {
                Some(data) => header.set(spec.name, data),
                None if spec.name.eq_ignore_ascii_case(EOH) => {
                    self.header = Some(header);
                    return Ok(());
                }
                None => trace!(tag = spec.name, "ignoring marker in header"),
            }
        }
        // no <EOH>: the leading text was a comment, not a header
        trace!("no end-of-header marker; reading from the start");
        self.pos = 0;
        Ok(())
    }

    fn next_specifier(&mut self) -> Result<Option<Specifier<'a>>, LineFormatError> {
        let text = self.text;
        let Some(rel_open) = text[self.pos..].find('<') else {
            self.pos = text.len();
            return Ok(None);
        };
        let open = self.pos + rel_open;
        let Some(rel_close) = text[open..].find('>') else {
            return Err(LineFormatError::UnterminatedTag { offset: open });
        };
        let close = open + rel_close;
        let inner = &text[open + 1..close];
        self.pos = close + 1;

        let mut parts = inner.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(malformed(inner, open));
        }
        let Some(len) = parts.next() else {
            return Ok(Some(Specifier { name, data: None }));
        };
        let len: usize = len.trim().parse().map_err(|_| malformed(inner, open))?;

        let rest = &text[self.pos..];
        let end = match rest.char_indices().nth(len) {
            Some((idx, _)) => idx,
            None => {
                let available = rest.chars().count();
                if available < len {
                    return Err(LineFormatError::Truncated {
                        name: name.to_string(),
                        declared: len,
                        available,
                    });
                }
                rest.len()
            }
        };
        self.pos += end;
        Ok(Some(Specifier {
            name,
            data: Some(&rest[..end]),
        }))
    }
}

fn malformed(spec: &str, offset: usize) -> LineFormatError {
    LineFormatError::MalformedTag {
        spec: spec.to_string(),
        offset,
    }
}

impl RecordSource for AdiReader<'_> {
    fn next_record(&mut self) -> Result<Option<Record>, LineFormatError> {
        self.read_header()?;
        let mut record = Record::new();
        while let Some(spec) = self.next_specifier()? {
            match spec.data {
                Some(data) => record.set(spec.name, data),
                None if spec.name.eq_ignore_ascii_case(EOR) => {
                    if !record.is_empty() {
                        return Ok(Some(record));
                    }
                }
                None => trace!(tag = spec.name, "ignoring marker"),
            }
        }
        // trailing record without <EOR>
        Ok((!record.is_empty()).then_some(record))
    }
}

impl Iterator for AdiReader<'_> {
    type Item = Result<Record, LineFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                // stop after the first structural error
                self.pos = self.text.len();
                self.header_done = true;
                Some(Err(err))
            }
        }
    }
}
