//! Line-format (ADI) reading and writing.
//!
//! The document driver only sees [`RecordSource`] and [`RecordSink`]; the
//! ADI reader and writer here are the default implementations.

/// ADI tokenizer.
pub mod reader;
/// ADI serializer.
pub mod writer;

use crate::{error::LineFormatError, qso::Header, record::Record};

/// End-of-header marker.
pub const EOH: &str = "EOH";
/// End-of-record marker.
pub const EOR: &str = "EOR";
/// Header tag for the format version.
pub const ADIF_VER: &str = "ADIF_VER";
/// Header tag for the creation time (`YYYYMMDD HHMMSS`).
pub const CREATED_TIMESTAMP: &str = "CREATED_TIMESTAMP";
/// Header tag for the producer name.
pub const PROGRAMID: &str = "PROGRAMID";
/// Header tag for the producer version.
pub const PROGRAMVERSION: &str = "PROGRAMVERSION";

/// Lazy sequence of flat records.
pub trait RecordSource {
    /// Next record, or `Ok(None)` once the input is exhausted.
    fn next_record(&mut self) -> Result<Option<Record>, LineFormatError>;
}

/// Destination for flat records.
pub trait RecordSink {
    /// Writes document metadata. Called at most once, before any record.
    fn write_header(&mut self, _header: &Header) -> Result<(), LineFormatError> {
        Ok(())
    }

    /// Writes one record.
    fn write_record(&mut self, record: &Record) -> Result<(), LineFormatError>;

    /// Flushes buffered output.
    fn finish(&mut self) -> Result<(), LineFormatError> {
        Ok(())
    }
}

impl RecordSource for std::vec::IntoIter<Record> {
    fn next_record(&mut self) -> Result<Option<Record>, LineFormatError> {
        Ok(self.next())
    }
}

impl RecordSink for Vec<Record> {
    fn write_record(&mut self, record: &Record) -> Result<(), LineFormatError> {
        self.push(record.clone());
        Ok(())
    }
}
