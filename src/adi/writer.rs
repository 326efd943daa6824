use std::io::Write;

use super::{RecordSink, ADIF_VER, CREATED_TIMESTAMP, EOH, EOR, PROGRAMID, PROGRAMVERSION};
use crate::{error::LineFormatError, field::Field, qso::Header, record::Record};

/// ADI serializer writing to any [`Write`].
///
/// Each record is written on one line, fields in record order.
#[derive(Debug)]
pub struct AdiWriter<W: Write> {
    out: W,
}

impl<W: Write> AdiWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_specifier(&mut self, name: &str, value: &str) -> Result<(), LineFormatError> {
        if value.is_empty() {
            return Ok(());
        }
        if !Field::is_writable_name(name) {
            return Err(LineFormatError::InvalidName {
                name: name.to_string(),
            });
        }
        write!(self.out, "<{}:{}>{} ", name, value.chars().count(), value)?;
        Ok(())
    }
}

impl<W: Write> RecordSink for AdiWriter<W> {
    fn write_header(&mut self, header: &Header) -> Result<(), LineFormatError> {
        // the preamble must not start with '<', or readers see no header
        writeln!(
            self.out,
            "Generated by {} {}",
            header.program_id, header.program_version
        )?;
        let created = header
            .created_timestamp
            .map(|ts| ts.format("%Y%m%d %H%M%S").to_string())
            .unwrap_or_default();
        self.write_specifier(ADIF_VER, &header.adif_version)?;
        self.write_specifier(CREATED_TIMESTAMP, &created)?;
        self.write_specifier(PROGRAMID, &header.program_id)?;
        self.write_specifier(PROGRAMVERSION, &header.program_version)?;
        writeln!(self.out, "<{EOH}>")?;
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> Result<(), LineFormatError> {
        for (name, value) in record.iter() {
            self.write_specifier(name, value)?;
        }
        writeln!(self.out, "<{EOR}>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), LineFormatError> {
        self.out.flush()?;
        Ok(())
    }
}
