//! Whole-document conversion.

use tracing::debug;

use crate::{
    adi::{reader::AdiReader, writer::AdiWriter, RecordSink, RecordSource},
    config::ConvertConfig,
    error::ConvertResult,
    mapping::{decode_qso, encode_qso},
    qso::{Adif, Header},
    types::Timestamp,
};

/// Header for a freshly decoded document.
pub fn header_for(config: &ConvertConfig, created: Timestamp) -> Header {
    Header {
        adif_version: config.adif_version.clone(),
        created_timestamp: Some(created),
        program_id: config.program_id.clone(),
        program_version: config.program_version.clone(),
    }
}

/// Decodes every record from `source`, in order.
///
/// End of input finishes the document; any other source error aborts it.
pub fn decode_document<S: RecordSource>(source: &mut S, header: Header) -> ConvertResult<Adif> {
    let mut qsos = Vec::new();
    while let Some(record) = source.next_record()? {
        qsos.push(decode_qso(&record));
    }
    debug!(qsos = qsos.len(), "decoded document");
    Ok(Adif {
        header: Some(header),
        qsos,
    })
}

/// Encodes every contact of `adif` into `sink`, header first when present.
pub fn encode_document<K: RecordSink>(adif: &Adif, sink: &mut K) -> ConvertResult<()> {
    if let Some(header) = &adif.header {
        sink.write_header(header)?;
    }
    for qso in &adif.qsos {
        sink.write_record(&encode_qso(qso))?;
    }
    sink.finish()?;
    debug!(qsos = adif.qsos.len(), "encoded document");
    Ok(())
}

/// Parses ADI text into an [`Adif`] document.
///
/// ```
/// use chrono::Utc;
/// use qsobridge::{config::ConvertConfig, document::adif_to_qsos};
///
/// let text = "<CALL:4>W1AW<QSO_DATE:8>20230615<TIME_ON:4>1230<EOR>";
/// let adif = adif_to_qsos(text, Utc::now(), &ConvertConfig::default()).unwrap();
/// assert_eq!(adif.qsos.len(), 1);
/// ```
pub fn adif_to_qsos(text: &str, created: Timestamp, config: &ConvertConfig) -> ConvertResult<Adif> {
    let mut reader = AdiReader::new(text);
    decode_document(&mut reader, header_for(config, created))
}

/// Renders an [`Adif`] document as ADI text.
pub fn qsos_to_adif(adif: &Adif) -> ConvertResult<String> {
    let mut writer = AdiWriter::new(Vec::new());
    encode_document(adif, &mut writer)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// ADI text to the JSON form of [`Adif`].
pub fn adif_to_json(text: &str, created: Timestamp, config: &ConvertConfig) -> ConvertResult<String> {
    Ok(adif_to_qsos(text, created, config)?.to_json()?)
}

/// JSON form of [`Adif`] to ADI text.
pub fn json_to_adif(json: &str) -> ConvertResult<String> {
    qsos_to_adif(&Adif::from_json(json)?)
}
