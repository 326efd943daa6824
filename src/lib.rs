//! Bidirectional conversion between ADIF line-format logs and typed QSO
//! entities.
//!
//! # Examples
//!
//! Decoding one flat record with [`mapping::decode_qso`]:
//! ```
//! use qsobridge::{mapping::{decode_qso, encode_qso}, record::Record};
//!
//! let record: Record = [
//!     ("CALL", "W1AW"),
//!     ("QSO_DATE", "20230615"),
//!     ("TIME_ON", "1230"),
//!     ("BAND", "20m"),
//!     ("MY_LAT", "N42 30.5"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let qso = decode_qso(&record);
//! assert_eq!(qso.band, "20m");
//! assert_eq!(qso.logging_station.as_ref().unwrap().latitude, 42.5083);
//!
//! let back = encode_qso(&qso);
//! assert_eq!(back.get("TIME_ON"), Some("123000"));
//! assert_eq!(back.get("MY_LAT"), Some("N042 30.498"));
//! ```
//!
//! Whole documents, ADI to JSON and back:
//! ```
//! use chrono::Utc;
//! use qsobridge::{config::ConvertConfig, document::{adif_to_json, json_to_adif}};
//!
//! let json = adif_to_json("<CALL:4>W1AW<EOR>", Utc::now(), &ConvertConfig::default()).unwrap();
//! let text = json_to_adif(&json).unwrap();
//! assert!(text.contains("<CALL:4>W1AW"));
//! ```
#![deny(missing_docs)]

/// Line-format reader, writer and the traits the driver consumes.
pub mod adi;
/// Parallel per-record conversion.
pub mod batch;
/// Scalar codec library.
pub mod codec;
/// Conversion settings.
pub mod config;
/// Whole-document driver.
pub mod document;
/// Error types.
pub mod error;
/// Known line-format tags.
pub mod field;
/// Decoder and encoder mapping tables.
pub mod mapping;
/// Structured contact schema.
pub mod qso;
/// Flat line-format record.
pub mod record;
/// Shared primitive types and enums.
pub mod types;
