//! Shared primitive types and enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC instant used for every date and date+time field.
pub type Timestamp = DateTime<Utc>;

/// Returns true when `ts` carries no value.
///
/// Absent timestamps and the Unix epoch are both treated as unset.
pub fn timestamp_is_unset(ts: Option<&Timestamp>) -> bool {
    ts.is_none_or(|t| t.timestamp() == 0 && t.timestamp_subsec_nanos() == 0)
}

/// Upload state of a QSO at one external logging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadStatus {
    /// Missing or unrecognised status.
    #[default]
    Unknown,
    /// `Y`: uploaded.
    UploadComplete,
    /// `N`: must not be uploaded.
    DoNotUpload,
    /// `M`: modified since it was uploaded.
    ModifiedAfterUpload,
}

/// Which coordinate a geo value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North/south.
    Latitude,
    /// East/west.
    Longitude,
}
