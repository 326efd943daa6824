use super::Parsed;
use crate::types::UploadStatus;

/// Maps `Y`/`N`/`M` to an [`UploadStatus`]; anything else is `Unknown`.
pub fn parse_upload_status(text: &str) -> Parsed<UploadStatus> {
    match text {
        "Y" => Parsed::ok(UploadStatus::UploadComplete),
        "N" => Parsed::ok(UploadStatus::DoNotUpload),
        "M" => Parsed::ok(UploadStatus::ModifiedAfterUpload),
        "" => Parsed::ok(UploadStatus::Unknown),
        _ => Parsed::fallback(UploadStatus::Unknown),
    }
}

/// Letter for `status`; `Unknown` is not written.
pub fn format_upload_status(status: UploadStatus) -> Option<&'static str> {
    match status {
        UploadStatus::UploadComplete => Some("Y"),
        UploadStatus::DoNotUpload => Some("N"),
        UploadStatus::ModifiedAfterUpload => Some("M"),
        UploadStatus::Unknown => None,
    }
}

/// True when neither side of a QSL exchange says anything but "no".
pub fn qsl_is_absent(sent: &str, received: &str) -> bool {
    let negative = |s: &str| s.is_empty() || s == "N";
    negative(sent) && negative(received)
}
