use crate::{
    codec::{Date, ScalarCodec, UploadState},
    field::Field,
    qso::{Qso, Upload},
    record::Record,
};

/// External logging service with its own upload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadService {
    /// QRZ.com logbook.
    Qrzcom,
    /// HRDLog.net.
    Hrdlog,
    /// Club Log.
    Clublog,
}

impl UploadService {
    /// Every known service.
    pub const ALL: [Self; 3] = [Self::Qrzcom, Self::Hrdlog, Self::Clublog];

    /// Status tag.
    pub fn status_field(self) -> Field {
        match self {
            Self::Qrzcom => Field::QrzcomQsoUploadStatus,
            Self::Hrdlog => Field::HrdlogQsoUploadStatus,
            Self::Clublog => Field::ClublogQsoUploadStatus,
        }
    }

    /// Date tag.
    pub fn date_field(self) -> Field {
        match self {
            Self::Qrzcom => Field::QrzcomQsoUploadDate,
            Self::Hrdlog => Field::HrdlogQsoUploadDate,
            Self::Clublog => Field::ClublogQsoUploadDate,
        }
    }

    /// The contact's entry for this service.
    pub fn of(self, qso: &Qso) -> Option<&Upload> {
        match self {
            Self::Qrzcom => qso.qrzcom.as_ref(),
            Self::Hrdlog => qso.hrdlog.as_ref(),
            Self::Clublog => qso.clublog.as_ref(),
        }
    }

    fn slot(self, qso: &mut Qso) -> &mut Option<Upload> {
        match self {
            Self::Qrzcom => &mut qso.qrzcom,
            Self::Hrdlog => &mut qso.hrdlog,
            Self::Clublog => &mut qso.clublog,
        }
    }
}

/// An upload entry exists only when its status text is non-empty.
pub(crate) fn read(record: &Record, qso: &mut Qso) {
    for service in UploadService::ALL {
        let status = record.field(service.status_field());
        if status.is_empty() {
            continue;
        }
        *service.slot(qso) = Some(Upload {
            upload_status: UploadState::parse(status).value,
            upload_date: Date::parse(record.field(service.date_field())).value,
        });
    }
}

pub(crate) fn write(qso: &Qso, record: &mut Record) {
    for service in UploadService::ALL {
        let Some(upload) = service.of(qso) else {
            continue;
        };
        if let Some(status) = UploadState::format(&upload.upload_status) {
            record.set_field(service.status_field(), status);
        }
        if let Some(date) = Date::format(&upload.upload_date) {
            record.set_field(service.date_field(), date);
        }
    }
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    for service in UploadService::ALL {
        if !UploadState::parse(record.field(service.status_field())).valid {
            invalid.push(service.status_field());
        }
        if !Date::parse(record.field(service.date_field())).valid {
            invalid.push(service.date_field());
        }
    }
}
