use super::FieldTable;
use crate::{
    codec::{status::qsl_is_absent, Date, ScalarCodec, Text},
    field::Field,
    qso::{Qsl, Qso},
    record::Record,
};

/// The four tags of one confirmation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QslFields {
    /// Sent status.
    pub sent: Field,
    /// Received status.
    pub received: Field,
    /// Date sent.
    pub sent_date: Field,
    /// Date received.
    pub received_date: Field,
}

/// Paper card.
pub const CARD: QslFields = QslFields {
    sent: Field::QslSent,
    received: Field::QslRcvd,
    sent_date: Field::QslSdate,
    received_date: Field::QslRdate,
};

/// eQSL.cc.
pub const EQSL: QslFields = QslFields {
    sent: Field::EqslQslSent,
    received: Field::EqslQslRcvd,
    sent_date: Field::EqslQslSdate,
    received_date: Field::EqslQslRdate,
};

/// ARRL Logbook of the World.
pub const LOTW: QslFields = QslFields {
    sent: Field::LotwQslSent,
    received: Field::LotwQslRcvd,
    sent_date: Field::LotwQslSdate,
    received_date: Field::LotwQslRdate,
};

/// Families feeding [`Qso::eqsl`], in decode order. A later family that is
/// present replaces an earlier one.
pub const ELECTRONIC: [QslFields; 2] = [EQSL, LOTW];

field_table! {
    /// Card-only details carried next to [`CARD`].
    pub CardDetails: Qsl {
        QslSentVia => sent_via as Text,
        QslRcvdVia => received_via as Text,
        QslMsg => received_message as Text,
    }
}

pub(crate) fn read(record: &Record, qso: &mut Qso) {
    qso.card = read_qsl(record, CARD).map(|mut card| {
        CardDetails::read(record, &mut card);
        card
    });
    for fields in ELECTRONIC {
        if let Some(qsl) = read_qsl(record, fields) {
            qso.eqsl = Some(qsl);
        }
    }
}

/// The electronic entry is written to every electronic family.
pub(crate) fn write(qso: &Qso, record: &mut Record) {
    if let Some(card) = &qso.card {
        write_qsl(card, CARD, record);
        CardDetails::write(card, record);
    }
    if let Some(eqsl) = &qso.eqsl {
        for fields in ELECTRONIC {
            write_qsl(eqsl, fields, record);
        }
    }
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    for fields in [CARD, EQSL, LOTW] {
        for date in [fields.sent_date, fields.received_date] {
            if !Date::parse(record.field(date)).valid {
                invalid.push(date);
            }
        }
    }
}

/// Status tokens are kept verbatim; only "all negative" counts as absent.
fn read_qsl(record: &Record, fields: QslFields) -> Option<Qsl> {
    let sent = record.field(fields.sent);
    let received = record.field(fields.received);
    if qsl_is_absent(sent, received) {
        return None;
    }
    Some(Qsl {
        sent_status: sent.to_string(),
        sent_date: Date::parse(record.field(fields.sent_date)).value,
        received_status: received.to_string(),
        received_date: Date::parse(record.field(fields.received_date)).value,
        ..Qsl::default()
    })
}

fn write_qsl(qsl: &Qsl, fields: QslFields, record: &mut Record) {
    let values = [
        (fields.sent, Text::format(&qsl.sent_status)),
        (fields.sent_date, Date::format(&qsl.sent_date)),
        (fields.received, Text::format(&qsl.received_status)),
        (fields.received_date, Date::format(&qsl.received_date)),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            record.set_field(field, value);
        }
    }
}
