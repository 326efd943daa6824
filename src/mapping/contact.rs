use tracing::debug;

use super::FieldTable;
use crate::{
    codec::{
        datetime::{format_date, format_time, parse_date_time},
        AwardList, CreditList, Flag, Frequency, Text, Unsigned,
    },
    field::Field,
    qso::Qso,
    record::Record,
    types::Timestamp,
};

field_table! {
    /// Scalar and list fields held directly on [`Qso`].
    pub ContactTable: Qso {
        Band => band as Text,
        BandRx => band_rx as Text,
        Comment => comment as Text,
        Distance => distance_km as Unsigned,
        Freq => freq as Frequency,
        FreqRx => freq_rx as Frequency,
        Mode => mode as Text,
        Notes => notes as Text,
        PublicKey => public_key as Text,
        QsoComplete => complete as Text,
        QsoRandom => random as Flag,
        RstRcvd => rst_received as Text,
        RstSent => rst_sent as Text,
        Submode => submode as Text,
        Swl => swl as Flag,
        AwardSubmitted => award_submitted as AwardList,
        AwardGranted => award_granted as AwardList,
        CreditSubmitted => credit_submitted as CreditList,
        CreditGranted => credit_granted as CreditList,
    }
}

/// Date tag and time tag that together make one timestamp.
const TIME_ON: (Field, Field) = (Field::QsoDate, Field::TimeOn);
const TIME_OFF: (Field, Field) = (Field::QsoDateOff, Field::TimeOff);

pub(crate) fn read(record: &Record, qso: &mut Qso) {
    ContactTable::read(record, qso);
    qso.time_on = read_span(record, TIME_ON);
    qso.time_off = read_span(record, TIME_OFF);
    qso.app_defined = record
        .app_defined()
        .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
        .collect();
}

pub(crate) fn write(qso: &Qso, record: &mut Record) {
    ContactTable::write(qso, record);
    write_span(record, TIME_ON, qso.time_on.as_ref());
    write_span(record, TIME_OFF, qso.time_off.as_ref());
    for (name, value) in &qso.app_defined {
        if value.is_empty() {
            continue;
        }
        if Field::is_app_defined(name) && Field::is_writable_name(name) {
            record.set(name, value.as_str());
        } else {
            debug!(name = name.as_str(), "skipping unwritable application-defined key");
        }
    }
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    ContactTable::check(record, invalid);
    for (date, time) in [TIME_ON, TIME_OFF] {
        if !parse_date_time(record.field(date), record.field(time)).valid {
            invalid.push(date);
        }
    }
}

fn read_span(record: &Record, (date, time): (Field, Field)) -> Option<Timestamp> {
    parse_date_time(record.field(date), record.field(time)).value
}

fn write_span(record: &mut Record, (date, time): (Field, Field), value: Option<&Timestamp>) {
    if let (Some(d), Some(t)) = (format_date(value), format_time(value)) {
        record.set_field(date, d);
        record.set_field(time, t);
    }
}
