use super::FieldTable;
use crate::{
    codec::Text,
    field::Field,
    qso::{ContestData, Qso},
    record::Record,
};

field_table! {
    /// Contest fields other than the serial numbers.
    pub ContestTable: ContestData {
        ContestId => contest_id as Text,
        ArrlSect => arrl_section as Text,
        Class => station_class as Text,
        Check => check as Text,
        Precedence => precedence as Text,
    }
}

/// Numeric slot, then the string slot it falls back to.
const SERIAL_RECEIVED: [Field; 2] = [Field::Srx, Field::SrxString];
const SERIAL_SENT: [Field; 2] = [Field::Stx, Field::StxString];

/// Attaches [`ContestData`] only when `CONTEST_ID` is set.
pub(crate) fn read(record: &Record, qso: &mut Qso) {
    if record.field(Field::ContestId).is_empty() {
        return;
    }
    let mut contest = ContestData::default();
    ContestTable::read(record, &mut contest);
    contest.serial_received = first_present(record, SERIAL_RECEIVED);
    contest.serial_sent = first_present(record, SERIAL_SENT);
    qso.contest = Some(contest);
}

/// Serials go to both slots so readers of either convention find them.
pub(crate) fn write(qso: &Qso, record: &mut Record) {
    let Some(contest) = &qso.contest else {
        return;
    };
    ContestTable::write(contest, record);
    write_all(record, SERIAL_RECEIVED, &contest.serial_received);
    write_all(record, SERIAL_SENT, &contest.serial_sent);
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    ContestTable::check(record, invalid);
}

fn first_present(record: &Record, slots: [Field; 2]) -> String {
    slots
        .into_iter()
        .map(|f| record.field(f))
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn write_all(record: &mut Record, slots: [Field; 2], value: &str) {
    if value.is_empty() {
        return;
    }
    for slot in slots {
        record.set_field(slot, value);
    }
}
