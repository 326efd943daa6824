use super::FieldTable;
use crate::{
    codec::{Flag, Text, Unsigned},
    field::Field,
    qso::{Propagation, Qso},
    record::Record,
};

field_table! {
    /// Propagation fields.
    pub PropagationTable: Propagation {
        AIndex => a_index as Unsigned,
        AntPath => ant_path as Text,
        ForceInit => force_init as Flag,
        KIndex => k_index as Unsigned,
        MaxBursts => max_bursts as Unsigned,
        MsShower => meteor_shower_name as Text,
        NrBursts => nr_bursts as Unsigned,
        NrPings => nr_pings as Unsigned,
        PropMode => propagation_mode as Text,
        SatMode => sat_mode as Text,
        SatName => sat_name as Text,
        Sfi => solar_flux_index as Unsigned,
    }
}

/// Propagation is always attached, even when every field is empty.
pub(crate) fn read(record: &Record, qso: &mut Qso) {
    let mut propagation = Propagation::default();
    PropagationTable::read(record, &mut propagation);
    qso.propagation = Some(propagation);
}

pub(crate) fn write(qso: &Qso, record: &mut Record) {
    if let Some(propagation) = &qso.propagation {
        PropagationTable::write(propagation, record);
    }
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    PropagationTable::check(record, invalid);
}
