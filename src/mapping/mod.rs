//! Field mapping between flat records and [`Qso`] entities.
//!
//! Each submodule owns one entity and keeps its decode and encode rules side
//! by side. Plain one-tag-to-one-attribute mappings are declared once with
//! `field_table!`, which generates both directions from the same list.

use crate::{field::Field, qso::Qso, record::Record};

/// Declares a [`FieldTable`] from `TAG => attribute as Codec` entries.
macro_rules! field_table {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: $target:ty {
            $($field:ident => $attr:ident as $codec:ty,)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $name {
            /// Tags covered by this table.
            pub const FIELDS: &'static [$crate::field::Field] = &[$($crate::field::Field::$field,)*];
        }

        impl $crate::mapping::FieldTable for $name {
            type Target = $target;

            fn read(record: &$crate::record::Record, target: &mut $target) {
                $(
                    target.$attr = <$codec as $crate::codec::ScalarCodec>::parse(
                        record.field($crate::field::Field::$field),
                    )
                    .value;
                )*
            }

            fn write(source: &$target, record: &mut $crate::record::Record) {
                $(
                    if let Some(text) = <$codec as $crate::codec::ScalarCodec>::format(&source.$attr) {
                        record.set_field($crate::field::Field::$field, text);
                    }
                )*
            }

            fn check(record: &$crate::record::Record, invalid: &mut Vec<$crate::field::Field>) {
                $(
                    if !<$codec as $crate::codec::ScalarCodec>::parse(
                        record.field($crate::field::Field::$field),
                    )
                    .valid
                    {
                        invalid.push($crate::field::Field::$field);
                    }
                )*
            }
        }
    };
}

/// Top-level contact fields, timestamps and application-defined passthrough.
pub mod contact;
/// Contest exchange.
pub mod contest;
/// Propagation details.
pub mod propagation;
/// Card and electronic QSL confirmations.
pub mod qsl;
/// The two [`crate::qso::Station`] field families.
pub mod station;
/// Logging-service upload states.
pub mod upload;

/// Symmetric tag ⇄ attribute table for one entity type.
pub trait FieldTable {
    /// Entity the table reads into and writes from.
    type Target;

    /// Fills `target` from `record`; absent or bad text gives defaults.
    fn read(record: &Record, target: &mut Self::Target);

    /// Writes every non-default attribute of `source` into `record`.
    fn write(source: &Self::Target, record: &mut Record);

    /// Appends tags whose text is present but does not parse.
    fn check(record: &Record, invalid: &mut Vec<Field>);
}

/// Decodes one flat record. Never fails.
///
/// ```
/// use qsobridge::{mapping::decode_qso, record::Record};
///
/// let record: Record = [("CALL", "W1AW"), ("CONTEST_ID", "ARRL-DX-CW")].into_iter().collect();
/// let qso = decode_qso(&record);
/// assert_eq!(qso.contacted_station.unwrap().station_call, "W1AW");
/// assert_eq!(qso.contest.unwrap().contest_id, "ARRL-DX-CW");
/// ```
pub fn decode_qso(record: &Record) -> Qso {
    let mut qso = Qso::default();
    contact::read(record, &mut qso);
    station::read(record, &mut qso);
    contest::read(record, &mut qso);
    propagation::read(record, &mut qso);
    upload::read(record, &mut qso);
    qsl::read(record, &mut qso);
    qso
}

/// Encodes one contact, writing only non-default values.
pub fn encode_qso(qso: &Qso) -> Record {
    let mut record = Record::new();
    contact::write(qso, &mut record);
    station::write(qso, &mut record);
    contest::write(qso, &mut record);
    propagation::write(qso, &mut record);
    upload::write(qso, &mut record);
    qsl::write(qso, &mut record);
    record
}

/// Tags whose text [`decode_qso`] had to replace with a default.
///
/// Decoding itself ignores these; the list exists for callers that want to
/// report or reject noisy input on their own terms.
pub fn invalid_fields(record: &Record) -> Vec<Field> {
    let mut invalid = Vec::new();
    contact::check(record, &mut invalid);
    station::check(record, &mut invalid);
    contest::check(record, &mut invalid);
    propagation::check(record, &mut invalid);
    upload::check(record, &mut invalid);
    qsl::check(record, &mut invalid);
    invalid
}
