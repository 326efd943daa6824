use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use qsobridge::{
    field::Field,
    mapping::{
        contact::ContactTable,
        contest::ContestTable,
        decode_qso, encode_qso, invalid_fields,
        propagation::PropagationTable,
        qsl::{CardDetails, CARD, EQSL, LOTW},
        station::{ContactedStation, LoggingStation},
        upload::UploadService,
    },
    record::Record,
    types::UploadStatus,
};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

#[test]
fn minimal_contact_decodes_and_reencodes() {
    let input = record(&[
        ("CALL", "W1AW"),
        ("QSO_DATE", "20230615"),
        ("TIME_ON", "1230"),
        ("BAND", "20m"),
        ("MY_LAT", "N42 30.5"),
        ("QSL_SENT", "Y"),
        ("QSLSDATE", "20230616"),
    ]);

    let qso = decode_qso(&input);
    let contacted = qso.contacted_station.as_ref().expect("contacted station");
    let logging = qso.logging_station.as_ref().expect("logging station");
    assert_eq!(contacted.station_call, "W1AW");
    assert_eq!(qso.time_on, Some(Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap()));
    assert_eq!(qso.band, "20m");
    assert_eq!(logging.latitude, 42.5083);
    let card = qso.card.as_ref().expect("card");
    assert_eq!(card.sent_status, "Y");
    assert_eq!(card.sent_date, Some(Utc.with_ymd_and_hms(2023, 6, 16, 0, 0, 0).unwrap()));
    assert!(qso.eqsl.is_none());
    assert!(qso.contest.is_none());

    let output = encode_qso(&qso);
    let names: BTreeSet<&str> = output.iter().map(|(name, _)| name).collect();
    let expected: BTreeSet<&str> =
        ["CALL", "QSO_DATE", "TIME_ON", "BAND", "MY_LAT", "QSL_SENT", "QSLSDATE"].into();
    assert_eq!(names, expected);
    assert_eq!(output.get("CALL"), Some("W1AW"));
    assert_eq!(output.get("QSO_DATE"), Some("20230615"));
    assert_eq!(output.get("TIME_ON"), Some("123000"));
    assert_eq!(output.get("BAND"), Some("20m"));
    assert_eq!(output.get("MY_LAT"), Some("N042 30.498"));
    assert_eq!(output.get("QSL_SENT"), Some("Y"));
    assert_eq!(output.get("QSLSDATE"), Some("20230616"));

    assert_eq!(decode_qso(&output), qso);
}

#[test]
fn empty_record_gives_default_entities() {
    let qso = decode_qso(&Record::new());
    assert_eq!(qso.contacted_station, Some(Default::default()));
    assert_eq!(qso.logging_station, Some(Default::default()));
    assert_eq!(qso.propagation, Some(Default::default()));
    assert!(qso.contest.is_none());
    assert!(qso.card.is_none());
    assert!(qso.eqsl.is_none());
    assert!(qso.qrzcom.is_none());
    assert!(qso.hrdlog.is_none());
    assert!(qso.clublog.is_none());
    assert!(qso.time_on.is_none());
    assert!(qso.app_defined.is_empty());
}

#[test]
fn tag_names_are_case_insensitive() {
    let qso = decode_qso(&record(&[("call", "K1ABC"), ("Band", "40m"), ("my_gridsquare", "FN31")]));
    assert_eq!(qso.contacted_station.expect("contacted").station_call, "K1ABC");
    assert_eq!(qso.band, "40m");
    assert_eq!(qso.logging_station.expect("logging").grid_square, "FN31");
}

#[test]
fn station_families_stay_apart() {
    let qso = decode_qso(&record(&[
        ("NAME", "Hiram"),
        ("MY_NAME", "Ann"),
        ("RX_PWR", "5"),
        ("TX_PWR", "100"),
        ("STATION_CALLSIGN", "N0CALL"),
        ("OPERATOR", "N0OP"),
        ("ANT_AZ", "-15"),
    ]));
    let contacted = qso.contacted_station.expect("contacted");
    let logging = qso.logging_station.expect("logging");
    assert_eq!(contacted.op_name, "Hiram");
    assert_eq!(contacted.power, 5.0);
    assert_eq!(contacted.station_call, "");
    assert_eq!(logging.op_name, "Ann");
    assert_eq!(logging.power, 100.0);
    assert_eq!(logging.station_call, "N0CALL");
    assert_eq!(logging.op_call, "N0OP");
    assert_eq!(logging.antenna_azimuth, -15);
}

#[test]
fn contest_attached_only_with_contest_id() {
    let without = decode_qso(&record(&[("SRX", "12"), ("CHECK", "72")]));
    assert!(without.contest.is_none());

    let with = decode_qso(&record(&[
        ("CONTEST_ID", "ARRL-SS-CW"),
        ("SRX", "12"),
        ("STX_STRING", "7A"),
        ("ARRL_SECT", "CT"),
        ("CHECK", "72"),
    ]));
    let contest = with.contest.expect("contest");
    assert_eq!(contest.contest_id, "ARRL-SS-CW");
    assert_eq!(contest.serial_received, "12");
    assert_eq!(contest.serial_sent, "7A");
    assert_eq!(contest.arrl_section, "CT");
    assert_eq!(contest.check, "72");
}

#[test]
fn numeric_serial_wins_over_string_slot() {
    let qso = decode_qso(&record(&[
        ("CONTEST_ID", "CQ-WW-CW"),
        ("SRX", "5"),
        ("SRX_STRING", "X"),
        ("STX", ""),
        ("STX_STRING", "A12"),
    ]));
    let contest = qso.contest.expect("contest");
    assert_eq!(contest.serial_received, "5");
    assert_eq!(contest.serial_sent, "A12");
}

#[test]
fn app_defined_fields_pass_through_lowercased() {
    let qso = decode_qso(&record(&[
        ("APP_N1MM_EXCHANGE1", "5NN"),
        ("app_lotw_rxqsl", "2023-06-16"),
        ("CALL", "W1AW"),
    ]));
    assert_eq!(qso.app_defined.len(), 2);
    assert_eq!(qso.app_defined.get("app_n1mm_exchange1").map(String::as_str), Some("5NN"));
    assert_eq!(qso.app_defined.get("app_lotw_rxqsl").map(String::as_str), Some("2023-06-16"));
}

#[test]
fn lotw_replaces_eqsl_when_both_present() {
    let qso = decode_qso(&record(&[("EQSL_QSL_RCVD", "Y"), ("LOTW_QSL_SENT", "Y")]));
    let eqsl = qso.eqsl.expect("electronic qsl");
    assert_eq!(eqsl.sent_status, "Y");
    assert_eq!(eqsl.received_status, "");
}

#[test]
fn eqsl_alone_is_kept() {
    let qso = decode_qso(&record(&[
        ("EQSL_QSL_RCVD", "Y"),
        ("EQSL_QSLRDATE", "20230701"),
        ("LOTW_QSL_SENT", "N"),
    ]));
    let eqsl = qso.eqsl.expect("electronic qsl");
    assert_eq!(eqsl.received_status, "Y");
    assert_eq!(eqsl.received_date, Some(Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap()));
}

#[test]
fn qsl_status_tokens_pass_through() {
    let requested = decode_qso(&record(&[("QSL_SENT", "R")]));
    assert_eq!(requested.card.expect("card").sent_status, "R");

    let negative = decode_qso(&record(&[("QSL_SENT", "N"), ("QSL_RCVD", "N")]));
    assert!(negative.card.is_none());

    let received = decode_qso(&record(&[
        ("QSL_RCVD", "Y"),
        ("QSL_RCVD_VIA", "B"),
        ("QSLMSG", "TNX QSO"),
    ]));
    let card = received.card.expect("card");
    assert_eq!(card.sent_status, "");
    assert_eq!(card.received_status, "Y");
    assert_eq!(card.received_via, "B");
    assert_eq!(card.received_message, "TNX QSO");
}

#[test]
fn upload_entries_follow_status_text() {
    let qso = decode_qso(&record(&[
        ("QRZCOM_QSO_UPLOAD_STATUS", "Y"),
        ("QRZCOM_QSO_UPLOAD_DATE", "20230620"),
        ("HRDLOG_QSO_UPLOAD_STATUS", "X"),
        ("CLUBLOG_QSO_UPLOAD_DATE", "20230621"),
    ]));
    let qrz = qso.qrzcom.expect("qrz");
    assert_eq!(qrz.upload_status, UploadStatus::UploadComplete);
    assert_eq!(qrz.upload_date, Some(Utc.with_ymd_and_hms(2023, 6, 20, 0, 0, 0).unwrap()));
    assert_eq!(qso.hrdlog.expect("hrdlog").upload_status, UploadStatus::Unknown);
    assert!(qso.clublog.is_none());
}

#[test]
fn bad_values_degrade_and_are_reported() {
    let input = record(&[
        ("AGE", "abc"),
        ("CQZ", "-3"),
        ("FREQ", "14.0x"),
        ("LAT", "nowhere"),
        ("QSO_DATE", "2023"),
        ("TIME_ON", "1230"),
        ("BAND", "20m"),
    ]);
    let qso = decode_qso(&input);
    let contacted = qso.contacted_station.expect("contacted");
    assert_eq!(contacted.age, 0);
    assert_eq!(contacted.cq_zone, 0);
    assert_eq!(contacted.latitude, 0.0);
    assert_eq!(qso.freq, 0.0);
    assert!(qso.time_on.is_none());
    assert_eq!(qso.band, "20m");

    let mut invalid = invalid_fields(&input);
    invalid.sort();
    let mut expected = vec![Field::Age, Field::Cqz, Field::Freq, Field::Lat, Field::QsoDate];
    expected.sort();
    assert_eq!(invalid, expected);

    assert!(invalid_fields(&record(&[("CALL", "W1AW"), ("AGE", "42")])).is_empty());
}

#[test]
fn every_field_is_mapped_exactly_once() {
    let upload_fields: Vec<Field> = UploadService::ALL
        .iter()
        .flat_map(|service| [service.status_field(), service.date_field()])
        .collect();
    let qsl_fields: Vec<Field> = [CARD, EQSL, LOTW]
        .iter()
        .flat_map(|f| [f.sent, f.received, f.sent_date, f.received_date])
        .collect();
    let groups: [&[Field]; 10] = [
        ContactTable::FIELDS,
        ContactedStation::FIELDS,
        LoggingStation::FIELDS,
        ContestTable::FIELDS,
        PropagationTable::FIELDS,
        CardDetails::FIELDS,
        &[Field::QsoDate, Field::TimeOn, Field::QsoDateOff, Field::TimeOff],
        &[Field::Srx, Field::SrxString, Field::Stx, Field::StxString],
        &upload_fields,
        &qsl_fields,
    ];
    let mapped = groups.concat();

    let unique: BTreeSet<Field> = mapped.iter().copied().collect();
    assert_eq!(unique.len(), mapped.len(), "a tag is mapped twice");
    let all: BTreeSet<Field> = Field::ALL.iter().copied().collect();
    assert_eq!(unique, all);
}

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!("call".parse::<Field>(), Ok(Field::Call));
    assert_eq!("MY_LAT".parse::<Field>(), Ok(Field::MyLat));
    assert!("NOT_A_TAG".parse::<Field>().is_err());
    assert_eq!(Field::QslSdate.tag(), "QSLSDATE");
    assert_eq!(Field::EqslQslRdate.to_string(), "EQSL_QSLRDATE");
    assert!(Field::is_app_defined("app_n1mm_points"));
    assert!(!Field::is_app_defined("APPLE"));
    assert!(Field::is_writable_name("APP_N1MM_POINTS"));
    assert!(!Field::is_writable_name("APP_X:Y"));
    assert!(!Field::is_writable_name("APP X"));
}
