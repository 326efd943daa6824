use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use qsobridge::{
    mapping::{decode_qso, encode_qso},
    qso::{ContestData, Credit, Qsl, Qso, Station, Upload},
    record::Record,
    types::UploadStatus,
};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

#[test]
fn default_contact_writes_nothing() {
    assert!(encode_qso(&Qso::default()).is_empty());
    assert!(encode_qso(&decode_qso(&Record::new())).is_empty());
}

#[test]
fn booleans_written_only_when_true() {
    let mut qso = Qso { swl: true, ..Qso::default() };
    let out = encode_qso(&qso);
    assert_eq!(out.get("SWL"), Some("Y"));
    assert!(!out.contains("QSO_RANDOM"));

    qso.swl = false;
    assert!(encode_qso(&qso).is_empty());
}

#[test]
fn numbers_use_compact_decimal_text() {
    let qso = Qso {
        freq: 14.074,
        distance_km: 5_800,
        logging_station: Some(Station {
            power: 100.0,
            antenna_elevation: -3,
            ..Station::default()
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out.get("FREQ"), Some("14.074"));
    assert_eq!(out.get("DISTANCE"), Some("5800"));
    assert_eq!(out.get("TX_PWR"), Some("100"));
    assert_eq!(out.get("ANT_EL"), Some("-3"));
    assert!(!out.contains("FREQ_RX"));
    assert!(!out.contains("ANT_AZ"));
}

#[test]
fn coordinates_written_per_station_family() {
    let qso = Qso {
        contacted_station: Some(Station {
            latitude: -33.865,
            longitude: 151.2093,
            ..Station::default()
        }),
        logging_station: Some(Station {
            latitude: 41.75,
            longitude: -72.5,
            ..Station::default()
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out.get("LAT"), Some("S033 51.900"));
    assert_eq!(out.get("LON"), Some("E151 12.558"));
    assert_eq!(out.get("MY_LAT"), Some("N041 45.000"));
    assert_eq!(out.get("MY_LON"), Some("W072 30.000"));
}

#[test]
fn timestamps_split_into_date_and_time() {
    let qso = Qso {
        time_on: Some(Utc.with_ymd_and_hms(2023, 6, 15, 23, 59, 1).unwrap()),
        time_off: Some(Utc.timestamp_opt(0, 0).unwrap()),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out.get("QSO_DATE"), Some("20230615"));
    assert_eq!(out.get("TIME_ON"), Some("235901"));
    assert!(!out.contains("QSO_DATE_OFF"));
    assert!(!out.contains("TIME_OFF"));
}

#[test]
fn serials_written_to_both_slots() {
    let qso = Qso {
        contest: Some(ContestData {
            contest_id: "ARRL-SS-CW".to_string(),
            serial_received: "42".to_string(),
            serial_sent: "7".to_string(),
            ..ContestData::default()
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out.get("CONTEST_ID"), Some("ARRL-SS-CW"));
    assert_eq!(out.get("SRX"), Some("42"));
    assert_eq!(out.get("SRX_STRING"), Some("42"));
    assert_eq!(out.get("STX"), Some("7"));
    assert_eq!(out.get("STX_STRING"), Some("7"));
    assert!(!out.contains("CHECK"));
}

#[test]
fn absent_contest_writes_no_contest_fields() {
    let out = encode_qso(&Qso { band: "20m".to_string(), ..Qso::default() });
    assert_eq!(out, record(&[("BAND", "20m")]));
}

#[test]
fn electronic_qsl_written_to_every_family() {
    let qso = Qso {
        eqsl: Some(Qsl {
            sent_status: "Y".to_string(),
            received_status: "Y".to_string(),
            received_date: Some(Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap()),
            ..Qsl::default()
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(
        out,
        record(&[
            ("EQSL_QSL_SENT", "Y"),
            ("EQSL_QSL_RCVD", "Y"),
            ("EQSL_QSLRDATE", "20230701"),
            ("LOTW_QSL_SENT", "Y"),
            ("LOTW_QSL_RCVD", "Y"),
            ("LOTW_QSLRDATE", "20230701"),
        ])
    );
    assert_eq!(decode_qso(&out).eqsl, qso.eqsl);
}

#[test]
fn card_details_follow_the_card() {
    let qso = Qso {
        card: Some(Qsl {
            sent_status: "Q".to_string(),
            sent_via: "D".to_string(),
            received_message: "TNX".to_string(),
            ..Qsl::default()
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(
        out,
        record(&[("QSL_SENT", "Q"), ("QSL_SENT_VIA", "D"), ("QSLMSG", "TNX")])
    );
}

#[test]
fn upload_status_letters_survive_round_trip() {
    for letter in ["Y", "N", "M"] {
        let input = record(&[("CLUBLOG_QSO_UPLOAD_STATUS", letter)]);
        let out = encode_qso(&decode_qso(&input));
        assert_eq!(out.get("CLUBLOG_QSO_UPLOAD_STATUS"), Some(letter));
    }
}

#[test]
fn unknown_upload_status_is_omitted() {
    let qso = Qso {
        hrdlog: Some(Upload {
            upload_status: UploadStatus::Unknown,
            upload_date: Some(Utc.with_ymd_and_hms(2023, 6, 20, 0, 0, 0).unwrap()),
        }),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out, record(&[("HRDLOG_QSO_UPLOAD_DATE", "20230620")]));
}

#[test]
fn lists_joined_with_commas() {
    let qso = Qso {
        award_submitted: vec!["WAS".to_string(), "DXCC".to_string()],
        credit_granted: vec![
            Credit { credit: "CQ".to_string(), qsl_medium: "CARD".to_string() },
            Credit { credit: "DXCC".to_string(), qsl_medium: String::new() },
        ],
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out.get("AWARD_SUBMITTED"), Some("WAS,DXCC"));
    assert_eq!(out.get("CREDIT_GRANTED"), Some("CQ:CARD,DXCC"));
    assert!(!out.contains("AWARD_GRANTED"));
}

#[test]
fn app_defined_written_back_under_its_name() {
    let qso = Qso {
        app_defined: BTreeMap::from([
            ("app_n1mm_exchange1".to_string(), "5NN".to_string()),
            ("app_empty".to_string(), String::new()),
        ]),
        ..Qso::default()
    };
    let out = encode_qso(&qso);
    assert_eq!(out, record(&[("APP_N1MM_EXCHANGE1", "5NN")]));
    assert_eq!(decode_qso(&out).app_defined.len(), 1);
}

#[test]
fn app_defined_keys_that_cannot_be_tags_are_skipped() {
    let qso = Qso {
        app_defined: BTreeMap::from([
            ("app_x:y".to_string(), "v".to_string()),
            ("app_a b".to_string(), "v".to_string()),
            ("app_<x>".to_string(), "v".to_string()),
            ("call".to_string(), "W1AW".to_string()),
            ("app_ok".to_string(), "1".to_string()),
        ]),
        ..Qso::default()
    };
    assert_eq!(encode_qso(&qso), record(&[("APP_OK", "1")]));
}
