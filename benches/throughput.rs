use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use qsobridge::{
    config::ConvertConfig,
    document::{adif_to_qsos, qsos_to_adif},
    mapping::{decode_qso, encode_qso},
    record::Record,
};

fn record(i: u64) -> Record {
    [
        ("CALL", format!("K{i}")),
        ("QSO_DATE", "20230615".to_string()),
        ("TIME_ON", "123000".to_string()),
        ("BAND", "20m".to_string()),
        ("FREQ", "14.074".to_string()),
        ("MODE", "FT8".to_string()),
        ("MY_LAT", "N042 30.500".to_string()),
        ("MY_LON", "W071 15.000".to_string()),
        ("TX_PWR", "100".to_string()),
        ("CONTEST_ID", "ARRL-DX-CW".to_string()),
        ("SRX", i.to_string()),
        ("QSL_SENT", "Y".to_string()),
        ("LOTW_QSL_RCVD", "Y".to_string()),
        ("APP_N1MM_POINTS", "3".to_string()),
    ]
    .into_iter()
    .collect()
}

fn log_text(n: u64) -> String {
    let mut text = String::from("bench log <ADIF_VER:5>3.1.1 <EOH>\n");
    for i in 0..n {
        for (name, value) in record(i).iter() {
            text.push_str(&format!("<{}:{}>{} ", name, value.chars().count(), value));
        }
        text.push_str("<EOR>\n");
    }
    text
}

fn bench_decode(c: &mut Criterion) {
    let records: Vec<Record> = (0..10_000).map(record).collect();
    c.bench_function("decode_10k", |b| {
        b.iter(|| {
            for r in &records {
                let _ = decode_qso(r);
            }
        });
    });
}

fn bench_encode(c: &mut Criterion) {
    let qsos: Vec<_> = (0..10_000).map(|i| decode_qso(&record(i))).collect();
    c.bench_function("encode_10k", |b| {
        b.iter(|| {
            for q in &qsos {
                let _ = encode_qso(q);
            }
        });
    });
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_round_trip");
    let config = ConvertConfig::default();
    for n in [100u64, 1_000, 10_000] {
        let text = log_text(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| {
                let adif = adif_to_qsos(text, Utc::now(), &config).expect("decode");
                let _ = qsos_to_adif(&adif).expect("encode");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_document);
criterion_main!(benches);
