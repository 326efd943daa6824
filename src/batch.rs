//! Order-preserving parallel conversion.
//!
//! Records are independent, so a batch is cut into chunks that run on
//! tokio's blocking pool. Results are joined back in input order.

use tokio::task;
use tracing::trace;

use crate::{
    adi::{reader::AdiReader, RecordSource},
    config::ConvertConfig,
    document::header_for,
    error::ConvertResult,
    mapping::{decode_qso, encode_qso},
    qso::{Adif, Qso},
    record::Record,
    types::Timestamp,
};

/// Decodes `records` in parallel, keeping their order.
pub async fn decode_records(records: Vec<Record>, config: &ConvertConfig) -> ConvertResult<Vec<Qso>> {
    run_chunked(records, config.batch_chunk_size, |record: Record| decode_qso(&record)).await
}

/// Encodes `qsos` in parallel, keeping their order.
pub async fn encode_qsos(qsos: Vec<Qso>, config: &ConvertConfig) -> ConvertResult<Vec<Record>> {
    run_chunked(qsos, config.batch_chunk_size, |qso: Qso| encode_qso(&qso)).await
}

/// Tokenizes `text` on the caller's task, then decodes records in parallel.
pub async fn adif_to_qsos(
    text: &str,
    created: Timestamp,
    config: &ConvertConfig,
) -> ConvertResult<Adif> {
    let mut reader = AdiReader::new(text);
    let mut records = Vec::new();
    while let Some(record) = reader.next_record()? {
        records.push(record);
    }
    let qsos = decode_records(records, config).await?;
    Ok(Adif {
        header: Some(header_for(config, created)),
        qsos,
    })
}

async fn run_chunked<I, O>(items: Vec<I>, chunk_size: usize, convert: fn(I) -> O) -> ConvertResult<Vec<O>>
where
    I: Send + 'static,
    O: Send + 'static,
{
    let total = items.len();
    let chunk_size = chunk_size.max(1);
    let mut items = items.into_iter().peekable();
    let mut workers = Vec::with_capacity(total.div_ceil(chunk_size));
    while items.peek().is_some() {
        let chunk: Vec<I> = items.by_ref().take(chunk_size).collect();
        workers.push(task::spawn_blocking(move || {
            chunk.into_iter().map(convert).collect::<Vec<O>>()
        }));
    }

    let mut out = Vec::with_capacity(total);
    for (idx, worker) in workers.into_iter().enumerate() {
        let converted = worker.await?;
        trace!(chunk = idx, len = converted.len(), "chunk converted");
        out.extend(converted);
    }
    Ok(out)
}
