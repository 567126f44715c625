//! Batch executor: chunked, strictly sequential request fan-out.
//!
//! The upstream service limits how many device identifiers one request may
//! carry, so multi-device operations are split into fixed-size chunks and
//! issued one network call at a time. Expressed as a pure function over a
//! slice and an async operation, independent of the transport, so it can be
//! unit-tested with a fake operation returning canned payloads.

use std::future::Future;

use serde_json::Value;
use smartblinds_domain::{Result, SmartBlindsError};
use tracing::debug;

/// Maximum device identifiers per request.
///
/// A protocol constant sized to the upstream request limit, not a tunable.
pub const BATCH_SIZE: usize = 7;

/// Split `items` into consecutive chunks of at most `batch_size` elements
/// (original order preserved, last chunk possibly shorter), invoke `op` once
/// per chunk strictly sequentially, and collect the raw per-chunk responses.
///
/// The first chunk error aborts the whole call; results from already
/// completed chunks are discarded. Callers get either every chunk's response
/// or an error, never a partial set.
pub async fn for_each_batch<T, Op, Fut>(
    items: &[T],
    batch_size: usize,
    mut op: Op,
) -> Result<Vec<Value>>
where
    Op: FnMut(&[T]) -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    if batch_size == 0 {
        return Err(SmartBlindsError::Config("batch size must be positive".to_string()));
    }

    let mut responses = Vec::with_capacity(items.len().div_ceil(batch_size));
    for (index, chunk) in items.chunks(batch_size).enumerate() {
        debug!(chunk = index + 1, size = chunk.len(), "executing batch");
        responses.push(op(chunk).await?);
    }

    Ok(responses)
}
