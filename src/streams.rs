//! Decoding of several independent captured streams at once.

#![cfg(feature = "alloc")]

use crate::{event::Event, parser::Parser, prelude::*};

/// Total input size under which parallel decoding is not worth the thread overhead.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Decode a batch of raw byte streams, each with its own fresh [`Parser`](struct.Parser.html).
///
/// Every stream is decoded independently: running status and in-progress messages never leak
/// from one stream into another.
/// The output holds one list of events per input stream, in the same order.
///
/// This function will make use of multiple threads if the `parallel` feature is enabled and the
/// input is large enough.
pub fn decode_streams(streams: &[&[u8]]) -> Vec<Vec<Event>> {
    #[cfg(feature = "parallel")]
    {
        let total: usize = streams.iter().map(|stream| stream.len()).sum();
        if streams.len() > 1 && total >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;

            log_debug!(streams = streams.len(), bytes = total, "decoding streams in parallel");
            return streams
                .par_iter()
                .map(|stream| Parser::new().collect(stream))
                .collect();
        }
    }

    streams
        .iter()
        .map(|stream| Parser::new().collect(stream))
        .collect()
}
