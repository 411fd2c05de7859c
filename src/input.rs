//! Bounded input reading.

use std::io::Read;

use log::{debug, warn};

use crate::{Error, Result};

/// Hard cap on the number of input bytes accepted from a stream
pub const MAX_INPUT_BYTES: usize = 8 * 1024;

/// Read at most `max_bytes` bytes from `reader`.
///
/// One extra byte is requested so that input of exactly `max_bytes` can be
/// told apart from longer input without buffering the whole stream. Longer
/// input yields [`Error::InputTooLarge`] and the partial buffer is dropped.
/// The reader is not closed.
pub fn read_bounded<R: Read>(reader: R, max_bytes: usize) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(max_bytes.min(MAX_INPUT_BYTES) + 1);
    reader.take(max_bytes as u64 + 1).read_to_end(&mut data)?;

    if data.len() > max_bytes {
        return Err(Error::InputTooLarge { limit: max_bytes });
    }

    if data.is_empty() {
        warn!("input stream was empty");
    } else {
        debug!("read {} input bytes (limit {})", data.len(), max_bytes);
    }
    Ok(data)
}
