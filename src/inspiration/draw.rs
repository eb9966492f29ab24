//! Uniform random draw over the (optionally filtered) collection.
//!
//! The draw is a count followed by a single-row range read at a random
//! offset, so the collection is never pulled into memory. Both calls receive
//! the same [`CategoryFilter`]. If the record at the drawn offset is gone by
//! the time it is read, the draw re-counts and tries again up to `retries`
//! times before reporting no item.

use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Mutex;
use tracing::debug;

use super::types::{CategoryFilter, Inspiration};
use crate::error::Result;
use crate::store::InspirationStore;

pub async fn draw_random<S: InspirationStore + ?Sized>(
    store: &S,
    filter: &CategoryFilter,
    retries: u32,
    rng: &Mutex<StdRng>,
) -> Result<Option<Inspiration>> {
    for attempt in 0..=retries {
        let total = store.count(filter).await?;
        if total == 0 {
            debug!(filtered = !filter.is_unfiltered(), "draw on empty collection");
            return Ok(None);
        }

        let offset = pick_offset(rng, total);
        match store.range_read(offset, filter).await? {
            Some(record) => {
                debug!(id = %record.id, offset, total, attempt, "drew inspiration");
                return Ok(Some(record));
            }
            None => {
                debug!(offset, total, attempt, "record vanished between count and read");
            }
        }
    }

    Ok(None)
}

/// Uniform offset in `[0, total)`. `total` must be non-zero.
fn pick_offset(rng: &Mutex<StdRng>, total: u64) -> u64 {
    // The generator state stays valid even if a holder panicked.
    let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    rng.gen_range(0..total)
}
