//! Deletion. Removing an id that does not exist is a successful no-op.

use tracing::{debug, info};

use crate::error::Result;
use crate::store::InspirationStore;

pub async fn delete_inspiration<S: InspirationStore + ?Sized>(store: &S, id: &str) -> Result<()> {
    let removed = store.delete(id).await?;
    if removed == 0 {
        debug!(id, "delete matched nothing");
    } else {
        info!(id, removed, "inspiration deleted");
    }
    Ok(())
}
