//! Batch orchestration over a monster collection.
//!
//! Every record gets its own task, but generation work is serialized
//! through a one-permit semaphore, so the model host only ever sees one
//! completion at a time. Output order always matches input order, and
//! the first transport error aborts whatever is still queued.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error::{ForgeError, Result};
use crate::extract::Extractor;
use crate::monster::Monster;
use crate::raw::RawMonster;
use crate::transform;

/// Progress snapshot passed to the batch callback after each record.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Records finished so far, including this one.
    pub completed: usize,
    /// Records in the batch.
    pub total: usize,
    /// Name of the record that just finished.
    pub name: String,
}

/// Transform every record, returning the entities in input order.
pub async fn transform_all(
    extractor: &Extractor,
    records: Vec<RawMonster>,
) -> Result<Vec<Monster>> {
    transform_all_with_progress(extractor, records, |_| {}).await
}

/// Transform every record with a progress callback.
///
/// The callback is invoked once per completed record, in input order.
/// A transport error fails the whole batch and aborts the records that
/// have not started generating yet.
pub async fn transform_all_with_progress<F>(
    extractor: &Extractor,
    records: Vec<RawMonster>,
    mut on_progress: F,
) -> Result<Vec<Monster>>
where
    F: FnMut(BatchProgress),
{
    let total = records.len();
    let semaphore = Arc::new(Semaphore::new(1));

    let mut handles = Vec::with_capacity(total);
    for record in records {
        let extractor = extractor.clone();
        let semaphore = semaphore.clone();
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|err| ForgeError::Other(format!("transform queue closed: {}", err)))?;
            transform::transform_monster(&extractor, &record).await
        }));
    }

    let mut monsters = Vec::with_capacity(total);
    let mut pending = handles.into_iter();
    while let Some(handle) = pending.next() {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                abort_remaining(pending);
                return Err(ForgeError::Other(format!("transform task failed: {}", err)));
            }
        };
        match outcome {
            Ok(monster) => {
                on_progress(BatchProgress {
                    completed: monsters.len() + 1,
                    total,
                    name: monster.name.clone(),
                });
                monsters.push(monster);
            }
            Err(err) => {
                abort_remaining(pending);
                return Err(err);
            }
        }
    }

    Ok(monsters)
}

fn abort_remaining<I>(pending: I)
where
    I: Iterator<Item = JoinHandle<Result<Monster>>>,
{
    for handle in pending {
        handle.abort();
    }
}
