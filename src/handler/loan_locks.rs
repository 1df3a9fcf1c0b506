use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per loan id. Holding the guard serializes payment
/// recording for that loan; other loans are unaffected.
#[derive(Debug, Default)]
pub struct LoanLocks {
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl LoanLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, loan_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // drop entries nobody holds or waits on
            locks.retain(|id, lock| {
                *id == loan_id || Arc::strong_count(lock) > 1
            });
            locks.entry(loan_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
