use std::marker::PhantomData;

use sqlx::Transaction;

use crate::dao::{DataBase, PoolType};

/// Typed handle over the shared pool; each entity implements its queries on
/// its own `Table<Entity>`.
#[derive(Debug)]
pub struct Table<T> {
    pub pool: PoolType,
    entity: PhantomData<T>,
}

impl<T> Table<T> {
    pub fn new(pool: PoolType) -> Self {
        Table {
            pool,
            entity: PhantomData,
        }
    }

    pub async fn begin(
        &self,
    ) -> Result<Transaction<'static, DataBase>, sqlx::Error> {
        self.pool.begin().await
    }
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Table::new(self.pool.clone())
    }
}
