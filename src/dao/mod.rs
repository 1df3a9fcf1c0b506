mod memory;
mod postgre;
mod storage;

pub use self::{
    memory::MemoryStorage,
    postgre::{get_path, DataBase, PoolOption, PoolType, QueryResult},
    storage::{SharedStorage, Storage},
};
