pub use self::{
    path::get_path,
    types::{DataBase, PoolOption, PoolType, QueryResult},
};

mod customer;
mod loan;
mod path;
mod payment;
mod types;
