pub mod bundle;
pub mod checkpoint;
pub mod common;
pub mod event;
pub mod log_records;
pub mod registry;
pub mod user_op;
