mod parquet_store;

pub use parquet_store::{EVENTS_RECORD, ReadSettings, open_events};
