mod format;

pub use format::human_bytes;
