// Adapters layer: concrete implementations for external systems (storage, csv, http).

pub mod csv_codec;
pub mod openrouter;
pub mod storage;
