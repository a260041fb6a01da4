pub mod ingest;
pub mod meta;
