pub mod envelope;
pub mod quotes;
