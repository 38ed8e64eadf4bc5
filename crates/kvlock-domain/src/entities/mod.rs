//! Domain entities

pub mod hold_record;

pub use hold_record::HoldRecord;
