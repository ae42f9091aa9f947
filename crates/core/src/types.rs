/// Record identifiers are assigned by the record store and never reused.
pub type DbId = i64;
