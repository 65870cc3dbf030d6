//! Service layer for the quote API.
//! - `quotes` owns the collection, id assignment and the random generator.
//! - `storage` holds the JSON file plumbing the store persists through.
//! - Errors are typed; "not found" is an `Option`, never an error.

pub mod errors;
pub mod storage;
pub mod quotes;
#[cfg(test)]
pub mod test_support;
