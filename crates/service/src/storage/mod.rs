//! Storage abstractions for service layer
//!
//! Contains the file-backed JSON list used by the quote store. Kept generic
//! over the record type so it can be exercised without quote semantics.

pub mod json_file;
