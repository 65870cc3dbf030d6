//! Quote records: the file-backed store, its repository seam and the
//! random quote generator that feeds it.

pub mod domain;
pub mod generator;
pub mod repository;
pub mod store;
pub mod wordlists;

pub use domain::{Quote, QuotePatch};
pub use repository::QuoteRepository;
pub use store::{PersistPolicy, QuoteStore};
