use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::quotes::domain::{Quote, QuotePatch};

/// Trait abstraction for quote storage.
/// `QuoteStore` is the file-backed implementation; the generator only needs `add`.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn list(&self) -> Vec<Quote>;
    async fn get(&self, id: u64) -> Option<Quote>;
    async fn add(&self, author: &str, quote: &str) -> Result<Quote, ServiceError>;
    async fn update(&self, id: u64, patch: QuotePatch) -> Result<Option<Quote>, ServiceError>;
    async fn delete(&self, id: u64) -> Result<bool, ServiceError>;
}
