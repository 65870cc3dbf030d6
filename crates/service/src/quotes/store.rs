use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::errors::ServiceError;
use crate::quotes::domain::{Quote, QuotePatch};
use crate::quotes::repository::QuoteRepository;
use crate::storage::json_file::{JsonListFile, Loaded};

/// How a failed file write after a mutation is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistPolicy {
    /// Log the error and keep the in-memory change. A crash before the next
    /// successful write loses it.
    #[default]
    BestEffort,
    /// Return the error and leave the collection as it was before the call.
    Strict,
}

impl PersistPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::BestEffort }
    }
}

/// File-backed quote collection.
///
/// The whole collection lives in memory behind one lock and is rewritten to
/// disk after every successful mutation. Writers hold the lock across the
/// file write, so mutations and rewrites never interleave.
pub struct QuoteStore {
    quotes: RwLock<Vec<Quote>>,
    file: JsonListFile<Quote>,
    policy: PersistPolicy,
}

impl QuoteStore {
    /// Open the store with best-effort persistence.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        Self::open_with_policy(path, PersistPolicy::default()).await
    }

    /// Load the collection from `path`, creating an empty file if none exists.
    ///
    /// An unreadable or malformed file is logged and treated as empty. It is
    /// left in place and gets overwritten by the next mutation.
    pub async fn open_with_policy<P: Into<PathBuf>>(
        path: P,
        policy: PersistPolicy,
    ) -> Result<Arc<Self>, ServiceError> {
        let file = JsonListFile::<Quote>::new(path);
        let quotes = match file.load().await {
            Loaded::Missing => {
                file.save(&[]).await?;
                info!(path = %file.path().display(), "created empty quote store");
                Vec::new()
            }
            Loaded::Records(records) => match check_loaded(&records) {
                Ok(()) => records,
                Err(reason) => {
                    warn!(path = %file.path().display(), %reason, "quote store has invalid records; starting with an empty list");
                    Vec::new()
                }
            },
            Loaded::Unreadable(reason) => {
                warn!(path = %file.path().display(), %reason, "quote store is empty or not a JSON list; starting with an empty list");
                Vec::new()
            }
        };
        info!(path = %file.path().display(), count = quotes.len(), ?policy, "quote store loaded");

        Ok(Arc::new(Self { quotes: RwLock::new(quotes), file, policy }))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn policy(&self) -> PersistPolicy {
        self.policy
    }

    /// All quotes in insertion order.
    pub async fn get_all(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    pub async fn get_by_id(&self, id: u64) -> Option<Quote> {
        let quotes = self.quotes.read().await;
        quotes.iter().find(|q| q.id == id).cloned()
    }

    /// Append a new quote with the next id. Both fields must be non-empty.
    pub async fn add(&self, author: &str, quote: &str) -> Result<Quote, ServiceError> {
        if author.is_empty() {
            return Err(ServiceError::missing_field("author"));
        }
        if quote.is_empty() {
            return Err(ServiceError::missing_field("quote"));
        }

        let mut quotes = self.quotes.write().await;
        let created = Quote { id: next_id(&quotes), author: author.to_string(), quote: quote.to_string() };
        let mut staged = quotes.clone();
        staged.push(created.clone());
        self.commit(&mut quotes, staged).await?;
        debug!(id = created.id, "quote added");
        Ok(created)
    }

    /// Apply `patch` to the quote with `id`. `None` when no such quote exists.
    pub async fn update(&self, id: u64, patch: QuotePatch) -> Result<Option<Quote>, ServiceError> {
        let mut quotes = self.quotes.write().await;
        let Some(pos) = quotes.iter().position(|q| q.id == id) else {
            return Ok(None);
        };

        let mut staged = quotes.clone();
        patch.apply_to(&mut staged[pos]);
        let updated = staged[pos].clone();
        self.commit(&mut quotes, staged).await?;
        debug!(id, "quote updated");
        Ok(Some(updated))
    }

    /// Remove the quote with `id`; returns whether one was removed.
    /// Nothing is written when the id is unknown.
    pub async fn delete(&self, id: u64) -> Result<bool, ServiceError> {
        let mut quotes = self.quotes.write().await;
        if !quotes.iter().any(|q| q.id == id) {
            return Ok(false);
        }

        let staged: Vec<Quote> = quotes.iter().filter(|q| q.id != id).cloned().collect();
        self.commit(&mut quotes, staged).await?;
        debug!(id, "quote deleted");
        Ok(true)
    }

    /// Write `staged` to disk and make it the current collection.
    async fn commit(&self, current: &mut Vec<Quote>, staged: Vec<Quote>) -> Result<(), ServiceError> {
        match self.file.save(&staged).await {
            Ok(()) => {
                *current = staged;
                Ok(())
            }
            Err(e) => match self.policy {
                PersistPolicy::BestEffort => {
                    error!(path = %self.file.path().display(), error = %e, "failed to save quotes; keeping in-memory change");
                    *current = staged;
                    Ok(())
                }
                PersistPolicy::Strict => {
                    error!(path = %self.file.path().display(), error = %e, "failed to save quotes; change discarded");
                    Err(e)
                }
            },
        }
    }
}

fn next_id(quotes: &[Quote]) -> u64 {
    quotes.iter().map(|q| q.id).max().unwrap_or(0) + 1
}

/// Ids must be positive and unique for the file to be trusted.
fn check_loaded(quotes: &[Quote]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(quotes.len());
    for q in quotes {
        if q.id == 0 {
            return Err("quote id must be a positive integer".into());
        }
        if !seen.insert(q.id) {
            return Err(format!("duplicate quote id {}", q.id));
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl QuoteRepository for QuoteStore {
    async fn list(&self) -> Vec<Quote> { self.get_all().await }
    async fn get(&self, id: u64) -> Option<Quote> { self.get_by_id(id).await }
    async fn add(&self, author: &str, quote: &str) -> Result<Quote, ServiceError> { self.add(author, quote).await }
    async fn update(&self, id: u64, patch: QuotePatch) -> Result<Option<Quote>, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: u64) -> Result<bool, ServiceError> { self.delete(id).await }
}
