use serde::{Deserialize, Serialize};

/// A stored quote. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: u64,
    pub author: String,
    pub quote: String,
}

/// Partial update: `None` keeps the current value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotePatch {
    pub author: Option<String>,
    pub quote: Option<String>,
}

impl QuotePatch {
    pub fn author(author: impl Into<String>) -> Self {
        Self { author: Some(author.into()), quote: None }
    }

    pub fn quote(quote: impl Into<String>) -> Self {
        Self { author: None, quote: Some(quote.into()) }
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.quote.is_none()
    }

    /// Overwrite the fields that are present.
    pub fn apply_to(self, target: &mut Quote) {
        if let Some(author) = self.author {
            target.author = author;
        }
        if let Some(quote) = self.quote {
            target.quote = quote;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote { id: 7, author: "Seneca".into(), quote: "Luck is preparation.".into() }
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut q = sample();
        QuotePatch::author("Lucius Annaeus Seneca").apply_to(&mut q);
        assert_eq!(q.author, "Lucius Annaeus Seneca");
        assert_eq!(q.quote, "Luck is preparation.");
        assert_eq!(q.id, 7);

        QuotePatch::quote("We suffer more in imagination.").apply_to(&mut q);
        assert_eq!(q.author, "Lucius Annaeus Seneca");
        assert_eq!(q.quote, "We suffer more in imagination.");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut q = sample();
        let patch = QuotePatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut q);
        assert_eq!(q, sample());
    }

    #[test]
    fn record_wire_shape() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v, serde_json::json!({"id": 7, "author": "Seneca", "quote": "Luck is preparation."}));
    }
}
