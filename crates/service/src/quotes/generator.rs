//! Random quote composition.
//!
//! A generated quote is an author, two themes and a template drawn
//! uniformly from [`wordlists`](crate::quotes::wordlists). Nothing is kept
//! between calls.

use rand::Rng;

use crate::errors::ServiceError;
use crate::quotes::domain::Quote;
use crate::quotes::repository::QuoteRepository;
use crate::quotes::wordlists::{AUTHORS, TEMPLATES, THEMES};

const THEME1: &str = "{theme1}";
const THEME2: &str = "{theme2}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuote {
    pub author: &'static str,
    pub text: String,
}

/// Compose a quote using `rng` for every draw.
pub fn compose<R: Rng>(rng: &mut R) -> GeneratedQuote {
    compose_with(|len| rng.gen_range(0..len))
}

/// Compose a quote; `draw(n)` must return an index in `0..n`.
///
/// Draw order: author, theme1, theme2, (theme2 again if it equals theme1),
/// template. The second theme is redrawn at most once, so a repeated theme
/// can still come out.
pub fn compose_with<F>(mut draw: F) -> GeneratedQuote
where
    F: FnMut(usize) -> usize,
{
    let author = AUTHORS[draw(AUTHORS.len())];
    let theme1 = THEMES[draw(THEMES.len())];
    let mut theme2 = THEMES[draw(THEMES.len())];
    if theme2 == theme1 && THEMES.len() > 1 {
        theme2 = THEMES[draw(THEMES.len())];
    }
    let template = TEMPLATES[draw(TEMPLATES.len())];

    GeneratedQuote { author, text: fill_template(template, theme1, theme2) }
}

pub fn fill_template(template: &str, theme1: &str, theme2: &str) -> String {
    template.replace(THEME1, theme1).replace(THEME2, theme2)
}

/// Generate a quote and store it through `repo`.
pub async fn generate_and_add<S>(repo: &S) -> Result<Quote, ServiceError>
where
    S: QuoteRepository + ?Sized,
{
    let generated = compose(&mut rand::thread_rng());
    tracing::debug!(author = generated.author, text = %generated.text, "generated quote");
    repo.add(generated.author, &generated.text).await
}
