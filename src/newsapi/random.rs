use futures::future::try_join_all;
use rand::{Rng, seq::SliceRandom};
use serde_json::Value;

use super::{Endpoint, NewsApi};
use crate::{error::UpstreamError, types::Category, types::RandomNews};

/// Articles requested per category.
pub const ARTICLES_PER_CATEGORY: u32 = 1;

/// Upper bound on the number of articles returned.
pub const MAX_ARTICLES: usize = 20;

impl NewsApi {
    /// Fetches a shuffled sample of articles across every category.
    ///
    /// Each category name is used as a free-text search term against the
    /// "everything" endpoint. All requests run concurrently and the first
    /// failure fails the whole call; no partial results are returned.
    pub async fn fetch_random(&self, page: u32) -> Result<RandomNews, UpstreamError> {
        let categories = shuffled_categories(&mut rand::rng());

        let requests = categories.iter().map(|category| {
            let query = self
                .query()
                .q(category.as_str())
                .page(page)
                .page_size(ARTICLES_PER_CATEGORY);
            async move { self.fetch(Endpoint::Everything, &query).await }
        });
        let responses = try_join_all(requests).await?;

        let articles = mix_articles(responses, &mut rand::rng(), MAX_ARTICLES);
        Ok(RandomNews { articles })
    }
}

/// Returns every category in a uniformly random order.
pub fn shuffled_categories<R: Rng + ?Sized>(rng: &mut R) -> Vec<Category> {
    let mut categories = Category::ALL.to_vec();
    categories.shuffle(rng);
    categories
}

/// Flattens the `articles` of each response, shuffles them and keeps at most
/// `max`.
///
/// Articles are treated as opaque values. A response without an `articles`
/// array contributes nothing.
pub fn mix_articles<R: Rng + ?Sized>(
    responses: Vec<Value>,
    rng: &mut R,
    max: usize,
) -> Vec<Value> {
    let mut articles: Vec<Value> = responses
        .into_iter()
        .flat_map(|mut response| match response.get_mut("articles").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        })
        .collect();

    articles.shuffle(rng);
    articles.truncate(max);
    articles
}
