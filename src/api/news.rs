use axum::{Extension, Json, body::Bytes};
use serde_json::Value;

use crate::{
    error::RelayError,
    info,
    newsapi::{Endpoint, NewsApi},
    types::{Category, CategoryRequest, PageRequest, RandomNews},
    utils::{normalize_page, parse_body, require_category},
};

const CATEGORY_PAGE_SIZE: u32 = 10;
const HOME_PAGE_SIZE: u32 = 10;
const TRENDING_PAGE_SIZE: u32 = 20;

/// `POST /fetch_latest` - general top headlines for the requested page.
pub async fn fetch_latest(
    Extension(api): Extension<NewsApi>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: PageRequest = parse_body(&body)?;
    let page = normalize_page(request.pageno);

    info!("Fetching latest news for page {}...", page);
    let query = api.query().category(Category::General.as_str()).page(page);
    let news = api
        .fetch(Endpoint::TopHeadlines, &query)
        .await
        .map_err(RelayError::upstream("Error fetching latest news"))?;

    Ok(Json(news))
}

/// `POST /fetchnewsbycategory` - top headlines of one category, 10 per page.
pub async fn fetch_news_by_category(
    Extension(api): Extension<NewsApi>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: CategoryRequest = parse_body(&body)?;
    let category = require_category(request.category)?;
    let page = normalize_page(request.pageno);

    info!("Fetching {} news for page {}...", category, page);
    let query = api
        .query()
        .category(category)
        .page(page)
        .page_size(CATEGORY_PAGE_SIZE);
    let news = api
        .fetch(Endpoint::TopHeadlines, &query)
        .await
        .map_err(RelayError::upstream("Error fetching news by category"))?;

    Ok(Json(news))
}

/// `GET /HomeLatest` - the ten latest general headlines.
pub async fn home_latest(Extension(api): Extension<NewsApi>) -> Result<Json<Value>, RelayError> {
    info!("Fetching latest news for homepage...");
    let query = api
        .query()
        .category(Category::General.as_str())
        .page_size(HOME_PAGE_SIZE);
    let news = api
        .fetch(Endpoint::TopHeadlines, &query)
        .await
        .map_err(RelayError::upstream("Error fetching homepage news"))?;

    Ok(Json(news))
}

/// `GET /fetch_trending` - the twenty latest general headlines.
pub async fn fetch_trending(
    Extension(api): Extension<NewsApi>,
) -> Result<Json<Value>, RelayError> {
    info!("Fetching trending news...");
    let query = api
        .query()
        .category(Category::General.as_str())
        .page_size(TRENDING_PAGE_SIZE);
    let news = api
        .fetch(Endpoint::TopHeadlines, &query)
        .await
        .map_err(RelayError::upstream("Error fetching trending news"))?;

    Ok(Json(news))
}

/// `POST /fetch_Random` - a shuffled mix of articles across all categories.
///
/// Unlike the other routes, a failure returns the upstream message to the
/// client as `{ "error": "..." }`.
pub async fn fetch_random(
    Extension(api): Extension<NewsApi>,
    body: Bytes,
) -> Result<Json<RandomNews>, RelayError> {
    let request: PageRequest = parse_body(&body)?;
    let page = normalize_page(request.pageno);

    info!("Fetching mixed random news for page {}...", page);
    let news = api.fetch_random(page).await.map_err(RelayError::Aggregate)?;

    Ok(Json(news))
}
