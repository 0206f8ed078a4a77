//! Posts API Client
//!
//! One request per page/search change against the public posts resource.
//! No retry, no debounce, no cancellation; the caller owns the race between
//! overlapping requests.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::models::Post;

/// Page size for offset pagination
pub const POSTS_PER_PAGE: u32 = 10;

const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
/// Response header carrying the total match count
const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// One page of posts plus the page count derived from the header
#[derive(Debug, Clone, PartialEq)]
pub struct PostsFetch {
    pub posts: Vec<Post>,
    pub total_pages: u32,
}

/// `?_page={n}&_limit={size}&q={term}` with the term percent-encoded
pub fn posts_url(page: u32, search: &str) -> String {
    let term = utf8_percent_encode(search, NON_ALPHANUMERIC);
    format!("{POSTS_URL}?_page={page}&_limit={POSTS_PER_PAGE}&q={term}")
}

/// Ceiling division of the total count into pages
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Fetch one page of posts matching the search term
pub async fn fetch_posts(page: u32, search: &str) -> Result<PostsFetch, FetchError> {
    let response = Request::get(&posts_url(page, search))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    // A missing or unparsable count header yields zero pages rather than an error
    let total_count = response
        .headers()
        .get(TOTAL_COUNT_HEADER)
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(0);

    let posts = response
        .json::<Vec<Post>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(PostsFetch {
        posts,
        total_pages: total_pages(total_count, POSTS_PER_PAGE),
    })
}
