mod client;
mod fetch_error;
mod repository_fetcher;
mod repository_record;

pub use client::{Client, DEFAULT_API_URL, USER_AGENT};
pub use fetch_error::FetchError;
pub use repository_fetcher::RepositoryFetcher;
pub use repository_record::RepositoryRecord;
