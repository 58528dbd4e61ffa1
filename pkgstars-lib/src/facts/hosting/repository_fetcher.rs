use super::{FetchError, RepositoryRecord};

/// Source of repository statistics, one repository per call.
pub trait RepositoryFetcher {
    /// Look up `owner/name`, resolving once the lookup has completed or failed.
    fn fetch(&self, owner: &str, name: &str) -> impl Future<Output = Result<RepositoryRecord, FetchError>> + Send;
}
