use core::fmt::{Display, Formatter};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/([^/]+)/([^/]+?)(?:\.git)?$").expect("repository URL pattern is valid")
});

/// Owner and name of a GitHub repository, as declared by a canonical repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    #[must_use]
    pub fn new(owner: impl AsRef<str>, repo: impl AsRef<str>) -> Self {
        Self {
            owner: Arc::from(owner.as_ref()),
            repo: Arc::from(repo.as_ref()),
        }
    }

    /// Extract the owner and repository name from a URL of the form
    /// `http(s)://github.com/<owner>/<repo>[.git]`.
    ///
    /// Returns `None` for anything else: other schemes or hosts, missing segments, or
    /// additional path segments. Captures are returned as written, case included.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let captures = REPO_URL.captures(url)?;
        let owner = captures.get(1)?.as_str();
        let repo = captures.get(2)?.as_str();

        Some(Self::new(owner, repo))
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
