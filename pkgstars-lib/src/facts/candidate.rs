use super::RepoSpec;
use core::fmt::{Display, Formatter};
use std::sync::Arc;

/// A registry package paired with the GitHub repository it declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    package_name: Arc<str>,
    repo_spec: RepoSpec,
}

impl Candidate {
    #[must_use]
    pub fn new(package_name: impl AsRef<str>, repo_spec: RepoSpec) -> Self {
        Self {
            package_name: Arc::from(package_name.as_ref()),
            repo_spec,
        }
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        self.repo_spec.owner()
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        self.repo_spec.repo()
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.package_name, self.repo_spec)
    }
}
