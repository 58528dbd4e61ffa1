use chrono::NaiveDateTime;

/// Statistics of one repository, as reported by a single API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    name: String,
    owner: String,
    star_count: u64,
    updated_at: NaiveDateTime,
    description: Option<String>,
}

impl RepositoryRecord {
    #[must_use]
    pub const fn new(name: String, owner: String, star_count: u64, updated_at: NaiveDateTime, description: Option<String>) -> Self {
        Self {
            name,
            owner,
            star_count,
            updated_at,
            description,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub const fn star_count(&self) -> u64 {
        self.star_count
    }

    /// Last update time, UTC at second granularity.
    #[must_use]
    pub const fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
