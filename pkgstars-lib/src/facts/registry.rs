//! Registry snapshots
//!
//! A snapshot is the list of (package name, declared repository URL) pairs the sweep walks
//! over. It is either built in memory or loaded from a checkout of a Julia-style registry:
//! a `Registry.toml` whose `[packages]` table maps each UUID to `{ name, path }`, with a
//! `Package.toml` under each `path` declaring the package's `repo`.

use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::sync::Arc;

const LOG_TARGET: &str = "  registry";

const REGISTRY_FILE: &str = "Registry.toml";
const PACKAGE_FILE: &str = "Package.toml";

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    packages: BTreeMap<String, PackageRef>,
}

#[derive(Debug, Deserialize)]
struct PackageRef {
    name: String,
    path: String,
}

#[derive(Debug, Deserialize)]
struct PackageFile {
    repo: Option<String>,
}

/// One package of a registry together with the repository URL it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    package_name: Arc<str>,
    repo_url: Arc<str>,
}

impl RegistryEntry {
    #[must_use]
    pub fn new(package_name: impl AsRef<str>, repo_url: impl AsRef<str>) -> Self {
        Self {
            package_name: Arc::from(package_name.as_ref()),
            repo_url: Arc::from(repo_url.as_ref()),
        }
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }
}

/// The packages of a registry, in encounter order.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    entries: Vec<RegistryEntry>,
}

impl RegistrySnapshot {
    /// Build a snapshot from `(package name, repository URL)` pairs, keeping their order.
    #[must_use]
    pub fn from_entries<I, N, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, U)>,
        N: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            entries: entries.into_iter().map(|(name, url)| RegistryEntry::new(name, url)).collect(),
        }
    }

    /// Load a snapshot from a registry checkout.
    ///
    /// Packages without a readable `Package.toml` or without a `repo` key are skipped.
    /// Entries are sorted by package name.
    pub fn load(registry_dir: &Utf8Path) -> Result<Self> {
        let registry_path = registry_dir.join(REGISTRY_FILE);
        let text = fs::read_to_string(&registry_path).into_app_err_with(|| format!("reading registry index '{registry_path}'"))?;
        let registry: RegistryFile = toml::from_str(&text).into_app_err_with(|| format!("parsing registry index '{registry_path}'"))?;

        let mut entries = Vec::with_capacity(registry.packages.len());
        for (uuid, package) in registry.packages {
            let package_path = registry_dir.join(&package.path).join(PACKAGE_FILE);
            let text = match fs::read_to_string(&package_path) {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "Skipping '{}' ({uuid}): no {PACKAGE_FILE}", package.name);
                    continue;
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading package file '{package_path}'")),
            };

            let package_file: PackageFile =
                toml::from_str(&text).into_app_err_with(|| format!("parsing package file '{package_path}'"))?;

            match package_file.repo {
                Some(repo) => entries.push(RegistryEntry::new(&package.name, repo)),
                None => log::debug!(target: LOG_TARGET, "Skipping '{}' ({uuid}): no repository declared", package.name),
            }
        }

        entries.sort_by(|a, b| a.package_name.cmp(&b.package_name));
        log::info!(target: LOG_TARGET, "Loaded {} packages from '{registry_dir}'", entries.len());

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
