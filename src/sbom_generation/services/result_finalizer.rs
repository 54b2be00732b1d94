use crate::sbom_generation::domain::{Location, Package};
use std::collections::HashMap;

/// Prefix applied to layer hashes of merge-appended locations
const MERGED_LAYER_PREFIX: &str = "sha256:";

/// ResultFinalizer service for deduplicating raw package observations
///
/// Collapses every observation sharing an identity key (`name:version:type`)
/// into one canonical package and orders the result by name, then version.
/// The accumulation state lives in the value itself, so each finalization
/// starts from an empty map.
#[derive(Debug, Default)]
pub struct ResultFinalizer {
    index: HashMap<String, usize>,
    packages: Vec<Package>,
}

impl ResultFinalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalizes a complete observation set in one pass
    ///
    /// # Arguments
    /// * `observations` - Raw package observations in discovery order
    ///
    /// # Returns
    /// Canonical packages sorted by name, ties broken by version
    pub fn finalize<I>(observations: I) -> Vec<Package>
    where
        I: IntoIterator<Item = Package>,
    {
        let mut finalizer = Self::new();
        let mut observed = 0usize;
        for package in observations {
            finalizer.add(package);
            observed += 1;
        }

        let packages = finalizer.finish();
        tracing::info!(
            observed,
            canonical = packages.len(),
            "finalized package observations"
        );
        packages
    }

    /// Records one observation
    ///
    /// The first observation of a key becomes the canonical record. Later
    /// observations only contribute locations: each incoming location that
    /// differs from the last location recorded for the key is appended with
    /// the incoming top-level path and a `sha256:`-prefixed layer hash.
    pub fn add(&mut self, package: Package) {
        let key = package.identity_key();

        let Some(&position) = self.index.get(&key) else {
            self.index.insert(key, self.packages.len());
            self.packages.push(package);
            return;
        };

        let canonical = &mut self.packages[position];
        let last_recorded = canonical.locations.last().cloned();

        let merged: Vec<Location> = package
            .locations
            .iter()
            .filter(|location| last_recorded.as_ref() != Some(*location))
            .map(|location| {
                Location::new(
                    package.path.clone(),
                    format!("{}{}", MERGED_LAYER_PREFIX, location.layer_hash),
                )
            })
            .collect();

        tracing::debug!(
            key = %key,
            appended = merged.len(),
            "merged duplicate package observation"
        );

        canonical.locations.extend(merged);
    }

    /// Number of distinct identity keys recorded so far
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Consumes the finalizer and returns the sorted canonical list
    pub fn finish(self) -> Vec<Package> {
        let mut packages = self.packages;
        packages.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.version.cmp(&b.version))
        });
        packages
    }
}
