//! SBOM read model for query operations

use crate::sbom_generation::domain::{Component, Distro, Package};

/// Main read model handed to every formatter
///
/// Formatters derive their document from this view and never mutate it.
/// Serial numbers, namespaces and timestamps are not part of the view; each
/// render draws its own.
#[derive(Debug, Clone, Default)]
pub struct SbomReadModel {
    /// Image reference or directory that was scanned
    pub source: String,
    /// Canonical packages, sorted by name then version
    pub packages: Vec<Package>,
    /// Host distribution, if any
    pub distro: Option<Distro>,
    /// Component graph: operating-system component first, then one library
    /// component per canonical package
    pub components: Vec<Component>,
}

impl SbomReadModel {
    /// Packages re-sorted by name for the SPDX documents
    ///
    /// The sort is stable, so packages sharing a name keep their canonical
    /// version order.
    pub fn packages_by_name(&self) -> Vec<&Package> {
        let mut packages: Vec<&Package> = self.packages.iter().collect();
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_by_name_is_stable() {
        let model = SbomReadModel {
            packages: vec![
                Package::new("zlib", "1.2.12", "apk"),
                Package::new("musl", "1.2.2", "apk"),
                Package::new("musl", "1.2.3", "apk"),
            ],
            ..SbomReadModel::default()
        };

        let sorted: Vec<(&str, &str)> = model
            .packages_by_name()
            .iter()
            .map(|p| (p.name.as_str(), p.version.as_str()))
            .collect();

        assert_eq!(
            sorted,
            vec![("musl", "1.2.2"), ("musl", "1.2.3"), ("zlib", "1.2.12")]
        );
    }
}
