use crate::sbom_generation::domain::{Component, ComponentType, License, Package, Property};
use std::path::MAIN_SEPARATOR_STR;

/// Namespace shared by every property this tool emits
pub const PROPERTY_NAMESPACE: &str = "diggity";

const PACKAGE_ID_QUERY: &str = "?package-id=";

/// IdentifierSynthesis service deriving presentation fields from a package
///
/// Every function here is pure and infallible; package strings are treated
/// as opaque and concatenated without re-encoding.
pub struct IdentifierSynthesis;

impl IdentifierSynthesis {
    /// Document-unique cross reference: `purl + "?package-id=" + id`
    ///
    /// Applied verbatim even for empty fields or a PURL that already carries
    /// a query string.
    pub fn bom_ref(package: &Package) -> String {
        format!("{}{}{}", package.purl, PACKAGE_ID_QUERY, package.id)
    }

    /// Builds the property bag in its fixed order
    ///
    /// 1. `diggity:package:type`
    /// 2. one `diggity:cpe23` per CPE
    /// 3. `diggity:location:<i>:layerHash` then `diggity:location:<i>:path`
    ///    for each location
    ///
    /// Location indices are positional, so the order of `locations` is part
    /// of the output contract.
    pub fn properties(package: &Package) -> Vec<Property> {
        let mut properties =
            Vec::with_capacity(1 + package.cpes.len() + package.locations.len() * 2);

        properties.push(Property::new(
            format!("{}:package:type", PROPERTY_NAMESPACE),
            package.package_type.clone(),
        ));

        for cpe in &package.cpes {
            properties.push(Property::new(
                format!("{}:cpe23", PROPERTY_NAMESPACE),
                cpe.clone(),
            ));
        }

        for (index, location) in package.locations.iter().enumerate() {
            properties.push(Property::new(
                format!("{}:location:{}:layerHash", PROPERTY_NAMESPACE, index),
                location.layer_hash.clone(),
            ));
            properties.push(Property::new(
                format!("{}:location:{}:path", PROPERTY_NAMESPACE, index),
                platform_path(&location.path),
            ));
        }

        properties
    }

    /// License records in original order, `None` when the package has none
    pub fn licenses(package: &Package) -> Option<Vec<License>> {
        if package.licenses.is_empty() {
            return None;
        }

        Some(
            package
                .licenses
                .iter()
                .map(|id| License { id: id.clone() })
                .collect(),
        )
    }

    /// Projects a canonical package into a `library` component
    pub fn to_component(package: &Package) -> Component {
        Component {
            bom_ref: Self::bom_ref(package),
            component_type: ComponentType::Library,
            name: package.name.clone(),
            version: package.version.clone(),
            purl: package.purl.clone(),
            description: package.description.clone(),
            licenses: Self::licenses(package),
            properties: Self::properties(package),
            external_references: None,
        }
    }
}

/// Renders a slash-separated path with the platform separator
fn platform_path(path: &str) -> String {
    if MAIN_SEPARATOR_STR == "/" {
        path.to_string()
    } else {
        path.replace('/', MAIN_SEPARATOR_STR)
    }
}
