use super::identifier_synthesis::PROPERTY_NAMESPACE;
use crate::sbom_generation::domain::{
    Component, ComponentType, Distro, ExternalReference, Property,
};

/// DistroAdapter service turning the host descriptor into a component
pub struct DistroAdapter;

impl DistroAdapter {
    /// Builds the single `operating-system` component for a distro
    ///
    /// External references come only from non-empty URLs, in the order
    /// issue tracker, website, support. The four distro properties are
    /// always present; the codename is not tracked separately and stays
    /// empty.
    pub fn to_component(distro: &Distro) -> Component {
        let mut references = Vec::new();

        if !distro.bug_report_url.is_empty() {
            references.push(ExternalReference {
                url: distro.bug_report_url.clone(),
                reference_type: "issue-tracker".to_string(),
                comment: String::new(),
            });
        }
        if !distro.home_url.is_empty() {
            references.push(ExternalReference {
                url: distro.home_url.clone(),
                reference_type: "website".to_string(),
                comment: String::new(),
            });
        }
        if !distro.support_url.is_empty() {
            references.push(ExternalReference {
                url: distro.support_url.clone(),
                reference_type: "other".to_string(),
                comment: "support".to_string(),
            });
        }

        let properties = vec![
            Property::new(
                format!("{}:distro:id", PROPERTY_NAMESPACE),
                distro.id.clone(),
            ),
            Property::new(
                format!("{}:distro:prettyName", PROPERTY_NAMESPACE),
                distro.pretty_name.clone(),
            ),
            Property::new(
                format!("{}:distro:distributionCodename", PROPERTY_NAMESPACE),
                "",
            ),
            Property::new(
                format!("{}:distro:versionID", PROPERTY_NAMESPACE),
                distro.version_id.clone(),
            ),
        ];

        Component {
            bom_ref: String::new(),
            component_type: ComponentType::OperatingSystem,
            name: distro.id.clone(),
            version: distro.version_id.clone(),
            purl: String::new(),
            description: distro.pretty_name.clone(),
            licenses: None,
            properties,
            external_references: (!references.is_empty()).then_some(references),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpine() -> Distro {
        Distro {
            pretty_name: "Alpine Linux v3.16".to_string(),
            name: "Alpine Linux".to_string(),
            id: "alpine".to_string(),
            version_id: "3.16.2".to_string(),
            home_url: "https://alpinelinux.org/".to_string(),
            bug_report_url: "https://gitlab.alpinelinux.org/alpine/aports/-/issues".to_string(),
            ..Distro::default()
        }
    }

    fn debian() -> Distro {
        Distro {
            pretty_name: "Debian GNU/Linux 11 (bullseye)".to_string(),
            name: "Debian GNU/Linux".to_string(),
            id: "debian".to_string(),
            version: "11 (bullseye)".to_string(),
            version_id: "11".to_string(),
            home_url: "https://www.debian.org/".to_string(),
            support_url: "https://www.debian.org/support".to_string(),
            bug_report_url: "https://bugs.debian.org/".to_string(),
            ..Distro::default()
        }
    }

    #[test]
    fn test_identity_fields() {
        let component = DistroAdapter::to_component(&alpine());

        assert_eq!(component.component_type, ComponentType::OperatingSystem);
        assert_eq!(component.name, "alpine");
        assert_eq!(component.description, "Alpine Linux v3.16");
        assert_eq!(component.bom_ref, "");
    }

    #[test]
    fn test_two_references_without_support_url() {
        let component = DistroAdapter::to_component(&alpine());
        let references = component.external_references.unwrap();

        assert_eq!(references.len(), 2);
        assert_eq!(
            references[0].url,
            "https://gitlab.alpinelinux.org/alpine/aports/-/issues"
        );
        assert_eq!(references[0].reference_type, "issue-tracker");
        assert_eq!(references[1].url, "https://alpinelinux.org/");
        assert_eq!(references[1].reference_type, "website");
    }

    #[test]
    fn test_all_three_references_in_order() {
        let component = DistroAdapter::to_component(&debian());
        let references = component.external_references.unwrap();

        let types: Vec<&str> = references
            .iter()
            .map(|r| r.reference_type.as_str())
            .collect();
        assert_eq!(types, vec!["issue-tracker", "website", "other"]);
        assert_eq!(references[2].comment, "support");
        assert_eq!(references[2].url, "https://www.debian.org/support");
    }

    #[test]
    fn test_no_urls_yields_no_references() {
        let distro = Distro {
            id: "scratch".to_string(),
            ..Distro::default()
        };
        let component = DistroAdapter::to_component(&distro);
        assert_eq!(component.external_references, None);
    }

    #[test]
    fn test_exactly_four_properties() {
        let component = DistroAdapter::to_component(&debian());

        assert_eq!(
            component.properties,
            vec![
                Property::new("diggity:distro:id", "debian"),
                Property::new("diggity:distro:prettyName", "Debian GNU/Linux 11 (bullseye)"),
                Property::new("diggity:distro:distributionCodename", ""),
                Property::new("diggity:distro:versionID", "11"),
            ]
        );
    }
}
