//! Format-neutral component projection
//!
//! Components are derived per render from canonical packages (and the
//! optional distro). They own no state across renders.

/// CycloneDX component classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Library,
    OperatingSystem,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Library => "library",
            ComponentType::OperatingSystem => "operating-system",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub id: String,
}

/// Namespaced `name = value` pair (`diggity:...`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub url: String,
    pub reference_type: String,
    pub comment: String,
}

/// Output component shared by the CycloneDX renderers
///
/// `licenses` and `external_references` keep the absent/present distinction:
/// `None` means the field is omitted, `Some(vec![])` means it was produced
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub bom_ref: String,
    pub component_type: ComponentType,
    pub name: String,
    pub version: String,
    pub purl: String,
    pub description: String,
    pub licenses: Option<Vec<License>>,
    pub properties: Vec<Property>,
    pub external_references: Option<Vec<ExternalReference>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_as_str() {
        assert_eq!(ComponentType::Library.as_str(), "library");
        assert_eq!(ComponentType::OperatingSystem.as_str(), "operating-system");
        assert_eq!(ComponentType::OperatingSystem.to_string(), "operating-system");
    }
}
