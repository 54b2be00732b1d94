use serde::{Deserialize, Serialize};

/// One occurrence of a package inside a scanned layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub layer_hash: String,
}

impl Location {
    pub fn new(path: impl Into<String>, layer_hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            layer_hash: layer_hash.into(),
        }
    }
}

/// Package observation as produced by the ecosystem parsers
///
/// Raw observations and canonical (finalized) records share this shape.
/// All string fields are opaque: nothing here validates or re-escapes them,
/// malformed upstream values are carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub version: String,
    pub path: String,
    pub locations: Vec<Location>,
    pub description: String,
    pub licenses: Vec<String>,
    pub cpes: Vec<String>,
    pub purl: String,
}

impl Package {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        package_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            package_type: package_type.into(),
            ..Self::default()
        }
    }

    /// Identity key shared by every observation of the same package:
    /// `name:version:type`
    pub fn identity_key(&self) -> String {
        format!("{}:{}:{}", self.name, self.version, self.package_type)
    }
}
