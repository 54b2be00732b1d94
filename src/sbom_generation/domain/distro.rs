use serde::{Deserialize, Serialize};

/// Host operating system descriptor, at most one per scan
///
/// Field names follow the `os-release` keys the descriptor parser reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Distro {
    #[serde(rename = "prettyName")]
    pub pretty_name: String,
    pub name: String,
    pub id: String,
    #[serde(rename = "idLike")]
    pub id_like: Vec<String>,
    pub version: String,
    #[serde(rename = "versionID")]
    pub version_id: String,
    #[serde(rename = "homeURL")]
    pub home_url: String,
    #[serde(rename = "supportURL")]
    pub support_url: String,
    #[serde(rename = "bugReportURL")]
    pub bug_report_url: String,
}
