//! Wire format of the Homebrew formula API

use brewtrack_core::Formula;
use serde::Deserialize;

/// One formula object as returned by the API.
///
/// Only the fields brewtrack consumes are modeled; serde ignores the rest
/// of the payload.
#[derive(Debug, Deserialize)]
pub struct RawFormula {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub versions: RawVersions,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawVersions {
    #[serde(default)]
    pub stable: Option<String>,
}

impl RawFormula {
    /// Convert into a core record.
    ///
    /// `None` when the mandatory name is missing or empty; such records are
    /// excluded rather than failing the whole fetch.
    pub fn into_formula(self) -> Option<Formula> {
        let name = self.name.filter(|name| !name.is_empty())?;
        Some(Formula {
            name,
            desc: self.desc,
            homepage: self.homepage,
            version: self.versions.stable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_api_shape() {
        let raw: RawFormula = serde_json::from_str(
            r#"{
                "name": "ripgrep",
                "desc": "Search tool",
                "homepage": "https://github.com/BurntSushi/ripgrep",
                "versions": {"stable": "14.1.0", "head": "HEAD"},
                "license": "Unlicense"
            }"#,
        )
        .unwrap();

        let formula = raw.into_formula().unwrap();
        assert_eq!(formula.name, "ripgrep");
        assert_eq!(formula.version.as_deref(), Some("14.1.0"));
        assert_eq!(formula.desc.as_deref(), Some("Search tool"));
    }

    #[test]
    fn missing_version_is_valid() {
        let raw: RawFormula = serde_json::from_str(r#"{"name": "fd"}"#).unwrap();
        let formula = raw.into_formula().unwrap();
        assert!(formula.version.is_none());
    }

    #[test]
    fn nameless_records_are_rejected() {
        let missing: RawFormula = serde_json::from_str(r#"{"desc": "orphan"}"#).unwrap();
        assert!(missing.into_formula().is_none());

        let empty: RawFormula = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(empty.into_formula().is_none());
    }
}
