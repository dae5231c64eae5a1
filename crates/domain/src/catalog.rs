//! Accepted device model codes.

use serde::Deserialize;

/// Model codes accepted when none are configured.
pub const DEFAULT_MODELS: [&str; 3] = ["ios-xr", "ios-xe", "nx-os"];

/// The set of model codes a [`Device`](crate::device::Device) may declare.
///
/// Matching is exact: `"IOS-XE"` is not the same model as `"ios-xe"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ModelCatalog(Vec<String>);

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS)
    }
}

impl From<Vec<String>> for ModelCatalog {
    fn from(models: Vec<String>) -> Self {
        Self::new(models)
    }
}

impl ModelCatalog {
    /// Build a catalog from any list of model codes.
    ///
    /// Duplicates are dropped, first occurrence wins.
    #[must_use]
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<String> = Vec::new();
        for model in models {
            let model = model.into();
            if !codes.contains(&model) {
                codes.push(model);
            }
        }
        Self(codes)
    }

    /// Whether `model` is one of the accepted codes.
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.0.iter().any(|m| m == model)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_default_vendor_codes() {
        let catalog = ModelCatalog::default();
        assert!(catalog.contains("ios-xr"));
        assert!(catalog.contains("ios-xe"));
        assert!(catalog.contains("nx-os"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn should_reject_unknown_and_differently_cased_codes() {
        let catalog = ModelCatalog::default();
        assert!(!catalog.contains("junos"));
        assert!(!catalog.contains("IOS-XE"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn should_drop_duplicates_when_built() {
        let catalog = ModelCatalog::new(["eos", "junos", "eos"]);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["eos", "junos"]);
    }

    #[test]
    fn should_deserialize_from_plain_list() {
        let catalog: ModelCatalog = serde_json::from_str(r#"["eos", "eos"]"#).unwrap();
        assert!(catalog.contains("eos"));
        assert!(!catalog.contains("nx-os"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn should_report_empty_catalog() {
        assert!(ModelCatalog::new(Vec::<String>::new()).is_empty());
        assert!(!ModelCatalog::default().is_empty());
    }
}
