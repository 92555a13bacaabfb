//! The override map driving conditional field replacement.
//!
//! Overlay routines never read the process environment themselves. The
//! binary captures it once into an [`Overrides`] map and passes that in,
//! so the routines stay pure and tests can build override sets directly.

use std::collections::BTreeMap;

/// String-to-string overrides keyed by the manifest field names they replace
/// (e.g. `cloudantDBName`, `ingressHost`). Keys are case-sensitive and used
/// verbatim.
///
/// An empty value counts as absent: setting a variable to `""` leaves the
/// target field untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    values: BTreeMap<String, String>,
}

impl Overrides {
    /// Capture the current process environment as an override map.
    pub fn from_env() -> Self {
        std::env::vars().collect()
    }

    /// Look up an override, treating empty values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|value| !value.is_empty())
    }

    /// Insert a single override.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Overrides {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Overwrite `field` when an override carries a replacement value.
pub(crate) fn overwrite(field: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        *field = value.to_owned();
    }
}
