//! The `Quantity` handle: a named reference to a NanoAOD branch.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuantityError, Result};

/// An immutable handle wrapping the literal name of a NanoAOD column.
///
/// Two quantities are equal iff their column names are equal; the handle
/// carries no other state. Entries in the static table are built with the
/// zero-allocation [`Quantity::from_static`] constructor, runtime names go
/// through the validating [`Quantity::new`].
///
/// Serializes as the bare column-name string; deserialization re-validates
/// through the same naming rules as `new`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity {
    column: Cow<'static, str>,
}

impl Quantity {
    /// Build a quantity from a runtime column name.
    ///
    /// Fails if the name is empty or violates the branch-naming convention
    /// (ASCII, leading letter, remainder alphanumeric or `_`).
    pub fn new(column: impl Into<String>) -> Result<Self> {
        let column = column.into();
        validate_column_name(&column)?;
        Ok(Quantity { column: Cow::Owned(column) })
    }

    /// Const constructor for `'static` literals; used by the static table.
    ///
    /// Performs no validation — table-wide convention compliance is asserted
    /// by tests instead.
    pub const fn from_static(column: &'static str) -> Self {
        Quantity { column: Cow::Borrowed(column) }
    }

    /// The wrapped column name, unchanged.
    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// Collection prefix of the column name (`"Tau_pt"` → `"Tau"`).
    ///
    /// Single-token names like `"run"` have no collection.
    pub fn collection(&self) -> Option<&str> {
        self.column.split_once('_').map(|(c, _)| c)
    }

    /// Per-object field of the column name (`"Tau_pt"` → `"pt"`).
    pub fn field(&self) -> Option<&str> {
        self.column.split_once('_').map(|(_, f)| f)
    }
}

/// Check a column name against the NanoAOD branch-naming convention.
pub fn validate_column_name(name: &str) -> Result<()> {
    let mut bytes = name.bytes();
    match bytes.next() {
        None => return Err(QuantityError::EmptyName),
        Some(b) if !b.is_ascii_alphabetic() => {
            return Err(QuantityError::InvalidName {
                name: name.to_string(),
                reason: "must start with an ASCII letter".to_string(),
            });
        }
        Some(_) => {}
    }
    for b in bytes {
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return Err(QuantityError::InvalidName {
                name: name.to_string(),
                reason: format!("contains invalid byte {:?}", b as char),
            });
        }
    }
    Ok(())
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column)
    }
}

impl AsRef<str> for Quantity {
    fn as_ref(&self) -> &str {
        &self.column
    }
}

impl TryFrom<String> for Quantity {
    type Error = QuantityError;

    fn try_from(column: String) -> Result<Self> {
        Quantity::new(column)
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> String {
        q.column.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn round_trip_column_name() {
        let q = Quantity::new("Muon_pt").unwrap();
        assert_eq!(q.column_name(), "Muon_pt");
        assert_eq!(q.to_string(), "Muon_pt");
    }

    #[test]
    fn equality_is_structural() {
        let a = Quantity::new("Muon_pt").unwrap();
        let b = Quantity::from_static("Muon_pt");
        let c = Quantity::new("Muon_eta").unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn owned_and_borrowed_hash_identically() {
        let mut set = HashSet::new();
        set.insert(Quantity::from_static("Jet_pt"));
        assert!(set.contains(&Quantity::new("Jet_pt").unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(Quantity::new("").unwrap_err(), QuantityError::EmptyName);
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(Quantity::new("1pt").is_err());
        assert!(Quantity::new("_pt").is_err());
        assert!(Quantity::new("Tau pt").is_err());
        assert!(Quantity::new("Tau.pt").is_err());
        assert!(Quantity::new("Tau_pt\u{e9}").is_err());
    }

    #[test]
    fn collection_and_field_split() {
        let q = Quantity::from_static("Tau_idDeepTau2017v2p1VSjet");
        assert_eq!(q.collection(), Some("Tau"));
        assert_eq!(q.field(), Some("idDeepTau2017v2p1VSjet"));

        let scalar = Quantity::from_static("run");
        assert_eq!(scalar.collection(), None);
        assert_eq!(scalar.field(), None);
    }

    #[test]
    fn serde_as_bare_string() {
        let q = Quantity::from_static("Tau_pt");
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "\"Tau_pt\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn serde_rejects_invalid_names() {
        assert!(serde_json::from_str::<Quantity>("\"\"").is_err());
        assert!(serde_json::from_str::<Quantity>("\"bad name\"").is_err());
    }
}
