//! Runtime lookup over the static quantity table.
//!
//! Authoring-time code binds the `pub const` handles directly; these
//! functions serve callers that only have the mnemonic as a string, e.g.
//! configuration files naming the quantities to read.

use crate::error::{QuantityError, Result};
use crate::nanoaod::MNEMONICS;
use crate::quantity::Quantity;

/// Look up a quantity by mnemonic, `None` on a miss.
pub fn get(mnemonic: &str) -> Option<&'static Quantity> {
    MNEMONICS.iter().find(|(m, _)| *m == mnemonic).map(|(_, q)| q)
}

/// Look up a quantity by mnemonic, failing with
/// [`QuantityError::UnknownMnemonic`] on a miss.
pub fn lookup(mnemonic: &str) -> Result<&'static Quantity> {
    get(mnemonic).ok_or_else(|| QuantityError::UnknownMnemonic(mnemonic.to_string()))
}

/// All registered mnemonics, in declaration order.
pub fn mnemonics() -> impl Iterator<Item = &'static str> {
    MNEMONICS.iter().map(|(m, _)| *m)
}

/// Number of registered mnemonics.
pub fn len() -> usize {
    MNEMONICS.len()
}

/// All mnemonics bound to the given column name, in declaration order.
///
/// Distinct mnemonics may share a column, so this returns every match.
pub fn mnemonics_for_column(column: &str) -> Vec<&'static str> {
    MNEMONICS
        .iter()
        .filter(|(_, q)| q.column_name() == column)
        .map(|(m, _)| *m)
        .collect()
}

/// Sorted, deduplicated collection prefixes present in the table
/// (`"Electron"`, `"Jet"`, `"Tau"`, ...). Single-token columns like
/// `"run"` contribute nothing.
pub fn collections() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = MNEMONICS
        .iter()
        .filter_map(|(_, q)| q.column_name().split_once('_'))
        .map(|(c, _)| c)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}
