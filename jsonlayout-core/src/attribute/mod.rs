//! Attribute catalogues for the two event kinds.
//!
//! Each catalogue is a closed enum declared in output order. A variant carries its
//! default JSON field name, which is distinct from the symbol used in configuration.

mod access;
mod event;
mod set;
#[cfg(test)]
mod tests;

pub use access::AccessAttribute;
pub use event::EventAttribute;
pub use set::AttributeSet;

use crate::conf::ConfigError;

/// A member of an attribute catalogue.
pub trait Attribute: Copy + Eq + Sized + 'static {
    /// Catalogue name used in error messages ("access", "event").
    const KIND: &'static str;

    /// Every attribute of the catalogue, in output order.
    const ALL: &'static [Self];

    /// Position of the attribute within [`Attribute::ALL`].
    fn index(self) -> usize;

    /// Symbolic name accepted in configuration.
    fn symbol(self) -> &'static str;

    /// Default JSON field name, before any override.
    fn field_name(self) -> &'static str;

    /// Attributes enabled when the configuration does not say otherwise.
    fn default_includes() -> AttributeSet<Self>;

    /// Parses a configuration symbol, ignoring case and `_`/`-` separators.
    fn parse_symbol(raw: &str) -> Result<Self, ConfigError> {
        let wanted = fold_symbol(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|attr| fold_symbol(attr.symbol()) == wanted)
            .ok_or_else(|| ConfigError::UnknownAttribute {
                kind: Self::KIND,
                name: raw.to_string(),
            })
    }
}

fn fold_symbol(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
