// crates/gazetteer-core/src/traits.rs
use crate::raw::{Field, Layout};

/// Field access abstraction over the raw source layouts.
///
/// The normalizer is written once against this trait; each layout decides
/// how a semantic [`Field`] maps onto its columns. Implementors must return
/// `""` for any field they do not carry, never fail.
///
/// # Examples
/// ```rust
/// use gazetteer_core::raw::{Field, Layout};
/// use gazetteer_core::traits::FieldSource;
///
/// struct OnlyId(&'static str);
/// impl FieldSource for OnlyId {
///     fn layout(&self) -> Layout { Layout::PositionalV1 }
///     fn field(&self, field: Field) -> &str {
///         if field == Field::Id { self.0 } else { "" }
///     }
/// }
///
/// let record = gazetteer_core::convert::normalize(&OnlyId("99"));
/// assert_eq!(record.id, "99");
/// ```
pub trait FieldSource {
    /// The layout the row was read from. Drives layout-specific heuristics.
    fn layout(&self) -> Layout;

    /// Raw, untrimmed text of `field`.
    fn field(&self, field: Field) -> &str;

    /// Trimmed text of `field`, `None` when empty.
    #[inline]
    fn text(&self, field: Field) -> Option<&str> {
        let value = self.field(field).trim();
        (!value.is_empty()).then_some(value)
    }
}
