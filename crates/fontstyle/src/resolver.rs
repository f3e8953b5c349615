//! Role resolution: from a text style role to a base font.

use crate::error::StyleError;
use crate::font::FontDescriptor;

/// Resolves a text style role to the base font for the current preferred
/// text size.
///
/// Resolvers are called synchronously, both when a style is assigned and from
/// inside size-change broadcasts, so they must not block.
///
/// Any `Fn(&str) -> Result<FontDescriptor, StyleError>` is a resolver:
///
/// ```rust
/// use fontstyle::{FontDescriptor, FontStyle, StyleError};
///
/// let resolver = |role: &str| match role {
///     "headline" => Ok(FontDescriptor::new("System", 17.0)),
///     other => Err(StyleError::UnknownRole { role: other.to_string() }),
/// };
///
/// let font = FontStyle::new("headline").resolve(&resolver).unwrap();
/// assert_eq!(font.point_size, 17.0);
/// ```
pub trait RoleResolver {
    /// Returns the base font for `role`, or [`StyleError::UnknownRole`].
    fn resolve_role(&self, role: &str) -> Result<FontDescriptor, StyleError>;
}

impl<F> RoleResolver for F
where
    F: Fn(&str) -> Result<FontDescriptor, StyleError>,
{
    fn resolve_role(&self, role: &str) -> Result<FontDescriptor, StyleError> {
        self(role)
    }
}
