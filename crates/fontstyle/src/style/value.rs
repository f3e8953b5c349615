//! The `FontStyle` value type.

use super::size::SizeTransform;
use crate::error::StyleError;
use crate::font::{ComputedFont, FontDescriptor, SymbolicTraits};
use crate::resolver::RoleResolver;

/// A font described as a text style role plus modifiers.
///
/// A `FontStyle` is an immutable value. Two styles are equal when all of their
/// fields are equal, with the caveat that a [`SizeTransform::Custom`] size
/// never compares equal (see [`SizeTransform`]).
///
/// # Example
///
/// ```rust
/// use fontstyle::{FontDescriptor, FontStyle, SizeTransform, SymbolicTraits};
///
/// let style = FontStyle::new("headline")
///     .family(FontDescriptor::family("GillSans"))
///     .traits(SymbolicTraits::BOLD | SymbolicTraits::ITALIC)
///     .size(SizeTransform::Scale(1.5));
///
/// assert_eq!(style.role(), "headline");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    role: String,
    family: Option<FontDescriptor>,
    traits: SymbolicTraits,
    size: SizeTransform,
}

impl FontStyle {
    /// Creates a style for `role` with no overrides and a zero size offset.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            family: None,
            traits: SymbolicTraits::empty(),
            size: SizeTransform::default(),
        }
    }

    /// Replaces the family the role resolves to. The resolved size is kept.
    pub fn family(mut self, family: FontDescriptor) -> Self {
        self.family = Some(family);
        self
    }

    /// Sets symbolic traits. An empty set leaves the active family's traits alone.
    pub fn traits(mut self, traits: SymbolicTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Sets how the resolved size becomes the final point size.
    pub fn size(mut self, size: SizeTransform) -> Self {
        self.size = size;
        self
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn family_override(&self) -> Option<&FontDescriptor> {
        self.family.as_ref()
    }

    pub fn symbolic_traits(&self) -> SymbolicTraits {
        self.traits
    }

    pub fn size_transform(&self) -> &SizeTransform {
        &self.size
    }

    /// Resolves the style to a concrete font description.
    ///
    /// The steps run in a fixed order:
    ///
    /// 1. The role is resolved to a base descriptor.
    /// 2. A family override replaces the family, keeping the resolved size.
    /// 3. Non-empty traits replace the active family's traits.
    /// 4. The size transform is applied to the resulting size.
    ///
    /// Fails with [`StyleError::UnknownRole`] when the resolver doesn't know
    /// the role.
    pub fn resolve<R>(&self, resolver: &R) -> Result<ComputedFont, StyleError>
    where
        R: RoleResolver + ?Sized,
    {
        let mut descriptor = resolver.resolve_role(&self.role)?;

        if let Some(family) = &self.family {
            descriptor = family.with_size(descriptor.point_size);
        }
        if !self.traits.is_empty() {
            descriptor = descriptor.with_traits(self.traits);
        }
        descriptor.point_size = self.size.apply(descriptor.point_size);

        Ok(descriptor.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(role: &str) -> Result<FontDescriptor, StyleError> {
        match role {
            "headline" => Ok(FontDescriptor::new("SF Pro Text", 17.0)
                .with_traits(SymbolicTraits::BOLD)),
            "body" => Ok(FontDescriptor::new("SF Pro Text", 20.0)),
            other => Err(StyleError::unknown_role(other)),
        }
    }

    #[test]
    fn test_resolve_plain_role() {
        let font = FontStyle::new("headline").resolve(&resolver).unwrap();
        assert_eq!(font.family, "SF Pro Text");
        assert_eq!(font.point_size, 17.0);
        assert!(font.is_bold());
    }

    #[test]
    fn test_resolve_unknown_role_propagates() {
        let err = FontStyle::new("display").resolve(&resolver).unwrap_err();
        assert!(matches!(err, StyleError::UnknownRole { role } if role == "display"));
    }

    #[test]
    fn test_family_override_keeps_resolved_size() {
        let style = FontStyle::new("body").family(FontDescriptor::new("GillSans", 48.0));
        let font = style.resolve(&resolver).unwrap();
        assert_eq!(font.family, "GillSans");
        assert_eq!(font.point_size, 20.0);
    }

    #[test]
    fn test_scale_applies_after_family_override() {
        let style = FontStyle::new("body")
            .family(FontDescriptor::new("GillSans", 9.0))
            .size(SizeTransform::Scale(2.0));
        assert_eq!(style.resolve(&resolver).unwrap().point_size, 40.0);
    }

    #[test]
    fn test_traits_replace_active_family_traits() {
        let style = FontStyle::new("headline").traits(SymbolicTraits::ITALIC);
        let font = style.resolve(&resolver).unwrap();
        assert!(font.is_italic());
        assert!(!font.is_bold());
    }

    #[test]
    fn test_empty_traits_leave_family_traits() {
        let style = FontStyle::new("headline").family(
            FontDescriptor::family("Avenir").with_traits(SymbolicTraits::CONDENSED),
        );
        let font = style.resolve(&resolver).unwrap();
        assert_eq!(font.traits, SymbolicTraits::CONDENSED);
    }

    #[test]
    fn test_absolute_ignores_resolved_size() {
        let style = FontStyle::new("headline").size(SizeTransform::Absolute(11.0));
        assert_eq!(style.resolve(&resolver).unwrap().point_size, 11.0);
    }

    #[test]
    fn test_custom_receives_final_pre_transform_size() {
        let style = FontStyle::new("body")
            .family(FontDescriptor::new("Menlo", 5.0))
            .size(SizeTransform::custom(|size| size - 4.0));
        assert_eq!(style.resolve(&resolver).unwrap().point_size, 16.0);
    }

    #[test]
    fn test_equal_styles() {
        let a = FontStyle::new("body")
            .traits(SymbolicTraits::BOLD)
            .size(SizeTransform::Relative(2.0));
        let b = FontStyle::new("body")
            .traits(SymbolicTraits::BOLD)
            .size(SizeTransform::Relative(2.0));
        assert_eq!(a, b);
        assert_ne!(a, b.clone().size(SizeTransform::Relative(3.0)));
        assert_ne!(a, FontStyle::new("headline").size(SizeTransform::Relative(2.0)));
    }

    #[test]
    fn test_custom_styles_never_equal() {
        let a = FontStyle::new("body").size(SizeTransform::custom(|s| s));
        assert_ne!(a, a.clone());
        assert_ne!(
            FontStyle::new("body").size(SizeTransform::custom(|s| s)),
            FontStyle::new("body").size(SizeTransform::custom(|s| s))
        );
    }
}
