//! Font descriptions exchanged with the platform.
//!
//! - [`FontDescriptor`]: a family, trait set and point size, as returned by a
//!   role resolver or supplied as a family override
//! - [`SymbolicTraits`]: bold/italic/etc. modifier flags
//! - [`ComputedFont`]: the final description handed to an element

use serde::{Deserialize, Deserializer};

bitflags::bitflags! {
    /// Symbolic font traits layered on top of a family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolicTraits: u32 {
        const ITALIC = 1 << 0;
        const BOLD = 1 << 1;
        const EXPANDED = 1 << 5;
        const CONDENSED = 1 << 6;
        const MONOSPACE = 1 << 10;
        const VERTICAL = 1 << 11;
        const UI_OPTIMIZED = 1 << 12;
        const TIGHT_LEADING = 1 << 15;
        const LOOSE_LEADING = 1 << 16;
    }
}

impl Default for SymbolicTraits {
    fn default() -> Self {
        SymbolicTraits::empty()
    }
}

/// A single symbolic trait, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolicTrait {
    Italic,
    Bold,
    Expanded,
    Condensed,
    Monospace,
    Vertical,
    UiOptimized,
    TightLeading,
    LooseLeading,
}

impl From<SymbolicTrait> for SymbolicTraits {
    fn from(value: SymbolicTrait) -> Self {
        match value {
            SymbolicTrait::Italic => SymbolicTraits::ITALIC,
            SymbolicTrait::Bold => SymbolicTraits::BOLD,
            SymbolicTrait::Expanded => SymbolicTraits::EXPANDED,
            SymbolicTrait::Condensed => SymbolicTraits::CONDENSED,
            SymbolicTrait::Monospace => SymbolicTraits::MONOSPACE,
            SymbolicTrait::Vertical => SymbolicTraits::VERTICAL,
            SymbolicTrait::UiOptimized => SymbolicTraits::UI_OPTIMIZED,
            SymbolicTrait::TightLeading => SymbolicTraits::TIGHT_LEADING,
            SymbolicTrait::LooseLeading => SymbolicTraits::LOOSE_LEADING,
        }
    }
}

impl FromIterator<SymbolicTrait> for SymbolicTraits {
    fn from_iter<I: IntoIterator<Item = SymbolicTrait>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SymbolicTraits::empty(), |acc, t| acc | SymbolicTraits::from(t))
    }
}

impl<'de> Deserialize<'de> for SymbolicTraits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<SymbolicTrait>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

/// A font family with traits and a point size.
///
/// Role resolvers return one of these for the current preferred text size.
/// When used as a family override on a [`FontStyle`](crate::FontStyle), only
/// the family and traits matter; the point size is replaced by the size the
/// role resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub traits: SymbolicTraits,
    pub point_size: f32,
}

impl FontDescriptor {
    /// Creates a descriptor with no traits.
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            traits: SymbolicTraits::empty(),
            point_size,
        }
    }

    /// Creates a family-only descriptor, typically used as an override.
    pub fn family(family: impl Into<String>) -> Self {
        Self::new(family, 0.0)
    }

    /// Returns a copy with a different point size.
    pub fn with_size(&self, point_size: f32) -> Self {
        Self {
            point_size,
            ..self.clone()
        }
    }

    /// Returns a copy with its traits replaced.
    pub fn with_traits(&self, traits: SymbolicTraits) -> Self {
        Self {
            traits,
            ..self.clone()
        }
    }
}

/// The fully resolved font for an element.
///
/// This is what [`FontTarget`](crate::FontTarget)s receive. Turning it into a
/// renderable font is up to the element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedFont {
    pub family: String,
    pub traits: SymbolicTraits,
    pub point_size: f32,
}

impl From<FontDescriptor> for ComputedFont {
    fn from(descriptor: FontDescriptor) -> Self {
        Self {
            family: descriptor.family,
            traits: descriptor.traits,
            point_size: descriptor.point_size,
        }
    }
}

impl ComputedFont {
    pub fn is_bold(&self) -> bool {
        self.traits.contains(SymbolicTraits::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.traits.contains(SymbolicTraits::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traits_from_names() {
        let traits: SymbolicTraits = [SymbolicTrait::Bold, SymbolicTrait::Italic]
            .into_iter()
            .collect();
        assert_eq!(traits, SymbolicTraits::BOLD | SymbolicTraits::ITALIC);
    }

    #[test]
    fn test_traits_deserialize_from_yaml_list() {
        let traits: SymbolicTraits = serde_yaml::from_str("[bold, tight_leading]").unwrap();
        assert!(traits.contains(SymbolicTraits::BOLD));
        assert!(traits.contains(SymbolicTraits::TIGHT_LEADING));
        assert!(!traits.contains(SymbolicTraits::ITALIC));
    }

    #[test]
    fn test_traits_deserialize_rejects_unknown_name() {
        let result: Result<SymbolicTraits, _> = serde_yaml::from_str("[heavy]");
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor_with_size_keeps_family_and_traits() {
        let base = FontDescriptor::new("GillSans", 12.0).with_traits(SymbolicTraits::BOLD);
        let resized = base.with_size(20.0);
        assert_eq!(resized.family, "GillSans");
        assert_eq!(resized.traits, SymbolicTraits::BOLD);
        assert_eq!(resized.point_size, 20.0);
    }

    #[test]
    fn test_computed_font_trait_accessors() {
        let font = ComputedFont::from(
            FontDescriptor::new("Avenir", 17.0).with_traits(SymbolicTraits::ITALIC),
        );
        assert!(font.is_italic());
        assert!(!font.is_bold());
    }
}
