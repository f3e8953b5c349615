//! Preferred text size categories and the role tables that map them to sizes.
//!
//! A [`TypeScale`] lists, for each text style role, a family, default traits
//! and one point size per [`ContentSizeCategory`]. The built-in
//! [`TypeScale::system`] table covers the standard roles; custom tables can be
//! built in code or loaded from YAML:
//!
//! ```yaml
//! roles:
//!   - name: headline
//!     family: SF Pro Text
//!     traits: [bold]
//!     sizes: [14, 15, 16, 17, 19, 21, 23, 28, 33, 40, 47, 53]
//! ```
//!
//! `sizes` has one entry per category, smallest first, in the order of
//! [`ContentSizeCategory::ALL`].

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::StyleError;
use crate::font::{FontDescriptor, SymbolicTraits};

/// The user's preferred text size setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    /// Every category, smallest first.
    pub const ALL: [ContentSizeCategory; 12] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Position of this category in [`ContentSizeCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_accessibility(self) -> bool {
        self >= ContentSizeCategory::AccessibilityMedium
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentSizeCategory::ExtraSmall => "extra_small",
            ContentSizeCategory::Small => "small",
            ContentSizeCategory::Medium => "medium",
            ContentSizeCategory::Large => "large",
            ContentSizeCategory::ExtraLarge => "extra_large",
            ContentSizeCategory::ExtraExtraLarge => "extra_extra_large",
            ContentSizeCategory::ExtraExtraExtraLarge => "extra_extra_extra_large",
            ContentSizeCategory::AccessibilityMedium => "accessibility_medium",
            ContentSizeCategory::AccessibilityLarge => "accessibility_large",
            ContentSizeCategory::AccessibilityExtraLarge => "accessibility_extra_large",
            ContentSizeCategory::AccessibilityExtraExtraLarge => "accessibility_extra_extra_large",
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge => {
                "accessibility_extra_extra_extra_large"
            }
        }
    }
}

impl fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATEGORY_COUNT: usize = ContentSizeCategory::ALL.len();

/// Family, traits and per-category sizes for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleScale {
    pub family: String,
    pub traits: SymbolicTraits,
    pub sizes: [f32; CATEGORY_COUNT],
}

impl RoleScale {
    pub fn size(&self, category: ContentSizeCategory) -> f32 {
        self.sizes[category.index()]
    }
}

/// A role table for every preferred text size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeScale {
    roles: HashMap<String, RoleScale>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeScaleFile {
    roles: Vec<RoleEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoleEntry {
    name: String,
    family: String,
    #[serde(default)]
    traits: SymbolicTraits,
    sizes: Vec<f32>,
}

const TEXT: &str = "SF Pro Text";
const DISPLAY: &str = "SF Pro Display";
const PLAIN: SymbolicTraits = SymbolicTraits::empty();

#[rustfmt::skip]
const SYSTEM_ROLES: &[(&str, &str, SymbolicTraits, [f32; CATEGORY_COUNT])] = &[
    ("largeTitle",  DISPLAY, PLAIN, [31.0, 32.0, 33.0, 34.0, 36.0, 38.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0]),
    ("title1",      DISPLAY, PLAIN, [25.0, 26.0, 27.0, 28.0, 30.0, 32.0, 34.0, 38.0, 43.0, 48.0, 53.0, 58.0]),
    ("title2",      DISPLAY, PLAIN, [19.0, 20.0, 21.0, 22.0, 24.0, 26.0, 28.0, 34.0, 39.0, 44.0, 50.0, 56.0]),
    ("title3",      DISPLAY, PLAIN, [17.0, 18.0, 19.0, 20.0, 22.0, 24.0, 26.0, 31.0, 37.0, 43.0, 49.0, 55.0]),
    ("headline",    TEXT,    SymbolicTraits::BOLD, [14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0]),
    ("body",        TEXT,    PLAIN, [14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0]),
    ("callout",     TEXT,    PLAIN, [13.0, 14.0, 15.0, 16.0, 18.0, 20.0, 22.0, 26.0, 32.0, 38.0, 44.0, 51.0]),
    ("subheadline", TEXT,    PLAIN, [12.0, 13.0, 14.0, 15.0, 17.0, 19.0, 21.0, 25.0, 30.0, 36.0, 42.0, 49.0]),
    ("footnote",    TEXT,    PLAIN, [12.0, 12.0, 12.0, 13.0, 15.0, 17.0, 19.0, 23.0, 27.0, 33.0, 38.0, 44.0]),
    ("caption1",    TEXT,    PLAIN, [11.0, 11.0, 11.0, 12.0, 14.0, 16.0, 18.0, 22.0, 26.0, 32.0, 37.0, 43.0]),
    ("caption2",    TEXT,    PLAIN, [11.0, 11.0, 11.0, 11.0, 13.0, 15.0, 17.0, 20.0, 24.0, 29.0, 34.0, 40.0]),
];

static SYSTEM_SCALE: Lazy<TypeScale> = Lazy::new(|| {
    SYSTEM_ROLES
        .iter()
        .fold(TypeScale::new(), |scale, (name, family, traits, sizes)| {
            scale.add(name, *family, *traits, *sizes)
        })
});

impl TypeScale {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for the standard text style roles.
    pub fn system() -> &'static TypeScale {
        &SYSTEM_SCALE
    }

    /// Adds or replaces a role, returning the updated table for chaining.
    pub fn add(
        mut self,
        name: &str,
        family: impl Into<String>,
        traits: SymbolicTraits,
        sizes: [f32; CATEGORY_COUNT],
    ) -> Self {
        self.roles.insert(
            name.to_string(),
            RoleScale {
                family: family.into(),
                traits,
                sizes,
            },
        );
        self
    }

    /// Parses and validates a YAML role table.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        let file: TypeScaleFile = serde_yaml::from_str(yaml)?;
        let mut roles = HashMap::with_capacity(file.roles.len());

        for entry in file.roles {
            let sizes: [f32; CATEGORY_COUNT] =
                entry.sizes.as_slice().try_into().map_err(|_| {
                    StyleError::invalid_scale(format!(
                        "role '{}' has {} sizes, expected {}",
                        entry.name,
                        entry.sizes.len(),
                        CATEGORY_COUNT
                    ))
                })?;
            if roles.contains_key(&entry.name) {
                return Err(StyleError::invalid_scale(format!(
                    "role '{}' is defined more than once",
                    entry.name
                )));
            }
            roles.insert(
                entry.name,
                RoleScale {
                    family: entry.family,
                    traits: entry.traits,
                    sizes,
                },
            );
        }

        let scale = Self { roles };
        scale.validate()?;
        tracing::debug!(roles = scale.len(), "loaded type scale");
        Ok(scale)
    }

    /// Reads a YAML role table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Checks that the table is usable.
    ///
    /// Fails when the table is empty, a family name is blank, or a size is not
    /// a positive finite number.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.roles.is_empty() {
            return Err(StyleError::invalid_scale("no roles defined"));
        }
        for (name, role) in &self.roles {
            if role.family.trim().is_empty() {
                return Err(StyleError::invalid_scale(format!(
                    "role '{}' has an empty family",
                    name
                )));
            }
            if let Some(size) = role.sizes.iter().find(|s| !s.is_finite() || **s <= 0.0) {
                return Err(StyleError::invalid_scale(format!(
                    "role '{}' has invalid size {}",
                    name, size
                )));
            }
        }
        Ok(())
    }

    /// The base font for `role` at `category`.
    pub fn descriptor(
        &self,
        role: &str,
        category: ContentSizeCategory,
    ) -> Result<FontDescriptor, StyleError> {
        let scale = self
            .roles
            .get(role)
            .ok_or_else(|| StyleError::unknown_role(role))?;
        Ok(FontDescriptor {
            family: scale.family.clone(),
            traits: scale.traits,
            point_size: scale.size(category),
        })
    }

    pub fn get(&self, role: &str) -> Option<&RoleScale> {
        self.roles.get(role)
    }

    pub fn has(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Role names, in no particular order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
