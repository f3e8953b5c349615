//! Font style descriptions.
//!
//! This module provides the value types a caller assigns to an element:
//!
//! - [`FontStyle`]: a text style role plus family, trait and size modifiers
//! - [`SizeTransform`]: how the role's resolved size becomes the final size
//!
//! Styles are pure data. Resolving one against a
//! [`RoleResolver`](crate::RoleResolver) yields a
//! [`ComputedFont`](crate::ComputedFont) without side effects.

mod size;
mod value;

pub use size::SizeTransform;
pub use value::FontStyle;
