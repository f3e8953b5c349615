//! The `font_style` accessor pair for element types.
//!
//! An element kind opts in by implementing [`FontStyled`], which gives it its
//! own [`AttachmentKey`]. [`FontStyleExt`] then provides the accessors on
//! `Rc<Element>`, backed by this thread's default
//! [`style_table`](crate::style_table).
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use fontstyle::{
//!     AttachmentKey, ComputedFont, FontStyle, FontStyleExt, FontStyled, FontTarget, StyleError,
//! };
//!
//! #[derive(Default)]
//! struct Label {
//!     font: RefCell<Option<ComputedFont>>,
//! }
//!
//! impl FontTarget for Label {
//!     fn set_font_attribute(&self, path: &str, font: &ComputedFont) -> Result<(), StyleError> {
//!         match path {
//!             "font" => {
//!                 *self.font.borrow_mut() = Some(font.clone());
//!                 Ok(())
//!             }
//!             other => Err(StyleError::UnknownAttribute { path: other.to_string() }),
//!         }
//!     }
//! }
//!
//! impl FontStyled for Label {
//!     const FONT_STYLE_KEY: AttachmentKey = AttachmentKey::new("Label.fontStyle");
//! }
//!
//! let label = Rc::new(Label::default());
//! label.set_font_style(Some(FontStyle::new("body"))).unwrap();
//! assert_eq!(label.font_style(), Some(FontStyle::new("body")));
//! assert_eq!(label.font.borrow().as_ref().unwrap().point_size, 17.0);
//! ```

use std::rc::Rc;

use crate::binding::{FontTarget, DEFAULT_FONT_PATH};
use crate::environment::style_table;
use crate::error::StyleError;
use crate::property::AttachmentKey;
use crate::style::FontStyle;

/// An element kind with a `font_style` property.
pub trait FontStyled: FontTarget + Sized {
    /// The slot this kind's style is stored under.
    const FONT_STYLE_KEY: AttachmentKey;
}

/// Style accessors for shared elements.
pub trait FontStyleExt {
    /// The style assigned to this element, if any.
    fn font_style(&self) -> Option<FontStyle>;

    /// Assigns a style to the `"font"` attribute, or clears it with `None`.
    fn set_font_style(&self, style: Option<FontStyle>) -> Result<(), StyleError>;

    /// Assigns a style to another font attribute.
    fn set_font_style_at(
        &self,
        style: Option<FontStyle>,
        target_property: &str,
    ) -> Result<(), StyleError>;
}

impl<T: FontStyled> FontStyleExt for Rc<T> {
    fn font_style(&self) -> Option<FontStyle> {
        style_table().get(self, T::FONT_STYLE_KEY)
    }

    fn set_font_style(&self, style: Option<FontStyle>) -> Result<(), StyleError> {
        self.set_font_style_at(style, DEFAULT_FONT_PATH)
    }

    fn set_font_style_at(
        &self,
        style: Option<FontStyle>,
        target_property: &str,
    ) -> Result<(), StyleError> {
        style_table().set(self, T::FONT_STYLE_KEY, style, target_property)
    }
}
