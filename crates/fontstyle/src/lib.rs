//! # fontstyle - Font styles that follow the preferred text size
//!
//! `fontstyle` lets an element's font be declared as a *style*: a text style
//! role such as `"headline"`, plus an optional family override, symbolic
//! traits and a size transform. The concrete font is recomputed whenever the
//! user's preferred text size changes, and whenever a new style is assigned.
//!
//! ## Core Concepts
//!
//! - [`FontStyle`]: immutable description of the desired font
//! - [`SizeTransform`]: absolute, relative, scaled or custom sizing
//! - [`StyleBinding`]: keeps one element's font in sync with one style
//! - [`StyleTable`]: side table attaching at most one binding per element and
//!   [`AttachmentKey`]
//! - [`FontStyled`] / [`FontStyleExt`]: the `font_style` accessors for element
//!   kinds
//! - [`TextSizePreference`] and [`TypeScale`]: the preferred text size setting
//!   and the role tables it resolves through
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use fontstyle::{
//!     ContentSizeCategory, ComputedFont, Environment, FontStyle, FontTarget, SizeTransform,
//!     StyleError, StyleTable, TextSizePreference, AttachmentKey,
//! };
//!
//! #[derive(Default)]
//! struct Label {
//!     font: RefCell<Option<ComputedFont>>,
//! }
//!
//! impl FontTarget for Label {
//!     fn set_font_attribute(&self, _path: &str, font: &ComputedFont) -> Result<(), StyleError> {
//!         *self.font.borrow_mut() = Some(font.clone());
//!         Ok(())
//!     }
//! }
//!
//! const LABEL_FONT: AttachmentKey = AttachmentKey::new("Label.fontStyle");
//!
//! let preference = TextSizePreference::system();
//! let table = StyleTable::new(Environment::from_preference(&preference));
//! let label = Rc::new(Label::default());
//!
//! let style = FontStyle::new("headline").size(SizeTransform::Scale(1.5));
//! table.set(&label, LABEL_FONT, Some(style), "font").unwrap();
//! assert_eq!(label.font.borrow().as_ref().unwrap().point_size, 25.5);
//!
//! // The user picks a larger text size; the label follows.
//! preference.set_category(ContentSizeCategory::ExtraLarge);
//! assert_eq!(label.font.borrow().as_ref().unwrap().point_size, 28.5);
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`, `RefCell`). Style assignment,
//! size-change delivery and font application all happen on one thread, and the
//! default table and preference returned by [`style_table`] and
//! [`preferred_text_size`] are per thread.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for binding creation, disposal
//! and replacement, `trace` for skipped work, and `warn` when a size change
//! fails to update an element. Install a subscriber to see them.

mod binding;
mod element;
mod environment;
mod error;
mod font;
mod notify;
mod property;
mod resolver;
mod scale;
pub mod style;

pub use binding::{BindingState, FontTarget, StyleBinding, DEFAULT_FONT_PATH};
pub use element::{FontStyleExt, FontStyled};
pub use environment::{
    environment, preferred_text_size, set_environment, style_table, Environment,
    TextSizePreference,
};
pub use error::StyleError;
pub use font::{ComputedFont, FontDescriptor, SymbolicTrait, SymbolicTraits};
pub use notify::{NotificationCenter, SubscriptionId, CONTENT_SIZE_CATEGORY_DID_CHANGE};
pub use property::{AttachmentKey, StyleTable};
pub use resolver::RoleResolver;
pub use scale::{ContentSizeCategory, RoleScale, TypeScale};
pub use style::{FontStyle, SizeTransform};
