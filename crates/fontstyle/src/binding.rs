//! Live bindings between a font style and one element.
//!
//! A [`StyleBinding`] applies its style to an element as soon as it is
//! created, then re-applies it on every
//! [`CONTENT_SIZE_CATEGORY_DID_CHANGE`] notification until it is disposed.
//!
//! # Ownership
//!
//! The binding holds its element through a [`Weak`] reference, so it never
//! keeps the element alive. The notification handler holds the binding's
//! state weakly too: the only strong owner of a binding is whoever created it,
//! normally a [`StyleTable`](crate::StyleTable) slot.
//!
//! # Lifecycle
//!
//! A binding is [`BindingState::Active`] from creation until [`dispose`]
//! moves it to [`BindingState::Disposed`]. Disposal unsubscribes from the
//! notification center, happens at most once, and runs automatically on drop.
//! A binding whose element is gone disposes itself the next time it is asked
//! to update, usually on the first size change after the element was dropped.
//!
//! [`dispose`]: StyleBinding::dispose

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::environment::Environment;
use crate::error::StyleError;
use crate::font::ComputedFont;
use crate::notify::{NotificationCenter, SubscriptionId, CONTENT_SIZE_CATEGORY_DID_CHANGE};
use crate::resolver::RoleResolver;
use crate::style::FontStyle;

/// The attribute path bindings write to unless told otherwise.
pub const DEFAULT_FONT_PATH: &str = "font";

/// An element that can receive a computed font.
///
/// `path` names the attribute to write, [`DEFAULT_FONT_PATH`] unless the style
/// was assigned to another one (for example a placeholder font). Elements
/// without that attribute return [`StyleError::UnknownAttribute`].
///
/// Writes go through `&self`; elements keep their font behind interior
/// mutability.
pub trait FontTarget: 'static {
    fn set_font_attribute(&self, path: &str, font: &ComputedFont) -> Result<(), StyleError>;
}

/// Whether a binding still reacts to size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Active,
    Disposed,
}

struct Shared {
    style: FontStyle,
    target: Weak<dyn FontTarget>,
    target_property: String,
    resolver: Rc<dyn RoleResolver>,
    center: NotificationCenter,
    subscription: Cell<Option<SubscriptionId>>,
}

impl Shared {
    /// Returns `Ok(false)` when the target is gone. A binding that finds its
    /// target gone unsubscribes itself.
    fn update_font(&self) -> Result<bool, StyleError> {
        let Some(target) = self.target.upgrade() else {
            tracing::trace!(role = self.style.role(), "target dropped, skipping font update");
            self.release("target dropped");
            return Ok(false);
        };
        let font = self.style.resolve(self.resolver.as_ref())?;
        target.set_font_attribute(&self.target_property, &font)?;
        Ok(true)
    }

    fn release(&self, reason: &'static str) {
        if let Some(id) = self.subscription.take() {
            self.center.unsubscribe(id);
            tracing::debug!(role = self.style.role(), ?id, reason, "disposed style binding");
        }
    }
}

/// Keeps one element's font in sync with a [`FontStyle`].
pub struct StyleBinding {
    shared: Rc<Shared>,
}

impl StyleBinding {
    /// Applies `style` to `target` and subscribes to size changes.
    ///
    /// Fails, without subscribing, when the role can't be resolved or the
    /// target rejects `target_property`.
    pub fn create<T: FontTarget>(
        target: &Rc<T>,
        style: FontStyle,
        target_property: &str,
        environment: &Environment,
    ) -> Result<Self, StyleError> {
        let weak_target: Weak<T> = Rc::downgrade(target);
        let weak_target: Weak<dyn FontTarget> = weak_target;
        let shared = Rc::new(Shared {
            style,
            target: weak_target,
            target_property: target_property.to_string(),
            resolver: Rc::clone(environment.resolver()),
            center: environment.notification_center().clone(),
            subscription: Cell::new(None),
        });
        shared.update_font()?;

        let handler_state = Rc::downgrade(&shared);
        let id = shared.center.subscribe(CONTENT_SIZE_CATEGORY_DID_CHANGE, move || {
            let Some(shared) = handler_state.upgrade() else {
                return;
            };
            if let Err(err) = shared.update_font() {
                tracing::warn!(
                    role = shared.style.role(),
                    path = %shared.target_property,
                    error = %err,
                    "failed to update font after text size change"
                );
            }
        });
        shared.subscription.set(Some(id));

        tracing::debug!(
            role = shared.style.role(),
            path = %shared.target_property,
            ?id,
            "created style binding"
        );

        Ok(Self { shared })
    }

    /// Re-resolves the style and re-applies it to the target.
    ///
    /// Does nothing when the binding is disposed. When the target is gone the
    /// binding disposes itself instead. On a resolution error the previously
    /// applied font stays in place.
    pub fn update_font(&self) -> Result<(), StyleError> {
        if self.state() == BindingState::Disposed {
            return Ok(());
        }
        self.shared.update_font().map(|_| ())
    }

    /// Unsubscribes from size changes. Calling it again has no effect.
    pub fn dispose(&self) {
        self.shared.release("disposed");
    }

    pub fn state(&self) -> BindingState {
        match self.shared.subscription.get() {
            Some(_) => BindingState::Active,
            None => BindingState::Disposed,
        }
    }

    pub fn style(&self) -> &FontStyle {
        &self.shared.style
    }

    pub fn target_property(&self) -> &str {
        &self.shared.target_property
    }

    /// Returns `true` while the bound element still exists.
    pub fn is_target_alive(&self) -> bool {
        self.shared.target.strong_count() > 0
    }
}

impl Drop for StyleBinding {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for StyleBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleBinding")
            .field("style", &self.shared.style)
            .field("target_property", &self.shared.target_property)
            .field("state", &self.state())
            .field("target_alive", &self.is_target_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::TextSizePreference;
    use crate::scale::ContentSizeCategory;
    use crate::style::SizeTransform;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Label {
        font: RefCell<Option<ComputedFont>>,
        writes: Cell<usize>,
    }

    impl FontTarget for Label {
        fn set_font_attribute(&self, path: &str, font: &ComputedFont) -> Result<(), StyleError> {
            if path != DEFAULT_FONT_PATH {
                return Err(StyleError::UnknownAttribute {
                    path: path.to_string(),
                });
            }
            *self.font.borrow_mut() = Some(font.clone());
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    impl Label {
        fn point_size(&self) -> Option<f32> {
            self.font.borrow().as_ref().map(|f| f.point_size)
        }
    }

    fn setup() -> (TextSizePreference, Environment) {
        let preference = TextSizePreference::system();
        let environment = Environment::from_preference(&preference);
        (preference, environment)
    }

    #[test]
    fn test_create_applies_immediately_and_subscribes() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());

        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();

        assert_eq!(label.point_size(), Some(17.0));
        assert_eq!(binding.state(), BindingState::Active);
        assert_eq!(
            preference
                .notification_center()
                .subscriber_count(CONTENT_SIZE_CATEGORY_DID_CHANGE),
            1
        );
    }

    #[test]
    fn test_size_change_reapplies() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());
        let style = FontStyle::new("headline").size(SizeTransform::Scale(1.5));
        let _binding = StyleBinding::create(&label, style, DEFAULT_FONT_PATH, &env).unwrap();

        preference.set_category(ContentSizeCategory::ExtraExtraLarge);
        assert_eq!(label.point_size(), Some(31.5));
        assert_eq!(label.writes.get(), 2);
    }

    #[test]
    fn test_unknown_role_creates_nothing() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());

        let err = StyleBinding::create(&label, FontStyle::new("banner"), DEFAULT_FONT_PATH, &env)
            .unwrap_err();

        assert!(matches!(err, StyleError::UnknownRole { .. }));
        assert_eq!(label.writes.get(), 0);
        assert!(preference.notification_center().is_empty());
    }

    #[test]
    fn test_unknown_attribute_creates_nothing() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());

        let err = StyleBinding::create(&label, FontStyle::new("body"), "placeholderFont", &env)
            .unwrap_err();

        assert!(matches!(err, StyleError::UnknownAttribute { .. }));
        assert!(preference.notification_center().is_empty());
    }

    #[test]
    fn test_dispose_is_idempotent_and_stops_updates() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());
        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();

        binding.dispose();
        binding.dispose();
        assert_eq!(binding.state(), BindingState::Disposed);
        assert!(preference.notification_center().is_empty());

        preference.set_category(ContentSizeCategory::ExtraSmall);
        assert_eq!(label.point_size(), Some(17.0));
        assert!(binding.update_font().is_ok());
        assert_eq!(label.writes.get(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());
        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();
        drop(binding);
        assert!(preference.notification_center().is_empty());
    }

    #[test]
    fn test_dead_target_is_silent_no_op() {
        let (preference, env) = setup();
        let label = Rc::new(Label::default());
        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();

        drop(label);
        assert!(!binding.is_target_alive());
        assert!(binding.update_font().is_ok());
        assert_eq!(binding.state(), BindingState::Disposed);
        assert!(preference.notification_center().is_empty());
    }

    #[test]
    fn test_dead_target_unsubscribes_on_next_size_change() {
        let (preference, env) = setup();
        let center = preference.notification_center().clone();
        let label = Rc::new(Label::default());
        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();

        drop(label);
        assert_eq!(binding.state(), BindingState::Active);

        preference.set_category(ContentSizeCategory::Large);
        assert_eq!(center.subscriber_count(CONTENT_SIZE_CATEGORY_DID_CHANGE), 0);
        assert_eq!(binding.state(), BindingState::Disposed);
        assert_eq!(center.post(CONTENT_SIZE_CATEGORY_DID_CHANGE), 0);

        binding.dispose();
        assert_eq!(binding.state(), BindingState::Disposed);
    }

    #[test]
    fn test_binding_does_not_keep_target_alive() {
        let (_preference, env) = setup();
        let label = Rc::new(Label::default());
        let _binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();
        assert_eq!(Rc::strong_count(&label), 1);
    }

    #[test]
    fn test_resolution_error_keeps_previous_font() {
        let center = NotificationCenter::new();
        let fail = Rc::new(Cell::new(false));
        let f = Rc::clone(&fail);
        let env = Environment::new(
            move |role: &str| {
                if f.get() {
                    Err(StyleError::UnknownRole {
                        role: role.to_string(),
                    })
                } else {
                    Ok(crate::font::FontDescriptor::new("System", 17.0))
                }
            },
            center.clone(),
        );
        let label = Rc::new(Label::default());
        let binding =
            StyleBinding::create(&label, FontStyle::new("body"), DEFAULT_FONT_PATH, &env).unwrap();

        fail.set(true);
        assert!(binding.update_font().is_err());
        // Broadcast failures are logged, not propagated.
        center.post(CONTENT_SIZE_CATEGORY_DID_CHANGE);
        assert_eq!(label.point_size(), Some(17.0));
        assert_eq!(label.writes.get(), 1);
    }
}
