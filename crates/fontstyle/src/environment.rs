//! The collaborators bindings run against, and the per-thread defaults.
//!
//! An [`Environment`] pairs a [`RoleResolver`] with the [`NotificationCenter`]
//! that announces preferred text size changes. [`TextSizePreference`] is the
//! stock resolver: a [`TypeScale`] plus the current [`ContentSizeCategory`],
//! posting [`CONTENT_SIZE_CATEGORY_DID_CHANGE`] whenever the category changes.
//!
//! Every thread has its own default [`StyleTable`], used by
//! [`FontStyleExt`](crate::FontStyleExt). It starts out on the thread's
//! [`preferred_text_size`] and can be swapped with [`set_environment`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::StyleError;
use crate::font::FontDescriptor;
use crate::notify::{NotificationCenter, CONTENT_SIZE_CATEGORY_DID_CHANGE};
use crate::property::StyleTable;
use crate::resolver::RoleResolver;
use crate::scale::{ContentSizeCategory, TypeScale};

/// The user's preferred text size, resolved through a type scale.
///
/// Clones share the category and the notification center.
#[derive(Clone)]
pub struct TextSizePreference {
    scale: Rc<TypeScale>,
    category: Rc<Cell<ContentSizeCategory>>,
    center: NotificationCenter,
}

impl TextSizePreference {
    /// Creates a preference with its own notification center.
    pub fn new(scale: TypeScale, category: ContentSizeCategory) -> Self {
        Self::with_center(scale, category, NotificationCenter::new())
    }

    /// Creates a preference that posts to an existing center.
    pub fn with_center(
        scale: TypeScale,
        category: ContentSizeCategory,
        center: NotificationCenter,
    ) -> Self {
        Self {
            scale: Rc::new(scale),
            category: Rc::new(Cell::new(category)),
            center,
        }
    }

    /// The system type scale at the default category.
    pub fn system() -> Self {
        Self::new(TypeScale::system().clone(), ContentSizeCategory::default())
    }

    pub fn category(&self) -> ContentSizeCategory {
        self.category.get()
    }

    /// Changes the category and notifies subscribers.
    ///
    /// Returns `false`, without posting, when the category is unchanged.
    pub fn set_category(&self, category: ContentSizeCategory) -> bool {
        let previous = self.category.replace(category);
        if previous == category {
            return false;
        }
        tracing::debug!(from = %previous, to = %category, "preferred text size changed");
        self.center.post(CONTENT_SIZE_CATEGORY_DID_CHANGE);
        true
    }

    pub fn scale(&self) -> &TypeScale {
        &self.scale
    }

    pub fn notification_center(&self) -> &NotificationCenter {
        &self.center
    }
}

impl RoleResolver for TextSizePreference {
    fn resolve_role(&self, role: &str) -> Result<FontDescriptor, StyleError> {
        self.scale.descriptor(role, self.category.get())
    }
}

impl fmt::Debug for TextSizePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSizePreference")
            .field("category", &self.category.get())
            .field("roles", &self.scale.len())
            .finish()
    }
}

/// Role resolution plus size-change notifications.
#[derive(Clone)]
pub struct Environment {
    resolver: Rc<dyn RoleResolver>,
    center: NotificationCenter,
}

impl Environment {
    /// Combines any resolver with the center that announces its changes.
    pub fn new(resolver: impl RoleResolver + 'static, center: NotificationCenter) -> Self {
        Self {
            resolver: Rc::new(resolver),
            center,
        }
    }

    /// An environment following `preference`.
    pub fn from_preference(preference: &TextSizePreference) -> Self {
        let center = preference.notification_center().clone();
        Self::new(preference.clone(), center)
    }

    /// An environment following this thread's [`preferred_text_size`].
    pub fn system() -> Self {
        Self::from_preference(&preferred_text_size())
    }

    pub fn resolver(&self) -> &Rc<dyn RoleResolver> {
        &self.resolver
    }

    pub fn notification_center(&self) -> &NotificationCenter {
        &self.center
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("center", &self.center)
            .finish_non_exhaustive()
    }
}

thread_local! {
    static PREFERENCE: TextSizePreference = TextSizePreference::system();
    static DEFAULT_TABLE: RefCell<Option<Rc<StyleTable>>> = const { RefCell::new(None) };
}

/// This thread's system text size preference.
pub fn preferred_text_size() -> TextSizePreference {
    PREFERENCE.with(Clone::clone)
}

/// Replaces this thread's default style table with one using `environment`.
///
/// Bindings held by the previous table are disposed once it is dropped.
pub fn set_environment(environment: Environment) {
    let previous =
        DEFAULT_TABLE.with(|table| table.replace(Some(Rc::new(StyleTable::new(environment)))));
    // Dropped outside the thread-local borrow.
    drop(previous);
}

/// This thread's default style table.
pub fn style_table() -> Rc<StyleTable> {
    DEFAULT_TABLE.with(|table| {
        Rc::clone(
            table
                .borrow_mut()
                .get_or_insert_with(|| Rc::new(StyleTable::new(Environment::system()))),
        )
    })
}

/// The environment of this thread's default style table.
pub fn environment() -> Environment {
    style_table().environment().clone()
}
