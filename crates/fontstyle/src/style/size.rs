//! Size transforms applied to a resolved point size.

use std::fmt;
use std::rc::Rc;

/// How a style turns the size its role resolved to into the final point size.
///
/// # Equality
///
/// `Absolute`, `Relative` and `Scale` compare by value. `Custom` holds an
/// arbitrary function and is never equal to anything, not even to a clone of
/// itself. A style using `Custom` is therefore always treated as changed when
/// it is assigned again.
#[derive(Clone)]
pub enum SizeTransform {
    /// Ignore the resolved size and use this one.
    Absolute(f32),
    /// Add an offset in points to the resolved size.
    Relative(f32),
    /// Multiply the resolved size.
    Scale(f32),
    /// Compute the size from the resolved size.
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl SizeTransform {
    /// Wraps a function as a `Custom` transform.
    pub fn custom(function: impl Fn(f32) -> f32 + 'static) -> Self {
        SizeTransform::Custom(Rc::new(function))
    }

    /// Applies the transform to a resolved point size.
    pub fn apply(&self, size: f32) -> f32 {
        match self {
            SizeTransform::Absolute(points) => *points,
            SizeTransform::Relative(offset) => size + offset,
            SizeTransform::Scale(factor) => size * factor,
            SizeTransform::Custom(function) => function(size),
        }
    }

    /// Returns `true` for the `Custom` variant.
    pub fn is_custom(&self) -> bool {
        matches!(self, SizeTransform::Custom(_))
    }
}

impl Default for SizeTransform {
    fn default() -> Self {
        SizeTransform::Relative(0.0)
    }
}

impl PartialEq for SizeTransform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SizeTransform::Absolute(l), SizeTransform::Absolute(r)) => l == r,
            (SizeTransform::Relative(l), SizeTransform::Relative(r)) => l == r,
            (SizeTransform::Scale(l), SizeTransform::Scale(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Debug for SizeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeTransform::Absolute(points) => f.debug_tuple("Absolute").field(points).finish(),
            SizeTransform::Relative(offset) => f.debug_tuple("Relative").field(offset).finish(),
            SizeTransform::Scale(factor) => f.debug_tuple("Scale").field(factor).finish(),
            SizeTransform::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}
