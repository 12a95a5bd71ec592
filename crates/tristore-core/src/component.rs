//! Numeric component kinds an element buffer can be specialized to.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
}

/// Runtime tag for the numeric kind stored in a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// 32-bit IEEE 754 float.
    F32,
    /// 64-bit IEEE 754 float.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
}

impl ComponentKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [ComponentKind; 4] = [Self::F32, Self::F64, Self::I32, Self::U32];

    /// Short lowercase name, matching the Rust primitive.
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I32 => "i32",
            Self::U32 => "u32",
        }
    }

    /// Size of a single component in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
        }
    }

    /// Whether this kind is a floating-point type.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric type usable as the component of a 3-component element.
///
/// Sealed to `f32`, `f64`, `i32` and `u32`. Every implementor is
/// [`bytemuck::Pod`], so buffer storage can be viewed as raw bytes for
/// upload to a graphics API.
///
/// Conversions between kinds go through `f64` with Rust `as` semantics:
/// float to integer truncates toward zero and saturates at the target's
/// range, and NaN becomes zero.
pub trait Component:
    sealed::Sealed + Copy + Default + PartialEq + fmt::Debug + bytemuck::Pod + 'static
{
    /// The runtime tag for this kind.
    const KIND: ComponentKind;

    /// The additive identity; freshly allocated storage is filled with it.
    const ZERO: Self;

    /// Widen to `f64`. Lossless for every supported kind.
    fn to_f64(self) -> f64;

    /// Narrow from `f64` with `as` semantics.
    fn from_f64(value: f64) -> Self;

    /// Convert a component of another kind into this kind.
    #[inline]
    fn cast_from<S: Component>(value: S) -> Self {
        Self::from_f64(value.to_f64())
    }
}

macro_rules! impl_component {
    ($ty:ty, $kind:ident, $zero:expr) => {
        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$kind;
            const ZERO: Self = $zero;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_component!(f32, F32, 0.0);
impl_component!(f64, F64, 0.0);
impl_component!(i32, I32, 0);
impl_component!(u32, U32, 0);
