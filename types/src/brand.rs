//! Nominal wrappers over shared representations.
//!
//! A [`Brand<K, T>`] is a `K` that additionally carries a phantom tag `T`. Two
//! brands over the same base are distinct types, so a USD amount cannot be
//! passed where a EUR amount is expected even though both are `f64`. The tag
//! has no runtime representation: `Brand<K, T>` is `#[repr(transparent)]` over
//! `K`.
//!
//! The only way to obtain a branded value is [`Brand::from_unverified`]. There
//! is no validating constructor; trusted boundaries (parsers, deserializers)
//! call it and nothing else should.
//!
//! # Invariants
//!
//! - Size and alignment equal those of `K`
//! - `Send`/`Sync` depend on `K` only
//! - Widening ([`Brand::into_inner`], [`Deref`]) is always available
//! - Narrowing from `K` or retagging from another brand requires an explicit call
//!
//! A plain base value is rejected where a brand is expected:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{Brand, BrandTag};
//!
//! enum Meters {}
//! impl BrandTag for Meters {
//!     const NAME: &'static str = "m";
//! }
//!
//! fn climb(height: Brand<u32, Meters>) -> u32 {
//!     height.into_inner()
//! }
//!
//! climb(8848);
//! ```
//!
//! So is a value branded with a different tag over the same base:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{Brand, BrandTag};
//!
//! enum Meters {}
//! impl BrandTag for Meters {
//!     const NAME: &'static str = "m";
//! }
//!
//! enum Feet {}
//! impl BrandTag for Feet {
//!     const NAME: &'static str = "ft";
//! }
//!
//! fn climb(height: Brand<u32, Meters>) -> u32 {
//!     height.into_inner()
//! }
//!
//! climb(Brand::<u32, Feet>::from_unverified(29_032));
//! ```
//!
//! Accumulating into a brand never mixes tags either:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{Brand, BrandTag};
//!
//! enum Meters {}
//! impl BrandTag for Meters {
//!     const NAME: &'static str = "m";
//! }
//!
//! enum Feet {}
//! impl BrandTag for Feet {
//!     const NAME: &'static str = "ft";
//! }
//!
//! let mut total = Brand::<u32, Meters>::from_unverified(1);
//! total += Brand::<u32, Feet>::from_unverified(1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Deref, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker for brand tags.
///
/// Tags are usually uninhabited enums; only the type and its `NAME` matter.
pub trait BrandTag {
    /// Human-readable tag, used in `Debug` output and when parsing tagged input.
    const NAME: &'static str;
}

/// A `K` statically tagged as `T`.
#[repr(transparent)]
pub struct Brand<K, T> {
    value: K,
    // fn() -> T keeps auto traits and variance independent of the tag.
    tag: PhantomData<fn() -> T>,
}

impl<K, T> Brand<K, T> {
    /// Asserts, without proof, that `value` is a `T`.
    ///
    /// This is the unchecked cast. Keep call sites at trusted boundaries so
    /// every narrowing in the program can be audited by searching for this name.
    #[must_use]
    pub const fn from_unverified(value: K) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &K {
        &self.value
    }

    /// Drops the tag and returns the base value.
    #[must_use]
    pub fn into_inner(self) -> K {
        self.value
    }

    /// Alias for [`Brand::into_inner`] that reads better at widening sites.
    #[must_use]
    pub fn widen(self) -> K {
        self.value
    }

    /// Re-brands the value as `U` without proof.
    #[must_use]
    pub fn retag_unverified<U>(self) -> Brand<K, U> {
        Brand::from_unverified(self.value)
    }
}

impl<K, T: BrandTag> Brand<K, T> {
    #[must_use]
    pub const fn tag_name() -> &'static str {
        T::NAME
    }
}

impl<K, T> Deref for Brand<K, T> {
    type Target = K;

    fn deref(&self) -> &K {
        &self.value
    }
}

impl<K, T> AsRef<K> for Brand<K, T> {
    fn as_ref(&self) -> &K {
        &self.value
    }
}

// Manual impls below avoid the `T: Trait` bounds a derive would add.

impl<K: Clone, T> Clone for Brand<K, T> {
    fn clone(&self) -> Self {
        Self::from_unverified(self.value.clone())
    }
}

impl<K: Copy, T> Copy for Brand<K, T> {}

impl<K: PartialEq, T> PartialEq for Brand<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: Eq, T> Eq for Brand<K, T> {}

impl<K: PartialOrd, T> PartialOrd for Brand<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// A plain `K` on the right compares by value; the tag is only dropped, never
// assigned, so this cannot narrow.

impl<K: PartialEq, T> PartialEq<K> for Brand<K, T> {
    fn eq(&self, other: &K) -> bool {
        self.value == *other
    }
}

impl<K: PartialOrd, T> PartialOrd<K> for Brand<K, T> {
    fn partial_cmp(&self, other: &K) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<K: Ord, T> Ord for Brand<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: Hash, T> Hash for Brand<K, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: fmt::Debug, T: BrandTag> fmt::Debug for Brand<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::NAME, self.value)
    }
}

impl<K: fmt::Display, T> fmt::Display for Brand<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================
//
// Adding or subtracting two values of the same brand stays in the brand. Any
// operation that brings in a plain `K`, and multiplying or dividing two branded
// values, widens to `K`: the caller decides which brand the result has.

impl<K: Add<Output = K>, T> Add for Brand<K, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_unverified(self.value + rhs.value)
    }
}

impl<K: Sub<Output = K>, T> Sub for Brand<K, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_unverified(self.value - rhs.value)
    }
}

impl<K: Add<Output = K>, T> Add<K> for Brand<K, T> {
    type Output = K;

    fn add(self, rhs: K) -> K {
        self.value + rhs
    }
}

impl<K: Sub<Output = K>, T> Sub<K> for Brand<K, T> {
    type Output = K;

    fn sub(self, rhs: K) -> K {
        self.value - rhs
    }
}

impl<K: AddAssign, T> AddAssign for Brand<K, T> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: SubAssign, T> SubAssign for Brand<K, T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Neg<Output = K>, T> Neg for Brand<K, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_unverified(-self.value)
    }
}

impl<K: Mul<Output = K>, T> Mul<K> for Brand<K, T> {
    type Output = K;

    fn mul(self, rhs: K) -> K {
        self.value * rhs
    }
}

impl<K: Div<Output = K>, T> Div<K> for Brand<K, T> {
    type Output = K;

    fn div(self, rhs: K) -> K {
        self.value / rhs
    }
}

impl<K: Mul<Output = K>, T> Mul for Brand<K, T> {
    type Output = K;

    fn mul(self, rhs: Self) -> K {
        self.value * rhs.value
    }
}

/// Dividing two amounts of the same brand gives a plain ratio.
impl<K: Div<Output = K>, T> Div for Brand<K, T> {
    type Output = K;

    fn div(self, rhs: Self) -> K {
        self.value / rhs.value
    }
}

/// The empty sum is `K::default()` carrying the same tag.
impl<K: Add<Output = K> + Default, T> Sum for Brand<K, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_unverified(iter.fold(K::default(), |acc, item| acc + item.value))
    }
}

// ============================================================================
// Serde
// ============================================================================
//
// Serialized exactly as `K`. Deserialization is a trusted boundary: the tag is
// asserted, not checked.

impl<K: Serialize, T> Serialize for Brand<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, K: Deserialize<'de>, T> Deserialize<'de> for Brand<K, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        K::deserialize(deserializer).map(Self::from_unverified)
    }
}
