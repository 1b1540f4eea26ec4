// ── Typed entity identifiers ──
//
// `Id<K>` wraps an externally assigned string and carries the entity
// kind in its type parameter, so a user id and a post id never mix
// even when the underlying text happens to match. The core never
// mints identifiers -- they arrive with the raw records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// Kind marker for identifiers naming a user.
pub enum UserKind {}

/// Kind marker for identifiers naming a post.
pub enum PostKind {}

/// Identifier of a user.
pub type UserId = Id<UserKind>;

/// Identifier of a post.
pub type PostId = Id<PostKind>;

/// Opaque identifier for an entity of kind `K`.
///
/// Two identifiers are equal iff their kind and underlying value match;
/// the kind check is free because it happens in the type system.
pub struct Id<K> {
    value: String,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Id<K> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _kind: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Manual impls throughout: derives would demand `K: Clone` (etc.) even
// though `K` is phantom and never stored.

impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for Id<K> {}

impl<K> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({:?})", self.value)
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K> From<String> for Id<K> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<K> From<&str> for Id<K> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<K> FromStr for Id<K> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// On the wire an id is a bare string; the kind lives only in the type.

impl<K> Serialize for Id<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, K> Deserialize<'de> for Id<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
