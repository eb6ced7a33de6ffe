//! UUIDv5-related functionality

use crate::Uuid;
use sha1_smol::Sha1;

/// Generates a UUIDv5 object from a namespace ID and a name.
///
/// The UUID is derived by hashing the concatenation of the 16-byte big-endian representation of
/// the namespace ID and the raw bytes of the name with SHA-1 and overwriting the version and
/// variant fields of the truncated digest, as specified in RFC 9562. The computation is
/// deterministic; calls with the same arguments always return the same object.
///
/// The namespace argument takes a [`Namespace`] constant, a [`Uuid`], or any other type
/// convertible into a [`Uuid`]. The name argument takes any type viewable as a byte slice, such as
/// `&str`, `String`, `&[u8]`, and `Vec<u8>`. String names are hashed as their UTF-8 bytes as they
/// are; this function applies no Unicode normalization.
///
/// # Examples
///
/// ```rust
/// use uuid5::{uuid5, Namespace, Uuid};
///
/// let uuid = uuid5(Namespace::Dns, "luisalberto.dev");
/// assert_eq!(uuid.to_string(), "ae2a9d75-ed89-5e16-9f7c-8fd3399438cd");
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let ns: Uuid = "25a2cc82-e9c0-40a1-808f-6aa35d16fb2c".parse()?;
/// let other = uuid5(ns, "luisalberto.dev");
/// assert_eq!(other.to_string(), "51eff5a8-d771-53eb-96ce-a4244e52be36");
/// # Ok::<(), uuid5::ParseError>(())
/// ```
pub fn uuid5(namespace: impl Into<Uuid>, name: impl AsRef<[u8]>) -> Uuid {
    uuid5_core(namespace.into(), name.as_ref())
}

/// Computes a UUIDv5 object from the concrete namespace and name arguments.
fn uuid5_core(namespace: Uuid, name: &[u8]) -> Uuid {
    let mut hasher = Sha1::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.digest().bytes();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = 0x50 | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    Uuid::from(bytes)
}

/// Well-known namespace IDs predefined for name-based UUIDs.
///
/// # Examples
///
/// ```rust
/// use uuid5::{Namespace, Uuid};
///
/// assert_eq!(
///     Uuid::from(Namespace::Dns).to_string(),
///     "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
/// );
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Namespace {
    /// Namespace ID for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8).
    Dns,

    /// Namespace ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8).
    Url,

    /// Namespace ID for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8).
    Oid,

    /// Namespace ID for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8).
    X500,
}

impl Namespace {
    /// Returns the namespace ID as a UUID object.
    pub const fn to_uuid(self) -> Uuid {
        match self {
            Self::Dns => Uuid::from_u64_pair(0x6ba7_b810_9dad_11d1, 0x80b4_00c0_4fd4_30c8),
            Self::Url => Uuid::from_u64_pair(0x6ba7_b811_9dad_11d1, 0x80b4_00c0_4fd4_30c8),
            Self::Oid => Uuid::from_u64_pair(0x6ba7_b812_9dad_11d1, 0x80b4_00c0_4fd4_30c8),
            Self::X500 => Uuid::from_u64_pair(0x6ba7_b814_9dad_11d1, 0x80b4_00c0_4fd4_30c8),
        }
    }
}

impl From<Namespace> for Uuid {
    fn from(src: Namespace) -> Self {
        src.to_uuid()
    }
}
