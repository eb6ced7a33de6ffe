#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID object from the most significant and least significant 64 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid5::Uuid;
    ///
    /// let x = Uuid::from_u64_pair(0x6ba7_b810_9dad_11d1, 0x80b4_00c0_4fd4_30c8);
    /// assert_eq!(x.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub const fn from_u64_pair(most_significant: u64, least_significant: u64) -> Self {
        let n = ((most_significant as u128) << 64) | least_significant as u128;
        Self(n.to_be_bytes())
    }

    /// Returns the most significant and least significant 64 bits of the UUID.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        let n = u128::from_be_bytes(self.0);
        ((n >> 64) as u64, n as u64)
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not belong to the
    /// [`Variant::Var10`] family.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid5::Uuid;
    ///
    /// let x = "ae2a9d75-ed89-5e16-9f7c-8fd3399438cd".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "ae2a9d75-ed89-5e16-9f7c-8fd3399438cd");
    /// assert_eq!(format!("{}", y), "ae2a9d75-ed89-5e16-9f7c-8fd3399438cd");
    /// # Ok::<(), uuid5::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut p = 0;
        for (i, e) in self.0.iter().enumerate() {
            let e = *e as usize;
            buffer[p] = DIGITS[e >> 4];
            buffer[p + 1] = DIGITS[e & 15];
            p += if i == 3 || i == 5 || i == 7 || i == 9 { 3 } else { 2 };
        }
        debug_assert!(buffer.is_ascii());
        CanonicalStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.as_bytes();
        if src.len() != 36
            || src[8] != b'-'
            || src[13] != b'-'
            || src[18] != b'-'
            || src[23] != b'-'
        {
            return Err(ParseError {});
        }

        let mut dst = [0u8; 16];
        let mut p = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            *e = (hex_digit(src[p])? << 4) | hex_digit(src[p + 1])?;
            p += if i == 3 || i == 5 || i == 7 || i == 9 { 3 } else { 2 };
        }
        Ok(Self(dst))
    }
}

/// Decodes a case-insensitive hexadecimal digit.
fn hex_digit(value: u8) -> Result<u8, ParseError> {
    match value {
        b'0'..=b'9' => Ok(value - b'0'),
        b'a'..=b'f' => Ok(value - b'a' + 10),
        b'A'..=b'F' => Ok(value - b'A' + 10),
        _ => Err(ParseError {}),
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// The reserved UUID variants corresponding to the possible values of the variant field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant `0` (NCS), of which the first bit of the variant field is `0`.
    Var0,

    /// The variant `10` (RFC 4122), of which the first two bits of the variant field are `10`.
    Var10,

    /// The variant `110` (Microsoft), of which the first three bits of the variant field are
    /// `110`.
    Var110,

    /// The variant `111` reserved for future definitions, of which the first three bits of the
    /// variant field are `111`.
    VarReserved,
}

/// Concrete return type of [`Uuid::encode()`] holding the stack-allocated 8-4-4-4-12 string
/// representation.
struct CanonicalStr([u8; 36]);

impl ops::Deref for CanonicalStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for CanonicalStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid 8-4-4-4-12 hexadecimal string representation")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}
