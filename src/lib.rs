//! An implementation of the name-based UUID Version 5
//!
//! ```rust
//! use uuid5::{uuid5, Namespace};
//!
//! let uuid = uuid5(Namespace::Dns, "luisalberto.dev");
//! println!("{}", uuid); // "ae2a9d75-ed89-5e16-9f7c-8fd3399438cd"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562#section-5.5).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           sha1_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           sha1_high           |  ver  |       sha1_mid        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         sha1_low                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           sha1_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `sha1_high` field carries the first 48 bits of the SHA-1 digest of
//!   the concatenation of the 16-byte namespace ID and the name.
//! - The 4-bit `ver` field is set at `0101`, overwriting the corresponding digest
//!   bits.
//! - The 12-bit `sha1_mid` field carries the following 12 bits of the digest.
//! - The 2-bit `var` field is set at `10`, overwriting the corresponding digest
//!   bits.
//! - The remaining 62 `sha1_low` bits carry the digest bits up to the 128-bit
//!   boundary; the last 32 bits of the 160-bit digest are discarded.
//!
//! The generation is a pure function of the arguments: the same namespace ID and
//! name always yield the same UUID, across processes and platforms. Names are
//! hashed exactly as the bytes given; string names are taken as their UTF-8
//! encoding with no Unicode normalization or case folding, so strings that render
//! identically on screen may still map to distinct UUIDs. The empty name is a
//! valid input and maps to a well-defined UUID under each namespace.
//!
//! Any UUID can serve as the namespace ID, in addition to the well-known
//! [`Namespace`] constants:
//!
//! ```rust
//! use uuid5::{uuid5, Uuid};
//!
//! let ns: Uuid = "25a2cc82-e9c0-40a1-808f-6aa35d16fb2c".parse()?;
//! println!("{}", uuid5(ns, "luisalberto.dev")); // "51eff5a8-d771-53eb-96ce-a4244e52be36"
//! # Ok::<(), uuid5::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` integrates the library with the Rust standard library and enables the
//!   conversions between [`Uuid`] and `String` as well as the `std::error::Error`
//!   implementation for [`ParseError`]. Disable default features to operate the
//!   library under `no_std` environments; UUID generation itself does not depend
//!   on `std`.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversions between this crate's [`Uuid`] and the `uuid`
//!   crate's counterpart.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod uuid;
pub use uuid::{ParseError, Uuid, Variant};

mod v5;
pub use v5::{uuid5, Namespace};
