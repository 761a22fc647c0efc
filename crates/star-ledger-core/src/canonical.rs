//! Canonical CBOR encoding of the sealed block fields.
//!
//! This module implements RFC 8949 Core Deterministic Encoding for the
//! digest pre-image:
//! - Integer map keys, already in sorted order
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 seconds)
//!
//! Determinism is critical: the same sealed fields must produce identical
//! bytes (and thus an identical digest) every time they are encoded.

use crate::digest::BlockDigest;

/// Seal field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const HEIGHT: u64 = 0;
    pub const BODY: u64 = 1;
    pub const TIME: u64 = 2;
    pub const PREV: u64 = 3;
}

/// Encode the sealed block fields to canonical CBOR bytes.
///
/// The digest field itself is never part of its own pre-image, so only the
/// four sealed fields appear here. The missing predecessor of the genesis
/// block encodes as CBOR null.
pub fn seal_bytes(height: u64, body: &[u8], time: i64, prev: Option<&BlockDigest>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(body.len() + 64);

    // map(4); keys 0..=3 are already in canonical (sorted) order
    buf.push(0xa4);

    encode_uint(&mut buf, 0, keys::HEIGHT);
    encode_uint(&mut buf, 0, height);

    encode_uint(&mut buf, 0, keys::BODY);
    encode_bytes(&mut buf, body);

    encode_uint(&mut buf, 0, keys::TIME);
    encode_int(&mut buf, time);

    encode_uint(&mut buf, 0, keys::PREV);
    match prev {
        Some(digest) => encode_bytes(&mut buf, digest.as_bytes()),
        None => buf.push(0xf6), // null
    }

    buf
}

/// Encode a signed integer (major types 0 and 1).
fn encode_int(buf: &mut Vec<u8>, n: i64) {
    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}
