//! DNS wire format primitives (RFC 1035).
//!
//! Byte-level cursor helpers, domain names, and the per-packet symbol table
//! that expands compression pointers. All multi-byte fields are big-endian.

use crate::error::{WireError, ZoneError};
use std::fmt;
use std::str::FromStr;

// RFC 1035: maximum encoded name length (length octets + labels + terminator)
const MAX_NAME_LEN: usize = 255;
// RFC 1035: maximum label length is 63 octets
const MAX_LABEL_LEN: usize = 63;
// Top two bits of a length octet: 11 = compression pointer, 01/10 = reserved
const LABEL_TYPE_MASK: u8 = 0xC0;

// ==================== Cursor helpers ====================

pub(crate) fn get_u8(buf: &[u8], pos: usize) -> Result<(u8, usize), WireError> {
    match buf.get(pos) {
        Some(&b) => Ok((b, pos + 1)),
        None => Err(WireError::TruncatedPacket),
    }
}

pub(crate) fn get_u16(buf: &[u8], pos: usize) -> Result<(u16, usize), WireError> {
    if pos + 2 > buf.len() {
        return Err(WireError::TruncatedPacket);
    }
    Ok((u16::from_be_bytes([buf[pos], buf[pos + 1]]), pos + 2))
}

pub(crate) fn get_u32(buf: &[u8], pos: usize) -> Result<(u32, usize), WireError> {
    if pos + 4 > buf.len() {
        return Err(WireError::TruncatedPacket);
    }
    Ok((
        u32::from_be_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]]),
        pos + 4,
    ))
}

pub(crate) fn put_u16(dst: &mut [u8], pos: usize, value: u16) -> Result<usize, WireError> {
    if pos + 2 > dst.len() {
        return Err(WireError::BufferTooSmall);
    }
    dst[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
    Ok(pos + 2)
}

pub(crate) fn put_u32(dst: &mut [u8], pos: usize, value: u32) -> Result<usize, WireError> {
    if pos + 4 > dst.len() {
        return Err(WireError::BufferTooSmall);
    }
    dst[pos..pos + 4].copy_from_slice(&value.to_be_bytes());
    Ok(pos + 4)
}

pub(crate) fn put_bytes(dst: &mut [u8], pos: usize, bytes: &[u8]) -> Result<usize, WireError> {
    if pos + bytes.len() > dst.len() {
        return Err(WireError::BufferTooSmall);
    }
    dst[pos..pos + bytes.len()].copy_from_slice(bytes);
    Ok(pos + bytes.len())
}

// ==================== Name ====================

/// Where a name's compression pointers are allowed to land.
enum PointerScope {
    /// Decoding directly from the packet: a pointer must target an offset
    /// strictly before its own position.
    WithinPacket,
    /// Decoding from a detached rdata blob: a pointer may target any packet
    /// offset (chasing inside the packet still only moves backwards).
    DetachedRdata,
}

/// A domain name: an ordered list of 1-63 byte labels, raw bytes preserved.
///
/// The implicit empty root label is not stored; the encoded form is the
/// labels with their length octets plus a zero terminator, capped at 255
/// bytes total. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    /// The root name (no labels)
    pub fn root() -> Name {
        Name::default()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Encoded wire length: one length octet per label, the label bytes,
    /// and the zero terminator.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    fn push_label(&mut self, label: &[u8]) -> Result<(), WireError> {
        debug_assert!(!label.is_empty() && label.len() <= MAX_LABEL_LEN);
        if self.encoded_len() + label.len() + 1 > MAX_NAME_LEN {
            return Err(WireError::NameTooLong);
        }
        self.labels.push(label.to_vec());
        Ok(())
    }

    /// Decode a name from the packet held by `syms`, starting at the
    /// absolute offset `pos`. Returns the name and the offset just past its
    /// encoding (a compression pointer, when present, is always the final
    /// component).
    pub fn decode(syms: &SymbolTable, pos: usize) -> Result<(Name, usize), WireError> {
        Self::decode_in(syms, syms.packet(), pos, PointerScope::WithinPacket)
    }

    /// Decode a name embedded in a detached rdata blob. Pointers in the
    /// blob resolve against the original packet through `syms`.
    pub fn decode_embedded(
        syms: &SymbolTable,
        rdata: &[u8],
        pos: usize,
    ) -> Result<(Name, usize), WireError> {
        Self::decode_in(syms, rdata, pos, PointerScope::DetachedRdata)
    }

    fn decode_in(
        syms: &SymbolTable,
        buf: &[u8],
        mut pos: usize,
        scope: PointerScope,
    ) -> Result<(Name, usize), WireError> {
        let mut name = Name::root();
        loop {
            let (len_byte, next) = get_u8(buf, pos)?;
            let len = len_byte as usize;

            if len == 0 {
                return Ok((name, next));
            }

            if len_byte & LABEL_TYPE_MASK == LABEL_TYPE_MASK {
                let (low, next) = get_u8(buf, pos + 1)?;
                let target = ((len & 0x3F) << 8) | low as usize;
                let limit = match scope {
                    PointerScope::WithinPacket => pos,
                    PointerScope::DetachedRdata => syms.packet_len(),
                };
                syms.expand_into(&mut name, target, limit)?;
                return Ok((name, next));
            }

            if len_byte & LABEL_TYPE_MASK != 0 {
                return Err(WireError::ReservedLabel);
            }

            if pos + 1 + len > buf.len() {
                return Err(WireError::TruncatedPacket);
            }
            name.push_label(&buf[pos + 1..pos + 1 + len])?;
            pos += 1 + len;
        }
    }

    /// Encode at `pos` in `dst`: labels with length octets, then the zero
    /// terminator. Compression is never emitted. Returns the offset just
    /// past the terminator.
    pub fn encode(&self, dst: &mut [u8], mut pos: usize) -> Result<usize, WireError> {
        for label in &self.labels {
            if pos + 1 + label.len() > dst.len() {
                return Err(WireError::BufferTooSmall);
            }
            dst[pos] = label.len() as u8;
            dst[pos + 1..pos + 1 + label.len()].copy_from_slice(label);
            pos += 1 + label.len();
        }
        if pos >= dst.len() {
            return Err(WireError::BufferTooSmall);
        }
        dst[pos] = 0;
        Ok(pos + 1)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            write!(f, "{}.", String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = ZoneError;

    /// Parse the dotted text form. A trailing dot is accepted and implied;
    /// `"."` is the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ZoneError::MalformedRecord("empty name".to_string()));
        }
        if s == "." {
            return Ok(Name::root());
        }
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        let mut name = Name::root();
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(ZoneError::MalformedRecord(format!(
                    "empty label in name {:?}",
                    s
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(ZoneError::MalformedRecord(format!(
                    "label longer than {} bytes in name {:?}",
                    MAX_LABEL_LEN, s
                )));
            }
            name.push_label(label.as_bytes())
                .map_err(|_| ZoneError::MalformedRecord(format!("name {:?} too long", s)))?;
        }
        Ok(name)
    }
}

// ==================== SymbolTable ====================

/// Per-packet compression context: a snapshot of the packet's bytes, built
/// once at the start of message decode, that expands a pointer offset into
/// a full name on demand.
///
/// Chasing is iterative with strictly decreasing offsets, so adversarial
/// pointer chains terminate; a hop counter bounded by the packet length
/// backstops that.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    packet: Vec<u8>,
}

impl SymbolTable {
    /// Snapshot `packet`. Must happen before any section of the same
    /// message is decoded.
    pub fn build(packet: &[u8]) -> SymbolTable {
        SymbolTable {
            packet: packet.to_vec(),
        }
    }

    /// An empty table, backing messages that were built rather than decoded
    pub fn empty() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn packet(&self) -> &[u8] {
        &self.packet
    }

    pub fn packet_len(&self) -> usize {
        self.packet.len()
    }

    /// Expand the name starting at `offset` in the packet.
    pub fn resolve(&self, offset: usize) -> Result<Name, WireError> {
        let mut name = Name::root();
        self.expand_into(&mut name, offset, self.packet.len())?;
        Ok(name)
    }

    /// Append the labels starting at `start` to `name`, following
    /// compression pointers. `limit` is the exclusive upper bound for the
    /// first position (the pointer's own offset when chasing starts from a
    /// pointer inside the packet).
    fn expand_into(&self, name: &mut Name, start: usize, limit: usize) -> Result<(), WireError> {
        if start >= limit {
            return Err(WireError::InvalidCompressionPointer);
        }
        let mut pos = start;
        let mut hops = 0usize;
        loop {
            let (len_byte, _) = get_u8(&self.packet, pos)?;
            let len = len_byte as usize;

            if len == 0 {
                return Ok(());
            }

            if len_byte & LABEL_TYPE_MASK == LABEL_TYPE_MASK {
                hops += 1;
                if hops > self.packet.len() {
                    return Err(WireError::InvalidCompressionPointer);
                }
                let (low, _) = get_u8(&self.packet, pos + 1)?;
                let target = ((len & 0x3F) << 8) | low as usize;
                if target >= pos {
                    return Err(WireError::InvalidCompressionPointer);
                }
                pos = target;
                continue;
            }

            if len_byte & LABEL_TYPE_MASK != 0 {
                return Err(WireError::ReservedLabel);
            }

            if pos + 1 + len > self.packet.len() {
                return Err(WireError::TruncatedPacket);
            }
            name.push_label(&self.packet[pos + 1..pos + 1 + len])?;
            pos += 1 + len;
        }
    }
}
