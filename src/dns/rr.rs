//! Resource records and the rdata transcoder registry.
//!
//! On the wire an RR's rdata is an opaque length-prefixed blob; only the
//! textual layer interprets it, through a read-only registry of per-type
//! transcoders. Types without an entry fall back to the RFC 3597 escape
//! form when printing; there is no such fallback when parsing.

use crate::dns::rrtype::{RecordClass, RecordType};
use crate::dns::wire::{get_u16, get_u32, put_bytes, put_u16, put_u32, Name, SymbolTable};
use crate::error::{WireError, ZoneError};
use std::net::Ipv4Addr;

/// One resource record: owner name, type, class, TTL, raw rdata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RR {
    pub name: Name,
    pub rrtype: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl RR {
    /// Decode from the packet held by `syms`, starting at `pos`. The rdata
    /// bytes are stored uninterpreted.
    pub fn decode(syms: &SymbolTable, pos: usize) -> Result<(RR, usize), WireError> {
        let (name, pos) = Name::decode(syms, pos)?;
        let (rrtype, pos) = get_u16(syms.packet(), pos)?;
        let (class, pos) = get_u16(syms.packet(), pos)?;
        let (ttl, pos) = get_u32(syms.packet(), pos)?;
        let (rdlength, pos) = get_u16(syms.packet(), pos)?;
        let end = pos + rdlength as usize;
        if end > syms.packet_len() {
            return Err(WireError::TruncatedPacket);
        }
        Ok((
            RR {
                name,
                rrtype: RecordType::from_u16(rrtype),
                class: RecordClass::from_u16(class),
                ttl,
                rdata: syms.packet()[pos..end].to_vec(),
            },
            end,
        ))
    }

    pub fn encode(&self, dst: &mut [u8], pos: usize) -> Result<usize, WireError> {
        debug_assert!(self.rdata.len() <= u16::MAX as usize);
        let pos = self.name.encode(dst, pos)?;
        let pos = put_u16(dst, pos, self.rrtype.to_u16())?;
        let pos = put_u16(dst, pos, self.class.to_u16())?;
        let pos = put_u32(dst, pos, self.ttl)?;
        let pos = put_u16(dst, pos, self.rdata.len() as u16)?;
        put_bytes(dst, pos, &self.rdata)
    }

    /// The single domain name held in NS/CNAME rdata, expanded through the
    /// packet's compression context.
    pub fn rhs_name(&self, syms: &SymbolTable) -> Result<Name, WireError> {
        debug_assert!(matches!(self.rrtype, RecordType::NS | RecordType::CNAME));
        let (name, next) = Name::decode_embedded(syms, &self.rdata, 0)?;
        if next != self.rdata.len() {
            return Err(WireError::TrailingRdata);
        }
        Ok(name)
    }

    /// One zonefile-style line: owner name, TTL, class, type, rdata text.
    /// Name-bearing rdata expands through `syms`; a transcoder that does
    /// not consume the rdata exactly reports the corruption instead of
    /// printing a truncated value.
    pub fn zone_text(&self, syms: &SymbolTable) -> Result<String, WireError> {
        let mut out = self.name.to_string();
        pad_column(&mut out, 32);
        pad_to_tab_stop(&mut out);
        out.push_str(&self.ttl.to_string());
        pad_to_tab_stop(&mut out);
        out.push_str(&self.class.to_string());
        out.push(' ');
        out.push_str(&self.rrtype.to_string());
        pad_to_tab_stop(&mut out);
        match transcoder_for(self.rrtype) {
            Some(transcoder) => out.push_str(&transcoder.text(syms, &self.rdata)?),
            None => out.push_str(&escape_generic(&self.rdata)),
        }
        Ok(out)
    }

    /// Parse one zonefile-style line: `<name> <ttl> <class> <type>
    /// <rdata-text>`. TTL must be in [1, 999999999], class must be IN, the
    /// type must be a known mnemonic other than ANY. Rdata text starting
    /// with `\#` is hex-unescaped generically; otherwise the type's
    /// registered parser runs, and a type without one is an error.
    pub fn from_zone_text(line: &str) -> Result<RR, ZoneError> {
        let structure = "expected <name> <ttl> <class> <type> <rdata>";
        let (name_tok, rest) = next_token(line)
            .ok_or_else(|| ZoneError::MalformedRecord(structure.to_string()))?;
        let (ttl_tok, rest) =
            next_token(rest).ok_or_else(|| ZoneError::MalformedRecord(structure.to_string()))?;
        let (class_tok, rest) =
            next_token(rest).ok_or_else(|| ZoneError::MalformedRecord(structure.to_string()))?;
        let (type_tok, rest) =
            next_token(rest).ok_or_else(|| ZoneError::MalformedRecord(structure.to_string()))?;
        let rdata_text = rest.trim();

        let name: Name = name_tok.parse()?;

        let ttl = match ttl_tok.parse::<u64>() {
            Ok(v) if (1..=999_999_999).contains(&v) => v as u32,
            _ => {
                return Err(ZoneError::InvalidTtl(format!(
                    "{:?} is not an integer in [1, 999999999]",
                    ttl_tok
                )))
            }
        };

        let class: RecordClass = class_tok.parse()?;

        let rrtype: RecordType = type_tok.parse()?;
        if rrtype == RecordType::ANY {
            return Err(ZoneError::UnsupportedType(
                "the wildcard type ANY cannot appear in a record".to_string(),
            ));
        }

        let rdata = if rdata_text.starts_with("\\#") {
            unescape_generic(rdata_text)?
        } else {
            match transcoder_for(rrtype) {
                Some(transcoder) => transcoder.wire(rdata_text)?,
                None => {
                    return Err(ZoneError::UnsupportedType(format!(
                        "no text parser for records of type {}",
                        rrtype
                    )))
                }
            }
        };

        Ok(RR {
            name,
            rrtype,
            class,
            ttl,
            rdata,
        })
    }
}

// ==================== Text layout helpers ====================

/// Pad with at least one space, out to `min_width`
pub(crate) fn pad_column(out: &mut String, min_width: usize) {
    loop {
        out.push(' ');
        if out.len() >= min_width {
            break;
        }
    }
}

/// Pad with at least one space, out to the next 8-column boundary
pub(crate) fn pad_to_tab_stop(out: &mut String) {
    loop {
        out.push(' ');
        if out.len() % 8 == 0 {
            break;
        }
    }
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}

fn name_to_wire(name: &Name) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.encoded_len());
    for label in name.labels() {
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);
    out
}

// ==================== Transcoder registry ====================

/// Bidirectional rdata transcoder for one record type.
///
/// `text` must consume the rdata exactly: leftover bytes are
/// `TrailingRdata`, missing bytes are `TruncatedPacket`; either one means
/// the wire data is corrupt for this type.
pub trait RdataTranscoder: Sync {
    fn rrtype(&self) -> RecordType;

    /// Wire rdata to zonefile text
    fn text(&self, syms: &SymbolTable, rdata: &[u8]) -> Result<String, WireError>;

    /// Zonefile text to wire rdata
    fn wire(&self, text: &str) -> Result<Vec<u8>, ZoneError>;
}

/// A: a 4-byte IPv4 address, dotted quad in text
struct ARdata;

impl RdataTranscoder for ARdata {
    fn rrtype(&self) -> RecordType {
        RecordType::A
    }

    fn text(&self, _syms: &SymbolTable, rdata: &[u8]) -> Result<String, WireError> {
        if rdata.len() < 4 {
            return Err(WireError::TruncatedPacket);
        }
        if rdata.len() > 4 {
            return Err(WireError::TrailingRdata);
        }
        Ok(Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]).to_string())
    }

    fn wire(&self, text: &str) -> Result<Vec<u8>, ZoneError> {
        let addr: Ipv4Addr = text.parse().map_err(|_| {
            ZoneError::MalformedRdata("record of type A has a malformed IP address".to_string())
        })?;
        Ok(addr.octets().to_vec())
    }
}

/// NS/CNAME/PTR: a single domain name consuming the entire rdata
struct NameRdata(RecordType);

impl RdataTranscoder for NameRdata {
    fn rrtype(&self) -> RecordType {
        self.0
    }

    fn text(&self, syms: &SymbolTable, rdata: &[u8]) -> Result<String, WireError> {
        let (name, next) = Name::decode_embedded(syms, rdata, 0)?;
        if next != rdata.len() {
            return Err(WireError::TrailingRdata);
        }
        Ok(name.to_string())
    }

    fn wire(&self, text: &str) -> Result<Vec<u8>, ZoneError> {
        let wrong = || {
            ZoneError::MalformedRdata(format!("record of type {} has the wrong format", self.0))
        };
        let (token, rest) = next_token(text).ok_or_else(wrong)?;
        if !rest.trim().is_empty() {
            return Err(wrong());
        }
        let name: Name = token.parse().map_err(|_| wrong())?;
        Ok(name_to_wire(&name))
    }
}

/// SOA: primary master and responsible-person names, then serial, refresh,
/// retry, expire, and negative-caching TTL
struct SoaRdata;

impl RdataTranscoder for SoaRdata {
    fn rrtype(&self) -> RecordType {
        RecordType::SOA
    }

    fn text(&self, syms: &SymbolTable, rdata: &[u8]) -> Result<String, WireError> {
        let (primary_master, pos) = Name::decode_embedded(syms, rdata, 0)?;
        let (responsible_person, pos) = Name::decode_embedded(syms, rdata, pos)?;
        let (serial, pos) = get_u32(rdata, pos)?;
        let (refresh, pos) = get_u32(rdata, pos)?;
        let (retry, pos) = get_u32(rdata, pos)?;
        let (expire, pos) = get_u32(rdata, pos)?;
        let (negative_caching_ttl, pos) = get_u32(rdata, pos)?;
        if pos != rdata.len() {
            return Err(WireError::TrailingRdata);
        }
        Ok(format!(
            "{} {} {} {} {} {} {}",
            primary_master, responsible_person, serial, refresh, retry, expire,
            negative_caching_ttl
        ))
    }

    fn wire(&self, text: &str) -> Result<Vec<u8>, ZoneError> {
        let wrong =
            || ZoneError::MalformedRdata("record of type SOA has the wrong format".to_string());
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 7 {
            return Err(wrong());
        }
        let primary_master: Name = tokens[0].parse().map_err(|_| wrong())?;
        let responsible_person: Name = tokens[1].parse().map_err(|_| wrong())?;
        let mut out = name_to_wire(&primary_master);
        out.extend_from_slice(&name_to_wire(&responsible_person));
        for token in &tokens[2..] {
            let value: u32 = token.parse().map_err(|_| wrong())?;
            out.extend_from_slice(&value.to_be_bytes());
        }
        Ok(out)
    }
}

/// MX: 16-bit preference followed by the exchange name
struct MxRdata;

impl RdataTranscoder for MxRdata {
    fn rrtype(&self) -> RecordType {
        RecordType::MX
    }

    fn text(&self, syms: &SymbolTable, rdata: &[u8]) -> Result<String, WireError> {
        let (preference, pos) = get_u16(rdata, 0)?;
        let (exchange, pos) = Name::decode_embedded(syms, rdata, pos)?;
        if pos != rdata.len() {
            return Err(WireError::TrailingRdata);
        }
        Ok(format!("{} {}", preference, exchange))
    }

    fn wire(&self, text: &str) -> Result<Vec<u8>, ZoneError> {
        let wrong =
            || ZoneError::MalformedRdata("record of type MX has the wrong format".to_string());
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(wrong());
        }
        let preference: u64 = tokens[0].parse().map_err(|_| wrong())?;
        if preference > u16::MAX as u64 {
            return Err(ZoneError::MalformedRdata(
                "record of type MX has an out-of-range preference".to_string(),
            ));
        }
        let exchange: Name = tokens[1].parse().map_err(|_| wrong())?;
        let mut out = (preference as u16).to_be_bytes().to_vec();
        out.extend_from_slice(&name_to_wire(&exchange));
        Ok(out)
    }
}

// One entry per type code, read-only for the life of the process
static TRANSCODERS: [&(dyn RdataTranscoder); 6] = [
    &ARdata,
    &NameRdata(RecordType::NS),
    &NameRdata(RecordType::CNAME),
    &SoaRdata,
    &NameRdata(RecordType::PTR),
    &MxRdata,
];

/// Look up the transcoder registered for `rrtype`
pub fn transcoder_for(rrtype: RecordType) -> Option<&'static dyn RdataTranscoder> {
    TRANSCODERS
        .iter()
        .find(|transcoder| transcoder.rrtype() == rrtype)
        .copied()
}

// ==================== RFC 3597 escape form ====================

/// `\# <length> <lowercase hex>` for record types with no transcoder
/// (RFC 3597 "Handling of Unknown DNS Resource Record (RR) Types", §5)
pub fn escape_generic(rdata: &[u8]) -> String {
    let mut out = format!("\\# {}", rdata.len());
    if !rdata.is_empty() {
        out.push(' ');
        for byte in rdata {
            out.push_str(&format!("{:02x}", byte));
        }
    }
    out
}

/// Parse the `\# <length> <hex>` form; whitespace may split the hex bytes
pub fn unescape_generic(text: &str) -> Result<Vec<u8>, ZoneError> {
    let rest = text.strip_prefix("\\#").ok_or_else(|| {
        ZoneError::MalformedEscapedRdata("missing \\# marker".to_string())
    })?;
    let mut tokens = rest.split_whitespace();
    let declared: usize = tokens
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(|| ZoneError::MalformedEscapedRdata("missing or bad length".to_string()))?;

    let mut bytes = Vec::with_capacity(declared);
    let mut high: Option<u8> = None;
    for token in tokens {
        for ch in token.chars() {
            let digit = ch.to_digit(16).ok_or_else(|| {
                ZoneError::MalformedEscapedRdata(format!("invalid hex digit {:?}", ch))
            })? as u8;
            high = match high {
                None => Some(digit),
                Some(h) => {
                    bytes.push((h << 4) | digit);
                    None
                }
            };
        }
    }
    if high.is_some() {
        return Err(ZoneError::MalformedEscapedRdata(
            "odd number of hex digits".to_string(),
        ));
    }
    if bytes.len() != declared {
        return Err(ZoneError::MalformedEscapedRdata(format!(
            "declared {} bytes, got {}",
            declared,
            bytes.len()
        )));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_syms() -> SymbolTable {
        SymbolTable::empty()
    }

    fn rdata_roundtrip(rrtype: RecordType, rdata: &[u8]) -> String {
        let transcoder = transcoder_for(rrtype).unwrap();
        let text = transcoder.text(&no_syms(), rdata).unwrap();
        assert_eq!(transcoder.wire(&text).unwrap(), rdata, "type {}", rrtype);
        text
    }

    #[test]
    fn test_a_rdata() {
        let text = rdata_roundtrip(RecordType::A, &[192, 0, 2, 1]);
        assert_eq!(text, "192.0.2.1");

        let a = transcoder_for(RecordType::A).unwrap();
        assert_eq!(
            a.text(&no_syms(), &[1, 2, 3]).unwrap_err(),
            WireError::TruncatedPacket
        );
        assert_eq!(
            a.text(&no_syms(), &[1, 2, 3, 4, 5]).unwrap_err(),
            WireError::TrailingRdata
        );
        assert!(matches!(
            a.wire("192.0.2").unwrap_err(),
            ZoneError::MalformedRdata(_)
        ));
        assert!(a.wire("192.0.2.1 junk").is_err());
    }

    #[test]
    fn test_name_rdata() {
        let ns: Name = "ns1.example.com.".parse().unwrap();
        let rdata = name_to_wire(&ns);
        for rrtype in [RecordType::NS, RecordType::CNAME, RecordType::PTR] {
            let text = rdata_roundtrip(rrtype, &rdata);
            assert_eq!(text, "ns1.example.com.");
        }

        let t = transcoder_for(RecordType::NS).unwrap();
        // Trailing byte after the name terminator
        let mut bad = rdata.clone();
        bad.push(0xFF);
        assert_eq!(
            t.text(&no_syms(), &bad).unwrap_err(),
            WireError::TrailingRdata
        );
        assert!(t.wire("one two").is_err());
        assert!(t.wire("").is_err());
    }

    #[test]
    fn test_soa_rdata() {
        let mut rdata = name_to_wire(&"ns1.example.com.".parse().unwrap());
        rdata.extend_from_slice(&name_to_wire(&"hostmaster.example.com.".parse().unwrap()));
        for value in [2024010101u32, 7200, 3600, 1209600, 300] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }

        let text = rdata_roundtrip(RecordType::SOA, &rdata);
        assert_eq!(
            text,
            "ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300"
        );

        let soa = transcoder_for(RecordType::SOA).unwrap();
        assert!(soa.wire("ns1.example.com. hostmaster.example.com. 1 2 3 4").is_err());
        assert!(soa
            .wire("ns1.example.com. hostmaster.example.com. one 2 3 4 5")
            .is_err());
        // Missing bytes at the tail
        assert_eq!(
            soa.text(&no_syms(), &rdata[..rdata.len() - 2]).unwrap_err(),
            WireError::TruncatedPacket
        );
    }

    #[test]
    fn test_soa_rdata_with_compressed_names() {
        // Packet: "example.com." at 0, "ns1" + pointer at 13
        let mut packet = name_to_wire(&"example.com.".parse().unwrap());
        let ns1_at = packet.len();
        packet.push(3);
        packet.extend_from_slice(b"ns1");
        packet.extend_from_slice(&[0xC0, 0x00]);
        let syms = SymbolTable::build(&packet);

        // Rdata spells both names as pointers into the packet
        let mut rdata = vec![0xC0, ns1_at as u8, 0xC0, 0x00];
        for value in [1u32, 2, 3, 4, 5] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }

        let soa = transcoder_for(RecordType::SOA).unwrap();
        let text = soa.text(&syms, &rdata).unwrap();
        assert_eq!(text, "ns1.example.com. example.com. 1 2 3 4 5");
    }

    #[test]
    fn test_mx_rdata() {
        let mut rdata = 10u16.to_be_bytes().to_vec();
        rdata.extend_from_slice(&name_to_wire(&"mail.example.com.".parse().unwrap()));

        let text = rdata_roundtrip(RecordType::MX, &rdata);
        assert_eq!(text, "10 mail.example.com.");

        let mx = transcoder_for(RecordType::MX).unwrap();
        assert!(mx.wire("ten mail.example.com.").is_err());
        assert!(mx.wire("10").is_err());
        let err = mx.wire("70000 mail.example.com.").unwrap_err();
        assert!(err.to_string().contains("out-of-range"));
    }

    #[test]
    fn test_no_transcoder_for_unknown_types() {
        assert!(transcoder_for(RecordType::TXT).is_none());
        assert!(transcoder_for(RecordType::Other(999)).is_none());
    }

    #[test]
    fn test_generic_escape_roundtrip() {
        assert_eq!(escape_generic(&[0xDE, 0xAD, 0xBE, 0xEF]), "\\# 4 deadbeef");
        assert_eq!(
            unescape_generic("\\# 4 deadbeef").unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
        // Hex may be split and uppercase on input
        assert_eq!(
            unescape_generic("\\# 4 DE AD be ef").unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
        assert_eq!(escape_generic(&[]), "\\# 0");
        assert_eq!(unescape_generic("\\# 0").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_generic_escape_failures() {
        assert!(matches!(
            unescape_generic("\\# 2 abc").unwrap_err(),
            ZoneError::MalformedEscapedRdata(_)
        ));
        assert!(matches!(
            unescape_generic("\\# 3 abcd").unwrap_err(),
            ZoneError::MalformedEscapedRdata(_)
        ));
        assert!(matches!(
            unescape_generic("\\# 2 zzzz").unwrap_err(),
            ZoneError::MalformedEscapedRdata(_)
        ));
        assert!(unescape_generic("\\#").is_err());
    }

    #[test]
    fn test_zone_line_roundtrip() {
        let rr = RR {
            name: "example.com.".parse().unwrap(),
            rrtype: RecordType::A,
            class: RecordClass::IN,
            ttl: 3600,
            rdata: vec![192, 0, 2, 1],
        };
        let line = rr.zone_text(&no_syms()).unwrap();
        assert!(line.starts_with("example.com."));
        assert!(line.contains("3600"));
        assert!(line.contains("IN A"));
        assert!(line.ends_with("192.0.2.1"));

        let parsed = RR::from_zone_text(&line).unwrap();
        assert_eq!(parsed, rr);
    }

    #[test]
    fn test_zone_line_escaped_rdata() {
        // TXT has a mnemonic but no transcoder: plain text fails, the
        // escape form works
        assert!(matches!(
            RR::from_zone_text("example.com. 300 IN TXT hello").unwrap_err(),
            ZoneError::UnsupportedType(_)
        ));

        let rr = RR::from_zone_text("example.com. 300 IN TXT \\# 4 deadbeef").unwrap();
        assert_eq!(rr.rdata, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(rr.rrtype, RecordType::TXT);
    }

    #[test]
    fn test_zone_line_ttl_window() {
        for good in ["1", "999999999"] {
            let line = format!("example.com. {} IN A 192.0.2.1", good);
            assert!(RR::from_zone_text(&line).is_ok(), "ttl {}", good);
        }
        for bad in ["0", "1000000000", "-1", "soon"] {
            let line = format!("example.com. {} IN A 192.0.2.1", bad);
            assert!(
                matches!(
                    RR::from_zone_text(&line).unwrap_err(),
                    ZoneError::InvalidTtl(_)
                ),
                "ttl {}",
                bad
            );
        }
    }

    #[test]
    fn test_zone_line_class_and_type_policy() {
        assert!(matches!(
            RR::from_zone_text("example.com. 300 CH A 192.0.2.1").unwrap_err(),
            ZoneError::UnsupportedClass(_)
        ));
        assert!(matches!(
            RR::from_zone_text("example.com. 300 IN ANY 192.0.2.1").unwrap_err(),
            ZoneError::UnsupportedType(_)
        ));
        assert!(matches!(
            RR::from_zone_text("example.com. 300 IN BOGUS 192.0.2.1").unwrap_err(),
            ZoneError::UnsupportedType(_)
        ));
    }

    #[test]
    fn test_zone_line_structure_errors() {
        assert!(matches!(
            RR::from_zone_text("example.com. 300 IN").unwrap_err(),
            ZoneError::MalformedRecord(_)
        ));
        assert!(RR::from_zone_text("").is_err());
        assert!(RR::from_zone_text("bad..name 300 IN A 192.0.2.1").is_err());
    }

    #[test]
    fn test_zone_line_whitespace_tolerant() {
        let rr = RR::from_zone_text("  example.com.   300  IN  MX   10   mail.example.com.  ")
            .unwrap();
        assert_eq!(rr.rrtype, RecordType::MX);
        assert_eq!(rr.ttl, 300);
    }

    #[test]
    fn test_rr_wire_roundtrip() {
        // Hand-built packet holding one RR at offset 0
        let rr = RR {
            name: "www.example.com.".parse().unwrap(),
            rrtype: RecordType::A,
            class: RecordClass::IN,
            ttl: 86400,
            rdata: vec![93, 184, 216, 34],
        };
        let mut buf = [0u8; 256];
        let end = rr.encode(&mut buf, 0).unwrap();

        let syms = SymbolTable::build(&buf[..end]);
        let (decoded, next) = RR::decode(&syms, 0).unwrap();
        assert_eq!(decoded, rr);
        assert_eq!(next, end);
    }

    #[test]
    fn test_rr_decode_rdlength_overrun() {
        let rr = RR {
            name: "example.com.".parse().unwrap(),
            rrtype: RecordType::A,
            class: RecordClass::IN,
            ttl: 60,
            rdata: vec![192, 0, 2, 1],
        };
        let mut buf = [0u8; 256];
        let end = rr.encode(&mut buf, 0).unwrap();

        // Drop the last rdata byte; rdlength now overruns the packet
        let syms = SymbolTable::build(&buf[..end - 1]);
        assert_eq!(
            RR::decode(&syms, 0).unwrap_err(),
            WireError::TruncatedPacket
        );
    }

    #[test]
    fn test_rhs_name() {
        let mut packet = name_to_wire(&"example.com.".parse().unwrap());
        let target_at = packet.len();
        packet.push(2);
        packet.extend_from_slice(b"ns");
        packet.extend_from_slice(&[0xC0, 0x00]);
        let syms = SymbolTable::build(&packet);

        let rr = RR {
            name: "example.com.".parse().unwrap(),
            rrtype: RecordType::NS,
            class: RecordClass::IN,
            ttl: 300,
            rdata: vec![0xC0, target_at as u8],
        };
        assert_eq!(rr.rhs_name(&syms).unwrap().to_string(), "ns.example.com.");
    }

    #[test]
    fn test_unknown_type_zone_text_uses_escape_form() {
        let rr = RR {
            name: "example.com.".parse().unwrap(),
            rrtype: RecordType::Other(999),
            class: RecordClass::IN,
            ttl: 60,
            rdata: vec![0xDE, 0xAD, 0xBE, 0xEF],
        };
        let line = rr.zone_text(&no_syms()).unwrap();
        assert!(line.contains("TYPE999"));
        assert!(line.ends_with("\\# 4 deadbeef"));
    }
}
