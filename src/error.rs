//! Structured error types for the wire codec, zone text parser, and resolver.
//!
//! The three enums are deliberately separate: wire errors come back as plain
//! `Result::Err` values on the hot decode path and are usually discarded
//! (the receive loop keeps listening), zone errors carry operator-facing
//! reasons and propagate, and resolve errors abort an in-flight exchange.

use std::fmt;
use std::io;

/// Binary wire-format errors. Any of these means "this is not valid wire
/// data" (or, on the encode side, "the destination buffer ran out").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes remain than a length field or fixed field demands
    TruncatedPacket,
    /// Encode destination exhausted before the value was fully written
    BufferTooSmall,
    /// A name's encoded form exceeds the 255-byte limit
    NameTooLong,
    /// Label length byte with the reserved `01`/`10` high bits
    ReservedLabel,
    /// Compression pointer that is forward, self-referential, out of
    /// bounds, or chased past the hop bound
    InvalidCompressionPointer,
    /// Rdata not fully consumed by its type's transcoder
    TrailingRdata,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::TruncatedPacket => write!(f, "truncated packet"),
            WireError::BufferTooSmall => write!(f, "encode buffer too small"),
            WireError::NameTooLong => write!(f, "name exceeds 255 encoded bytes"),
            WireError::ReservedLabel => write!(f, "reserved label type bits"),
            WireError::InvalidCompressionPointer => {
                write!(f, "invalid compression pointer")
            }
            WireError::TrailingRdata => write!(f, "rdata has trailing bytes"),
        }
    }
}

impl std::error::Error for WireError {}

/// Zonefile-text errors. Each carries a human-readable reason; these are
/// deterministic on fixed input and propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// The record line does not have the expected field structure
    MalformedRecord(String),
    /// TTL is not an integer in [1, 999999999]
    InvalidTtl(String),
    /// Class other than IN
    UnsupportedClass(String),
    /// Unknown type mnemonic, the wildcard type ANY, or a known type with
    /// no registered text parser
    UnsupportedType(String),
    /// Rdata text does not match the type's grammar
    MalformedRdata(String),
    /// RFC 3597 escape form with bad hex or a length mismatch
    MalformedEscapedRdata(String),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::MalformedRecord(msg) => write!(f, "malformed record: {}", msg),
            ZoneError::InvalidTtl(msg) => write!(f, "invalid TTL: {}", msg),
            ZoneError::UnsupportedClass(msg) => write!(f, "unsupported class: {}", msg),
            ZoneError::UnsupportedType(msg) => write!(f, "unsupported type: {}", msg),
            ZoneError::MalformedRdata(msg) => write!(f, "malformed rdata: {}", msg),
            ZoneError::MalformedEscapedRdata(msg) => {
                write!(f, "malformed escaped rdata: {}", msg)
            }
        }
    }
}

impl std::error::Error for ZoneError {}

/// Resolution protocol errors. These abort the in-flight exchange; socket
/// cleanup still runs on every path.
#[derive(Debug)]
pub enum ResolveError {
    /// Binding the ephemeral-port socket failed
    Bind(io::Error),
    /// The encoded query does not fit the send buffer
    EncodeOverflow,
    /// The send primitive reported an error
    SendFailed(io::Error),
    /// Readiness notification failed
    Io(io::Error),
    /// The external deadline expired
    Timeout,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Bind(e) => write!(f, "failed to bind query socket: {}", e),
            ResolveError::EncodeOverflow => {
                write!(f, "encoded query does not fit the send buffer")
            }
            ResolveError::SendFailed(e) => write!(f, "send failed: {}", e),
            ResolveError::Io(e) => write!(f, "socket readiness error: {}", e),
            ResolveError::Timeout => write!(f, "query timed out"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Bind(e) | ResolveError::SendFailed(e) | ResolveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_wire_error_display() {
        assert_eq!(WireError::TruncatedPacket.to_string(), "truncated packet");
        assert_eq!(
            WireError::InvalidCompressionPointer.to_string(),
            "invalid compression pointer"
        );
        assert!(WireError::NameTooLong.to_string().contains("255"));
    }

    #[test]
    fn test_zone_error_display_carries_reason() {
        let err = ZoneError::InvalidTtl("got 0".to_string());
        assert_eq!(err.to_string(), "invalid TTL: got 0");

        let err = ZoneError::UnsupportedClass("CH".to_string());
        assert!(err.to_string().contains("CH"));

        let err = ZoneError::MalformedEscapedRdata("odd number of hex digits".to_string());
        assert!(err.to_string().contains("odd number"));
    }

    #[test]
    fn test_resolve_error_display() {
        assert!(ResolveError::Timeout.to_string().contains("timed out"));
        assert!(ResolveError::EncodeOverflow
            .to_string()
            .contains("send buffer"));
    }

    #[test]
    fn test_resolve_error_source() {
        let io_err = io::Error::new(io::ErrorKind::AddrInUse, "in use");
        assert!(ResolveError::Bind(io_err).source().is_some());
        assert!(ResolveError::Timeout.source().is_none());
        assert!(ResolveError::EncodeOverflow.source().is_none());
    }
}
