//! Dugout - a DNS message engine and dig-style stub resolver.
//!
//! This crate provides the wire codec, the zonefile-text transcoding layer,
//! and the single-shot resolution protocol, exposed as a library for the
//! `dugout` binary and for integration tests.

pub mod config;
pub mod dns;
pub mod error;
pub mod logging;
