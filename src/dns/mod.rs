//! DNS message engine: wire codec, zone text transcoding, stub resolution.

mod message;
mod resolver;
mod rr;
mod rrtype;
mod wire;

pub use message::{Message, Question, HEADER_SIZE};
pub use resolver::{DatagramChannel, Digger, StubResolver};
pub use rr::{escape_generic, transcoder_for, unescape_generic, RdataTranscoder, RR};
pub use rrtype::{Opcode, RecordClass, RecordType, ResponseCode};
pub use wire::{Name, SymbolTable};
