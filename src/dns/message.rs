//! DNS message and question codec.
//!
//! A message owns the symbol table built from the datagram it was decoded
//! from; messages built locally carry an empty table. Encoding never emits
//! name compression.

use crate::dns::rr::{pad_column, pad_to_tab_stop, RR};
use crate::dns::rrtype::{Opcode, RecordClass, RecordType, ResponseCode};
use crate::dns::wire::{get_u16, put_u16, Name, SymbolTable};
use crate::error::WireError;
use rand::Rng;
use std::fmt;

/// Fixed header: six big-endian 16-bit words
pub const HEADER_SIZE: usize = 12;

/// One question section entry: name, query type, query class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(name: Name, qtype: RecordType, qclass: RecordClass) -> Question {
        Question {
            name,
            qtype,
            qclass,
        }
    }

    /// Decode from the packet held by `syms`, starting at `pos`
    pub fn decode(syms: &SymbolTable, pos: usize) -> Result<(Question, usize), WireError> {
        let (name, pos) = Name::decode(syms, pos)?;
        let (qtype, pos) = get_u16(syms.packet(), pos)?;
        let (qclass, pos) = get_u16(syms.packet(), pos)?;
        Ok((
            Question {
                name,
                qtype: RecordType::from_u16(qtype),
                qclass: RecordClass::from_u16(qclass),
            },
            pos,
        ))
    }

    pub fn encode(&self, dst: &mut [u8], pos: usize) -> Result<usize, WireError> {
        let pos = self.name.encode(dst, pos)?;
        let pos = put_u16(dst, pos, self.qtype.to_u16())?;
        put_u16(dst, pos, self.qclass.to_u16())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = self.name.to_string();
        pad_column(&mut line, 32);
        pad_to_tab_stop(&mut line);
        line.push_str(&self.qclass.to_string());
        line.push(' ');
        line.push_str(&self.qtype.to_string());
        f.write_str(&line)
    }
}

/// A DNS message: header fields plus the four record sections
#[derive(Debug, Clone)]
pub struct Message {
    pub id: u16,
    /// false = query, true = response
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub rcode: ResponseCode,
    pub questions: Vec<Question>,
    pub answers: Vec<RR>,
    pub authority: Vec<RR>,
    pub additional: Vec<RR>,
    symbols: SymbolTable,
}

impl Default for Message {
    fn default() -> Message {
        Message {
            id: 0,
            qr: false,
            opcode: Opcode::Query,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            rcode: ResponseCode::NoError,
            questions: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            symbols: SymbolTable::empty(),
        }
    }
}

impl Message {
    /// Build a fresh query: random transaction id drawn from `rng`, opcode
    /// QUERY, QR clear, the one question appended.
    pub fn begin_query<R: Rng>(question: Question, rng: &mut R) -> Message {
        let mut query = Message::default();
        query.id = rng.gen();
        query.opcode = Opcode::Query;
        query.qr = false;
        query.questions.push(question);
        query
    }

    /// Build an empty response to `query`: id, opcode, and RD copied, QR
    /// set. The caller populates the sections.
    pub fn begin_response_to(query: &Message) -> Message {
        let mut response = Message::default();
        response.id = query.id;
        response.qr = true;
        response.opcode = query.opcode;
        response.rd = query.rd;
        response
    }

    /// The compression context of the datagram this message was decoded
    /// from (empty for locally built messages).
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Size of the decoded datagram; 0 for locally built messages
    pub fn packet_len(&self) -> usize {
        self.symbols.packet_len()
    }

    /// Decode a whole datagram. Returns the message and the number of
    /// bytes consumed, so the caller can detect (and merely log) trailing
    /// garbage. The symbol table is built over the full buffer before any
    /// section is decoded.
    pub fn decode(buf: &[u8]) -> Result<(Message, usize), WireError> {
        let (id, pos) = get_u16(buf, 0)?;
        let (fields, pos) = get_u16(buf, pos)?;
        let (qdcount, pos) = get_u16(buf, pos)?;
        let (ancount, pos) = get_u16(buf, pos)?;
        let (nscount, pos) = get_u16(buf, pos)?;
        let (arcount, mut pos) = get_u16(buf, pos)?;

        let mut msg = Message {
            id,
            qr: (fields >> 15) & 0x1 == 1,
            opcode: Opcode::from_u8(((fields >> 11) & 0xF) as u8),
            aa: (fields >> 10) & 0x1 == 1,
            tc: (fields >> 9) & 0x1 == 1,
            rd: (fields >> 8) & 0x1 == 1,
            ra: (fields >> 7) & 0x1 == 1,
            rcode: ResponseCode::from_u8((fields & 0xF) as u8),
            symbols: SymbolTable::build(buf),
            ..Message::default()
        };

        for _ in 0..qdcount {
            let (question, next) = Question::decode(&msg.symbols, pos)?;
            msg.questions.push(question);
            pos = next;
        }
        for _ in 0..ancount {
            let (rr, next) = RR::decode(&msg.symbols, pos)?;
            msg.answers.push(rr);
            pos = next;
        }
        for _ in 0..nscount {
            let (rr, next) = RR::decode(&msg.symbols, pos)?;
            msg.authority.push(rr);
            pos = next;
        }
        for _ in 0..arcount {
            let (rr, next) = RR::decode(&msg.symbols, pos)?;
            msg.additional.push(rr);
            pos = next;
        }
        Ok((msg, pos))
    }

    /// Encode into `dst`: header then every section entry in order, names
    /// fully spelled out. Returns the number of bytes written.
    pub fn encode(&self, dst: &mut [u8]) -> Result<usize, WireError> {
        let mut fields = (self.qr as u16) << 15;
        fields |= (self.opcode.to_u8() as u16) << 11;
        fields |= (self.aa as u16) << 10;
        fields |= (self.tc as u16) << 9;
        fields |= (self.rd as u16) << 8;
        fields |= (self.ra as u16) << 7;
        fields |= self.rcode.to_u8() as u16;

        let pos = put_u16(dst, 0, self.id)?;
        let pos = put_u16(dst, pos, fields)?;
        let pos = put_u16(dst, pos, self.questions.len() as u16)?;
        let pos = put_u16(dst, pos, self.answers.len() as u16)?;
        let pos = put_u16(dst, pos, self.authority.len() as u16)?;
        let mut pos = put_u16(dst, pos, self.additional.len() as u16)?;

        for question in &self.questions {
            pos = question.encode(dst, pos)?;
        }
        for rr in &self.answers {
            pos = rr.encode(dst, pos)?;
        }
        for rr in &self.authority {
            pos = rr.encode(dst, pos)?;
        }
        for rr in &self.additional {
            pos = rr.encode(dst, pos)?;
        }
        Ok(pos)
    }

    /// Dig-style multi-section report. Record lines expand name-bearing
    /// rdata through this message's symbol table, so corrupt rdata fails
    /// here rather than printing truncated values.
    pub fn dump(&self) -> Result<String, WireError> {
        let mut out = String::new();

        out.push_str(&format!(
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}\n",
            self.opcode, self.rcode, self.id
        ));

        out.push_str(";; flags: ");
        if self.qr {
            out.push_str(" qr");
        }
        if self.aa {
            out.push_str(" aa");
        }
        if self.tc {
            out.push_str(" tc");
        }
        if self.rd {
            out.push_str(" rd");
        }
        if self.ra {
            out.push_str(" ra");
        }
        out.push_str(&format!(
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}\n",
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len()
        ));

        if self.rd && !self.ra {
            out.push_str(";; WARNING: recursion requested but not available\n");
        }

        if !self.questions.is_empty() {
            out.push_str("\n;; QUESTION SECTION:\n");
            for question in &self.questions {
                out.push_str(&format!(";{}\n", question));
            }
        }

        if !self.answers.is_empty() {
            out.push_str("\n;; ANSWER SECTION:\n");
            for rr in &self.answers {
                out.push_str(&rr.zone_text(&self.symbols)?);
                out.push('\n');
            }
        }

        if !self.authority.is_empty() {
            out.push_str("\n;; AUTHORITY SECTION:\n");
            for rr in &self.authority {
                out.push_str(&rr.zone_text(&self.symbols)?);
                out.push('\n');
            }
        }

        // The additional section has always printed under the authority
        // header; callers parse this output, so the label stays.
        if !self.additional.is_empty() {
            out.push_str("\n;; AUTHORITY SECTION:\n");
            for rr in &self.additional {
                out.push_str(&rr.zone_text(&self.symbols)?);
                out.push('\n');
            }
        }

        Ok(out)
    }
}
