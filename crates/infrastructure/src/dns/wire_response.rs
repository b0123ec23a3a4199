//! Reply synthesis for encoded-name queries.
//!
//! Replies echo the request id, opcode, RD/CD flags and question section.
//! Successful answers are authoritative; rejections are not.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use ipname_domain::{Answer, Rejection};
use std::net::IpAddr;
use thiserror::Error;

/// Size of the fixed DNS header.
pub const HEADER_LEN: usize = 12;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Failed to decode DNS message: {0}")]
    Decode(String),

    #[error("Failed to serialize DNS message: {0}")]
    Encode(String),
}

pub fn parse_message(bytes: &[u8]) -> Result<Message, WireError> {
    Message::from_vec(bytes).map_err(|e| WireError::Decode(e.to_string()))
}

/// Builds the NOERROR reply carrying the answer's record, if any.
pub fn build_answer_response(request: &Message, answer: &Answer) -> Message {
    let mut response = reply_to(request);
    response.set_authoritative(true);

    if let (Some(record), Some(query)) = (&answer.record, request.queries().first()) {
        let rdata = match record.address {
            IpAddr::V4(ipv4) => RData::A(A(ipv4)),
            IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
        };
        // Owner is the question name; case is not guaranteed to survive encoding.
        response.add_answer(Record::from_rdata(query.name().clone(), record.ttl, rdata));
    }

    response
}

pub fn build_rejection_response(request: &Message, rejection: Rejection) -> Message {
    let mut response = reply_to(request);
    response.set_response_code(response_code(rejection));
    response
}

/// FORMERR reply for bytes that did not decode. Only the id survives.
pub fn build_format_error(id: u16) -> Message {
    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_response_code(ResponseCode::FormErr);
    response
}

/// Reads the transaction id from a raw buffer holding at least a header.
pub fn peek_id(bytes: &[u8]) -> Option<u16> {
    if bytes.len() < HEADER_LEN {
        return None;
    }
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub fn response_code(rejection: Rejection) -> ResponseCode {
    match rejection {
        Rejection::Refused => ResponseCode::Refused,
        Rejection::NameError => ResponseCode::NXDomain,
    }
}

pub fn serialize_message(message: &Message) -> Result<Vec<u8>, WireError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| WireError::Encode(e.to_string()))?;

    Ok(buf)
}

fn reply_to(request: &Message) -> Message {
    let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
    response.set_recursion_desired(request.recursion_desired());
    response.set_checking_disabled(request.checking_disabled());
    for query in request.queries() {
        response.add_query(query.clone());
    }
    response
}
