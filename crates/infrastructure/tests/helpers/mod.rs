#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use ipname_application::ports::NullQueryObserver;
use ipname_application::services::QueryCounters;
use ipname_application::use_cases::ResolveEncodedNameUseCase;
use ipname_domain::SuffixSet;
use ipname_infrastructure::dns::wire_response::serialize_message;
use ipname_infrastructure::dns::DnsServerHandler;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const CLIENT: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9)), 53000);

pub fn make_handler(domains: &[&str]) -> (DnsServerHandler, QueryCounters) {
    let counters = QueryCounters::new();
    let use_case = ResolveEncodedNameUseCase::new(
        Arc::new(SuffixSet::from_domains(domains)),
        counters.clone(),
        Arc::new(NullQueryObserver),
    );
    (DnsServerHandler::new(Arc::new(use_case)), counters)
}

pub fn question(name: &str, record_type: RecordType, class: DNSClass) -> Query {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(class);
    query
}

pub fn query_message(id: u16, questions: Vec<Query>) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    for q in questions {
        message.add_query(q);
    }
    message
}

pub fn query_bytes(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let message = query_message(id, vec![question(name, record_type, DNSClass::IN)]);
    serialize_message(&message).unwrap()
}

/// Hand-built query bytes, so label text reaches the server exactly as given.
pub fn raw_query_bytes(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0]);
    for label in name.trim_end_matches('.').split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf
}
