use super::{Question, RecordType};
use std::net::IpAddr;
use std::sync::Arc;

/// TTL of every synthesized record: one day.
pub const ANSWER_TTL: u32 = 86_400;

/// A single A or AAAA record of class IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub address: IpAddr,
}

/// Successful outcome of an encoded-name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question: Question,
    pub decoded: IpAddr,
    /// Zero or one record. Empty when the query type does not match the
    /// decoded address family; that is still a NOERROR reply.
    pub record: Option<AddressRecord>,
}

impl Answer {
    pub fn build(question: Question, decoded: IpAddr) -> Self {
        let record = match (question.record_type, decoded) {
            (RecordType::A, IpAddr::V4(_)) | (RecordType::AAAA, IpAddr::V6(_)) => {
                Some(AddressRecord {
                    name: Arc::clone(&question.name),
                    ttl: ANSWER_TTL,
                    address: decoded,
                })
            }
            _ => None,
        };

        Self {
            question,
            decoded,
            record,
        }
    }
}
