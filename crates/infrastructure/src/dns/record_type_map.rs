//! Mapping between the domain's question types and `hickory_proto` ones.

use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use ipname_domain::{QueryClass, Question, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            other => RecordType::Other(u16::from(other)),
        }
    }

    pub fn class_from_hickory(class: DNSClass) -> QueryClass {
        match class {
            DNSClass::IN => QueryClass::Internet,
            other => QueryClass::Other(u16::from(other)),
        }
    }

    /// Converts a wire question into the domain form. The name keeps its
    /// wire spelling and always ends with the root dot.
    pub fn question_from_hickory(query: &Query) -> Question {
        Question::new(
            presentation_name(query.name()),
            Self::from_hickory(query.query_type()),
            Self::class_from_hickory(query.query_class()),
        )
    }
}

/// Renders label bytes as text. Only `.`, `\` and non-printable bytes are
/// escaped; `Name::to_ascii` also escapes a leading `-`, which would hide
/// hyphen-encoded IPv6 payloads such as `--1`.
fn presentation_name(name: &Name) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for label in name.iter() {
        for &byte in label {
            match byte {
                b'.' | b'\\' => {
                    out.push('\\');
                    out.push(byte as char);
                }
                0x21..=0x7E => out.push(byte as char),
                _ => out.push_str(&format!("\\{:03}", byte)),
            }
        }
        out.push('.');
    }
    if out.is_empty() {
        out.push('.');
    }
    out
}
