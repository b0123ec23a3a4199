use std::net::SocketAddr;
use std::sync::Arc;

/// Query type of an incoming question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    /// Any other type, by its numeric code.
    Other(u16),
}

impl RecordType {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    Internet,
    Other(u16),
}

impl QueryClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => QueryClass::Internet,
            other => QueryClass::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryClass::Internet => 1,
            QueryClass::Other(code) => *code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Fully-qualified name in presentation form, trailing dot included.
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: QueryClass,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: QueryClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}

/// One inbound query as handed over by the transport.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub questions: Vec<Question>,
    /// Source of the query. Only used to attribute log lines.
    pub client: SocketAddr,
}

impl DnsRequest {
    pub fn new(questions: Vec<Question>, client: SocketAddr) -> Self {
        Self { questions, client }
    }

    /// Convenience for the common single-question shape.
    pub fn single(question: Question, client: SocketAddr) -> Self {
        Self::new(vec![question], client)
    }

    /// The first question's name, when there is one.
    pub fn qname(&self) -> Option<&str> {
        self.questions.first().map(|q| q.name.as_ref())
    }
}
