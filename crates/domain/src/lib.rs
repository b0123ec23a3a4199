//! ipname domain layer
//!
//! Pure rules for turning an encoded query name into an address answer:
//! accepted suffixes, payload decoding, answer planning and the rejection
//! taxonomy. Nothing here touches the wire or the network.
pub mod address;
pub mod answer;
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod suffix;

pub use address::{decode_address, AddressDecodeError};
pub use answer::{AddressRecord, Answer, ANSWER_TTL};
pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use dns_query::{DnsRequest, QueryClass, Question, RecordType};
pub use errors::{QueryError, Rejection};
pub use suffix::SuffixSet;
