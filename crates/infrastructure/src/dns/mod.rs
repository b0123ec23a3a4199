pub mod query_logger;
pub mod record_type_map;
pub mod server;
pub mod wire_response;

pub use query_logger::TracingQueryObserver;
pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
pub use wire_response::WireError;
