use ipname_domain::{Answer, DnsRequest, QueryError};

/// Receives the outcome of every processed query.
///
/// Injected into the use case at construction so that logging stays out of
/// the core and tests can record outcomes instead.
pub trait QueryObserver: Send + Sync {
    fn on_answered(&self, request: &DnsRequest, answer: &Answer);

    fn on_rejected(&self, request: &DnsRequest, error: &QueryError);
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullQueryObserver;

impl QueryObserver for NullQueryObserver {
    fn on_answered(&self, _request: &DnsRequest, _answer: &Answer) {}

    fn on_rejected(&self, _request: &DnsRequest, _error: &QueryError) {}
}
