use ipname_application::ports::QueryObserver;
use ipname_domain::{Answer, DnsRequest, QueryError};
use tracing::{info, warn};

/// Query observer that writes structured `tracing` events.
///
/// Answers are logged at `info`, rejections at `warn` with the reason the
/// query was turned away.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingQueryObserver;

impl TracingQueryObserver {
    pub fn new() -> Self {
        Self
    }
}

impl QueryObserver for TracingQueryObserver {
    fn on_answered(&self, request: &DnsRequest, answer: &Answer) {
        info!(
            qname = %answer.question.name,
            qtype = %answer.question.record_type,
            ip = %answer.decoded,
            answers = answer.record.is_some() as u8,
            from = %request.client,
            "incoming query"
        );
    }

    fn on_rejected(&self, request: &DnsRequest, error: &QueryError) {
        let qtype = request
            .questions
            .first()
            .map(|q| q.record_type.to_string())
            .unwrap_or_else(|| "-".to_string());

        warn!(
            qname = request.qname().unwrap_or("-"),
            questions = request.questions.len(),
            qtype = %qtype,
            rcode = error.rejection().as_str(),
            from = %request.client,
            error = %error,
            "{}",
            error.reason()
        );
    }
}
