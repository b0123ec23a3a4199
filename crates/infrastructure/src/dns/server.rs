use super::record_type_map::RecordTypeMapper;
use super::wire_response::{
    build_answer_response, build_format_error, build_rejection_response, parse_message,
    peek_id, serialize_message,
};
use hickory_proto::op::{Message, MessageType};
use ipname_application::use_cases::ResolveEncodedNameUseCase;
use ipname_domain::DnsRequest;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns request bytes into reply bytes. Shared by the UDP and TCP workers.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveEncodedNameUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveEncodedNameUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the serialized reply, or `None` when nothing should be sent
    /// (responses, runt packets, encoder failures).
    pub fn handle_raw(&self, query_buf: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        let response = match parse_message(query_buf) {
            Ok(request) => {
                if request.message_type() == MessageType::Response {
                    debug!(client = %from, "Dropping DNS response sent to server");
                    return None;
                }
                self.handle_message(&request, from)
            }
            Err(e) => {
                let id = peek_id(query_buf)?;
                debug!(client = %from, error = %e, "Malformed DNS message");
                build_format_error(id)
            }
        };

        match serialize_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %from, error = %e, "Failed to serialize response");
                None
            }
        }
    }

    pub fn handle_message(&self, request: &Message, from: SocketAddr) -> Message {
        let questions = request
            .queries()
            .iter()
            .map(RecordTypeMapper::question_from_hickory)
            .collect();
        let dns_request = DnsRequest::new(questions, from);

        match self.use_case.execute(&dns_request) {
            Ok(answer) => build_answer_response(request, &answer),
            Err(e) => build_rejection_response(request, e.rejection()),
        }
    }
}
