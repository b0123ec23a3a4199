use crate::ports::QueryObserver;
use crate::services::QueryCounters;
use ipname_domain::{
    decode_address, Answer, DnsRequest, QueryClass, QueryError, Question, SuffixSet,
};
use std::sync::Arc;

/// Answers `<encoded-ip>.<suffix>.` queries with the address they carry.
///
/// Every call counts one query; every rejection additionally counts one
/// error. The transformation itself is synchronous and holds no locks, so a
/// single instance is shared by all transport workers.
pub struct ResolveEncodedNameUseCase {
    suffixes: Arc<SuffixSet>,
    counters: QueryCounters,
    observer: Arc<dyn QueryObserver>,
}

impl ResolveEncodedNameUseCase {
    pub fn new(
        suffixes: Arc<SuffixSet>,
        counters: QueryCounters,
        observer: Arc<dyn QueryObserver>,
    ) -> Self {
        Self {
            suffixes,
            counters,
            observer,
        }
    }

    pub fn execute(&self, request: &DnsRequest) -> Result<Answer, QueryError> {
        self.counters.record_query();

        match self.resolve(request) {
            Ok(answer) => {
                self.observer.on_answered(request, &answer);
                Ok(answer)
            }
            Err(e) => {
                self.counters.record_error();
                self.observer.on_rejected(request, &e);
                Err(e)
            }
        }
    }

    fn resolve(&self, request: &DnsRequest) -> Result<Answer, QueryError> {
        let question = single_internet_question(request)?;

        let payload = self
            .suffixes
            .trim(&question.name)
            .ok_or_else(|| QueryError::SuffixMismatch(Arc::clone(&question.name)))?;

        let address =
            decode_address(payload).map_err(|source| QueryError::AddressDecodeFailure {
                name: Arc::clone(&question.name),
                source,
            })?;

        Ok(Answer::build(question.clone(), address))
    }
}

fn single_internet_question(request: &DnsRequest) -> Result<&Question, QueryError> {
    let question = match request.questions.as_slice() {
        [question] => question,
        questions => {
            return Err(QueryError::MalformedQuery(format!(
                "expected exactly one question, got {}",
                questions.len()
            )))
        }
    };

    if question.class != QueryClass::Internet {
        return Err(QueryError::MalformedQuery(format!(
            "unsupported class {}",
            question.class.code()
        )));
    }

    Ok(question)
}
