#![allow(dead_code)]

use ipname_application::ports::QueryObserver;
use ipname_domain::{Answer, DnsRequest, QueryError};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    Answered(Answer),
    Rejected(QueryError),
}

/// Observer that keeps every outcome for later assertions.
#[derive(Default)]
pub struct RecordingQueryObserver {
    outcomes: Mutex<Vec<Observed>>,
}

impl RecordingQueryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<Observed> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn rejections(&self) -> Vec<QueryError> {
        self.outcomes()
            .into_iter()
            .filter_map(|o| match o {
                Observed::Rejected(e) => Some(e),
                Observed::Answered(_) => None,
            })
            .collect()
    }
}

impl QueryObserver for RecordingQueryObserver {
    fn on_answered(&self, _request: &DnsRequest, answer: &Answer) {
        self.outcomes
            .lock()
            .unwrap()
            .push(Observed::Answered(answer.clone()));
    }

    fn on_rejected(&self, _request: &DnsRequest, error: &QueryError) {
        self.outcomes
            .lock()
            .unwrap()
            .push(Observed::Rejected(error.clone()));
    }
}
