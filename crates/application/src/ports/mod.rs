mod query_observer;

pub use query_observer::{NullQueryObserver, QueryObserver};
