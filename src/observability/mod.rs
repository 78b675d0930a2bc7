//! Observability for geodir
//!
//! Log lines are the observable surface of the core: load-failure
//! recovery, persist failures, and lifecycle events all emit one
//! structured line each. There is no metrics layer.

mod logger;

pub use logger::{Logger, Severity};
