//! Check execution orchestration.

pub mod engine;
pub mod order;
pub mod selection;

pub use engine::{CheckRunner, RunDiagnostic, RunResults, RunState};
pub use order::{resolve_order, ResolvedOrder};
pub use selection::{select_checks, should_run};
