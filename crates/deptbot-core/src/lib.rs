//! deptbot-core: rule-based department question answering.
//!
//! Control flow is strictly linear per query: guardrail → classifier →
//! composer, over a knowledge base that is immutable after construction.
//! The whole path is a total function, so any number of queries can be
//! processed concurrently without locking.

mod agent;
mod classify;
mod compose;
mod knowledge;
mod shared;

pub use agent::QueryProcessor;
pub use classify::{classify, is_related, Classification, Intent};
pub use compose::compose;
pub use knowledge::{DepartmentId, DepartmentRecord, KnowledgeBase};
pub use shared::{CoreConfig, QueryResponse};
