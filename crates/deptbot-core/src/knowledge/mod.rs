//! Static department knowledge base.
//!
//! ## Department layout
//!
//! The responder serves six records, five academic departments plus one
//! synthetic bucket for cross-cutting facts:
//!
//! | Id                     | Holds                                          |
//! |------------------------|------------------------------------------------|
//! | ComputerScience        | facilities, courses, admission, description    |
//! | ElectricalEngineering  | facilities, courses, admission                 |
//! | MechanicalEngineering  | facilities                                     |
//! | CivilEngineering       | facilities                                     |
//! | Architecture           | facilities                                     |
//! | General                | campus-wide admission rules, fee schedule      |
//!
//! The table is built once at process start and never mutated; `General` is
//! the fallback source for admission and fee facts regardless of which
//! department a query matched.

mod store;

pub use store::{DepartmentId, DepartmentRecord, KnowledgeBase};
