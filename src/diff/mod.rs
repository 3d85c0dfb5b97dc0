//! Equality-then-lazy-action-construction protocol.
//!
//! The engine never constructs an update action itself; it only decides
//! whether the caller's deferred builder should run. Aggregating the produced
//! actions across fields and entity types is the caller's concern.

mod differ;
mod engine;

pub use differ::ReferenceDiffer;
pub use engine::{
    build_update_action, build_update_action_for_references, build_update_actions,
    try_build_update_action, try_build_update_actions,
};
