//! VoxVault Engine — the tiered command-resolution orchestrator.
//!
//! Sequences the free local keyword tier, the quota/credential/connectivity
//! gate, and the remote fallback into one final [`ResolvedCommand`] per
//! transcript, plus the mapping from abstract document tags to concrete
//! vault identifiers.

pub mod connectivity;
pub mod mapper;
pub mod orchestrator;

pub use connectivity::{AssumeOnline, Connectivity};
pub use mapper::map_to_document_id;
pub use orchestrator::Orchestrator;
