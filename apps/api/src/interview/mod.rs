// Interview engine: catalog → selection → per-answer scoring → session log → report.
// Everything here is synchronous and deterministic; handlers are thin wrappers.

pub mod catalog;
pub mod handlers;
pub mod report;
pub mod scorer;
pub mod selector;
pub mod service;
pub mod session;
