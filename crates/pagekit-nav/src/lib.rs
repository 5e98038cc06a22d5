//! Client-side navigation capability for pagekit.
//!
//! This crate defines the [`Router`] trait that view components use to
//! request route transitions, plus the implementations pagekit ships:
//!
//! - [`NullRouter`]: no-op (requests are dropped)
//! - [`SiteRouter`]: validates targets against a route table, then forwards
//! - [`RecordingRouter`]: in-memory test double that records every request
//!
//! Components hold the router as an injected capability (`&dyn Router` or
//! `Arc<dyn Router>`), never as a global, so tests can substitute
//! [`RecordingRouter`] and assert on the requests issued.
//!
//! Navigation is fire-and-forget: [`Router::navigate`] returns immediately
//! and the caller never observes whether the transition completed. Failure
//! handling for unknown routes belongs to the router, not to the component
//! that issued the request.

mod recording;
mod router;

pub use recording::{NavigationRequest, RecordingRouter};
pub use router::{NullRouter, Router, SiteRouter};
