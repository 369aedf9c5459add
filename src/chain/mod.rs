//! The dispense chain.
//!
//! An ordered sequence of handlers, one per denomination, highest first.
//! Each handler dispenses what it can and forwards the remainder:
//!
//! - **Handler**: one tier and the arena index of its successor
//! - **Chain**: the immutable arena, built once and validated
//! - **Dispatcher**: request validation in front of the chain head

pub mod builder;
pub mod dispatcher;
pub mod handler;

pub use builder::{Chain, ChainBuilder, DEFAULT_DENOMINATIONS, Links, build_chain};
pub use dispatcher::Dispatcher;
pub use handler::{Handler, Step};
