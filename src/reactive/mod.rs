//! Minimal reactive plumbing shared by the repository and the presenter.
//!
//! - [`relay`]: latest-value broadcast cell with terminal failure
//! - [`subscription`]: drop-to-dispose observer handle

pub mod relay;
pub mod subscription;

pub use relay::{Observer, Relay, Signal};
pub use subscription::Subscription;
