//! Process-boundary command facade for casement windows.
//!
//! Commands arriving from other processes name their target window by
//! [`WindowId`](casement_common::WindowId). The [`CommandDispatcher`]
//! resolves the id per call and treats a window that has since closed as a
//! silent no-op. The [`UrlRouter`] classifies "open URL" events from the OS
//! into file opens and extension-development opens. [`WindowsFacade`] owns
//! both and releases the router's subscriptions on dispose.

pub mod commands;
pub mod dispatcher;
pub mod facade;
pub mod lookup;
pub mod router;

#[cfg(test)]
mod fakes;

pub use commands::{CommandMessage, CommandReply, ReplyOutcome, WindowCommand};
pub use dispatcher::{Collaborators, CommandDispatcher};
pub use facade::WindowsFacade;
pub use lookup::WindowLookup;
pub use router::{UrlRouter, UrlRoutes};
