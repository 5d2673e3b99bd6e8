//! Core chat components
//!
//! This module contains the turn orchestration between the session and the worker.

mod chat;

pub use chat::{ChatController, TurnError, TurnOutcome};
