//! Chatflow execution tools.
//!
//! Four variants of the same call, differing only in the extra context they
//! send: plain, with conversation history, with file uploads, and with a
//! captured lead email. All of them run non-streaming.

pub mod basic;
pub mod files;
pub mod history;
pub mod lead;
mod run;

pub use basic::{CreatePredictionParams, CreatePredictionTool};
pub use files::{CreatePredictionWithFilesParams, CreatePredictionWithFilesTool};
pub use history::{CreatePredictionWithHistoryParams, CreatePredictionWithHistoryTool};
pub use lead::{CreatePredictionWithLeadParams, CreatePredictionWithLeadTool};
