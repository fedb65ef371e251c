//! Patscout Extract - clients for the external collaborators
//!
//! The extraction engine and the WIPO IPC classification service live
//! outside this repository; this crate holds their HTTP plumbing, the
//! prompt templates fed to the extraction service, and the response
//! parsing.

pub mod error;
pub mod extractor;
pub mod ipc;
pub mod prompts;

pub use error::{Error, Result};
pub use extractor::HttpExtractor;
pub use ipc::{format_ipc_code, parse_predictions, IpcClient, IpcPrediction};
pub use prompts::{get_template, render, ExtractionPhase, PromptContext};
