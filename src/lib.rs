//! promptkit: splice free-form text into prompt templates, keep a short
//! history of results, and copy or export them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::*;
pub use domain::{
    ExportFormat, HistoryEntry, ResolveOptions, Session, Template, TemplateDraft, resolve,
};
