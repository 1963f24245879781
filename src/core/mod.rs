//! # Core Application Logic
//!
//! Everything that answers visa questions once a dataset is in memory.
//! It knows nothing about any specific UI technology and does no I/O
//! (config loading aside).
//!
//! ```text
//!   VisaDataset ──▶ eligibility ──▶ Vec<destination> ──▶ region
//!                       ▲                 │
//!                   normalize             ▼
//!                                       trip
//!   OCR text ──▶ scan ──▶ session (owned by the UI layer)
//! ```
//!
//! ## Modules
//!
//! - [`eligibility`]: two-tier visa-free lookup
//! - [`region`]: six-region summary counts
//! - [`session`]: the `SessionContext` passed to handlers

pub mod config;
pub mod eligibility;
pub mod normalize;
pub mod region;
pub mod scan;
pub mod session;
pub mod trip;
