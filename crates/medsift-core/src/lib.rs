//! Medsift Core Library
//!
//! Medication-mention extraction engine for veterinary clinical notes.
//!
//! # Architecture
//!
//! ```text
//! ConsultSources ──▶ Orchestrator (fields in priority order)
//!                         │
//!                         │  case_notes: flatten wellness/procedure JSON,
//!                         │  fall back to raw text on parse failure
//!                         ▼
//!                 Per-Source Extractor
//!            ┌───────────┼───────────────┐
//!            ▼           ▼               ▼
//!        Lexicon      Suffix      Dosage-Context
//!        (high)      (medium)        (medium)
//!            └───────────┼───────────────┘
//!                 shared already-found set
//!                        │
//!                        ▼
//!              Deduplicator / Ranker
//!          (case-insensitive by name, highest
//!           confidence wins, alphabetical output)
//! ```
//!
//! # Core Principle
//!
//! **Extraction never fails.** Malformed case-notes JSON is matched as
//! literal text, blank or absent fields are skipped, and the result is a
//! possibly empty list. The engine is a pure function over immutable
//! static tables: no I/O, no shared mutable state, safe to call from any
//! number of threads.
//!
//! # Modules
//!
//! - [`models`]: Domain types (ExtractedMedication, ConsultSources, etc.)
//! - [`lexicon`]: Static drug lexicon, suffix rules, exclusion denylist
//! - [`matcher`]: The three matching strategies and the per-source driver
//! - [`notes`]: Structured case-notes (wellness/procedure) flattening
//! - [`extractor`]: Multi-source orchestration, dedup, and ranking

pub mod extractor;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod notes;

// Re-export the public surface
pub use extractor::{extract_medication_names, extract_medications};
pub use models::{Confidence, ConsultSources, ExtractedMedication, SourceField};
