//! Integration tests for the lab experiment engine
//!
//! Tests are organized by topic:
//! - `catalog` - Catalog registry and builder DSL
//! - `models` - Calculation model registry, formulas, and the stub fallback
//! - `identify` - Pre-lab variable identification gate
//! - `session_flow` - End-to-end session scenarios (record, gate, export feed)

mod catalog;
mod session_flow;
