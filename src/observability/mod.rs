//! OpenTelemetry tracing with file-based OTLP export.
//!
//! `tracing` spans emitted anywhere in the crate are bridged into OpenTelemetry
//! and written as OTLP JSON lines to a rotating file:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → CatalogsSpanExporter → catalogs-otlp.json
//! ```
//!
//! The trace file lives in the data directory
//! (see [`get_data_dir`](crate::infrastructure::get_data_dir)) and rotates at
//! 10 MB, keeping three backups.
//!
//! # Configuration
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the
//! `trace_level` config key, otherwise `"info"`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider and span exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_file_path};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "catalogs";
