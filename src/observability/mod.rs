//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/countrydir/countrydir-otlp.json`,
//! rotated at 10 MB with three backups. The level comes from the `trace_level`
//! plugin option (default `info`).
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider and exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
