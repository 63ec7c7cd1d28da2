//! Logging infrastructure: lead hand-off sinks.
//!
//! Provides [`JsonlLeadLog`], a JSONL file writer, and [`TracingLeadSink`],
//! both implementing the [`LeadSink`](estate_application::LeadSink) port.

mod jsonl_lead_log;
mod tracing_sink;

pub use jsonl_lead_log::JsonlLeadLog;
pub use tracing_sink::TracingLeadSink;
