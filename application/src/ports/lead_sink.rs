//! Port for handing off validated leads.
//!
//! A lead sink is the notification/storage collaborator behind the inquiry
//! and contact forms. `record` is synchronous and non-fallible; sinks log
//! their own write failures.

use estate_domain::Lead;

/// Receives every validated lead.
pub trait LeadSink: Send + Sync {
    fn record(&self, lead: &Lead);
}

/// Discards every lead. Used in tests and when no sink is configured.
pub struct NoLeadSink;

impl LeadSink for NoLeadSink {
    fn record(&self, _lead: &Lead) {}
}
