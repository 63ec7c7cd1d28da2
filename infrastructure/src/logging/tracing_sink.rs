//! Lead sink that only emits a structured log event.

use estate_application::ports::lead_sink::LeadSink;
use estate_domain::Lead;
use tracing::info;

/// Default sink when no lead log file is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLeadSink;

impl LeadSink for TracingLeadSink {
    fn record(&self, lead: &Lead) {
        match lead {
            Lead::Inquiry(form) => info!(
                kind = "inquiry",
                property_id = %form.property_id,
                property_title = %form.property_title,
                name = %form.name,
                email = %form.email,
                "Inquiry submitted"
            ),
            Lead::Contact(form) => info!(
                kind = "contact",
                subject = %form.subject,
                name = %form.name,
                email = %form.email,
                "Contact message submitted"
            ),
        }
    }
}
