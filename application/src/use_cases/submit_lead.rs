//! Submit Lead use case
//!
//! Validates an inquiry or contact form, hands the lead to the configured
//! [`LeadSink`], and answers with the canned acknowledgement.

use crate::ports::lead_sink::{LeadSink, NoLeadSink};
use crate::use_cases::browse_catalog::BrowseCatalogUseCase;
use estate_domain::{ContactForm, InquiryForm, Lead, ValidationErrors};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitLeadError {
    #[error("{0}")]
    Invalid(ValidationErrors),
}

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
    pub lead: Lead,
}

/// Use case for inquiry and contact submissions
#[derive(Clone)]
pub struct SubmitLeadUseCase {
    sink: Arc<dyn LeadSink>,
    catalog: Option<BrowseCatalogUseCase>,
}

impl SubmitLeadUseCase {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self {
            sink,
            catalog: None,
        }
    }

    /// Without a sink; validated leads are dropped after acknowledgement
    pub fn discarding() -> Self {
        Self::new(Arc::new(NoLeadSink))
    }

    /// Cross-check inquiry property ids against `catalog` (warning only)
    pub fn with_catalog(mut self, catalog: BrowseCatalogUseCase) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn submit_inquiry(&self, form: InquiryForm) -> Result<Acknowledgement, SubmitLeadError> {
        if let Some(catalog) = &self.catalog
            && !catalog.contains(&form.property_id)
        {
            warn!(property_id = %form.property_id, "Inquiry for a property not in the catalog");
        }
        self.accept(form.validate())
    }

    pub fn submit_contact(&self, form: ContactForm) -> Result<Acknowledgement, SubmitLeadError> {
        self.accept(form.validate())
    }

    fn accept(
        &self,
        validated: Result<Lead, ValidationErrors>,
    ) -> Result<Acknowledgement, SubmitLeadError> {
        let lead = validated.map_err(SubmitLeadError::Invalid)?;

        info!(kind = lead.kind(), "New lead received");
        self.sink.record(&lead);

        Ok(Acknowledgement {
            message: lead.acknowledgement().to_string(),
            lead,
        })
    }
}
