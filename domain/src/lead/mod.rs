//! Lead subdomain: visitor inquiries and contact messages.

pub mod forms;

pub use forms::{ContactForm, InquiryForm, Lead, is_valid_email};
