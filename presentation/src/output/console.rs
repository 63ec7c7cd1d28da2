//! Console output formatter for catalog and pipeline results

use colored::Colorize;
use estate_application::{Acknowledgement, GenerationError};
use estate_domain::{GeneratedDescription, Property, PropertyType, ValidationErrors};
use serde::Serialize;
use serde_json::json;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Listing view: count line followed by one card per property
    pub fn format_listing(properties: &[Property]) -> String {
        let mut output = String::new();

        let noun = if properties.len() == 1 {
            "property"
        } else {
            "properties"
        };
        output.push_str(&format!(
            "{}\n",
            format!("{} {} available", properties.len(), noun)
                .cyan()
                .bold()
        ));

        if properties.is_empty() {
            output.push_str("\nNo properties match your filters.\n");
            return output;
        }

        for property in properties {
            output.push('\n');
            output.push_str(&Self::card(property));
        }

        output
    }

    fn card(property: &Property) -> String {
        let mut card = String::new();
        let featured = if property.featured {
            format!(" {}", "[Featured]".yellow())
        } else {
            String::new()
        };

        card.push_str(&format!(
            "{} {}{}\n",
            format!("[{}]", property.id).dimmed(),
            property.title.bold(),
            featured
        ));
        card.push_str(&format!(
            "    {} · {}\n",
            property.property_type, property.address
        ));
        card.push_str(&format!(
            "    {} · {} beds · {} baths · {} sqft\n",
            Self::price(property.price).green().bold(),
            property.bedrooms,
            property.bathrooms,
            Self::thousands(u64::from(property.sqft))
        ));
        card
    }

    /// Detail view for a single property
    pub fn format_detail(property: &Property) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&property.title));
        output.push_str(&format!("{}\n", property.address));
        output.push_str(&format!("\n{}\n\n", Self::price(property.price).green().bold()));

        let facts = [
            ("Type", property.property_type.to_string()),
            ("Bedrooms", property.bedrooms.to_string()),
            ("Bathrooms", property.bathrooms.to_string()),
            ("Sq Ft", Self::thousands(u64::from(property.sqft))),
            ("Price/Sq Ft", Self::price(property.price_per_sqft())),
        ];
        for (label, value) in facts {
            output.push_str(&format!("  {:<12} {}\n", format!("{}:", label).cyan(), value));
        }

        output.push_str(&format!("\n{}\n", property.description));

        output.push_str(&format!("\n{}\n", "Images:".cyan().bold()));
        for image in &property.images {
            output.push_str(&format!("  * {} ({})\n", image.url, image.description));
        }

        output
    }

    /// Distinct types present in the catalog
    pub fn format_types(types: &[PropertyType]) -> String {
        let mut output = format!("{}\n", "Property types:".cyan().bold());
        for property_type in types {
            output.push_str(&format!("  * {}\n", property_type));
        }
        output
    }

    /// Dedicated view for an unknown property id
    pub fn format_not_found(id: &str) -> String {
        format!(
            "{}\n\nNo property with id '{}' exists. Run `estate list` to see what is available.\n",
            "Property Not Found".red().bold(),
            id
        )
    }

    /// Per-field validation messages
    pub fn format_validation_errors(errors: &ValidationErrors) -> String {
        let mut output = format!("{}\n", "Invalid input:".red().bold());
        for (field, message) in errors.iter() {
            output.push_str(&format!("  {} {}\n", format!("{}:", field).yellow(), message));
        }
        output
    }

    /// Single generic notice for a backend failure.
    ///
    /// Transient failures get a retry hint.
    pub fn format_service_error(error: &GenerationError) -> String {
        let mut output = format!(
            "{}\n{}\n",
            "Generation Failed: An unexpected error occurred while generating the description."
                .red()
                .bold(),
            format!("({})", error).dimmed()
        );
        if error.is_transient() {
            output.push_str(&format!("{}\n", "Please try again in a moment.".yellow()));
        }
        output
    }

    pub fn format_description(description: &GeneratedDescription) -> String {
        format!(
            "{}\n\n{}\n",
            "Generated description:".cyan().bold(),
            description.as_str()
        )
    }

    pub fn format_acknowledgement(ack: &Acknowledgement) -> String {
        format!("{} {}\n", "v".green(), ack.message)
    }

    /// Format any serializable result as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// JSON envelope for a not-found outcome
    pub fn format_not_found_json(id: &str) -> String {
        Self::format_json(&json!({ "error": "not_found", "id": id }))
    }

    /// JSON envelope for validation failures
    pub fn format_validation_errors_json(errors: &ValidationErrors) -> String {
        Self::format_json(&json!({ "error": "invalid_input", "fields": errors }))
    }

    /// JSON envelope for a backend failure
    pub fn format_service_error_json(error: &GenerationError) -> String {
        Self::format_json(&json!({
            "error": "service_error",
            "message": error.to_string(),
            "retryable": error.is_transient(),
        }))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(title.chars().count().max(20));
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    /// `$1,200,000`
    fn price(amount: u64) -> String {
        format!("${}", Self::thousands(amount))
    }

    /// Digits grouped by thousands with commas
    fn thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_domain::{ContactForm, Image};

    fn villa() -> Property {
        Property {
            id: "1".into(),
            title: "Modern Luxury Villa".to_string(),
            address: "123 Elegance Drive, Beverly Hills, CA".to_string(),
            description: "A stunning villa.".to_string(),
            price: 1_200_000,
            bedrooms: 5,
            bathrooms: 6,
            sqft: 5500,
            property_type: PropertyType::Villa,
            featured: true,
            images: vec![Image::placeholder()],
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(ConsoleFormatter::thousands(0), "0");
        assert_eq!(ConsoleFormatter::thousands(999), "999");
        assert_eq!(ConsoleFormatter::thousands(5500), "5,500");
        assert_eq!(ConsoleFormatter::thousands(1_200_000), "1,200,000");
        assert_eq!(ConsoleFormatter::price(2_500_000), "$2,500,000");
    }

    #[test]
    fn test_listing_count_line() {
        let one = ConsoleFormatter::format_listing(&[villa()]);
        assert!(one.contains("1 property available"));
        assert!(one.contains("Modern Luxury Villa"));
        assert!(one.contains("$1,200,000"));

        let none = ConsoleFormatter::format_listing(&[]);
        assert!(none.contains("0 properties available"));
    }

    #[test]
    fn test_detail_shows_price_per_sqft() {
        let detail = ConsoleFormatter::format_detail(&villa());
        assert!(detail.contains("$218"));
        assert!(detail.contains("5,500"));
        assert!(detail.contains("https://picsum.photos/seed/error/800/600"));
    }

    #[test]
    fn test_not_found_view() {
        let view = ConsoleFormatter::format_not_found("42");
        assert!(view.contains("Property Not Found"));
        assert!(view.contains("'42'"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_not_found_json("42")).unwrap();
        assert_eq!(json["error"], "not_found");
    }

    #[test]
    fn test_service_error_retry_hint() {
        let busy = ConsoleFormatter::format_service_error(&GenerationError::RateLimited);
        assert!(busy.contains("Generation Failed"));
        assert!(busy.contains("try again"));

        let cancelled = ConsoleFormatter::format_service_error(&GenerationError::Cancelled);
        assert!(cancelled.contains("Generation Failed"));
        assert!(!cancelled.contains("try again"));

        let json: serde_json::Value = serde_json::from_str(
            &ConsoleFormatter::format_service_error_json(&GenerationError::RateLimited),
        )
        .unwrap();
        assert_eq!(json["error"], "service_error");
        assert_eq!(json["retryable"], true);
    }

    #[test]
    fn test_validation_errors_json_is_field_keyed() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Invalid email address");
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_validation_errors_json(&errors))
                .unwrap();
        assert_eq!(json["fields"]["email"], "Invalid email address");

        let text = ConsoleFormatter::format_validation_errors(&errors);
        assert!(text.contains("Invalid email address"));
    }

    #[test]
    fn test_acknowledgement_json() {
        let lead = ContactForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
        .validate()
        .unwrap();
        let ack = Acknowledgement {
            message: lead.acknowledgement().to_string(),
            lead,
        };
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&ack)).unwrap();
        assert_eq!(json["lead"]["kind"], "contact");
        assert!(ConsoleFormatter::format_acknowledgement(&ack).contains("in touch soon"));
    }
}
