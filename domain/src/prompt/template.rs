//! Prompt templates for generated property descriptions

use crate::description::ValidatedRequest;

/// Templates for building generator prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Framing line placed at the top of every description prompt
    pub fn copywriter_intro() -> &'static str {
        "You are an expert real estate copywriter. Generate a compelling property description based on the following information:"
    }

    /// Closing instruction placed at the end of every description prompt
    pub fn copywriter_closing() -> &'static str {
        r#"Write a description that highlights the best aspects of the property and its location. The description should be engaging and persuasive, encouraging potential buyers or renters to inquire further."#
    }

    /// Prompt for a property description.
    ///
    /// The proximity and neighborhood sections appear only when the request
    /// carries them; an absent field leaves no label and no blank section.
    pub fn property_description(request: &ValidatedRequest) -> String {
        let mut prompt = format!(
            "{}\n\nProperty Features: {}\nProperty Location: {}\n",
            Self::copywriter_intro(),
            request.features(),
            request.location()
        );

        if let Some(parks) = request.proximity_to_parks() {
            prompt.push_str(&format!("\nProximity to Parks: {}\n", parks));
        }

        if let Some(quality) = request.neighborhood_quality() {
            prompt.push_str(&format!("\nNeighborhood Quality: {}\n", quality));
        }

        prompt.push('\n');
        prompt.push_str(Self::copywriter_closing());
        prompt.push('\n');

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::DescriptionRequest;

    fn request(parks: Option<&str>, quality: Option<&str>) -> ValidatedRequest {
        let mut request = DescriptionRequest::new("4 bed, pool", "Austin, TX");
        if let Some(p) = parks {
            request = request.with_proximity_to_parks(p);
        }
        if let Some(q) = quality {
            request = request.with_neighborhood_quality(q);
        }
        request.validate().unwrap()
    }

    #[test]
    fn test_required_fields_interpolated() {
        let prompt = PromptTemplate::property_description(&request(None, None));
        assert!(prompt.starts_with("You are an expert real estate copywriter."));
        assert!(prompt.contains("Property Features: 4 bed, pool\n"));
        assert!(prompt.contains("Property Location: Austin, TX\n"));
        assert!(prompt.trim_end().ends_with("inquire further."));
    }

    #[test]
    fn test_optional_sections_omitted_when_absent() {
        let prompt = PromptTemplate::property_description(&request(None, None));
        assert!(!prompt.contains("Proximity to Parks"));
        assert!(!prompt.contains("Neighborhood Quality"));
        assert!(!prompt.contains("\n\n\n"));
    }

    #[test]
    fn test_optional_sections_included_when_present() {
        let prompt =
            PromptTemplate::property_description(&request(Some("5 min walk"), Some("safe, leafy")));
        assert!(prompt.contains("Proximity to Parks: 5 min walk\n"));
        assert!(prompt.contains("Neighborhood Quality: safe, leafy\n"));

        let parks_at = prompt.find("Proximity to Parks").unwrap();
        let quality_at = prompt.find("Neighborhood Quality").unwrap();
        let location_at = prompt.find("Property Location").unwrap();
        assert!(location_at < parks_at && parks_at < quality_at);
    }

    #[test]
    fn test_only_one_optional_section() {
        let prompt = PromptTemplate::property_description(&request(None, Some("vibrant")));
        assert!(!prompt.contains("Proximity to Parks"));
        assert!(prompt.contains("Neighborhood Quality: vibrant"));
    }

    #[test]
    fn test_whitespace_optional_section_is_kept() {
        let prompt = PromptTemplate::property_description(&request(Some(" "), Some("")));
        assert!(prompt.contains("Proximity to Parks:  \n"));
        assert!(!prompt.contains("Neighborhood Quality"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptTemplate::property_description(&request(Some("near"), None));
        let b = PromptTemplate::property_description(&request(Some("near"), None));
        assert_eq!(a, b);
    }
}
