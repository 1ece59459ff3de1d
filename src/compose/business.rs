use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{pick, select_random_subset, PromptComposer};

/// Chance that a caller-supplied description gets an extra enhancement phrase.
const ENHANCE_PROBABILITY: f64 = 0.3;
const FEATURE_COUNT: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdeaMetadata {
    pub business_type: String,
    pub features: Vec<String>,
    pub name: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessIdea {
    pub prompt: String,
    pub metadata: BusinessIdeaMetadata,
}

impl<'c> PromptComposer<'c> {
    /// Randomly appends an enhancement phrase to a custom description.
    pub fn fill_custom_gaps<R: Rng>(&self, rng: &mut R, description: &str) -> String {
        if rng.gen_bool(ENHANCE_PROBABILITY) {
            let enhancement = pick(rng, self.catalogs().business.enhancements);
            format!("{description} {enhancement}")
        } else {
            description.to_string()
        }
    }

    /// A named product of a given type with a handful of features and a bold
    /// color treatment, for callers that want a branded interface.
    pub fn compose_business_idea<R: Rng>(&self, rng: &mut R, custom: Option<&str>) -> BusinessIdea {
        let business = &self.catalogs().business;
        let colors = *pick(rng, business.color_schemes);

        let custom = custom.map(str::trim).filter(|d| !d.is_empty());
        let (business_type, article) = match custom {
            Some(description) => (self.fill_custom_gaps(rng, description), ""),
            None => (pick(rng, business.types).to_string(), "a "),
        };
        let name = self.generate_project_name(rng);
        let features: Vec<String> = select_random_subset(rng, business.features, FEATURE_COUNT, FEATURE_COUNT)
            .into_iter()
            .map(str::to_string)
            .collect();

        let prompt = format!(
            "Create a web interface for \"{name}\" - {article}{business_type}.\n\n\
             CRITICAL: The application name \"{name}\" MUST appear prominently in the interface (e.g., in the header, logo, or title bar).\n\n\
             VISUAL STYLE: Use {colors}\n\n\
             The interface should include:\n- {features}\n\n\
             This is {article}{business_type} - make it IMMEDIATELY OBVIOUS what this tool does.\n\
             Show the actual working application with realistic data that someone would see while using it.\n\
             Include specific examples that match the use case perfectly.\n\
             Make it visually striking with the specified color scheme.",
            features = features.join("\n- "),
        );

        BusinessIdea {
            prompt,
            metadata: BusinessIdeaMetadata {
                business_type,
                features,
                name,
                is_custom: custom.is_some(),
            },
        }
    }
}
