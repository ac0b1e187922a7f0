use sofia_config::SofiaConfig;
use sofia_generation::{MarkerClassifier, PromptTemplate, SatisfactionClassifier};
use sofia_resources::ResourceSuggester;
use sofia_search::RetrievalParams;

/// Pipeline knobs that are not external services.
pub struct AssistantSettings {
    pub assistant_name: String,
    pub prompt: PromptTemplate,
    pub retrieval: RetrievalParams,
    pub classifier: Box<dyn SatisfactionClassifier>,
    pub suggester: ResourceSuggester,
    /// Prefix of the answer shown when generation fails.
    pub generation_error_prefix: String,
}

impl AssistantSettings {
    #[must_use]
    pub fn from_config(config: &SofiaConfig) -> Self {
        Self {
            assistant_name: config.assistant.name.clone(),
            prompt: PromptTemplate::from_config(&config.assistant),
            retrieval: RetrievalParams {
                top_k: config.retrieval.top_k,
                threshold: config.retrieval.threshold,
            },
            classifier: Box::new(MarkerClassifier::new(&config.escalation.markers)),
            suggester: ResourceSuggester::from_config(&config.resources),
            generation_error_prefix: config.assistant.generation_error_prefix.clone(),
        }
    }

    /// Swap the satisfaction strategy.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl SatisfactionClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self::from_config(&SofiaConfig::default())
    }
}
