use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalogs, ProjectArchetype};

pub mod business;

const CLOSING_DIRECTIVE: &str = "CRITICAL: Generate the ACTUAL APPLICATION INTERFACE as if taking a screenshot of someone's screen while they're using it. This is NOT a portfolio piece, NOT a showcase, NOT a demo - it's the real application in use right now. No \"powered by\" badges, no feature lists, no marketing copy - just the working interface with real data.";

/// Probability that a composition lists live metrics.
const METRICS_PROBABILITY: f64 = 0.7;
/// Probability that the tech stack carries a vector database.
const VECTOR_DB_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub ai: Vec<String>,
    pub ml: Vec<String>,
    pub vector_db: Option<String>,
    pub cloud: String,
    pub backend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    pub project_name: String,
    pub tagline: String,
    pub project_type: String,
    pub domain: String,
    pub design_style: String,
    pub color_scheme: String,
    pub tech_stack: TechStack,
    pub features: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedPrompt {
    pub text: String,
    pub metadata: PromptMetadata,
}

/// Which composer a caller wants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    Portfolio,
    Business,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Composition {
    Portfolio(ComposedPrompt),
    Business(business::BusinessIdea),
}

/// Toggles for the optional prompt sections. Anything the caller does not
/// set stays enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    pub include_metrics: bool,
    pub use_real_data: bool,
    pub industry_specific: bool,
    pub practical_features: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            include_metrics: true,
            use_real_data: true,
            industry_specific: true,
            practical_features: true,
        }
    }
}

/// The ways a product name can be synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStrategy {
    ShortToken,
    AbstractWord,
    DescriptiveCompound,
    PrefixSuffix,
    SingleWord,
    Invented,
    Acronym,
    Playful,
    WordPair,
}

impl NameStrategy {
    pub const ALL: [NameStrategy; 9] = [
        NameStrategy::ShortToken,
        NameStrategy::AbstractWord,
        NameStrategy::DescriptiveCompound,
        NameStrategy::PrefixSuffix,
        NameStrategy::SingleWord,
        NameStrategy::Invented,
        NameStrategy::Acronym,
        NameStrategy::Playful,
        NameStrategy::WordPair,
    ];
}

/// Uniform pick from a non-empty slice.
///
/// Panics on an empty slice; `Catalogs::validate` rules that out at startup.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "selection from an empty catalog");
    &items[rng.gen_range(0..items.len())]
}

/// Fisher-Yates shuffle of a copy of `items`, truncated to a length drawn
/// uniformly from `[min, max]`. `max` is clipped to the slice length and
/// `min` to `max`.
pub fn select_random_subset<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    min: usize,
    max: usize,
) -> Vec<T> {
    let max = max.min(items.len());
    let min = min.min(max);
    let count = rng.gen_range(min..=max);
    let mut pool = items.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

pub struct PromptComposer<'c> {
    catalogs: &'c Catalogs,
}

impl<'c> PromptComposer<'c> {
    pub fn new(catalogs: &'c Catalogs) -> Self {
        Self { catalogs }
    }

    pub fn catalogs(&self) -> &'c Catalogs {
        self.catalogs
    }

    pub fn select_random_project_archetype<R: Rng>(&self, rng: &mut R) -> &'c ProjectArchetype {
        pick(rng, self.catalogs.archetypes)
    }

    pub fn generate_project_name<R: Rng>(&self, rng: &mut R) -> String {
        let strategy = *pick(rng, &NameStrategy::ALL);
        self.name_with(strategy, rng)
    }

    pub fn name_with<R: Rng>(&self, strategy: NameStrategy, rng: &mut R) -> String {
        let names = &self.catalogs.names;
        match strategy {
            NameStrategy::ShortToken => pick(rng, names.short).to_string(),
            NameStrategy::AbstractWord => pick(rng, names.abstract_words).to_string(),
            NameStrategy::DescriptiveCompound => pick(rng, names.descriptive).to_string(),
            NameStrategy::PrefixSuffix => {
                format!("{}{}", pick(rng, names.prefixes), pick(rng, names.suffixes))
            }
            NameStrategy::SingleWord => pick(rng, names.single).to_string(),
            NameStrategy::Invented => pick(rng, names.invented).to_string(),
            NameStrategy::Acronym => pick(rng, names.acronyms).to_string(),
            NameStrategy::Playful => pick(rng, names.playful).to_string(),
            NameStrategy::WordPair => {
                let pair = pick(rng, names.word_pairs);
                format!("{}{}{}", pick(rng, pair.heads), pair.separator, pick(rng, pair.tails))
            }
        }
    }

    pub fn generate_tagline<R: Rng>(&self, rng: &mut R, domain: &str) -> String {
        let action = pick(rng, self.catalogs.tagline_actions);
        let outcome = pick(rng, self.catalogs.tagline_outcomes);
        format!("{action} {} {outcome} with cutting-edge AI", domain.to_lowercase())
    }

    /// The "current state" line: the archetype's own template when one
    /// exists, the generic domain template otherwise.
    pub fn compose_scenario<R: Rng>(&self, rng: &mut R, archetype: &ProjectArchetype, domain: &str) -> String {
        let rng: &mut dyn RngCore = rng;
        match self.catalogs.scenario_for(archetype.name) {
            Some(template) => (template.render)(rng, domain),
            None => (self.catalogs.generic_scenario)(rng, domain),
        }
    }

    pub fn compose<R: Rng>(&self, rng: &mut R, options: &ComposeOptions) -> ComposedPrompt {
        let c = self.catalogs;

        let archetype = self.select_random_project_archetype(rng);
        let domain = *pick(rng, c.domains);
        let style = pick(rng, c.design_styles);
        let colors = pick(rng, c.color_schemes);

        let scenario = self.compose_scenario(rng, archetype, domain);

        let tech_stack = TechStack {
            ai: owned(select_random_subset(rng, c.ai_technologies, 1, 3)),
            ml: owned(select_random_subset(rng, c.ml_frameworks, 1, 2)),
            vector_db: rng
                .gen_bool(VECTOR_DB_PROBABILITY)
                .then(|| pick(rng, c.vector_databases).to_string()),
            cloud: pick(rng, c.cloud_platforms).to_string(),
            backend: pick(rng, c.backends).to_string(),
        };

        let general = select_random_subset(rng, c.features, 3, 6);
        let core = select_random_subset(rng, archetype.keywords, 2, 3);

        let metric_templates = if rng.gen_bool(METRICS_PROBABILITY) {
            select_random_subset(rng, c.metrics, 2, 4)
        } else {
            Vec::new()
        };
        let mut metrics = Vec::with_capacity(metric_templates.len());
        for template in &metric_templates {
            metrics.push((template.generator)(&mut *rng));
        }

        let project_name = self.generate_project_name(rng);
        let tagline = self.generate_tagline(rng, domain);

        // Options only decide what is shown; every draw above happens regardless
        // so a seed maps to the same choices whatever the toggles are.
        let core: Vec<&str> = if options.industry_specific { core } else { Vec::new() };
        let general: Vec<&str> = if options.practical_features { general } else { Vec::new() };
        let metrics = if options.include_metrics { metrics } else { Vec::new() };
        let scenario = if options.use_real_data {
            scenario
        } else {
            format!("Currently showing: a typical working session in {domain}")
        };

        let mut text = format!("You are looking at the screen of someone using {project_name}.\n\n");
        text.push_str(&format!("This is a {} for {domain}.\n\n", archetype.name));
        text.push_str("CURRENT STATE:\n");
        text.push_str(&scenario);
        text.push_str("\n\n");

        let shown: Vec<&str> = core.iter().chain(general.iter().take(3)).copied().collect();
        if !shown.is_empty() {
            text.push_str("The interface shows:\n");
            for item in &shown {
                text.push_str(&format!("- {item}\n"));
            }
            text.push('\n');
        }

        if !metrics.is_empty() {
            text.push_str("Live metrics visible:\n");
            for m in &metrics {
                text.push_str(&format!("- {m}\n"));
            }
            text.push('\n');
        }

        text.push_str(&format!("Visual style: {} with {} colors\n\n", style.name, colors.label));
        text.push_str(CLOSING_DIRECTIVE);

        ComposedPrompt {
            text,
            metadata: PromptMetadata {
                project_name,
                tagline,
                project_type: archetype.name.to_string(),
                domain: domain.to_string(),
                design_style: style.name.to_string(),
                color_scheme: colors.label.to_string(),
                tech_stack,
                features: core.iter().chain(general.iter()).map(|s| s.to_string()).collect(),
                metrics,
            },
        }
    }

    /// Dispatches to the portfolio or business-idea composer. `custom` only
    /// applies to business ideas.
    pub fn compose_kind<R: Rng>(
        &self,
        rng: &mut R,
        kind: PromptKind,
        options: &ComposeOptions,
        custom: Option<&str>,
    ) -> Composition {
        match kind {
            PromptKind::Portfolio => Composition::Portfolio(self.compose(rng, options)),
            PromptKind::Business => Composition::Business(self.compose_business_idea(rng, custom)),
        }
    }
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectArchetype;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    fn composer() -> PromptComposer<'static> {
        PromptComposer::new(Catalogs::builtin())
    }

    #[test]
    fn archetype_selection_reaches_every_entry() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let a = composer.select_random_project_archetype(&mut rng);
            assert!(Catalogs::builtin().archetypes.contains(a));
            seen.insert(a.name);
        }
        assert_eq!(seen.len(), Catalogs::builtin().archetypes.len());
    }

    #[test]
    fn pick_covers_small_catalog() {
        let mut rng = StdRng::seed_from_u64(2);
        let items = ["a", "b", "c", "d"];
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..1000 {
            *counts.entry(*pick(&mut rng, &items)).or_default() += 1;
        }
        assert_eq!(counts.len(), items.len());
        assert!(counts.values().all(|&c| c > 0));
    }

    #[test]
    fn subset_is_unique_and_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<u32> = (0..10).collect();
        for _ in 0..1000 {
            let subset = select_random_subset(&mut rng, &items, 3, 6);
            assert!((3..=6).contains(&subset.len()), "len {}", subset.len());
            let unique: HashSet<_> = subset.iter().collect();
            assert_eq!(unique.len(), subset.len());
            assert!(subset.iter().all(|x| items.contains(x)));
        }
    }

    #[test]
    fn subset_clips_to_catalog_size() {
        let mut rng = StdRng::seed_from_u64(4);
        let items = ["x", "y"];
        for _ in 0..100 {
            let subset = select_random_subset(&mut rng, &items, 3, 5);
            assert_eq!(subset.len(), 2);
        }
        assert!(select_random_subset::<&str, _>(&mut rng, &[], 1, 3).is_empty());
    }

    #[test]
    fn subset_reaches_every_length_and_element() {
        let mut rng = StdRng::seed_from_u64(5);
        let items: Vec<u32> = (0..8).collect();
        let mut lengths = HashSet::new();
        let mut firsts = HashSet::new();
        for _ in 0..2000 {
            let subset = select_random_subset(&mut rng, &items, 1, 3);
            lengths.insert(subset.len());
            firsts.insert(subset[0]);
        }
        assert_eq!(lengths, HashSet::from([1, 2, 3]));
        assert_eq!(firsts.len(), items.len());
    }

    #[test]
    fn every_name_strategy_produces_a_name() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(6);
        for strategy in NameStrategy::ALL {
            for _ in 0..50 {
                let name = composer.name_with(strategy, &mut rng);
                assert!(!name.trim().is_empty(), "{strategy:?} produced an empty name");
            }
        }
    }

    #[test]
    fn prefix_suffix_names_concatenate() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(7);
        let names = &Catalogs::builtin().names;
        for _ in 0..100 {
            let name = composer.name_with(NameStrategy::PrefixSuffix, &mut rng);
            assert!(names.prefixes.iter().any(|p| name.starts_with(p)));
            assert!(names.suffixes.iter().any(|s| name.ends_with(s)));
        }
    }

    #[test]
    fn generic_scenario_mentions_domain() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(8);
        let unknown = ProjectArchetype { name: "Beekeeping Ledger", keywords: &["hive logs"] };
        let line = composer.compose_scenario(&mut rng, &unknown, "Agriculture & Food Tech");
        assert!(line.starts_with("Currently showing: Processing "));
        assert!(line.contains("Agriculture & Food Tech items"));
    }

    #[test]
    fn specific_scenario_is_used_when_present() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(9);
        let hotel = Catalogs::builtin().archetypes[0];
        let line = composer.compose_scenario(&mut rng, &hotel, "Insurance");
        assert!(line.contains("rooms synced via FIAS"), "{line}");
        assert!(!line.contains("Insurance"));
    }

    #[test]
    fn compose_populates_every_field() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..500 {
            let composed = composer.compose(&mut rng, &ComposeOptions::default());
            let m = &composed.metadata;
            assert!(!composed.text.is_empty());
            assert!(!m.project_name.is_empty());
            assert!(m.tagline.ends_with("with cutting-edge AI"));
            assert!(!m.project_type.is_empty());
            assert!(!m.domain.is_empty());
            assert!(!m.design_style.is_empty());
            assert!(!m.color_scheme.is_empty());
            assert!((1..=3).contains(&m.tech_stack.ai.len()));
            assert!((1..=2).contains(&m.tech_stack.ml.len()));
            assert!(!m.tech_stack.cloud.is_empty());
            assert!(!m.tech_stack.backend.is_empty());
            // 2-3 archetype keywords plus 3-6 general features
            assert!((5..=9).contains(&m.features.len()), "features {}", m.features.len());
            assert!(m.metrics.is_empty() || (2..=4).contains(&m.metrics.len()));
            assert!(composed.text.contains(&m.project_name));
            assert!(composed.text.contains(&m.project_type));
            assert!(composed.text.ends_with(CLOSING_DIRECTIVE));
        }
    }

    #[test]
    fn optional_sections_appear_sometimes() {
        let composer = composer();
        let mut rng = StdRng::seed_from_u64(11);
        let mut with_metrics = 0;
        let mut with_vector_db = 0;
        let trials = 1000;
        for _ in 0..trials {
            let composed = composer.compose(&mut rng, &ComposeOptions::default());
            if !composed.metadata.metrics.is_empty() {
                with_metrics += 1;
                assert!(composed.text.contains("Live metrics visible:"));
            } else {
                assert!(!composed.text.contains("Live metrics visible:"));
            }
            if composed.metadata.tech_stack.vector_db.is_some() {
                with_vector_db += 1;
            }
        }
        assert!((600..=800).contains(&with_metrics), "metrics in {with_metrics}/{trials}");
        assert!((400..=600).contains(&with_vector_db), "vector db in {with_vector_db}/{trials}");
    }

    #[test]
    fn same_seed_same_prompt() {
        let composer = composer();
        let a = composer.compose(&mut StdRng::seed_from_u64(42), &ComposeOptions::default());
        let b = composer.compose(&mut StdRng::seed_from_u64(42), &ComposeOptions::default());
        assert_eq!(a, b);
        let c = composer.compose(&mut StdRng::seed_from_u64(43), &ComposeOptions::default());
        assert_ne!(a.text, c.text);
    }

    #[test]
    fn disabled_options_trim_sections() {
        let composer = composer();
        let options = ComposeOptions {
            include_metrics: false,
            use_real_data: false,
            industry_specific: false,
            practical_features: false,
        };
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let composed = composer.compose(&mut rng, &options);
            assert!(composed.metadata.metrics.is_empty());
            assert!(composed.metadata.features.is_empty());
            assert!(!composed.text.contains("The interface shows:"));
            assert!(composed.text.contains("a typical working session in"));
        }
    }

    #[test]
    fn substituted_catalogs_drive_composition() {
        static ONE: [ProjectArchetype; 1] =
            [ProjectArchetype { name: "Beekeeping Ledger", keywords: &["hive logs", "queen tracking"] }];
        let catalogs = Catalogs { archetypes: &ONE, scenarios: &[], domains: &["Apiculture"], ..*Catalogs::builtin() };
        assert_eq!(catalogs.validate(), Ok(()));
        let composer = PromptComposer::new(&catalogs);
        let composed = composer.compose(&mut StdRng::seed_from_u64(13), &ComposeOptions::default());
        assert_eq!(composed.metadata.project_type, "Beekeeping Ledger");
        assert!(composed.text.contains("This is a Beekeeping Ledger for Apiculture."));
        assert!(composed.text.contains("Processing"));
        assert!(composed.metadata.features.iter().any(|f| f == "hive logs" || f == "queen tracking"));
    }

    #[test]
    fn metadata_serializes_camel_case() {
        let composed = composer().compose(&mut StdRng::seed_from_u64(14), &ComposeOptions::default());
        let json = serde_json::to_value(&composed).expect("serialize");
        assert!(json["metadata"]["projectName"].is_string());
        assert!(json["metadata"]["techStack"]["ai"].is_array());
        assert!(json["metadata"]["techStack"].get("vectorDb").is_some());
    }
}
