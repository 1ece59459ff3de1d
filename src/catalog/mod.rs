use rand::RngCore;
use thiserror::Error;

mod data;

/// Renders a metric line from freshly drawn bounded numbers.
pub type MetricFn = fn(&mut dyn RngCore) -> String;
/// Renders the "current state" line for an archetype in a given domain.
pub type ScenarioFn = fn(&mut dyn RngCore, &str) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectArchetype {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignStyle {
    pub name: &'static str,
    pub features: &'static [&'static str],
    pub theme: &'static str,
    pub layout_hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricTemplate {
    pub kind: &'static str,
    pub generator: MetricFn,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioTemplate {
    pub archetype: &'static str,
    pub render: ScenarioFn,
}

/// A structural directive injected server-side to push generated pages away
/// from the same sidebar-and-cards layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraint {
    pub name: &'static str,
    pub structure: &'static str,
    pub forbidden: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    pub heads: &'static [&'static str],
    pub tails: &'static [&'static str],
    pub separator: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NameCatalog {
    pub short: &'static [&'static str],
    pub abstract_words: &'static [&'static str],
    pub descriptive: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub single: &'static [&'static str],
    pub invented: &'static [&'static str],
    pub acronyms: &'static [&'static str],
    pub playful: &'static [&'static str],
    pub word_pairs: &'static [WordPair],
}

#[derive(Debug, Clone, Copy)]
pub struct BusinessCatalog {
    pub types: &'static [&'static str],
    pub features: &'static [&'static str],
    pub color_schemes: &'static [&'static str],
    pub enhancements: &'static [&'static str],
}

/// Every table the composers and the proxy draw from. The built-in set is a
/// process-wide constant; tests substitute their own tables through struct
/// update syntax.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs {
    pub archetypes: &'static [ProjectArchetype],
    pub domains: &'static [&'static str],
    pub ai_technologies: &'static [&'static str],
    pub ml_frameworks: &'static [&'static str],
    pub vector_databases: &'static [&'static str],
    pub cloud_platforms: &'static [&'static str],
    pub backends: &'static [&'static str],
    pub design_styles: &'static [DesignStyle],
    pub color_schemes: &'static [ColorScheme],
    pub features: &'static [&'static str],
    pub metrics: &'static [MetricTemplate],
    pub scenarios: &'static [ScenarioTemplate],
    pub generic_scenario: ScenarioFn,
    pub tagline_actions: &'static [&'static str],
    pub tagline_outcomes: &'static [&'static str],
    pub names: NameCatalog,
    pub business: BusinessCatalog,
    pub layouts: &'static [LayoutConstraint],
    pub fallback_jobs: &'static [&'static str],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog `{0}` is empty")] Empty(&'static str),
    #[error("archetype `{0}` has no keywords")] NoKeywords(&'static str),
    #[error("scenario template `{0}` does not match any archetype")] OrphanScenario(&'static str),
}

impl Catalogs {
    pub fn builtin() -> &'static Catalogs {
        &data::BUILTIN
    }

    /// Checks the non-empty invariant every selection relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let lists: [(&'static str, usize); 27] = [
            ("archetypes", self.archetypes.len()),
            ("domains", self.domains.len()),
            ("ai_technologies", self.ai_technologies.len()),
            ("ml_frameworks", self.ml_frameworks.len()),
            ("vector_databases", self.vector_databases.len()),
            ("cloud_platforms", self.cloud_platforms.len()),
            ("backends", self.backends.len()),
            ("design_styles", self.design_styles.len()),
            ("color_schemes", self.color_schemes.len()),
            ("features", self.features.len()),
            ("metrics", self.metrics.len()),
            ("tagline_actions", self.tagline_actions.len()),
            ("tagline_outcomes", self.tagline_outcomes.len()),
            ("names.short", self.names.short.len()),
            ("names.abstract_words", self.names.abstract_words.len()),
            ("names.descriptive", self.names.descriptive.len()),
            ("names.prefixes", self.names.prefixes.len()),
            ("names.suffixes", self.names.suffixes.len()),
            ("names.single", self.names.single.len()),
            ("names.invented", self.names.invented.len()),
            ("names.acronyms", self.names.acronyms.len()),
            ("names.playful", self.names.playful.len()),
            ("names.word_pairs", self.names.word_pairs.len()),
            ("business.types", self.business.types.len()),
            ("business.features", self.business.features.len()),
            ("business.color_schemes", self.business.color_schemes.len()),
            ("layouts", self.layouts.len()),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(CatalogError::Empty(name));
        }
        if self.business.enhancements.is_empty() {
            return Err(CatalogError::Empty("business.enhancements"));
        }
        if self.fallback_jobs.is_empty() {
            return Err(CatalogError::Empty("fallback_jobs"));
        }
        if let Some(a) = self.archetypes.iter().find(|a| a.keywords.is_empty()) {
            return Err(CatalogError::NoKeywords(a.name));
        }
        for pair in self.names.word_pairs {
            if pair.heads.is_empty() || pair.tails.is_empty() {
                return Err(CatalogError::Empty("names.word_pairs entry"));
            }
        }
        if let Some(s) = self
            .scenarios
            .iter()
            .find(|s| !self.archetypes.iter().any(|a| a.name == s.archetype))
        {
            return Err(CatalogError::OrphanScenario(s.archetype));
        }
        Ok(())
    }

    pub fn scenario_for(&self, archetype: &str) -> Option<&ScenarioTemplate> {
        self.scenarios.iter().find(|s| s.archetype == archetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn builtin_catalogs_are_valid() {
        assert_eq!(Catalogs::builtin().validate(), Ok(()));
    }

    #[test]
    fn empty_table_is_rejected() {
        let broken = Catalogs { domains: &[], ..*Catalogs::builtin() };
        assert_eq!(broken.validate(), Err(CatalogError::Empty("domains")));
    }

    #[test]
    fn orphan_scenario_is_rejected() {
        static ONLY: [ProjectArchetype; 1] = [ProjectArchetype { name: "Solo Tool", keywords: &["one"] }];
        let broken = Catalogs { archetypes: &ONLY, ..*Catalogs::builtin() };
        assert!(matches!(broken.validate(), Err(CatalogError::OrphanScenario(_))));
    }

    #[test]
    fn metric_generators_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for m in Catalogs::builtin().metrics {
                let line = (m.generator)(&mut rng);
                assert!(!line.is_empty(), "{} produced empty text", m.kind);
            }
        }
        let uptime = Catalogs::builtin().metrics.iter().find(|m| m.kind == "uptime").map(|m| m.generator);
        let uptime = uptime.expect("uptime metric present");
        for _ in 0..100 {
            let line = uptime(&mut rng);
            assert!(line.starts_with("99.") && line.ends_with("% uptime SLA"), "{line}");
        }
    }

    #[test]
    fn scenario_lookup_by_name() {
        let c = Catalogs::builtin();
        assert!(c.scenario_for("Fleet Management Console").is_some());
        assert!(c.scenario_for("Nonexistent Thing").is_none());
    }
}
