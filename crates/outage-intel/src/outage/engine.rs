use super::cascade::cascade_risks;
use super::catalog::ZoneCatalog;
use super::context::{ContextSource, SystemContext};
use super::domain::{
    DerivedIntelligence, ExposureProfile, InvalidInputError, SituationalContext, ZoneAnalysis,
    ZoneInput,
};
use super::recommendations::recommendations;
use super::scoring::{estimate_resilience, resolve_hospitals, score_severity};
use std::sync::Arc;
use tracing::{info, warn};

/// Composes the knowledge base, context source and scoring stages into a
/// single analysis call. Holds no mutable state; safe to share across threads.
pub struct ZoneAnalyzer<C = SystemContext> {
    catalog: Arc<ZoneCatalog>,
    context: C,
}

impl ZoneAnalyzer<SystemContext> {
    /// Analyzer over the built-in catalog and the live wall clock.
    pub fn standard() -> Self {
        Self::new(ZoneCatalog::standard(), SystemContext)
    }
}

impl<C: ContextSource> ZoneAnalyzer<C> {
    pub fn new(catalog: Arc<ZoneCatalog>, context: C) -> Self {
        Self { catalog, context }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Known zone identifiers in catalog order.
    pub fn zone_ids(&self) -> Vec<&str> {
        self.catalog.zone_ids()
    }

    pub fn analyze(&self, input: &ZoneInput) -> Result<ZoneAnalysis, InvalidInputError> {
        // rejected input never samples the context source
        admit(input)?;
        Ok(self.run(input, self.context.current()))
    }

    /// Analyze with an explicitly supplied context instead of sampling one.
    pub fn analyze_with_context(
        &self,
        input: &ZoneInput,
        context: SituationalContext,
    ) -> Result<ZoneAnalysis, InvalidInputError> {
        admit(input)?;
        Ok(self.run(input, context))
    }

    fn run(&self, input: &ZoneInput, context: SituationalContext) -> ZoneAnalysis {
        let outage_hours = input.expected_outage_duration;

        if !self.catalog.contains(&input.zone_id) {
            warn!(zone_id = %input.zone_id, "unknown zone, applying default baseline");
        }
        let baseline = self.catalog.lookup(&input.zone_id);

        let hospitals = resolve_hospitals(&baseline.hospitals, outage_hours);
        let exposure = ExposureProfile::new(baseline, context);
        let resilience = estimate_resilience(
            &exposure,
            &hospitals,
            outage_hours,
            input.hospital_backup_hours,
        );
        let derived = DerivedIntelligence {
            exposure,
            resilience,
        };

        let severity = score_severity(&derived, &hospitals, outage_hours);
        let cascade_risks = cascade_risks(&derived, outage_hours);

        let mut analysis = ZoneAnalysis {
            zone_id: input.zone_id.clone(),
            input: input.clone(),
            derived,
            hospitals,
            impact_severity: severity.level,
            severity_score: severity.score,
            restoration_priority: severity.priority,
            severity_components: severity.components,
            cascade_risks,
            recommendations: Vec::new(),
        };
        analysis.recommendations = recommendations(&analysis);

        info!(
            zone_id = %analysis.zone_id,
            severity_score = analysis.severity_score,
            impact = %analysis.impact_severity,
            priority = %analysis.restoration_priority,
            cascade_risks = analysis.cascade_risks.len(),
            "zone analysis complete"
        );

        analysis
    }
}

fn admit(input: &ZoneInput) -> Result<(), InvalidInputError> {
    input.validate().map_err(|err| {
        warn!(zone_id = %input.zone_id, %err, "analysis request rejected");
        err
    })
}

/// Analyze a zone against the built-in catalog and live context.
pub fn analyze(
    zone_id: &str,
    expected_outage_duration: f64,
    hospital_backup_hours: f64,
) -> Result<ZoneAnalysis, InvalidInputError> {
    let input = ZoneInput::new(zone_id, expected_outage_duration, hospital_backup_hours)?;
    ZoneAnalyzer::standard().analyze(&input)
}

/// Zone identifiers of the built-in catalog, for selection lists.
pub fn list_zone_ids() -> Vec<String> {
    ZoneCatalog::standard()
        .zone_ids()
        .into_iter()
        .map(str::to_string)
        .collect()
}
