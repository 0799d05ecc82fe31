use super::super::domain::ScoreComponent;

/// Running tally of weighted, individually capped score factors.
#[derive(Debug, Clone)]
pub(crate) struct ScoreLedger {
    base: f64,
    components: Vec<ScoreComponent>,
}

impl ScoreLedger {
    pub(crate) fn new(base: f64) -> Self {
        Self {
            base,
            components: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, factor: &str, points: f64) -> &mut Self {
        self.components.push(ScoreComponent {
            factor: factor.to_string(),
            points,
        });
        self
    }

    /// Add `raw`, limited to at most `cap` points.
    pub(crate) fn add_capped(&mut self, factor: &str, raw: f64, cap: f64) -> &mut Self {
        self.add(factor, raw.min(cap))
    }

    pub(crate) fn subtract(&mut self, factor: &str, points: f64) -> &mut Self {
        self.add(factor, -points)
    }

    pub(crate) fn subtract_capped(&mut self, factor: &str, raw: f64, cap: f64) -> &mut Self {
        self.subtract(factor, raw.min(cap))
    }

    pub(crate) fn raw_total(&self) -> f64 {
        self.base
            + self
                .components
                .iter()
                .map(|component| component.points)
                .sum::<f64>()
    }

    pub(crate) fn clamped(&self, min: f64, max: f64) -> f64 {
        self.raw_total().clamp(min, max)
    }

    pub(crate) fn into_components(self) -> Vec<ScoreComponent> {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_factors_never_exceed_their_cap() {
        let mut ledger = ScoreLedger::new(0.0);
        ledger.add_capped("population", 40.0, 25.0).add("flat", 5.0);

        assert_eq!(ledger.raw_total(), 30.0);
        let components = ledger.into_components();
        assert_eq!(components[0].points, 25.0);
        assert_eq!(components[1].factor, "flat");
    }

    #[test]
    fn total_is_clamped_after_summing() {
        let mut ledger = ScoreLedger::new(100.0);
        ledger
            .subtract_capped("backup", 90.0, 40.0)
            .subtract("dependency", 70.0);

        assert_eq!(ledger.raw_total(), -10.0);
        assert_eq!(ledger.clamped(0.0, 100.0), 0.0);

        let mut ledger = ScoreLedger::new(100.0);
        ledger.add("night", 5.0).add("weekend", 5.0);
        assert_eq!(ledger.clamped(0.0, 100.0), 100.0);
    }
}
