use outage_intel::outage::report::RecommendationTier;
use outage_intel::outage::ZoneAnalysis;
use std::io::{self, Write};

pub(crate) fn render_analysis_json(analysis: &ZoneAnalysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

pub(crate) fn render_analysis_text<W: Write>(
    out: &mut W,
    analysis: &ZoneAnalysis,
) -> io::Result<()> {
    let summary = analysis.summary();
    let derived = &analysis.derived;

    writeln!(out, "{}", summary.headline())?;
    writeln!(out, "{}", summary.priority_guidance)?;
    writeln!(
        out,
        "Outage {}h, {} people exposed, resilience {}%",
        summary.outage_hours, summary.population_exposed, summary.resilience
    )?;
    writeln!(
        out,
        "Context: {} ({}), weather risk {}",
        derived.exposure.time_of_day.label(),
        derived.exposure.day_type.label(),
        derived.exposure.weather_risk_index
    )?;

    if analysis.hospitals.is_empty() {
        writeln!(out, "\nHospitals: none in zone")?;
    } else {
        let load = &summary.hospital_load;
        writeln!(
            out,
            "\nHospitals ({} patients, {} ICU, {} on ventilators)",
            load.total_patients, load.icu_patients, load.ventilator_patients
        )?;
        for hospital in &analysis.hospitals {
            writeln!(
                out,
                "- {} [{}] {}h backup: {}",
                hospital.record.name,
                hospital.record.kind,
                hospital.record.backup_hours,
                hospital.current_status.label()
            )?;
        }
    }

    if analysis.cascade_risks.is_empty() {
        writeln!(out, "\nCascade risks: none")?;
    } else {
        writeln!(out, "\nCascade risks")?;
        for risk in &analysis.cascade_risks {
            writeln!(
                out,
                "- [{}] {} (impact in {}h): {}",
                risk.severity,
                risk.kind.label(),
                risk.time_to_impact,
                risk.description
            )?;
        }
    }

    if analysis.recommendations.is_empty() {
        writeln!(out, "\nRecommendations: none")?;
    } else {
        writeln!(out, "\nRecommendations")?;
        for recommendation in &analysis.recommendations {
            writeln!(
                out,
                "- [{}] {}",
                RecommendationTier::classify(recommendation).label(),
                RecommendationTier::display_text(recommendation)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outage_intel::outage::{DayType, FixedContext, TimeOfDay, ZoneAnalyzer, ZoneCatalog, ZoneInput};

    fn analysis(zone_id: &str, hours: f64) -> ZoneAnalysis {
        let analyzer = ZoneAnalyzer::new(
            ZoneCatalog::standard(),
            FixedContext::new(TimeOfDay::Morning, DayType::Weekday, 30.0),
        );
        let input = ZoneInput::new(zone_id, hours, 24.0).expect("valid input");
        analyzer.analyze(&input).expect("analysis succeeds")
    }

    fn rendered(analysis: &ZoneAnalysis) -> String {
        let mut out = Vec::new();
        render_analysis_text(&mut out, analysis).expect("text renders");
        String::from_utf8(out).expect("utf-8 report")
    }

    #[test]
    fn text_report_lists_tiers_without_prefixes() {
        let text = rendered(&analysis("ZONE-002", 18.0));

        assert!(text.starts_with("ZONE-002: severity 55 (high), restoration P2\n"));
        assert!(text.contains("- Suburban Community Hospital [General] 18h backup: critical"));
        assert!(text.contains("- [immediate] Deploy mobile generators to Suburban Community Hospital"));
        assert!(text.contains("- [standard] Prioritize feeder lines serving critical facilities."));
    }

    #[test]
    fn text_report_handles_empty_zone() {
        let text = rendered(&analysis("ZONE-004", 10.0));

        assert!(text.contains("Hospitals: none in zone"));
        assert!(text.contains("Cascade risks: none"));
        assert!(text.contains("Recommendations: none"));
    }

    #[test]
    fn json_report_round_trips_through_value() {
        let json = render_analysis_json(&analysis("ZONE-001", 2.0)).expect("json renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["severity_score"], 85);
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(3));
    }
}
