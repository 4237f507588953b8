//! Scripted run through the same guarded wizard the TUI uses.

use crate::catalog::Catalog;
use crate::cli::args::ReportArgs;
use crate::cli::setup::RunContext;
use crate::errors::Error;
use crate::output::{resolve_format, write_report};
use crate::scoring::Analysis;
use crate::wizard::{NavigationResult, Step, Wizard, WizardMessage};
use anyhow::{Context, Result};

pub fn handle_report_command(ctx: &RunContext, args: &ReportArgs) -> Result<()> {
    let analysis = run_report(ctx.catalog.clone(), ctx.project_name(), args)?;
    let format = resolve_format(
        args.format,
        ctx.config.default_format(),
        args.output.as_deref(),
    );
    write_report(&analysis, format, ctx.formatting, args.output.as_deref())
        .context("Failed to write report")?;
    Ok(())
}

/// Drive the wizard from Define to Analyze with the given inputs.
pub fn run_report(catalog: Catalog, project_name: &str, args: &ReportArgs) -> Result<Analysis> {
    let mut wizard = Wizard::new(catalog, project_name);

    if let Some(scenario) = args.scenario {
        wizard.dispatch(WizardMessage::SelectScenario(scenario))?;
    }
    for &id in &args.toggles {
        wizard.dispatch(WizardMessage::ToggleCharacteristic(id))?;
    }
    advance(&mut wizard, Step::Plan)?;

    for weight in &args.weights {
        wizard
            .dispatch(WizardMessage::set_weight(
                weight.characteristic,
                weight.raw.clone(),
            ))
            .with_context(|| {
                format!("Rejected --weight {}={}", weight.characteristic, weight.raw)
            })?;
    }
    advance(&mut wizard, Step::Collect)?;

    for metric in &args.metrics {
        wizard
            .dispatch(WizardMessage::set_metric_value(
                metric.characteristic,
                metric.metric.clone(),
                metric.raw.clone(),
            ))
            .with_context(|| {
                format!(
                    "Rejected --metric {}/{}={}",
                    metric.characteristic, metric.metric, metric.raw
                )
            })?;
    }
    advance(&mut wizard, Step::Analyze)?;

    Ok(wizard.analysis())
}

fn advance(wizard: &mut Wizard, expected: Step) -> Result<()> {
    match wizard.next() {
        NavigationResult::Advanced(step) if step == expected => Ok(()),
        NavigationResult::Blocked(gate) => Err(Error::from(gate).into()),
        other => anyhow::bail!(
            "Could not move from {} to {}: {:?}",
            wizard.step(),
            expected,
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{parse_metric_arg, parse_weight_arg};
    use crate::core::{CharacteristicId, ScenarioId};
    use crate::scoring::Rating;

    #[test]
    fn test_mobile_defaults() {
        let args = ReportArgs {
            scenario: Some(ScenarioId::Mobile),
            ..Default::default()
        };
        let analysis = run_report(Catalog::standard(), "Demo", &args).unwrap();
        assert_eq!(analysis.overall_score, 80.3);
        assert_eq!(analysis.rating, Rating::VeryGood);
    }

    #[test]
    fn test_empty_selection_is_blocked() {
        let err = run_report(Catalog::standard(), "Demo", &ReportArgs::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please select at least one quality characteristic."
        );
    }

    #[test]
    fn test_weight_total_gate() {
        let args = ReportArgs {
            scenario: Some(ScenarioId::Iot),
            weights: vec![parse_weight_arg("perf=50").unwrap()],
            ..Default::default()
        };
        let err = run_report(Catalog::standard(), "Demo", &args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Total weight must be 100%. Currently: 125%"
        );
    }

    #[test]
    fn test_invalid_weight_names_field() {
        let args = ReportArgs {
            scenario: Some(ScenarioId::Iot),
            weights: vec![parse_weight_arg("perf=abc").unwrap()],
            ..Default::default()
        };
        let err = run_report(Catalog::standard(), "Demo", &args).unwrap_err();
        assert!(err.to_string().contains("--weight perf=abc"));
        assert!(format!("{:#}", err).contains("Invalid number"));
    }

    #[test]
    fn test_manual_selection_with_metric_override() {
        let args = ReportArgs {
            toggles: vec![CharacteristicId::Security],
            metrics: vec![parse_metric_arg("sec/m_sec_2=50").unwrap()],
            ..Default::default()
        };
        let analysis = run_report(Catalog::standard(), "Demo", &args).unwrap();
        let sec = &analysis.characteristics[0];
        assert_eq!(sec.weight, 100);
        // (100 - 0.5) / 100 -> 100 (rounded), 50 -> 50
        assert_eq!(sec.score, 75);
    }
}
