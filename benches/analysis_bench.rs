use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qmsim::core::{CharacteristicId, ScenarioId};
use qmsim::formatting::FormattingConfig;
use qmsim::output::{render_report, OutputFormat};
use qmsim::wizard::{Wizard, WizardMessage};
use std::hint::black_box;

fn wizard_at_analyze(scenario: ScenarioId) -> Wizard {
    let mut wizard = Wizard::default();
    wizard
        .dispatch(WizardMessage::SelectScenario(scenario))
        .unwrap();
    while !wizard.step().is_final() {
        wizard.next();
    }
    wizard
}

fn bench_full_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_session");
    for scenario in ScenarioId::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(scenario),
            &scenario,
            |b, &scenario| b.iter(|| wizard_at_analyze(black_box(scenario)).analysis()),
        );
    }
    group.finish();
}

fn bench_all_characteristics(c: &mut Criterion) {
    let mut wizard = Wizard::default();
    for id in CharacteristicId::ALL {
        wizard
            .dispatch(WizardMessage::ToggleCharacteristic(id))
            .unwrap();
    }
    while !wizard.step().is_final() {
        wizard.next();
    }

    c.bench_function("analysis_all_eight", |b| {
        b.iter(|| black_box(&wizard).analysis())
    });
}

fn bench_render(c: &mut Criterion) {
    let analysis = wizard_at_analyze(ScenarioId::Mobile).analysis();
    let formatting = FormattingConfig::plain();

    let mut group = c.benchmark_group("render_report");
    for format in [
        OutputFormat::Terminal,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", format)),
            &format,
            |b, &format| b.iter(|| render_report(black_box(&analysis), format, formatting)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_session,
    bench_all_characteristics,
    bench_render
);
criterion_main!(benches);
