use crate::catalog::{Catalog, SCENARIOS};
use crate::cli::setup::RunContext;
use crate::core::{format_number, CharacteristicId};
use crate::formatting::{formatter_for, FormattingConfig};
use anyhow::Result;
use comfy_table::{presets, ContentArrangement, Table};

pub fn handle_catalog_command(ctx: &RunContext) -> Result<()> {
    print!("{}", render_catalog(&ctx.catalog, ctx.formatting));
    Ok(())
}

/// Case studies followed by one metric table per characteristic.
pub fn render_catalog(catalog: &Catalog, formatting: FormattingConfig) -> String {
    let f = formatter_for(formatting);
    let preset = if formatting == FormattingConfig::plain() {
        presets::ASCII_FULL
    } else {
        presets::UTF8_FULL
    };
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", f.header("Predefined Case Studies")));
    for scenario in SCENARIOS {
        let targets: Vec<&str> = scenario.targets.iter().map(|id| id.key()).collect();
        out.push_str(&format!(
            "  {} {}\n    {}\n    {}\n",
            f.bold(scenario.id.key()),
            scenario.title,
            f.dim(scenario.description),
            targets.join(", ")
        ));
    }

    out.push_str(&format!("\n{}\n", f.header("Metric Library")));
    for id in CharacteristicId::ALL {
        let mut table = Table::new();
        table
            .load_preset(preset)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Metric",
                "Name",
                "Unit",
                "Range",
                "Default",
                "Lower is better",
            ]);
        for def in catalog.metrics.definitions(id) {
            table.add_row(vec![
                def.id.clone(),
                def.name.clone(),
                def.unit.clone(),
                format!("{} - {}", format_number(def.min), format_number(def.max)),
                format_number(def.default),
                if def.inverse { "yes" } else { "no" }.to_string(),
            ]);
        }
        out.push_str(&format!(
            "\n{} ({})\n{table}\n",
            f.bold(id.display_name()),
            id.key()
        ));
    }
    out
}
