//! `hexagen layers`: print the fixed solution topology.

use serde::Serialize;

use hexagen_core::domain::{BuildUnitKind, LAYER_REGISTRY, Layer, LayerDef, Tier};

use crate::{
    cli::{LayersArgs, LayersFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct LayerRow {
    layer: Layer,
    tier: Tier,
    build_unit: BuildUnitKind,
    template: &'static str,
    references: &'static [Layer],
    packages: &'static [&'static str],
}

impl From<&'static LayerDef> for LayerRow {
    fn from(def: &'static LayerDef) -> Self {
        Self {
            layer: def.layer,
            tier: def.tier,
            build_unit: def.build_unit,
            template: def.build_unit.template_name(),
            references: def.references,
            packages: def.packages,
        }
    }
}

pub fn execute(args: LayersArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<LayerRow> = LAYER_REGISTRY.iter().map(LayerRow::from).collect();

    if args.format == LayersFormat::Json || output.format() == OutputFormat::Json {
        output.json(&rows)?;
        return Ok(());
    }

    output.header(&format!(
        "{:<18} {:<16} {:<10} {}",
        "LAYER", "TIER", "TEMPLATE", "REFERENCES"
    ))?;
    for row in &rows {
        output.print(&table_line(row))?;
        for package in row.packages {
            output.print(&format!("{:<18} + {package}", ""))?;
        }
    }
    Ok(())
}

fn table_line(row: &LayerRow) -> String {
    let references = if row.references.is_empty() {
        "-".to_string()
    } else {
        row.references
            .iter()
            .map(Layer::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{:<18} {:<16} {:<10} {references}",
        row.layer.as_str(),
        row.tier.as_str(),
        row.template,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_creation_order() {
        let rows: Vec<LayerRow> = LAYER_REGISTRY.iter().map(LayerRow::from).collect();
        let layers: Vec<Layer> = rows.iter().map(|r| r.layer).collect();
        assert_eq!(layers, Layer::ALL);
    }

    #[test]
    fn source_layers_show_a_dash() {
        let domain = LayerRow::from(&LAYER_REGISTRY[Layer::Domain.index()]);
        assert!(table_line(&domain).ends_with(" -"));
    }

    #[test]
    fn web_api_line_lists_its_references() {
        let web_api = LayerRow::from(&LAYER_REGISTRY[Layer::WebApi.index()]);
        let line = table_line(&web_api);
        assert!(line.starts_with("WebAPI"));
        assert!(line.contains("webapi"));
        assert!(line.ends_with("Domain, Helpers, IoC"));
    }

    #[test]
    fn json_uses_display_names() {
        let web_api = LayerRow::from(&LAYER_REGISTRY[Layer::WebApi.index()]);
        let json = serde_json::to_value(&web_api).unwrap();
        assert_eq!(json["layer"], "WebAPI");
        assert_eq!(json["build_unit"], "service-entry-point");
        assert_eq!(json["references"][2], "IoC");
    }
}
