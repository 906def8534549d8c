use anyhow::{Context, Result};
use comfy_table::Table;
use ecqm_cli::config::{GenerateRequest, GeneratorConfig, input_root};
use ecqm_cli::pipeline::{GenerateResult, run_generate};
use ecqm_ingest::load_measure_package;
use ecqm_model::DefaultSet;

use crate::cli::{GenerateArgs, ShowArgs};
use crate::summary::apply_table_style;

pub fn generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let request = GenerateRequest {
        list_id: args.list_id.clone(),
        list_title: args.list_title.clone(),
        base_dir: args.input.base_dir.clone(),
        json_dir: args.input.json_dir.clone(),
        output_dir: args.output_dir.clone(),
        defaults: args.defaults.iter().collect::<DefaultSet>(),
        year: args.input.year,
        dry_run: args.dry_run,
    };
    let config = GeneratorConfig::resolve(&request).context("resolve list identity")?;
    let result = run_generate(&config)?;
    if config.dry_run {
        print!("{}", result.script);
    }
    Ok(result)
}

pub fn show(args: &ShowArgs) -> Result<()> {
    let root = input_root(&args.input.base_dir, &args.input.json_dir, args.input.year);
    let package = load_measure_package(&root, &args.measure)
        .with_context(|| format!("load measure {}", args.measure))?;

    if args.raw {
        let json = serde_json::to_string_pretty(&package.measure).context("format measure")?;
        println!("{json}");
        return Ok(());
    }

    let descriptor = package.descriptor();
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    apply_table_style(&mut table);
    table.add_row(vec!["Measure", package.name.as_str()]);
    table.add_row(vec!["CMS id", descriptor.measure_id().unwrap_or("-")]);
    table.add_row(vec!["Title", descriptor.title.as_deref().unwrap_or("-")]);
    table.add_row(vec![
        "Description",
        descriptor.description.as_deref().unwrap_or("-"),
    ]);
    table.add_row(vec![
        "File".to_string(),
        package.measure_path.display().to_string(),
    ]);
    table.add_row(vec![
        "Value sets".to_string(),
        match package.value_sets {
            Some(_) => package.value_set_count().to_string(),
            None => "none".to_string(),
        },
    ]);
    println!("{table}");
    Ok(())
}
