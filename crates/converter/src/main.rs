pub mod cli;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use shared::config::{load_config, Config};
use shared::sku_mapping::SkuMapping;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    system::tracing::initialize()?;

    let config = load_config(cli.config.as_deref())?;

    let mapping_path = cli
        .mapping
        .clone()
        .unwrap_or_else(|| config.resolve(&config.paths.mapping));
    let mapping = SkuMapping::load(&mapping_path)
        .with_context(|| format!("Failed to load SKU mapping {}", mapping_path.display()))?;

    match &cli.command {
        Commands::Ym { input, undated } => {
            let mut ym_config = config.ym.clone();
            if let Some(policy) = undated {
                ym_config.undated_policy = *policy;
            }
            let request = contracts::usecases::u601_convert_ym_payments::ConvertRequest {
                input_path: input_or(input, &config, &config.paths.ym_input),
                output_dir: output_or(&cli, &config, &config.paths.ym_output_dir),
            };
            let response =
                usecases::u601_convert_ym_payments::ConvertExecutor::new(mapping, &ym_config)
                    .execute(&request)?;

            if !cli.json {
                for file in &response.files {
                    println!("{}: {} SKU", file.path.display(), file.sku_count);
                }
                println!(
                    "{} rows read, {} aggregated, {} without payment date",
                    response.rows_read, response.rows_aggregated, response.rows_undated
                );
            }
            print_json(&cli, &response)?;
        }
        Commands::Ozon { input } => {
            let request = contracts::usecases::u602_convert_ozon_realization::ConvertRequest {
                input_path: input_or(input, &config, &config.paths.ozon_input),
                output_dir: output_or(&cli, &config, &config.paths.ozon_output_dir),
            };
            let response = usecases::u602_convert_ozon_realization::ConvertExecutor::new(
                mapping,
                &config.ozon,
            )
            .execute(&request)?;

            if !cli.json {
                println!(
                    "{}: {} SKU ({} rows read, {} skipped)",
                    response.output.path.display(),
                    response.output.sku_count,
                    response.rows_read,
                    response.rows_skipped
                );
            }
            print_json(&cli, &response)?;
        }
        Commands::OzonBatch { dir } => {
            let request = contracts::usecases::u602_convert_ozon_realization::BatchConvertRequest {
                input_dir: input_or(dir, &config, &config.paths.ozon_batch_dir),
                output_dir: output_or(&cli, &config, &config.paths.ozon_output_dir),
            };
            let response = usecases::u602_convert_ozon_realization::ConvertExecutor::new(
                mapping,
                &config.ozon,
            )
            .execute_batch(&request)?;

            if !cli.json {
                for converted in &response.converted {
                    println!(
                        "{}: {} SKU",
                        converted.output.path.display(),
                        converted.output.sku_count
                    );
                }
                for failed in &response.failed {
                    println!("FAILED {}: {}", failed.input_file, failed.error);
                }
            }
            print_json(&cli, &response)?;
        }
    }

    Ok(())
}

fn input_or(explicit: &Option<PathBuf>, config: &Config, configured: &str) -> PathBuf {
    explicit
        .clone()
        .unwrap_or_else(|| config.resolve(configured))
}

fn output_or(cli: &Cli, config: &Config, configured: &str) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| config.resolve(configured))
}

fn print_json<T: Serialize>(cli: &Cli, value: &T) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}
