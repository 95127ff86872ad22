use crate::projections::p950_sku_totals::UndatedPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mp1c")]
#[command(about = "Marketplace reports (Yandex Market, Ozon) to 1C import spreadsheets")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: config.toml next to the executable)
    #[arg(long, global = true, env = "MP1C_CONFIG")]
    pub config: Option<PathBuf>,

    /// SKU mapping table (артикул -> ASKU), overrides [paths].mapping
    #[arg(long, global = true)]
    pub mapping: Option<PathBuf>,

    /// Output directory, overrides the configured one
    #[arg(long, short = 'o', global = true)]
    pub output: Option<PathBuf>,

    /// Print the conversion summary as JSON to stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a Yandex Market payment report into one file per payment month
    #[command(after_help = "\
Examples:
  mp1c ym data/payments_01-10-2019_31-12-2019.xlsx
  mp1c ym --undated warn -o output/ym")]
    Ym {
        /// Payment report (default: [paths].ym_input)
        input: Option<PathBuf>,

        /// Rows without payment order date: drop, warn or reject
        #[arg(long, value_name = "POLICY")]
        undated: Option<UndatedPolicy>,
    },

    /// Convert one Ozon realization report
    #[command(after_help = "\
Examples:
  mp1c ozon \"data/ozon/декабрь 2019.xlsx\"")]
    Ozon {
        /// Realization report (default: [paths].ozon_input)
        input: Option<PathBuf>,
    },

    /// Convert every Ozon realization report in a directory
    OzonBatch {
        /// Directory with reports (default: [paths].ozon_batch_dir)
        dir: Option<PathBuf>,
    },
}
