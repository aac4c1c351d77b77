// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — helio CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Power report for a lens-concentrated Peltier module.
//!
//! # Usage
//!
//! ```bash
//! # Report for the built-in example panel (2 m² lens, 10 cm module)
//! cargo run --release --bin helio
//!
//! # Load a configuration and override one field
//! cargo run --release --bin helio -- --config configs/example_panel.json --cold-temp 25
//!
//! # JSON output
//! cargo run --release --bin helio -- --format json
//!
//! # Sweep the lens area from 0.5 to 4 m² in 8 steps
//! cargo run --release --bin helio -- sweep -p lens-area --start 0.5 --stop 4 --steps 8
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use helio_engineering::calculator::PanelCalculator;
use helio_engineering::sweep::{peak_output, run_sweep, SweepParameter};
use helio_types::config::PanelConfig;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "helio")]
#[command(author, version, about = "Lens + Peltier solar-thermal power model", long_about = None)]
struct Cli {
    /// JSON panel configuration (defaults to the built-in example panel)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Collecting lens area [m²]
    #[arg(long, global = true, allow_negative_numbers = true)]
    lens_area: Option<f64>,

    /// Peltier module area [m²]
    #[arg(long, global = true, allow_negative_numbers = true)]
    module_area: Option<f64>,

    /// Fraction of Carnot efficiency reached by the module
    #[arg(long, global = true, allow_negative_numbers = true)]
    module_efficiency: Option<f64>,

    /// Ambient temperature [°C]
    #[arg(long, global = true, allow_negative_numbers = true)]
    ambient_temp: Option<f64>,

    /// Cold reservoir temperature [°C]
    #[arg(long, global = true, allow_negative_numbers = true)]
    cold_temp: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Fail when output power is negative or exceeds input power
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vary one configuration field and report each point
    Sweep {
        /// lens-area, module-area, module-efficiency, ambient-temp or cold-reservoir-temp
        #[arg(short, long)]
        parameter: SweepParameter,

        #[arg(long, allow_negative_numbers = true)]
        start: f64,

        #[arg(long, allow_negative_numbers = true)]
        stop: f64,

        #[arg(short = 'n', long, default_value_t = 10)]
        steps: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Base configuration with command-line overrides applied.
    fn panel_config(&self) -> Result<PanelConfig> {
        let mut cfg = match &self.config {
            Some(path) => PanelConfig::from_file(path)
                .with_context(|| format!("Failed to load panel config from {path}"))?,
            None => PanelConfig::default(),
        };
        if let Some(v) = self.lens_area {
            cfg.lens_area = v;
        }
        if let Some(v) = self.module_area {
            cfg.module_area = v;
        }
        if let Some(v) = self.module_efficiency {
            cfg.module_efficiency = v;
        }
        if let Some(v) = self.ambient_temp {
            cfg.ambient_temp = v;
        }
        if let Some(v) = self.cold_temp {
            cfg.cold_reservoir_temp = v;
        }
        Ok(cfg)
    }
}

fn print_report(cli: &Cli, cfg: PanelConfig) -> Result<()> {
    let calc = PanelCalculator::new(cfg).context("Invalid panel configuration")?;
    if cli.strict {
        calc.check_plausibility()?;
    }
    let report = calc.report();
    match cli.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }
    Ok(())
}

fn print_sweep(
    cli: &Cli,
    cfg: PanelConfig,
    parameter: SweepParameter,
    start: f64,
    stop: f64,
    steps: usize,
) -> Result<()> {
    let points = run_sweep(&cfg, parameter, start, stop, steps)?;
    info!("Evaluated {} sweep points for {parameter}", points.len());

    if cli.strict {
        for p in &points {
            PanelCalculator::new(p.report.config)?.check_plausibility()?;
        }
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&points)?),
        OutputFormat::Text => {
            println!("{parameter}\tP_out [W]\tT_hot [°C]\tefficiency");
            for p in &points {
                println!(
                    "{:.4}\t{:.2}\t{:.2}\t{:.2}%",
                    p.value,
                    p.report.output_power,
                    p.report.hot_side_temperature,
                    p.report.efficiency * 100.0
                );
            }
            if let Some(peak) = peak_output(&points) {
                println!(
                    "Peak output: {:.2} W at {parameter} = {:.4}",
                    peak.report.output_power, peak.value
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = cli.panel_config()?;

    match &cli.command {
        None => print_report(&cli, cfg),
        Some(Commands::Sweep {
            parameter,
            start,
            stop,
            steps,
        }) => print_sweep(&cli, cfg, *parameter, *start, *stop, *steps),
    }
}
