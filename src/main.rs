//! `imu-signals`: run a filter over a range of CSV columns and export the
//! results as gnuplot data.
//!
//! ```text
//! imu-signals demo.csv --start-column 5 --end-column 10 --op moving-average
//! gnuplot -persist plot.gp
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use imu_signals::io::{CsvColumnReader, GnuplotScript};
use imu_signals::{detect_movement, low_pass, moving_average, ProcessingConfig};

#[derive(Parser, Debug)]
#[command(name = "imu-signals")]
#[command(version, about = "Smooth, filter or flag movement in IMU CSV columns", long_about = None)]
struct Cli {
    /// CSV file with one channel per column
    #[arg(value_name = "CSV")]
    input: PathBuf,

    /// First column to process (0-based)
    #[arg(long, default_value_t = 5)]
    start_column: usize,

    /// Last column to process (inclusive)
    #[arg(long, default_value_t = 10)]
    end_column: usize,

    /// Maximum samples read per column
    #[arg(long, default_value_t = 100_000)]
    max_samples: usize,

    /// Skip the first row of the file
    #[arg(long, default_value_t = false)]
    headers: bool,

    /// Operation applied to each column
    #[arg(long, value_enum, default_value_t = Operation::MovingAverage)]
    op: Operation,

    /// Parameter preset; individual flags below override it
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// Moving average window
    #[arg(long)]
    window_size: Option<usize>,

    /// Low-pass cutoff in Hz
    #[arg(long)]
    cutoff_frequency: Option<f64>,

    /// Sampling rate in Hz
    #[arg(long)]
    sampling_rate: Option<f64>,

    /// Acceleration threshold for movement flags
    #[arg(long)]
    movement_threshold: Option<f64>,

    /// Directory for data files and the plot script
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Panels per row in the multiplot
    #[arg(long, default_value_t = 3)]
    layout_columns: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    MovingAverage,
    LowPass,
    Movement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Default,
    Pedestrian,
    Handheld,
    Vehicle,
}

impl Cli {
    fn config(&self) -> Result<ProcessingConfig> {
        let mut config = match self.preset {
            Preset::Default => ProcessingConfig::default(),
            Preset::Pedestrian => ProcessingConfig::pedestrian(),
            Preset::Handheld => ProcessingConfig::handheld(),
            Preset::Vehicle => ProcessingConfig::vehicle(),
        };
        if let Some(w) = self.window_size {
            config.window_size = w;
        }
        if let Some(fc) = self.cutoff_frequency {
            config.cutoff_frequency = fc;
        }
        if let Some(fs) = self.sampling_rate {
            config.sampling_rate = fs;
        }
        if let Some(t) = self.movement_threshold {
            config.movement_threshold = t;
        }
        config.validate()?;
        Ok(config)
    }
}

impl Operation {
    fn apply(self, input: &[f64], config: &ProcessingConfig) -> imu_signals::Result<Vec<f64>> {
        match self {
            Self::MovingAverage => moving_average(input, config.window_size),
            Self::LowPass => low_pass(input, config.cutoff_frequency, config.sampling_rate),
            Self::Movement => {
                detect_movement(input, config.movement_threshold, config.sampling_rate)
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if cli.start_column > cli.end_column {
        bail!(
            "start column {} is after end column {}",
            cli.start_column,
            cli.end_column
        );
    }
    let config = cli.config().context("invalid processing parameters")?;
    info!(op = ?cli.op, ?config, "processing {}", cli.input.display());

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create {}", cli.out_dir.display()))?;

    let mut script = GnuplotScript::new(
        format!(
            "Data Visualization from Column {} to {}",
            cli.start_column, cli.end_column
        ),
        cli.layout_columns,
    );

    for column in cli.start_column..=cli.end_column {
        match process_column(cli, &config, column) {
            Ok(data_file) => script.add_panel(format!("Column {column}"), data_file),
            Err(err) => warn!(column, "skipping column: {err:#}"),
        }
    }

    if script.panels().is_empty() {
        bail!("no column in {}..={} could be processed", cli.start_column, cli.end_column);
    }

    let script_path = cli.out_dir.join("plot.gp");
    script
        .write_to(&script_path)
        .with_context(|| format!("cannot write {}", script_path.display()))?;
    info!(
        panels = script.panels().len(),
        "wrote {}; render with `gnuplot -persist {}`",
        script_path.display(),
        script_path.display()
    );
    Ok(())
}

fn process_column(cli: &Cli, config: &ProcessingConfig, column: usize) -> Result<PathBuf> {
    let data = CsvColumnReader::new(column)
        .with_max_samples(cli.max_samples)
        .with_headers(cli.headers)
        .read_path(&cli.input)?;
    info!(column, total_rows = data.total_rows, samples = data.len(), "column loaded");

    let output = cli.op.apply(&data.values, config)?;

    let data_file = data_file_name(&cli.out_dir, column);
    imu_signals::io::write_plot_data(&data_file, &data.values, &output)?;
    Ok(data_file)
}

fn data_file_name(out_dir: &Path, column: usize) -> PathBuf {
    out_dir.join(format!("tempData_{column}.temp"))
}
