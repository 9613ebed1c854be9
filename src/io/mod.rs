//! File boundaries around the core.
//!
//! - [`csv`]: pull one numeric column out of a comma-separated file
//! - [`plot`]: write `index input output` data files and a gnuplot script

pub mod csv;
pub mod plot;

pub use self::csv::{read_csv_column, CsvColumn, CsvColumnReader};
pub use self::plot::{write_plot_data, write_plot_rows, GnuplotScript, PlotPanel};
