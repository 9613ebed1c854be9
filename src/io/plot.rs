//! Plot data export.
//!
//! Each processed channel is written as whitespace-separated rows
//! `index input output`, and a gnuplot script stitches the files into one
//! multiplot figure. Rendering is left to the user (`gnuplot -persist plot.gp`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ensure_same_len, Result, SignalError};

/// Write `index input output` rows to `writer`, six decimals per value.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or the writer fails.
pub fn write_plot_rows<W: Write>(writer: &mut W, input: &[f64], output: &[f64]) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;
    for (i, (x, y)) in input.iter().zip(output).enumerate() {
        writeln!(writer, "{i} {x:.6} {y:.6}")?;
    }
    Ok(())
}

/// Write `index input output` rows to a file at `path`.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or the file cannot be
/// written.
pub fn write_plot_data(path: impl AsRef<Path>, input: &[f64], output: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_plot_rows(&mut writer, input, output)?;
    writer.flush()?;
    debug!(path = %path.display(), rows = input.len(), "wrote plot data");
    Ok(())
}

/// One panel of a multiplot: a data file with input and output columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotPanel {
    /// Panel title.
    pub title: String,
    /// Data file produced by [`write_plot_data`].
    pub data_file: PathBuf,
}

/// Gnuplot multiplot script over several data files.
///
/// # Example
///
/// ```
/// use imu_signals::io::GnuplotScript;
///
/// let mut script = GnuplotScript::new("Columns 5 to 6", 3);
/// script.add_panel("Column 5", "tempData_5.temp");
/// script.add_panel("Column 6", "tempData_6.temp");
///
/// let text = script.render()?;
/// assert!(text.starts_with("set multiplot layout 1,3"));
/// # Ok::<(), imu_signals::SignalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GnuplotScript {
    title: String,
    columns: usize,
    panels: Vec<PlotPanel>,
}

impl GnuplotScript {
    /// Create an empty script laid out `columns` panels wide.
    #[must_use]
    pub fn new(title: impl Into<String>, columns: usize) -> Self {
        Self {
            title: title.into(),
            columns,
            panels: Vec::new(),
        }
    }

    /// Append a panel.
    pub fn add_panel(&mut self, title: impl Into<String>, data_file: impl Into<PathBuf>) {
        self.panels.push(PlotPanel {
            title: title.into(),
            data_file: data_file.into(),
        });
    }

    /// Panels added so far.
    #[must_use]
    pub fn panels(&self) -> &[PlotPanel] {
        &self.panels
    }

    /// Grid size as `(rows, columns)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the script was created with zero columns.
    pub fn layout(&self) -> Result<(usize, usize)> {
        if self.columns == 0 {
            return Err(SignalError::invalid_parameter("columns", "must be at least 1"));
        }
        let rows = self.panels.len().div_ceil(self.columns).max(1);
        Ok((rows, self.columns))
    }

    /// Render the script text.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has zero columns or there are no panels.
    pub fn render(&self) -> Result<String> {
        let (rows, columns) = self.layout()?;
        if self.panels.is_empty() {
            return Err(SignalError::invalid_input("plot script needs at least one panel"));
        }

        let mut out = format!(
            "set multiplot layout {rows},{columns} title '{}'\n",
            escape(&self.title)
        );
        for panel in &self.panels {
            let file = escape(&panel.data_file.to_string_lossy());
            out.push_str(&format!("set title '{}'\n", escape(&panel.title)));
            out.push_str(&format!(
                "plot '{file}' using 1:2 with lines title 'Input', '{file}' using 1:3 with lines title 'Output'\n"
            ));
        }
        out.push_str("unset multiplot\n");
        Ok(out)
    }

    /// Render the script and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = self.render()?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}

/// Gnuplot single-quoted strings escape a quote by doubling it.
fn escape(s: &str) -> String {
    s.replace('\'', "''")
}
