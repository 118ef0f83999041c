//! Progress reporting.
//!
//! The solver performs no I/O of its own. Every `report_frequency`
//! generations, and once more when the run ends, it hands a
//! [`GenerationReport`] to a [`ReportSink`].

use super::types::join_colors;
use std::fmt;

/// Snapshot of the solver state at a reporting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport<'a> {
    /// Index of the current generation (0-based).
    pub generation: usize,

    /// Number of chromosomes in the live population.
    pub population_size: usize,

    /// Best coloring seen so far, or `None` before the first tracking pass.
    pub best_colors: Option<&'a [usize]>,

    /// Conflict count of `best_colors`.
    pub best_conflicts: Option<usize>,

    /// `true` for the unconditional report emitted when the run ends.
    pub is_final: bool,
}

impl fmt::Display for GenerationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation {}", self.generation)?;
        writeln!(f, "Population size: {} chromosomes", self.population_size)?;
        write!(f, "Best coloring: ")?;
        match (self.best_colors, self.best_conflicts) {
            (Some(colors), Some(conflicts)) if !colors.is_empty() => write!(
                f,
                "{}, bad edges count: {}",
                join_colors(colors),
                conflicts
            ),
            _ => write!(f, "none"),
        }
    }
}

/// Receives generation snapshots.
///
/// Implemented for any `FnMut(&GenerationReport)` closure.
pub trait ReportSink {
    fn report(&mut self, report: &GenerationReport<'_>);
}

impl<F> ReportSink for F
where
    F: FnMut(&GenerationReport<'_>),
{
    fn report(&mut self, report: &GenerationReport<'_>) {
        self(report)
    }
}

/// Emits each report through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, report: &GenerationReport<'_>) {
        log::info!("{report}");
    }
}

/// Discards all reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&mut self, _report: &GenerationReport<'_>) {}
}
