use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{Grid, Pattern, Result, Sim};

#[derive(Debug, Clone, Parser)]
#[command(name = "lifegrid", version)]
#[command(about = "Conway's game of life on a bounded grid, in the terminal")]
pub struct Config {
    /// Seed pattern: one line per row, '#' marks a live cell
    pub pattern: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long, default_value_t = Grid::DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Number of grid rows
    #[arg(long, default_value_t = Grid::DEFAULT_ROWS)]
    pub rows: usize,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 200)]
    pub tick_ms: u64,

    /// Start running instead of stopped
    #[arg(long)]
    pub run: bool,

    /// Advance this many generations without a terminal and print the result
    #[arg(long, value_name = "GENERATIONS")]
    pub headless: Option<u64>,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Builds the engine: grid, centred seed pattern and initial run state.
    pub fn build_sim(&self) -> Result<Sim> {
        let mut sim = Sim::initialize(self.columns, self.rows)?;
        if let Some(path) = &self.pattern {
            let pattern = Pattern::load(path)?;
            pattern.place(&mut sim, pattern.centered_in(self.columns, self.rows))?;
        }
        if self.run {
            sim.toggle_running();
        }
        Ok(sim)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["lifegrid"]).unwrap();
        assert_eq!((config.columns, config.rows), (61, 41));
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert!(!config.run);
        assert!(config.pattern.is_none());
        assert!(config.headless.is_none());
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "lifegrid",
            "glider.txt",
            "--columns",
            "10",
            "--rows",
            "8",
            "--tick-ms",
            "50",
            "--run",
            "--headless",
            "12",
        ])
        .unwrap();
        assert_eq!(config.pattern, Some(PathBuf::from("glider.txt")));
        assert_eq!((config.columns, config.rows), (10, 8));
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert!(config.run);
        assert_eq!(config.headless, Some(12));
    }

    #[test]
    fn build_sim_places_pattern_and_run_state() {
        let path = std::env::temp_dir().join(format!("lifegrid-config-{}.txt", std::process::id()));
        fs::write(&path, "###\n").unwrap();
        let config =
            Config::try_parse_from(["lifegrid", "--columns", "5", "--rows", "5", "--run"]).unwrap();
        let config = Config {
            pattern: Some(path.clone()),
            ..config
        };
        let sim = config.build_sim().unwrap();
        fs::remove_file(&path).unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.population(), 3);
        assert!(sim.get_cell_state(crate::pos!(1, 2)).unwrap().is_alive());
    }

    #[test]
    fn build_sim_rejects_zero_rows() {
        let config = Config::try_parse_from(["lifegrid", "--rows", "0"]).unwrap();
        assert!(matches!(config.build_sim(), Err(Error::InvalidDimension { .. })));
    }

    #[test]
    fn build_sim_reports_missing_pattern() {
        let config = Config::try_parse_from(["lifegrid", "/nonexistent/lifegrid.txt"]).unwrap();
        assert!(matches!(config.build_sim(), Err(Error::Io(_))));
    }
}
