use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration for the demo binary. The library itself takes
/// explicit constructor arguments; none of this leaks into the bar engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// e.g., "info" | "debug" | "trace"
    pub log_level: Option<String>,
    /// Panel geometry and target row
    pub panel: Option<PanelConfig>,
    /// Per-bar value domains
    pub bars: Option<BarsConfig>,
    /// Demo animation settings
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    pub cols: Option<u8>,
    pub rows: Option<u8>,
    /// Which row carries the bars. 0 is the 1st row.
    pub row: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BarsConfig {
    pub bar1: Option<RangeConfig>,
    pub bar2: Option<RangeConfig>,
}

/// `min >= max` is not rejected: that is the documented disabled state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeConfig {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    pub frames: Option<u32>,
    pub interval_ms: Option<u64>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "duobar-demo", about = "duobar terminal demo", disable_help_flag = false, allow_negative_numbers = true)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub cols: Option<u8>,
    #[arg(long)]
    pub rows: Option<u8>,
    #[arg(long)]
    pub row: Option<u8>,
    #[arg(long)]
    pub bar1_min: Option<i32>,
    #[arg(long)]
    pub bar1_max: Option<i32>,
    #[arg(long)]
    pub bar2_min: Option<i32>,
    #[arg(long)]
    pub bar2_max: Option<i32>,
    #[arg(long)]
    pub frames: Option<u32>,
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    load_with(cli)
}

/// Same as `load` but with a pre-parsed CLI (testable).
pub fn load_with(cli: Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/duobar/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/duobar/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/duobar.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["duobar.yaml", "config.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Overlay `other` onto `cfg`, present fields win.
fn merge(cfg: &mut Config, other: Config) {
    if other.log_level.is_some() { cfg.log_level = other.log_level }
    if other.panel.is_some() { cfg.panel = other.panel }
    if other.bars.is_some() { cfg.bars = other.bars }
    if other.demo.is_some() { cfg.demo = other.demo }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() {
        cfg.log_level = cli.log_level.clone();
    }

    if cli.cols.is_some() || cli.rows.is_some() || cli.row.is_some() {
        let panel = cfg.panel.get_or_insert_with(PanelConfig::default);
        if cli.cols.is_some() { panel.cols = cli.cols }
        if cli.rows.is_some() { panel.rows = cli.rows }
        if cli.row.is_some() { panel.row = cli.row }
    }

    let bar1_touched = cli.bar1_min.is_some() || cli.bar1_max.is_some();
    let bar2_touched = cli.bar2_min.is_some() || cli.bar2_max.is_some();
    if bar1_touched || bar2_touched {
        let bars = cfg.bars.get_or_insert_with(BarsConfig::default);
        if bar1_touched {
            let r = bars.bar1.get_or_insert_with(RangeConfig::default);
            if cli.bar1_min.is_some() { r.min = cli.bar1_min }
            if cli.bar1_max.is_some() { r.max = cli.bar1_max }
        }
        if bar2_touched {
            let r = bars.bar2.get_or_insert_with(RangeConfig::default);
            if cli.bar2_min.is_some() { r.min = cli.bar2_min }
            if cli.bar2_max.is_some() { r.max = cli.bar2_max }
        }
    }

    if cli.frames.is_some() || cli.interval_ms.is_some() {
        let demo = cfg.demo.get_or_insert_with(DemoConfig::default);
        if cli.frames.is_some() { demo.frames = cli.frames }
        if cli.interval_ms.is_some() { demo.interval_ms = cli.interval_ms }
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(panel) = &cfg.panel {
        let cols = panel.cols.unwrap_or(16);
        let rows = panel.rows.unwrap_or(2);
        if cols == 0 || cols > 40 {
            return Err(ConfigError::Validation(format!(
                "panel.cols must be 1..=40, got {cols}"
            )));
        }
        if rows == 0 || rows > 4 {
            return Err(ConfigError::Validation(format!(
                "panel.rows must be 1..=4, got {rows}"
            )));
        }
        if let Some(row) = panel.row {
            if row >= rows {
                return Err(ConfigError::Validation(format!(
                    "panel.row {row} out of range for {rows} rows"
                )));
            }
        }
    }
    Ok(())
}
