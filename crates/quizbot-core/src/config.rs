//! quizbot configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizbot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizbotConfig {
    /// Question document to load.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Append-only score log (JSON lines).
    #[serde(default = "default_score_log")]
    pub score_log: PathBuf,
    /// Shuffle questions before each session.
    #[serde(default = "default_true")]
    pub shuffle: bool,
    /// Fixed shuffle seed, for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Append a record to the score log after each session.
    #[serde(default = "default_true")]
    pub record_scores: bool,
}

fn default_questions() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_score_log() -> PathBuf {
    PathBuf::from("scores.jsonl")
}
fn default_true() -> bool {
    true
}

impl Default for QuizbotConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            score_log: default_score_log(),
            shuffle: true,
            seed: None,
            record_scores: true,
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing. Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut resolved = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        resolved.push_str(&rest[..start]);
        resolved.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    resolved.push_str(rest);
    resolved
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizbot.toml` in the current directory
/// 2. `~/.config/quizbot/config.toml`
///
/// Environment variable overrides: `QUIZBOT_QUESTIONS`, `QUIZBOT_SCORE_LOG`,
/// `QUIZBOT_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbotConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbot.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => parse_config_file(path)?,
        None => QuizbotConfig::default(),
    };

    // Apply env var overrides
    if let Ok(questions) = std::env::var("QUIZBOT_QUESTIONS") {
        config.questions = PathBuf::from(questions);
    }
    if let Ok(log) = std::env::var("QUIZBOT_SCORE_LOG") {
        config.score_log = PathBuf::from(log);
    }
    if let Ok(seed) = std::env::var("QUIZBOT_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("QUIZBOT_SEED must be an unsigned integer, got {seed:?}"))?;
        config.seed = Some(seed);
    }

    config.questions = resolve_path(&config.questions);
    config.score_log = resolve_path(&config.score_log);

    match &config_path {
        Some(p) => tracing::debug!("using config {}", p.display()),
        None => tracing::debug!("no config file found, using defaults"),
    }
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizbotConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizbotConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbot"))
}
