pub mod facets;
pub mod init;
pub mod play;
pub mod scores;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizbot_core::config::{load_config_from, QuizbotConfig};

/// Load config, letting an explicit `--questions` path win.
fn config_with_questions(
    questions: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<QuizbotConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(path) = questions {
        config.questions = path;
    }
    Ok(config)
}
