//! Loading the question bank (problems + chapter tree) from TOML.
//!
//! See `BankConfig` and `ProblemCfg` for the expected schema.

use serde::Deserialize;
use tracing::{info, error};

use crate::domain::{ChapterNode, Difficulty};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct BankConfig {
  #[serde(default)]
  pub chapters: Vec<ChapterNode>,
  #[serde(default)]
  pub problems: Vec<ProblemCfg>,
}

/// Problem entry accepted in TOML configuration. `id` is optional; entries
/// without one get a generated id at load time.
#[derive(Clone, Debug, Deserialize)]
pub struct ProblemCfg {
  #[serde(default)] pub id: Option<String>,
  #[serde(default)] pub chapter_id: Option<String>,
  pub difficulty: Difficulty,
  pub problem_type: String,
  #[serde(default)] pub subjects: Vec<String>,
  #[serde(default)] pub tags: Vec<String>,
  #[serde(default)] pub correct_rate: Option<u8>,
  #[serde(default)] pub exam_year: Option<u16>,
  #[serde(default)] pub question_image: Option<String>,
  #[serde(default)] pub answer_image: Option<String>,
}

/// Attempt to load `BankConfig` from BANK_CONFIG_PATH. On any parsing/IO error,
/// returns None; the caller falls back to the built-in seed bank.
pub fn load_bank_config_from_env() -> Option<BankConfig> {
  let path = std::env::var("BANK_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<BankConfig>(&s) {
      Ok(cfg) => {
        info!(target: "gichul_backend", %path, chapters = cfg.chapters.len(), problems = cfg.problems.len(), "Loaded bank config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "gichul_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "gichul_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bank_config_parses_problems_and_chapters() {
    let toml_src = r#"
      [[chapters]]
      id = "ch1"
      label = "사회·문화 현상의 탐구"
      kind = "category"

        [[chapters.children]]
        id = "ch1-1"
        label = "사회·문화 현상의 이해"

      [[problems]]
      id = "q-2024-suneung-03"
      chapter_id = "ch1-1"
      difficulty = "중상"
      problem_type = "수능"
      subjects = ["사회문화"]
      tags = ["기능론"]
      correct_rate = 57
      exam_year = 2024
    "#;
    let cfg: BankConfig = toml::from_str(toml_src).expect("config");
    assert_eq!(cfg.chapters.len(), 1);
    assert_eq!(cfg.chapters[0].children.len(), 1);
    assert_eq!(cfg.problems.len(), 1);
    assert_eq!(cfg.problems[0].difficulty, Difficulty::Jungsang);
    assert_eq!(cfg.problems[0].correct_rate, Some(57));
  }
}
