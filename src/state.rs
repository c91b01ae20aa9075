//! Application state: in-memory stores for the question bank and worksheets.
//!
//! This module owns:
//!   - the problem store (by id) plus the bank-order id list
//!   - the immutable chapter tree
//!   - the worksheet store (by id)
//!
//! The bank-order list matters: the pipeline's "input order" is the order
//! problems entered the bank, and filtering/truncation contracts are defined
//! against it.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::load_bank_config_from_env;
use crate::domain::{ChapterNode, Problem, ProblemSource, Worksheet};
use crate::seeds::{seed_chapter_tree, seed_problems};

#[derive(Clone)]
pub struct AppState {
    pub by_id: Arc<RwLock<HashMap<String, Problem>>>,
    pub order: Arc<RwLock<Vec<String>>>,
    pub chapters: Arc<Vec<ChapterNode>>,
    pub worksheets: Arc<RwLock<HashMap<String, Worksheet>>>,
}

impl AppState {
    /// Build state from env: load the TOML bank if configured, merge the
    /// built-in seeds underneath, and log the startup inventory.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg_opt = load_bank_config_from_env();

        let chapters = match &cfg_opt {
            Some(cfg) if !cfg.chapters.is_empty() => cfg.chapters.clone(),
            _ => seed_chapter_tree(),
        };

        let mut id_map = HashMap::<String, Problem>::new();
        let mut order = Vec::<String>::new();

        // Insert config-bank problems first (if any), in file order.
        if let Some(cfg) = &cfg_opt {
            for pc in &cfg.problems {
                let id = pc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
                if id_map.contains_key(&id) {
                    warn!(target: "bank", %id, "Skipping bank item: duplicate id");
                    continue;
                }
                let p = Problem {
                    id: id.clone(),
                    source: ProblemSource::ConfigBank,
                    chapter_id: pc.chapter_id.clone(),
                    difficulty: pc.difficulty,
                    problem_type: pc.problem_type.clone(),
                    subjects: pc.subjects.clone(),
                    tags: pc.tags.clone(),
                    correct_rate: pc.correct_rate,
                    exam_year: pc.exam_year,
                    question_image: pc.question_image.clone().unwrap_or_default(),
                    answer_image: pc.answer_image.clone(),
                };
                order.push(id.clone());
                id_map.insert(id, p);
            }
        }

        // Always insert built-in seeds, but don't overwrite existing ids.
        for p in seed_problems() {
            let id = p.id.clone();
            if !id_map.contains_key(&id) {
                order.push(id.clone());
                id_map.insert(id, p);
            }
        }

        // Inventory summary by difficulty/source.
        let mut count_by_diff: HashMap<&'static str, (usize, usize)> = HashMap::new();
        for p in id_map.values() {
            let entry = count_by_diff.entry(p.difficulty.label()).or_insert((0, 0));
            match p.source {
                ProblemSource::ConfigBank => entry.0 += 1,
                ProblemSource::Seed => entry.1 += 1,
            }
        }
        for (diff, (bank, seed)) in count_by_diff {
            info!(target: "bank", %diff, config_bank = bank, seed = seed, "Startup problem inventory");
        }

        Self {
            by_id: Arc::new(RwLock::new(id_map)),
            order: Arc::new(RwLock::new(order)),
            chapters: Arc::new(chapters),
            worksheets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The full candidate pool, cloned in bank order. The pipeline works on
    /// this snapshot so no lock is held across filtering/sorting.
    #[instrument(level = "debug", skip(self))]
    pub async fn problems_snapshot(&self) -> Vec<Problem> {
        let by_id = self.by_id.read().await;
        let order = self.order.read().await;
        order.iter().filter_map(|id| by_id.get(id).cloned()).collect()
    }

    /// Read-only access to one problem by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_problem(&self, id: &str) -> Option<Problem> {
        let by_id = self.by_id.read().await;
        by_id.get(id).cloned()
    }

    /// Store an assembled worksheet.
    #[instrument(level = "debug", skip(self, w), fields(id = %w.id))]
    pub async fn insert_worksheet(&self, w: Worksheet) {
        let mut worksheets = self.worksheets.write().await;
        worksheets.insert(w.id.clone(), w);
    }

    /// Read-only access to a worksheet by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_worksheet(&self, id: &str) -> Option<Worksheet> {
        let worksheets = self.worksheets.read().await;
        worksheets.get(id).cloned()
    }

    /// All published worksheets, newest insertion last not guaranteed; callers
    /// present their own ordering.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_published_worksheets(&self) -> Vec<Worksheet> {
        let worksheets = self.worksheets.read().await;
        worksheets.values().filter(|w| w.published).cloned().collect()
    }

    /// Flip a worksheet to published. Returns false for unknown ids.
    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn publish_worksheet(&self, id: &str) -> bool {
        let mut worksheets = self.worksheets.write().await;
        match worksheets.get_mut(id) {
            Some(w) => {
                w.published = true;
                info!(target: "worksheet", %id, "Worksheet published");
                true
            }
            None => {
                warn!(target: "worksheet", %id, "Publish requested for unknown worksheet");
                false
            }
        }
    }
}
