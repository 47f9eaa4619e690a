//! Roll configuration read by the `roll` binary
use crate::weighted::{select_one, try_weighted_bool, Roller, SelectError, WeightTable};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_draws() -> usize {
    1
}

#[derive(Debug, Deserialize)]
pub struct RollSettings {
    #[serde(default = "default_draws")]
    pub draws: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    pub table: TableSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum TableSettings {
    /// Named items with integer weights
    Table { entries: Vec<EntrySettings> },
    /// A percent chance of `true`
    Chance { percent: i32 },
}

#[derive(Debug, Deserialize, Clone)]
pub struct EntrySettings {
    pub item: String,
    pub weight: i64,
}

impl RollSettings {
    pub fn from_json(json: &str) -> Result<RollSettings, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<RollSettings, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        RollSettings::from_json(&json)
    }

    /// Command-line values win over the file's
    pub fn with_overrides(self, draws: Option<usize>, seed: Option<u64>) -> RollSettings {
        RollSettings {
            draws: draws.unwrap_or(self.draws),
            seed: seed.or(self.seed),
            ..self
        }
    }

    /// A seeded `StdRng` when there is a seed, otherwise the thread-local generator
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }
}

impl TableSettings {
    pub fn weight_table(&self) -> WeightTable<String> {
        match self {
            TableSettings::Table { entries } => entries
                .iter()
                .map(|entry| (entry.item.clone(), entry.weight))
                .collect(),
            TableSettings::Chance { percent } => WeightTable::from([
                (true.to_string(), i64::from(*percent)),
                (false.to_string(), 100 - i64::from(*percent)),
            ]),
        }
    }
}

///
/// Draws `draws` times from `table`, returning how often each item came up, in
/// table order. Items that were never drawn are included with a count of zero.
///
pub fn tally<R: Roller + ?Sized>(
    table: &TableSettings,
    draws: usize,
    roller: &mut R,
) -> Result<Vec<(String, usize)>, SelectError> {
    let weights = table.weight_table();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..draws {
        let item = match table {
            TableSettings::Table { .. } => select_one(&weights, roller)?,
            TableSettings::Chance { percent } => try_weighted_bool(*percent, roller)?.to_string(),
        };
        *counts.entry(item).or_insert(0) += 1;
    }

    Ok(weights
        .iter()
        .map(|(item, _)| (item.clone(), counts.get(item).copied().unwrap_or(0)))
        .collect())
}
