//! Configuration of [`Trainer`](super::Trainer).
use super::EpsilonSchedule;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// Number of random steps filling the replay buffer before learning.
    pub warmup_steps: usize,

    /// Number of transitions in a batch.
    pub batch_size: usize,

    /// Interval of synchronizing the target network in frames.
    pub sync_interval: usize,

    /// Interval of recording epsilon and loss in frames.
    pub record_interval: usize,

    /// Exploration schedule.
    pub epsilon: EpsilonSchedule,

    /// Seed of the random number generator of the agent.
    pub seed: u64,

    /// The number of frames after which training stops.
    ///
    /// `None` runs until the process is terminated.
    pub max_steps: Option<usize>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            warmup_steps: 5000,
            batch_size: 32,
            sync_interval: 10000,
            record_interval: 100,
            epsilon: EpsilonSchedule::default(),
            seed: 42,
            max_steps: None,
        }
    }
}

impl TrainerConfig {
    /// Sets the number of warmup steps.
    pub fn warmup_steps(mut self, v: usize) -> Self {
        self.warmup_steps = v;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the interval of target network synchronization in frames.
    pub fn sync_interval(mut self, v: usize) -> Self {
        self.sync_interval = v;
        self
    }

    /// Sets the interval of recording in frames.
    pub fn record_interval(mut self, v: usize) -> Self {
        self.record_interval = v;
        self
    }

    /// Sets the exploration schedule.
    pub fn epsilon(mut self, v: EpsilonSchedule) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Sets the number of frames to train.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = Some(v);
        self
    }

    /// Constructs [`TrainerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
