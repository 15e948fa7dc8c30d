//! Configuration of the DQN learner.
use crate::{opt::OptimizerConfig, util::OutDim, Device};
use anyhow::Result;
use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Constructs [`Dqn`](super::Dqn).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DqnConfig<Q> {
    /// Configuration of the action-value function.
    pub q_config: Q,

    /// Configuration of the optimizer.
    pub opt_config: OptimizerConfig,

    /// Discount factor.
    pub gamma: f64,

    /// Device of the networks.
    pub device: Device,
}

impl<Q: Default> Default for DqnConfig<Q> {
    fn default() -> Self {
        Self {
            q_config: Q::default(),
            opt_config: OptimizerConfig::default(),
            gamma: 0.99,
            device: Device::Cpu,
        }
    }
}

impl<Q> DqnConfig<Q>
where
    Q: DeserializeOwned + Serialize + OutDim,
{
    /// Sets the configuration of the action-value function.
    pub fn q_config(mut self, v: Q) -> Self {
        self.q_config = v;
        self
    }

    /// Sets the number of actions.
    pub fn out_dim(mut self, v: i64) -> Self {
        self.q_config.set_out_dim(v);
        self
    }

    /// Sets optimizer configuration.
    pub fn opt_config(mut self, v: OptimizerConfig) -> Self {
        self.opt_config = v;
        self
    }

    /// Discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Device.
    pub fn device(mut self, device: tch::Device) -> Self {
        self.device = device.into();
        self
    }

    /// Loads [`DqnConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of DQN agent from {:?}", path_);
        Ok(b)
    }

    /// Saves [`DqnConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of DQN agent into {:?}", path_);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PongCnnConfig;
    use tempdir::TempDir;

    #[test]
    fn test_serde_dqn_config() -> Result<()> {
        let config = DqnConfig::<PongCnnConfig>::default()
            .out_dim(3)
            .opt_config(OptimizerConfig::Adam { lr: 1e-4 })
            .device(tch::Device::Cuda(1));
        assert_eq!(config.q_config.out_dim, 3);

        let dir = TempDir::new("dqn_config")?;
        let path = dir.path().join("dqn_config.yaml");
        config.save(&path)?;
        assert_eq!(config, DqnConfig::load(&path)?);
        Ok(())
    }
}
