//! Trains a Deep Q-Network to play Atari Pong.
//!
//! The binary `dqn-pong` (feature `ale`) wires the crates together:
//!
//! * [dqn-pong-core](dqn_pong_core) runs the training loop,
//! * [dqn-pong-atari-env](dqn_pong_atari_env) emulates Pong and preprocesses frames,
//! * [dqn-pong-tch-agent](dqn_pong_tch_agent) trains the action-value network,
//! * [dqn-pong-tensorboard](dqn_pong_tensorboard) writes the metrics.
//!
//! ```bash
//! ATARI_ROM_DIR=$HOME/atari_rom cargo run --release --features ale -- --cuda
//! tensorboard --logdir runs
//! ```
use clap::Parser;
use dqn_pong_core::{EpsilonSchedule, ReplayBufferConfig, TrainerConfig};
use dqn_pong_tch_agent::{DqnConfig, OptimizerConfig, PongCnnConfig};

/// Number of stacked frames fed to the network.
pub const N_STACK: usize = 4;

/// Comment appended to the TensorBoard run directory.
pub const RUN_COMMENT: &str = "-pong";

/// Train a DQN agent on Atari Pong
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Enable cuda
    #[arg(long, default_value_t = false)]
    pub cuda: bool,
}

impl Args {
    /// The device on which the networks are placed.
    pub fn device(&self) -> tch::Device {
        match self.cuda {
            true => tch::Device::Cuda(0),
            false => tch::Device::Cpu,
        }
    }
}

/// Configuration of the training loop.
pub fn trainer_config() -> TrainerConfig {
    TrainerConfig::default()
        .warmup_steps(5000)
        .batch_size(32)
        .sync_interval(10000)
        .record_interval(100)
        .epsilon(EpsilonSchedule::default())
}

/// Configuration of the replay buffer.
pub fn replay_buffer_config() -> ReplayBufferConfig {
    ReplayBufferConfig::default().capacity(20000)
}

/// Configuration of the learner for `n_actions` actions.
pub fn agent_config(args: &Args, n_actions: usize) -> DqnConfig<PongCnnConfig> {
    DqnConfig::<PongCnnConfig>::default()
        .q_config(PongCnnConfig::default().n_stack(N_STACK as _))
        .out_dim(n_actions as _)
        .opt_config(OptimizerConfig::RmsProp {
            lr: 0.00025,
            momentum: 0.95,
        })
        .gamma(0.99)
        .device(args.device())
}

#[cfg(test)]
mod test {
    use super::*;
    use dqn_pong_tch_agent::Device;

    #[test]
    fn test_cuda_flag() {
        let args = Args::try_parse_from(["dqn-pong"]).unwrap();
        assert_eq!(agent_config(&args, 6).device, Device::Cpu);

        let args = Args::try_parse_from(["dqn-pong", "--cuda"]).unwrap();
        assert_eq!(agent_config(&args, 6).device, Device::Cuda(0));

        assert!(Args::try_parse_from(["dqn-pong", "--gpu"]).is_err());
    }

    #[test]
    fn test_agent_config() {
        let config = agent_config(&Args { cuda: false }, 3);
        assert_eq!(config.q_config.out_dim, 3);
        assert_eq!(config.q_config.n_stack, 4);
        assert_eq!(config.gamma, 0.99);
    }

    #[test]
    fn test_trainer_config() {
        let config = trainer_config();
        assert_eq!(config.warmup_steps, 5000);
        assert_eq!(config.sync_interval, 10000);
        assert_eq!(config.max_steps, None);
        assert_eq!(replay_buffer_config().capacity, 20000);
    }
}
