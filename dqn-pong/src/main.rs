use anyhow::Result;
use clap::Parser;
use dqn_pong::{agent_config, replay_buffer_config, trainer_config, Args, N_STACK, RUN_COMMENT};
use dqn_pong_atari_env::{preprocessing, AtariEnv, AtariEnvConfig, ImageObs};
use dqn_pong_core::{Env as _, FifoReplayBuffer, Trainer, TransformedEnv, Transition};
use dqn_pong_tch_agent::{Dqn, PongCnn};
use dqn_pong_tensorboard::TensorboardRecorder;
use log::info;

type ReplayBuffer = FifoReplayBuffer<Transition<ImageObs>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let env_config = AtariEnvConfig::default();
    let env = TransformedEnv::new(AtariEnv::build(&env_config)?, preprocessing(N_STACK)?);
    let n_actions = env.action_space().n();
    info!(
        "{}: {} actions, observation {:?}",
        env_config.name,
        n_actions,
        env.observation_space().shape()
    );

    let dqn = Dqn::<PongCnn>::build(agent_config(&args, n_actions))?;
    let mut trainer: Trainer<_, _, ReplayBuffer> =
        Trainer::build(trainer_config(), env, dqn, &replay_buffer_config())?;
    let mut recorder = TensorboardRecorder::with_comment(RUN_COMMENT);
    info!("Write metrics into {:?}", recorder.logdir());

    trainer.train(&mut recorder)
}
