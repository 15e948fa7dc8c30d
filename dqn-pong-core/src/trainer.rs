//! Train an action-value function with DQN.
mod config;
mod epsilon;
mod session;
use crate::{
    record::{Record, RecordValue, Recorder},
    Agent, Env, ExperienceBufferBase, QLearner, ReplayBufferBase, Transition,
};
use anyhow::{ensure, Result};
use chrono::Local;
pub use config::TrainerConfig;
pub use epsilon::EpsilonSchedule;
use log::{debug, info};
pub use session::{Phase, TrainingSession};

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the training loop and the objects involved in it.
///
/// # Training loop
///
/// 1. *Warmup*: take `warmup_steps` uniformly random actions, pushing the
///    transitions into the replay buffer. No learning happens.
/// 2. *Learning*: starting from `frame_idx = 0`, repeat:
///     1. Play a frame with the **target** network and the current epsilon.
///        If an episode ended, log and record its return as `"reward"`.
///     2. If the replay buffer holds at least `batch_size` transitions,
///        optimize the **online** network on a freshly sampled batch.
///     3. Recompute epsilon from `frame_idx`.
///     4. If `frame_idx % record_interval == 0`, log and record `"epsilon"`
///        and the latest `"loss"`.
///     5. If `frame_idx % sync_interval == 0`, copy the online network into
///        the target network.
///     6. `frame_idx += 1`, stopping at `max_steps` if it is set.
///
/// Every record carries `"frame_idx"` as its step.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|action|B[Env]
///     B -->|Step|A
///     A -->|Transition|C[ReplayBuffer]
///     C -->|batch|D[QLearner]
///     D -->|target network|A
/// ```
pub struct Trainer<E, L, R>
where
    E: Env,
    L: QLearner<E::Obs>,
    R: ExperienceBufferBase<Item = Transition<E::Obs>>
        + ReplayBufferBase<Batch = Vec<Transition<E::Obs>>>,
{
    config: TrainerConfig,
    agent: Agent<E>,
    learner: L,
    buffer: R,
    session: TrainingSession,
}

impl<E, L, R> Trainer<E, L, R>
where
    E: Env,
    L: QLearner<E::Obs>,
    R: ExperienceBufferBase<Item = Transition<E::Obs>>
        + ReplayBufferBase<Batch = Vec<Transition<E::Obs>>>,
{
    /// Constructs a trainer, resetting the environment.
    ///
    /// Fails if the batch size or an interval of the configuration is zero.
    pub fn build(
        config: TrainerConfig,
        env: E,
        learner: L,
        replay_buffer_config: &R::Config,
    ) -> Result<Self> {
        ensure!(config.batch_size >= 1, "batch_size must be positive");
        ensure!(config.sync_interval >= 1, "sync_interval must be positive");
        ensure!(config.record_interval >= 1, "record_interval must be positive");

        let agent = Agent::new(env, config.seed)?;
        let buffer = R::build(replay_buffer_config);
        let session = TrainingSession::new(config.epsilon.eps_start);
        Ok(Self {
            config,
            agent,
            learner,
            buffer,
            session,
        })
    }

    /// The state of the training run.
    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    /// The learner.
    pub fn learner(&self) -> &L {
        &self.learner
    }

    /// The replay buffer.
    pub fn buffer(&self) -> &R {
        &self.buffer
    }

    /// The agent.
    pub fn agent(&self) -> &Agent<E> {
        &self.agent
    }

    /// Fills the replay buffer with random transitions and moves to the
    /// learning phase.
    pub fn warmup(&mut self) -> Result<()> {
        info!("Populate buffer with {} steps", self.config.warmup_steps);
        while self.session.warmup_steps < self.config.warmup_steps {
            self.agent.play_random_step(&mut self.buffer)?;
            self.session.warmup_steps += 1;
        }
        self.session.phase = Phase::Learning;
        info!("Start learning");
        Ok(())
    }

    /// Performs a learning frame.
    pub fn train_step(&mut self, recorder: &mut dyn Recorder) -> Result<()> {
        let frame_idx = self.session.frame_idx;

        let reward =
            self.agent
                .play_step(self.learner.target(), self.session.epsilon, &mut self.buffer)?;
        if let Some(reward) = reward {
            info!("{}: reward {}", frame_idx, reward);
            self.session.n_episodes += 1;
            recorder.write(Record::from_slice(&[
                ("frame_idx", RecordValue::Index(frame_idx)),
                ("reward", RecordValue::Scalar(reward)),
                ("datetime", RecordValue::DateTime(Local::now())),
            ]));
        }

        if self.buffer.len() >= self.config.batch_size {
            let batch = self.buffer.batch(self.config.batch_size)?;
            let record = self.learner.opt(&batch)?;
            self.session.last_loss = Some(record.get_scalar("loss")?);
            self.session.n_opts += 1;
        }

        self.session.epsilon = self.config.epsilon.value(frame_idx);
        if frame_idx % self.config.record_interval == 0 {
            info!("{}: epsilon {}", frame_idx, self.session.epsilon);
            let mut record = Record::from_slice(&[
                ("frame_idx", RecordValue::Index(frame_idx)),
                ("epsilon", RecordValue::Scalar(self.session.epsilon)),
            ]);
            if let Some(loss) = self.session.last_loss {
                record.insert("loss", RecordValue::Scalar(loss));
            }
            recorder.write(record);
            recorder.flush();
        }

        if frame_idx % self.config.sync_interval == 0 {
            self.learner.sync_target()?;
            self.session.n_syncs += 1;
            debug!("{}: synchronized the target network", frame_idx);
        }

        self.session.frame_idx += 1;
        Ok(())
    }

    /// Trains until `max_steps` frames, or forever if it is not set.
    pub fn train(&mut self, recorder: &mut dyn Recorder) -> Result<()> {
        if self.session.phase == Phase::Warmup {
            self.warmup()?;
        }

        while self
            .config
            .max_steps
            .map_or(true, |max_steps| self.session.frame_idx < max_steps)
        {
            self.train_step(recorder)?;
        }

        recorder.flush();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{ConstActionValue, DummyEnv, DummyObs},
        record::{BufferedRecorder, NullRecorder},
        replay_buffer::{FifoReplayBuffer, ReplayBufferConfig},
        ActionValue,
    };

    /// Records the sizes of batches and copies action values on sync.
    struct MockLearner {
        online: ConstActionValue,
        target: ConstActionValue,
        batch_sizes: Vec<usize>,
    }

    impl MockLearner {
        fn new(online: Vec<f32>, target: Vec<f32>) -> Self {
            Self {
                online: ConstActionValue(online),
                target: ConstActionValue(target),
                batch_sizes: vec![],
            }
        }
    }

    impl QLearner<DummyObs> for MockLearner {
        type QNet = ConstActionValue;

        fn online(&self) -> &ConstActionValue {
            &self.online
        }

        fn target(&self) -> &ConstActionValue {
            &self.target
        }

        fn opt(&mut self, batch: &[Transition<DummyObs>]) -> Result<Record> {
            self.batch_sizes.push(batch.len());
            Ok(Record::from_scalar("loss", 0.5))
        }

        fn sync_target(&mut self) -> Result<()> {
            self.target = self.online.clone();
            Ok(())
        }
    }

    type Buffer = FifoReplayBuffer<Transition<DummyObs>>;

    fn trainer(
        config: TrainerConfig,
        learner: MockLearner,
    ) -> Result<Trainer<DummyEnv, MockLearner, Buffer>> {
        Trainer::build(
            config,
            DummyEnv::new(vec![7], 2)?,
            learner,
            &ReplayBufferConfig::default().capacity(100),
        )
    }

    #[test]
    fn test_warmup() -> Result<()> {
        let config = TrainerConfig::default().warmup_steps(10);
        let mut trainer = trainer(config, MockLearner::new(vec![0.0, 1.0], vec![0.0, 1.0]))?;
        assert_eq!(trainer.session().phase, Phase::Warmup);

        trainer.warmup()?;
        assert_eq!(trainer.session().phase, Phase::Learning);
        assert_eq!(trainer.session().warmup_steps, 10);
        assert_eq!(trainer.buffer().len(), 10);
        assert!(trainer.learner().batch_sizes.is_empty());
        Ok(())
    }

    #[test]
    fn test_cadence() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = TrainerConfig::default()
            .warmup_steps(10)
            .batch_size(32)
            .sync_interval(5)
            .record_interval(3)
            .max_steps(30);
        let mut trainer = trainer(config, MockLearner::new(vec![0.0, 1.0], vec![0.0, 1.0]))?;
        let mut recorder = BufferedRecorder::new();
        trainer.train(&mut recorder)?;

        let session = trainer.session();
        assert_eq!(session.frame_idx, 30);
        // The buffer reaches the batch size at frame 21.
        assert_eq!(session.n_opts, 9);
        assert!(trainer.learner().batch_sizes.iter().all(|&n| n == 32));
        assert_eq!(session.n_syncs, 6);
        assert_eq!(session.last_loss, Some(0.5));
        assert_eq!(trainer.buffer().len(), 40);

        let steps = recorder
            .with_key("epsilon")
            .map(|r| r.get_index("frame_idx"))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(steps, (0..30).step_by(3).collect::<Vec<_>>());
        assert_eq!(recorder.with_key("loss").count(), 3);
        assert!(recorder.iter().all(|r| r.get("frame_idx").is_some()));
        Ok(())
    }

    #[test]
    fn test_episode_rewards_recorded() -> Result<()> {
        let config = TrainerConfig::default()
            .warmup_steps(3)
            .max_steps(21)
            .epsilon(EpsilonSchedule::default().eps_start(0.0).eps_final(0.0));
        let mut trainer = trainer(config, MockLearner::new(vec![0.0, 1.0], vec![0.0, 1.0]))?;
        let mut recorder = BufferedRecorder::new();
        trainer.train(&mut recorder)?;

        // Episodes of 7 steps, the first one started during warmup.
        let rewards = recorder
            .with_key("reward")
            .map(|r| -> Result<(usize, f32)> {
                Ok((r.get_index("frame_idx")?, r.get_scalar("reward")?))
            })
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(rewards.len(), 3);
        assert_eq!(rewards[0].0, 3);
        assert_eq!(rewards[1], (10, 7.0));
        assert_eq!(rewards[2], (17, 7.0));
        assert_eq!(trainer.session().n_episodes, 3);
        Ok(())
    }

    #[test]
    fn test_zero_intervals_are_rejected() {
        let configs = [
            TrainerConfig::default().sync_interval(0),
            TrainerConfig::default().record_interval(0),
            TrainerConfig::default().batch_size(0),
        ];
        for config in configs {
            let learner = MockLearner::new(vec![0.0, 1.0], vec![0.0, 1.0]);
            assert!(trainer(config.max_steps(2), learner).is_err());
        }
    }

    #[test]
    fn test_target_network_plays() -> Result<()> {
        let config = TrainerConfig::default()
            .warmup_steps(0)
            .max_steps(4)
            .epsilon(EpsilonSchedule::default().eps_start(0.0).eps_final(0.0));
        let mut trainer = trainer(config, MockLearner::new(vec![1.0, 0.0], vec![0.0, 1.0]))?;
        trainer.train(&mut NullRecorder::new())?;

        // The first frame is played before the sync at frame 0.
        assert_eq!(trainer.agent().env().actions, vec![1, 0, 0, 0]);
        assert_eq!(
            trainer.learner().target().action_values(&DummyObs(0))?,
            vec![1.0, 0.0]
        );
        Ok(())
    }
}
