//! Epsilon-greedy agent interacting with an environment.
use crate::{ActionValue, Env, ExperienceBufferBase, Transition};
use anyhow::Result;
use log::trace;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Plays an environment and pushes the resulting transitions into a buffer.
///
/// The agent keeps the current observation and the return of the running
/// episode. When an episode ends, the environment is reset and the return is
/// reported by [`Agent::play_step`].
pub struct Agent<E: Env> {
    env: E,
    state: E::Obs,
    total_reward: f32,
    rng: StdRng,
}

impl<E: Env> Agent<E> {
    /// Resets `env` and constructs the agent.
    pub fn new(mut env: E, seed: u64) -> Result<Self> {
        let state = env.reset()?;
        Ok(Self {
            env,
            state,
            total_reward: 0.0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Takes an epsilon-greedy action with respect to `net`.
    ///
    /// Returns the return of the episode if it ended at this step.
    pub fn play_step<Q, B>(&mut self, net: &Q, epsilon: f32, buffer: &mut B) -> Result<Option<f32>>
    where
        Q: ActionValue<E::Obs>,
        B: ExperienceBufferBase<Item = Transition<E::Obs>>,
    {
        let act = if self.rng.gen::<f32>() < epsilon {
            self.env.action_space().sample(&mut self.rng)
        } else {
            net.greedy_action(&self.state)?
        };
        self.apply(act, buffer)
    }

    /// Takes an action uniformly at random.
    pub fn play_random_step<B>(&mut self, buffer: &mut B) -> Result<Option<f32>>
    where
        B: ExperienceBufferBase<Item = Transition<E::Obs>>,
    {
        let act = self.env.action_space().sample(&mut self.rng);
        self.apply(act, buffer)
    }

    fn apply<B>(&mut self, act: usize, buffer: &mut B) -> Result<Option<f32>>
    where
        B: ExperienceBufferBase<Item = Transition<E::Obs>>,
    {
        let step = self.env.step(act)?;
        self.total_reward += step.reward;
        buffer.push(Transition::new(
            self.state.clone(),
            act,
            step.reward,
            step.is_done,
            step.obs.clone(),
        ))?;

        if step.is_done {
            let total_reward = self.total_reward;
            trace!("Episode ended with return {}", total_reward);
            self.reset()?;
            Ok(Some(total_reward))
        } else {
            self.state = step.obs;
            Ok(None)
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.state = self.env.reset()?;
        self.total_reward = 0.0;
        Ok(())
    }

    /// The current observation.
    pub fn state(&self) -> &E::Obs {
        &self.state
    }

    /// The return of the running episode so far.
    pub fn total_reward(&self) -> f32 {
        self.total_reward
    }

    /// The environment.
    pub fn env(&self) -> &E {
        &self.env
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{ConstActionValue, DummyEnv, DummyObs},
        error::DqnError,
        replay_buffer::{FifoReplayBuffer, ReplayBufferConfig},
        ReplayBufferBase,
    };

    type Buffer = FifoReplayBuffer<Transition<DummyObs>>;

    fn buffer() -> Buffer {
        Buffer::build(&ReplayBufferConfig::default().capacity(100))
    }

    #[test]
    fn test_greedy_play_until_episode_end() -> Result<()> {
        let mut agent = Agent::new(DummyEnv::new(vec![2], 3)?, 0)?;
        let mut buffer = buffer();
        let net = ConstActionValue(vec![0.0, 3.0, 1.0]);

        assert_eq!(agent.play_step(&net, 0.0, &mut buffer)?, None);
        assert_eq!(agent.state(), &DummyObs(1));
        assert_eq!(agent.total_reward(), 1.0);

        assert_eq!(agent.play_step(&net, 0.0, &mut buffer)?, Some(2.0));
        assert_eq!(agent.state(), &DummyObs(0));
        assert_eq!(agent.total_reward(), 0.0);
        assert_eq!(agent.env().n_resets, 2);

        let trs = buffer.iter().cloned().collect::<Vec<_>>();
        assert_eq!(
            trs,
            vec![
                Transition::new(DummyObs(0), 1, 1.0, false, DummyObs(1)),
                Transition::new(DummyObs(1), 1, 1.0, true, DummyObs(2)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_random_play() -> Result<()> {
        let mut agent = Agent::new(DummyEnv::new(vec![5], 4)?, 0)?;
        let mut buffer = buffer();
        let net = ConstActionValue(vec![0.0, 0.0, 0.0, 9.0]);
        let mut returns = vec![];

        for _ in 0..20 {
            returns.extend(agent.play_random_step(&mut buffer)?);
        }
        for _ in 0..20 {
            returns.extend(agent.play_step(&net, 1.0, &mut buffer)?);
        }

        assert_eq!(buffer.len(), 40);
        assert_eq!(returns.len(), 8);
        assert!(buffer.iter().all(|tr| tr.action < 4));
        assert_eq!(
            returns.iter().sum::<f32>(),
            buffer.iter().map(|tr| tr.reward).sum::<f32>()
        );
        Ok(())
    }

    #[test]
    fn test_invalid_action_propagates() -> Result<()> {
        let mut agent = Agent::new(DummyEnv::new(vec![5], 2)?, 0)?;
        let mut buffer = buffer();
        let net = ConstActionValue(vec![0.0, 0.0, 1.0]);

        let err = agent.play_step(&net, 0.0, &mut buffer).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DqnError>(),
            Some(&DqnError::InvalidAction { act: 2, n: 2 })
        );
        assert!(buffer.is_empty());
        Ok(())
    }
}
