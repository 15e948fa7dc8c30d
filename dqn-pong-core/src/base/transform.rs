//! Observation transforms.
use super::{BoxSpace, DiscreteSpace, Env, Obs, Step};
use anyhow::Result;

/// Transforms observations emitted by an environment.
///
/// Stages are composed with [`ObsTransform::then`] and applied to an
/// environment with [`TransformedEnv`]. A stage may keep state across steps of
/// an episode; [`ObsTransform::reset`] is called with the first observation of
/// each episode and [`ObsTransform::transform`] with every following one.
pub trait ObsTransform {
    /// Observation given to the stage.
    type Input;

    /// Observation produced by the stage.
    type Output: Obs;

    /// Processes the first observation of an episode.
    fn reset(&mut self, obs: Self::Input) -> Result<Self::Output> {
        self.transform(obs)
    }

    /// Processes an observation.
    fn transform(&mut self, obs: Self::Input) -> Result<Self::Output>;

    /// Returns the observation space of the outputs given that of the inputs.
    fn space(&self, input: &BoxSpace) -> BoxSpace;

    /// Feeds the outputs of this stage into `next`.
    fn then<T>(self, next: T) -> Chain<Self, T>
    where
        Self: Sized,
        T: ObsTransform<Input = Self::Output>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

/// Two observation transforms applied in order.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> ObsTransform for Chain<A, B>
where
    A: ObsTransform,
    B: ObsTransform<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn reset(&mut self, obs: Self::Input) -> Result<Self::Output> {
        let obs = self.first.reset(obs)?;
        self.second.reset(obs)
    }

    fn transform(&mut self, obs: Self::Input) -> Result<Self::Output> {
        let obs = self.first.transform(obs)?;
        self.second.transform(obs)
    }

    fn space(&self, input: &BoxSpace) -> BoxSpace {
        self.second.space(&self.first.space(input))
    }
}

/// An environment whose observations are processed by an [`ObsTransform`].
pub struct TransformedEnv<E, T> {
    env: E,
    transform: T,
    space: BoxSpace,
}

impl<E, T> TransformedEnv<E, T>
where
    E: Env,
    T: ObsTransform<Input = E::Obs>,
{
    /// Wraps `env` with `transform`.
    pub fn new(env: E, transform: T) -> Self {
        let space = transform.space(env.observation_space());
        Self {
            env,
            transform,
            space,
        }
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }
}

impl<E, T> Env for TransformedEnv<E, T>
where
    E: Env,
    T: ObsTransform<Input = E::Obs>,
{
    type Obs = T::Output;
    type Info = E::Info;

    fn reset(&mut self) -> Result<Self::Obs> {
        let obs = self.env.reset()?;
        self.transform.reset(obs)
    }

    fn step(&mut self, act: usize) -> Result<Step<Self>> {
        let step = self.env.step(act)?;
        let obs = self.transform.transform(step.obs)?;
        Ok(Step::new(obs, step.act, step.reward, step.is_done, step.info))
    }

    fn action_space(&self) -> &DiscreteSpace {
        self.env.action_space()
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.space
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dummy::{DummyEnv, DummyObs};

    /// Adds a constant to the observation.
    struct Shift(i64);

    impl ObsTransform for Shift {
        type Input = DummyObs;
        type Output = DummyObs;

        fn transform(&mut self, obs: DummyObs) -> Result<DummyObs> {
            Ok(DummyObs(obs.0 + self.0))
        }

        fn space(&self, input: &BoxSpace) -> BoxSpace {
            BoxSpace::new(input.shape(), input.low() + self.0 as f32, input.high())
        }
    }

    /// Counts resets, passing observations through.
    struct ResetCounter(i64);

    impl ObsTransform for ResetCounter {
        type Input = DummyObs;
        type Output = DummyObs;

        fn reset(&mut self, obs: DummyObs) -> Result<DummyObs> {
            self.0 += 1;
            Ok(DummyObs(obs.0 + 1000 * self.0))
        }

        fn transform(&mut self, obs: DummyObs) -> Result<DummyObs> {
            Ok(obs)
        }

        fn space(&self, input: &BoxSpace) -> BoxSpace {
            input.clone()
        }
    }

    #[test]
    fn test_chain_applies_stages_in_order() -> Result<()> {
        let env = DummyEnv::new(vec![3], 2)?;
        let mut env = TransformedEnv::new(env, Shift(10).then(ResetCounter(0)));

        assert_eq!(env.observation_space().low(), 10.0);
        assert_eq!(env.reset()?, DummyObs(1010));
        assert_eq!(env.inner().n_resets, 1);
        let step = env.step(1)?;
        assert_eq!(step.obs, DummyObs(11));
        assert_eq!(step.act, 1);
        assert_eq!(env.action_space().n(), 2);
        Ok(())
    }
}
