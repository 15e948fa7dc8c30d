mod config;
pub use config::AtariEnvConfig;

#[cfg(feature = "ale")]
pub use ale_env::AtariEnv;

#[cfg(feature = "ale")]
mod ale_env {
    use super::AtariEnvConfig;
    use crate::{
        ale::{Ale, AleAction, AleConfig},
        RgbFrame,
    };
    use anyhow::{ensure, Result};
    use dqn_pong_core::{BoxSpace, DiscreteSpace, Env, Step};
    use log::info;
    use ndarray::Array3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// An Atari game emulated by the Arcade Learning Environment.
    ///
    /// Observations are raw RGB screens. An action is an index into the
    /// minimal action set of the game and is repeated for a random number of
    /// frames, summing the rewards.
    pub struct AtariEnv {
        ale: Ale,
        actions: Vec<AleAction>,
        frame_skip: (usize, usize),
        rng: StdRng,
        action_space: DiscreteSpace,
        observation_space: BoxSpace,
    }

    impl AtariEnv {
        /// Loads the ROM image of the game.
        pub fn build(config: &AtariEnvConfig) -> Result<Self> {
            let rom_path = config.rom_path();
            ensure!(
                rom_path.is_file(),
                "ROM image {:?} not found, set ATARI_ROM_DIR",
                rom_path
            );
            ensure!(
                1 <= config.frame_skip_min && config.frame_skip_min <= config.frame_skip_max,
                "Invalid frame skip range {}..={}",
                config.frame_skip_min,
                config.frame_skip_max
            );

            let ale = Ale::new(
                &rom_path,
                &AleConfig {
                    random_seed: (config.seed % i32::MAX as u64) as i32,
                    repeat_action_probability: config.repeat_action_probability,
                    ..AleConfig::default()
                },
            )?;
            let actions = ale.minimal_actions()?;
            info!("Loaded {:?} with actions {:?}", rom_path, actions);

            let action_space = DiscreteSpace::new(actions.len())?;
            let observation_space = BoxSpace::new([ale.height(), ale.width(), 3], 0.0, 255.0);
            Ok(Self {
                ale,
                actions,
                frame_skip: (config.frame_skip_min, config.frame_skip_max),
                rng: StdRng::seed_from_u64(config.seed),
                action_space,
                observation_space,
            })
        }

        fn frame(&self) -> Result<RgbFrame> {
            let (h, w) = (self.ale.height(), self.ale.width());
            Ok(RgbFrame(Array3::from_shape_vec(
                (h, w, 3),
                self.ale.screen_rgb(),
            )?))
        }
    }

    impl Env for AtariEnv {
        type Obs = RgbFrame;
        type Info = ();

        fn reset(&mut self) -> Result<RgbFrame> {
            self.ale.reset();
            self.frame()
        }

        fn step(&mut self, act: usize) -> Result<Step<Self>> {
            self.action_space.check(act)?;
            let n_frames = self.rng.gen_range(self.frame_skip.0..=self.frame_skip.1);
            let reward = (0..n_frames)
                .map(|_| self.ale.take_action(self.actions[act]))
                .sum::<i32>();
            let is_done = self.ale.is_game_over();
            Ok(Step::new(self.frame()?, act, reward as f32, is_done, ()))
        }

        fn action_space(&self) -> &DiscreteSpace {
            &self.action_space
        }

        fn observation_space(&self) -> &BoxSpace {
            &self.observation_space
        }
    }
}
