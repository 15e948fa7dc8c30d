//! Atari games for the DQN Pong trainer.
//!
//! [`AtariEnv`] emulates a game through the Arcade Learning Environment and
//! emits raw RGB screens. They are turned into network inputs by
//! [`FramePreprocessor`] (grayscale, 84x84) followed by [`FrameStacker`]
//! (the latest 4 frames), composed with [`preprocessing`].
//!
//! The emulator is a C++ library built by `atari-env-sys` and is enabled with
//! feature `ale`. You need to place Atari ROM images under the directory
//! specified by environment variable `ATARI_ROM_DIR`. An easy way to do this is
//! to use [AutoROM](https://pypi.org/project/AutoROM/) Python package.
//!
//! ```bash
//! pip install autorom
//! mkdir $HOME/atari_rom
//! AutoROM --install-dir $HOME/atari_rom
//! export ATARI_ROM_DIR=$HOME/atari_rom
//! ```
//!
//! Here is an example of running Pong with a random policy.
//!
//! ```no_run
//! # #[cfg(feature = "ale")]
//! # fn main() -> anyhow::Result<()> {
//! use dqn_pong_atari_env::{preprocessing, AtariEnv, AtariEnvConfig};
//! use dqn_pong_core::{Env, TransformedEnv};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let env = AtariEnv::build(&AtariEnvConfig::default())?;
//! let mut env = TransformedEnv::new(env, preprocessing(4)?);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let obs = env.reset()?;
//! assert_eq!(obs.shape(), &[4, 84, 84]);
//! loop {
//!     let act = env.action_space().sample(&mut rng);
//!     if env.step(act)?.is_done {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ale"))]
//! # fn main() {}
//! ```
#[cfg(feature = "ale")]
mod ale;
mod env;
mod obs;
mod preprocess;
mod stack;
use dqn_pong_core::{Chain, ObsTransform};
#[cfg(feature = "ale")]
pub use env::AtariEnv;
pub use env::AtariEnvConfig;
pub use obs::{ImageObs, RgbFrame};
pub use preprocess::FramePreprocessor;
pub use stack::FrameStacker;

/// Converts raw screens into stacks of the latest `n_stack` preprocessed frames.
pub fn preprocessing(n_stack: usize) -> anyhow::Result<Chain<FramePreprocessor, FrameStacker>> {
    Ok(FramePreprocessor::new().then(FrameStacker::new(n_stack)?))
}
