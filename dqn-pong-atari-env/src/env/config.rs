//! Configuration of [`AtariEnv`](super::AtariEnv).
//!
//! If environment variable `ATARI_ROM_DIR` exists, it is used as the directory
//! from which ROM images of the Atari games is loaded.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    env,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Configurations of [`AtariEnv`](super::AtariEnv).
///
/// The defaults follow `Pong-v4`: the minimal action set, an action repeated
/// for a number of frames drawn from `2..=4` at every step and no sticky
/// actions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AtariEnvConfig {
    /// Directory of ROM images.
    pub rom_dir: String,

    /// Name of the game, the ROM file is `<name>.bin`.
    pub name: String,

    /// Minimum number of frames an action is repeated.
    pub frame_skip_min: usize,

    /// Maximum number of frames an action is repeated.
    pub frame_skip_max: usize,

    /// Probability of repeating the previous action instead of the given one.
    pub repeat_action_probability: f32,

    /// Seed of the emulator and of the frame skip.
    pub seed: u64,
}

impl Default for AtariEnvConfig {
    fn default() -> Self {
        let rom_dir = if let Ok(var) = env::var("ATARI_ROM_DIR") {
            var
        } else {
            "".to_string()
        };

        Self {
            rom_dir,
            name: "pong".to_string(),
            frame_skip_min: 2,
            frame_skip_max: 4,
            repeat_action_probability: 0.0,
            seed: 42,
        }
    }
}

impl AtariEnvConfig {
    /// Sets the name of the game.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the directory of ROM images.
    pub fn rom_dir(mut self, rom_dir: impl Into<String>) -> Self {
        self.rom_dir = rom_dir.into();
        self
    }

    /// Sets the range of frames an action is repeated.
    pub fn frame_skip(mut self, min: usize, max: usize) -> Self {
        self.frame_skip_min = min;
        self.frame_skip_max = max;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Path of the ROM image.
    pub fn rom_path(&self) -> PathBuf {
        Path::new(&self.rom_dir).join(format!("{}.bin", self.name))
    }

    /// Constructs [`AtariEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`AtariEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_rom_path() {
        let config = AtariEnvConfig::default().rom_dir("/opt/roms");
        assert_eq!(config.rom_path(), PathBuf::from("/opt/roms/pong.bin"));
        assert_eq!(
            config.name("breakout").rom_path(),
            PathBuf::from("/opt/roms/breakout.bin")
        );
    }

    #[test]
    fn test_serde_env_config() -> Result<()> {
        let config = AtariEnvConfig::default()
            .rom_dir("roms")
            .frame_skip(3, 3)
            .seed(7);

        let dir = TempDir::new("atari_env_config")?;
        let path = dir.path().join("atari_env_config.yaml");
        config.save(&path)?;
        assert_eq!(config, AtariEnvConfig::load(&path)?);
        Ok(())
    }
}
