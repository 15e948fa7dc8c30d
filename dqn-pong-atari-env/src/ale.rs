//! Bindings of the Arcade Learning Environment.
use anyhow::{Context, Result};
use c_str_macro::c_str;
use num_traits::FromPrimitive;
use std::{ffi::CString, path::Path};

/// Joystick inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, num_derive::FromPrimitive)]
#[repr(i32)]
pub enum AleAction {
    Noop = 0,
    Fire = 1,
    Up = 2,
    Right = 3,
    Left = 4,
    Down = 5,
    UpRight = 6,
    UpLeft = 7,
    DownRight = 8,
    DownLeft = 9,
    UpFire = 10,
    RightFire = 11,
    LeftFire = 12,
    DownFire = 13,
    UpRightFire = 14,
    UpLeftFire = 15,
    DownRightFire = 16,
    DownLeftFire = 17,
}

/// Settings of the emulator.
pub struct AleConfig {
    pub random_seed: i32,
    /// 1 is no skip.
    pub frame_skip: i32,
    pub repeat_action_probability: f32,
    pub difficulty_setting: i32,
}

impl Default for AleConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            frame_skip: 1,
            repeat_action_probability: 0.0,
            difficulty_setting: 0,
        }
    }
}

pub struct Ale {
    inner: *mut atari_env_sys::ALEInterface,
}

impl Drop for Ale {
    fn drop(&mut self) {
        unsafe {
            atari_env_sys::ALE_del(self.inner);
        }
    }
}

impl Ale {
    /// Loads a ROM image.
    pub fn new(rom_path: &Path, config: &AleConfig) -> Result<Self> {
        let rom_path = rom_path
            .to_str()
            .with_context(|| format!("Non UTF-8 ROM path {:?}", rom_path))?;
        let rom_path = CString::new(rom_path)?;

        let ale = unsafe { atari_env_sys::ALE_new() };
        unsafe {
            atari_env_sys::setInt(ale, c_str!("random_seed").as_ptr(), config.random_seed);
            atari_env_sys::setBool(ale, c_str!("display_screen").as_ptr(), false);
            atari_env_sys::setBool(ale, c_str!("sound").as_ptr(), false);
            atari_env_sys::setBool(ale, c_str!("color_averaging").as_ptr(), false);
            atari_env_sys::setInt(ale, c_str!("frame_skip").as_ptr(), config.frame_skip);
            atari_env_sys::setFloat(
                ale,
                c_str!("repeat_action_probability").as_ptr(),
                config.repeat_action_probability,
            );
            atari_env_sys::loadROM(ale, rom_path.as_ptr());
            atari_env_sys::setDifficulty(ale, config.difficulty_setting);
            atari_env_sys::reset_game(ale);
        }

        Ok(Self { inner: ale })
    }

    /// The actions that have an effect in the loaded game.
    pub fn minimal_actions(&self) -> Result<Vec<AleAction>> {
        let n = unsafe { atari_env_sys::getMinimalActionSize(self.inner) } as usize;
        let mut buf = vec![0i32; n];
        unsafe {
            atari_env_sys::getMinimalActionSet(self.inner, buf.as_mut_ptr());
        }
        buf.into_iter()
            .map(|a| AleAction::from_i32(a).with_context(|| format!("Unknown action {}", a)))
            .collect()
    }

    pub fn is_game_over(&self) -> bool {
        unsafe { atari_env_sys::game_over(self.inner) }
    }

    pub fn reset(&mut self) {
        unsafe {
            atari_env_sys::reset_game(self.inner);
        }
    }

    /// returns reward
    pub fn take_action(&mut self, action: AleAction) -> i32 {
        let ret: ::std::os::raw::c_int = unsafe { atari_env_sys::act(self.inner, action as i32) };
        ret.into()
    }

    pub fn width(&self) -> usize {
        unsafe { atari_env_sys::getScreenWidth(self.inner) as usize }
    }

    pub fn height(&self) -> usize {
        unsafe { atari_env_sys::getScreenHeight(self.inner) as usize }
    }

    /// The screen in `height * width * 3` bytes, always rgb regardless of endianness.
    pub fn screen_rgb(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.width() * self.height() * 3];
        unsafe {
            atari_env_sys::getScreenRGB2(self.inner, buf.as_mut_ptr());
        }
        buf
    }
}
