//! Types and traits for recording training metrics.
//!
//! A [`Record`] is a set of named values produced during training, for example
//! the return of an episode or the current exploration rate. A [`Recorder`]
//! receives records and writes them to some destination.
//!
//! ```rust
//! use dqn_pong_core::record::{Record, RecordValue};
//!
//! let frame_idx = 100;
//! let epsilon = 0.9999f32;
//!
//! let mut record = Record::from_scalar("epsilon", epsilon);
//! record.insert("frame_idx", RecordValue::Index(frame_idx));
//! assert_eq!(record.get_index("frame_idx").unwrap(), 100);
//! assert_eq!(record.get_scalar("epsilon").unwrap(), epsilon);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
