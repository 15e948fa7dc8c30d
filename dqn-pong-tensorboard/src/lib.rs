//! TensorBoard output of training records.
use chrono::{DateTime, Local};
use dqn_pong_core::record::{Record, RecordValue, Recorder};
use log::warn;
use std::path::{Path, PathBuf};
use tensorboard_rs::summary_writer::SummaryWriter;

/// Returns `root/<datetime><comment>`, the directory of a training run.
pub fn run_dir(root: impl AsRef<Path>, comment: &str, now: DateTime<Local>) -> PathBuf {
    root.as_ref()
        .join(format!("{}{}", now.format("%b%d_%H-%M-%S"), comment))
}

/// Write records to TFRecord.
///
/// Each record must contain the step as an index under the step key,
/// `"frame_idx"` by default. Scalars and other indices are written as
/// summaries; datetimes are discarded.
pub struct TensorboardRecorder {
    writer: SummaryWriter,
    logdir: PathBuf,
    step_key: String,
}

impl TensorboardRecorder {
    /// Construct a [`TensorboardRecorder`].
    ///
    /// TFRecord will be stored in `logdir`.
    pub fn new<P: AsRef<Path>>(logdir: P) -> Self {
        Self {
            writer: SummaryWriter::new(&logdir),
            logdir: logdir.as_ref().to_path_buf(),
            step_key: "frame_idx".to_string(),
        }
    }

    /// Construct a [`TensorboardRecorder`] writing into `runs/<datetime><comment>`.
    pub fn with_comment(comment: &str) -> Self {
        Self::new(run_dir("runs", comment, Local::now()))
    }

    /// Sets the key of the step in records.
    pub fn step_key(mut self, step_key: impl Into<String>) -> Self {
        self.step_key = step_key.into();
        self
    }

    /// The directory of TFRecord files.
    pub fn logdir(&self) -> &Path {
        &self.logdir
    }
}

impl Recorder for TensorboardRecorder {
    /// Write a given [`Record`] into a TFRecord.
    fn write(&mut self, record: Record) {
        let step = match record.get_index(&self.step_key) {
            Ok(v) => v,
            Err(e) => {
                warn!("Record without step is discarded: {}", e);
                return;
            }
        };

        for (k, v) in record.iter() {
            if *k != self.step_key {
                match v {
                    RecordValue::Scalar(v) => self.writer.add_scalar(k, *v, step),
                    RecordValue::Index(v) => self.writer.add_scalar(k, *v as f32, step),
                    RecordValue::DateTime(_) => {} // discard value
                };
            }
        }
    }

    fn flush(&mut self) {
        self.writer.flush();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use tempdir::TempDir;

    #[test]
    fn test_run_dir() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 30).unwrap();
        assert_eq!(
            run_dir("runs", "-pong", now),
            PathBuf::from("runs/Mar09_07-05-30-pong")
        );
    }

    #[test]
    fn test_write_records() -> anyhow::Result<()> {
        let dir = TempDir::new("tensorboard_recorder")?;
        let logdir = dir.path().join("run");
        let mut recorder = TensorboardRecorder::new(&logdir).step_key("step");

        for step in 0..10 {
            let mut record = Record::from_scalar("epsilon", 1.0 - step as f32 * 1e-6);
            record.insert("step", RecordValue::Index(step));
            record.insert("datetime", RecordValue::DateTime(Local::now()));
            recorder.write(record);
        }
        recorder.write(Record::from_scalar("reward", -21.0));
        recorder.flush();

        let files = std::fs::read_dir(recorder.logdir())?
            .map(|e| Ok(e?.file_name().to_string_lossy().into_owned()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        assert!(files.iter().any(|f| f.contains("tfevents")));
        Ok(())
    }
}
