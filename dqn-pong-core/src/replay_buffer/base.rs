//! FIFO replay buffer.
use super::ReplayBufferConfig;
use crate::{error::DqnError, ExperienceBufferBase, ReplayBufferBase};
use anyhow::Result;
use rand::{rngs::StdRng, seq::index, SeedableRng};
use std::collections::{vec_deque::Iter, VecDeque};

/// A bounded replay buffer.
///
/// Once `capacity` items are stored, pushing an item evicts the oldest one.
/// Batches are drawn uniformly at random without replacement.
pub struct FifoReplayBuffer<T> {
    capacity: usize,
    buf: VecDeque<T>,
    rng: StdRng,
}

impl<T: Clone> FifoReplayBuffer<T> {
    /// The maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the items from the oldest to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.buf.iter()
    }
}

impl<T: Clone> ExperienceBufferBase for FifoReplayBuffer<T> {
    type Item = T;

    fn push(&mut self, tr: T) -> Result<()> {
        self.buf.push_back(tr);
        while self.buf.len() > self.capacity {
            self.buf.pop_front();
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.buf.len()
    }
}

impl<T: Clone> ReplayBufferBase for FifoReplayBuffer<T> {
    type Config = ReplayBufferConfig;
    type Batch = Vec<T>;

    fn build(config: &Self::Config) -> Self {
        Self {
            capacity: config.capacity,
            buf: VecDeque::with_capacity(config.capacity),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        let len = self.buf.len();
        if len < size {
            return Err(DqnError::ReplayBufferUnderflow {
                len,
                batch_size: size,
            }
            .into());
        }

        Ok(index::sample(&mut self.rng, len, size)
            .into_iter()
            .map(|ix| self.buf[ix].clone())
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn buffer(capacity: usize) -> FifoReplayBuffer<char> {
        FifoReplayBuffer::build(&ReplayBufferConfig::default().capacity(capacity))
    }

    #[test]
    fn test_capacity_and_order() -> Result<()> {
        let config = ReplayBufferConfig::default().capacity(5);
        let mut buffer = FifoReplayBuffer::<usize>::build(&config);

        for i in 0..23 {
            buffer.push(i)?;
            assert!(buffer.len() <= buffer.capacity());
            if i >= 5 {
                let contents = buffer.iter().copied().collect::<Vec<_>>();
                assert_eq!(contents, ((i - 4)..=i).collect::<Vec<_>>());
            }
        }
        Ok(())
    }

    #[test]
    fn test_sample_distinct_members() -> Result<()> {
        let config = ReplayBufferConfig::default().capacity(50);
        let mut buffer = FifoReplayBuffer::<usize>::build(&config);
        (0..80).try_for_each(|i| buffer.push(i))?;

        for k in [1, 10, 32, 50] {
            let batch = buffer.batch(k)?;
            assert_eq!(batch.len(), k);
            let set = batch.iter().copied().collect::<HashSet<_>>();
            assert_eq!(set.len(), k);
            assert!(set.iter().all(|&e| (30..80).contains(&e)));
        }
        Ok(())
    }

    #[test]
    fn test_evict_and_underflow() -> Result<()> {
        let mut buffer = buffer(3);
        for c in ['A', 'B', 'C', 'D'] {
            buffer.push(c)?;
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!['B', 'C', 'D']);

        let mut batch = buffer.batch(3)?;
        batch.sort_unstable();
        assert_eq!(batch, vec!['B', 'C', 'D']);

        let err = buffer.batch(4).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DqnError>(),
            Some(&DqnError::ReplayBufferUnderflow {
                len: 3,
                batch_size: 4
            })
        );
        Ok(())
    }

    #[test]
    fn test_zero_capacity_stays_empty() -> Result<()> {
        let mut buffer = buffer(0);
        for c in ['A', 'B'] {
            buffer.push(c)?;
            assert_eq!(buffer.len(), 0);
        }
        assert!(buffer.is_empty());
        assert!(buffer.batch(1).is_err());
        Ok(())
    }

    #[test]
    fn test_sampling_is_seeded() -> Result<()> {
        let mut b1 = buffer(26);
        let mut b2 = buffer(26);
        for c in 'a'..='z' {
            b1.push(c)?;
            b2.push(c)?;
        }
        assert_eq!(b1.batch(8)?, b2.batch(8)?);
        Ok(())
    }
}
