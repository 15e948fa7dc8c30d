//! DQN learner implemented with tch-rs.
use super::{dqn_loss, q_targets, DqnConfig, DqnModel};
use crate::{
    model::SubModel,
    opt::Optimizer,
    util::{log_summary, OutDim},
};
use anyhow::Result;
use dqn_pong_core::{record::Record, Obs, QLearner, Transition};
use log::trace;
use serde::{de::DeserializeOwned, Serialize};
use tch::{no_grad, Device, Tensor};

/// DQN learner implemented with tch-rs.
///
/// Holds the online network updated by gradient steps and the target network,
/// a snapshot of the online network changed only by [`QLearner::sync_target`].
pub struct Dqn<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
{
    qnet: DqnModel<Q>,
    qnet_tgt: DqnModel<Q>,
    opt: Optimizer,
    gamma: f64,
    device: Device,
    n_opts: usize,
}

impl<Q> Dqn<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
    Q::Config: DeserializeOwned + Serialize + OutDim,
{
    /// Constructs the learner. The target network starts as a copy of the online network.
    pub fn build(config: DqnConfig<Q::Config>) -> Result<Self> {
        let device: Device = config.device.into();
        let qnet = DqnModel::build(config.q_config, device);
        let qnet_tgt = qnet.try_clone()?;
        let opt = config.opt_config.build(qnet.var_store())?;
        log_summary("Q-network", qnet.var_store());

        Ok(Self {
            qnet,
            qnet_tgt,
            opt,
            gamma: config.gamma,
            device,
            n_opts: 0,
        })
    }

    /// The number of optimization steps.
    pub fn n_opts(&self) -> usize {
        self.n_opts
    }

    fn stack<O>(&self, obs: impl Iterator<Item = O>) -> Result<Tensor>
    where
        O: Into<Tensor>,
    {
        let xs = obs.map(|o| o.into()).collect::<Vec<Tensor>>();
        Ok(Tensor::f_stack(&xs, 0)?.to(self.device))
    }
}

impl<Q, O> QLearner<O> for Dqn<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
    Q::Config: DeserializeOwned + Serialize + OutDim,
    O: Obs + Into<Tensor>,
{
    type QNet = DqnModel<Q>;

    fn online(&self) -> &DqnModel<Q> {
        &self.qnet
    }

    fn target(&self) -> &DqnModel<Q> {
        &self.qnet_tgt
    }

    fn opt(&mut self, batch: &[Transition<O>]) -> Result<Record> {
        let states = self.stack(batch.iter().map(|tr| tr.state.clone()))?;
        let next_states = self.stack(batch.iter().map(|tr| tr.next_state.clone()))?;
        let actions = batch.iter().map(|tr| tr.action as i64).collect::<Vec<_>>();
        let actions = Tensor::from_slice(&actions).to(self.device);
        let rewards = batch.iter().map(|tr| tr.reward).collect::<Vec<_>>();
        let rewards = Tensor::from_slice(&rewards).to(self.device);
        let dones = batch.iter().map(|tr| tr.done).collect::<Vec<_>>();
        let dones = Tensor::from_slice(&dones).to(self.device);

        let targets = no_grad(|| {
            let next_q = self.qnet.forward(&next_states);
            q_targets(&rewards, &dones, &next_q, self.gamma)
        });
        let loss = dqn_loss(&self.qnet.forward(&states), &actions, &targets);
        self.opt.backward_step(&loss);
        self.n_opts += 1;

        let loss = loss.f_double_value(&[])? as f32;
        trace!("opt {}: loss {}", self.n_opts, loss);
        Ok(Record::from_scalar("loss", loss))
    }

    fn sync_target(&mut self) -> Result<()> {
        self.qnet_tgt.copy_from(&self.qnet)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{opt::OptimizerConfig, PongCnn, PongCnnConfig};
    use dqn_pong_core::ActionValue;

    /// Stack of constant frames.
    #[derive(Clone, Debug)]
    struct Frames(f64);

    impl Obs for Frames {}

    impl From<Frames> for Tensor {
        fn from(obs: Frames) -> Tensor {
            Tensor::ones(&[4, 84, 84], (tch::Kind::Float, Device::Cpu)) * obs.0
        }
    }

    fn dqn() -> Result<Dqn<PongCnn>> {
        Dqn::build(
            DqnConfig::<PongCnnConfig>::default()
                .out_dim(3)
                .opt_config(OptimizerConfig::Adam { lr: 1e-3 }),
        )
    }

    fn q_values(net: &DqnModel<PongCnn>) -> Result<Vec<f32>> {
        net.action_values(&Frames(0.5))
    }

    #[test]
    fn test_target_starts_as_copy() -> Result<()> {
        let dqn = dqn()?;
        let online = q_values(QLearner::<Frames>::online(&dqn))?;
        let target = q_values(QLearner::<Frames>::target(&dqn))?;
        assert_eq!(online.len(), 3);
        assert_eq!(online, target);
        Ok(())
    }

    #[test]
    fn test_opt_and_sync() -> Result<()> {
        let mut dqn = dqn()?;
        let batch = (0..4)
            .map(|i| Transition::new(Frames(0.1 * i as f64), i % 3, 1.0, i == 3, Frames(0.2)))
            .collect::<Vec<_>>();
        let target_before = q_values(QLearner::<Frames>::target(&dqn))?;

        let record = dqn.opt(&batch)?;
        assert!(record.get_scalar("loss")?.is_finite());
        assert_eq!(dqn.n_opts(), 1);

        // Only the online network is updated.
        let online = q_values(QLearner::<Frames>::online(&dqn))?;
        let target = q_values(QLearner::<Frames>::target(&dqn))?;
        assert_eq!(target, target_before);
        assert_ne!(online, target);

        // Syncing twice is the same as syncing once.
        QLearner::<Frames>::sync_target(&mut dqn)?;
        let target1 = q_values(QLearner::<Frames>::target(&dqn))?;
        QLearner::<Frames>::sync_target(&mut dqn)?;
        let target2 = q_values(QLearner::<Frames>::target(&dqn))?;
        assert_eq!(target1, online);
        assert_eq!(target1, target2);
        Ok(())
    }
}
