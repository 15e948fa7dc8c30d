use crate::model::SubModel;
use anyhow::Result;
use dqn_pong_core::{ActionValue, Obs};
use std::convert::TryFrom;
use tch::{nn, no_grad, Device, Tensor};

/// Action-value function with its own [`nn::VarStore`].
pub struct DqnModel<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
{
    device: Device,
    var_store: nn::VarStore,
    q: Q,
}

impl<Q> DqnModel<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
{
    /// Constructs a model with freshly initialized parameters.
    pub fn build(q_config: Q::Config, device: Device) -> Self {
        let var_store = nn::VarStore::new(device);
        let q = Q::build(&var_store, q_config);
        Self {
            device,
            var_store,
            q,
        }
    }

    /// Constructs a model with the same structure and parameters.
    pub fn try_clone(&self) -> Result<Self> {
        let mut var_store = nn::VarStore::new(self.device);
        let q = self.q.clone_with_var_store(&var_store);
        var_store.copy(&self.var_store)?;
        Ok(Self {
            device: self.device,
            var_store,
            q,
        })
    }

    /// Overwrites the parameters with those of `src`.
    pub fn copy_from(&mut self, src: &Self) -> Result<()> {
        self.var_store.copy(&src.var_store)?;
        Ok(())
    }

    /// Outputs the action values given a batch of observations.
    pub fn forward(&self, x: &Tensor) -> Tensor {
        self.q.forward(&x.to(self.device))
    }

    /// The variables.
    pub fn var_store(&self) -> &nn::VarStore {
        &self.var_store
    }

    /// The device.
    pub fn device(&self) -> Device {
        self.device
    }
}

impl<Q, O> ActionValue<O> for DqnModel<Q>
where
    Q: SubModel<Input = Tensor, Output = Tensor>,
    O: Obs + Into<Tensor>,
{
    fn action_values(&self, obs: &O) -> Result<Vec<f32>> {
        let x: Tensor = obs.clone().into();
        let q = no_grad(|| self.forward(&x.unsqueeze(0)));
        let q = q.view([-1]).to_device(Device::Cpu);
        Ok(Vec::<f32>::try_from(&q)?)
    }
}
