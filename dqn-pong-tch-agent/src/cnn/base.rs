use super::PongCnnConfig;
use crate::model::SubModel;
use tch::{nn, nn::Module, no_grad, Device, Kind, Tensor};

/// Convolutional neural network estimating action values of Pong.
///
/// `conv(n_stack, 16, 8, stride 4) -> relu -> conv(16, 32, 4, stride 2) -> relu
/// -> flatten -> linear(256) -> relu -> linear(out_dim)`. The input size of the
/// first linear layer is found by a forward pass of a zero input.
pub struct PongCnn {
    config: PongCnnConfig,
    device: Device,
    seq: nn::Sequential,
}

impl PongCnn {
    fn stride(s: i64) -> nn::ConvConfig {
        nn::ConvConfig {
            stride: s,
            ..Default::default()
        }
    }

    fn create_net(var_store: &nn::VarStore, config: &PongCnnConfig) -> nn::Sequential {
        let p = &var_store.root();
        let conv = |p: &nn::Path| {
            nn::seq()
                .add(nn::conv2d(p / "c1", config.n_stack, 16, 8, Self::stride(4)))
                .add_fn(|xs| xs.relu())
                .add(nn::conv2d(p / "c2", 16, 32, 4, Self::stride(2)))
                .add_fn(|xs| xs.relu())
        };

        // Shape inference on a scratch store, so that it leaves no variables.
        let conv_out = {
            let vs = nn::VarStore::new(Device::Cpu);
            let size = config.frame_size;
            let zeros = Tensor::zeros(&[1, config.n_stack, size, size], (Kind::Float, Device::Cpu));
            no_grad(|| conv(&vs.root()).forward(&zeros).numel()) as i64
        };

        conv(p)
            .add_fn(|xs| xs.flat_view())
            .add(nn::linear(p / "l1", conv_out, 256, Default::default()))
            .add_fn(|xs| xs.relu())
            .add(nn::linear(p / "l2", 256, config.out_dim, Default::default()))
    }
}

impl SubModel for PongCnn {
    type Config = PongCnnConfig;
    type Input = Tensor;
    type Output = Tensor;

    fn forward(&self, x: &Self::Input) -> Tensor {
        self.seq.forward(&x.to(self.device))
    }

    fn build(var_store: &nn::VarStore, config: Self::Config) -> Self {
        let seq = Self::create_net(var_store, &config);
        Self {
            config,
            device: var_store.device(),
            seq,
        }
    }

    fn clone_with_var_store(&self, var_store: &nn::VarStore) -> Self {
        Self::build(var_store, self.config.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_output_shape() {
        let vs = nn::VarStore::new(Device::Cpu);
        let cnn = PongCnn::build(&vs, PongCnnConfig::default());
        let q = cnn.forward(&Tensor::rand(&[5, 4, 84, 84], (Kind::Float, Device::Cpu)));
        assert_eq!(q.size(), vec![5, 6]);

        // c1, c2, l1 and l2, each with a weight and a bias.
        let variables = vs.variables();
        assert_eq!(variables.len(), 8);
        // 32 channels of 9x9 after the convolutions.
        assert_eq!(variables["l1.weight"].size(), vec![256, 32 * 9 * 9]);
    }
}
