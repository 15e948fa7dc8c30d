//! Definition of interfaces of neural networks.
use tch::nn::VarStore;

/// Neural network model that can be initialized with [`VarStore`] and configuration.
///
/// Structs implementing this trait can be initialized with a given [`VarStore`],
/// and cloned with another [`VarStore`]. The latter creates a target network
/// whose variables have the same names as those of the source network.
///
/// [`VarStore`]: https://docs.rs/tch/0.16.0/tch/nn/struct.VarStore.html
pub trait SubModel {
    /// Configuration from which [`SubModel`] is constructed.
    type Config;

    /// Input of the [`SubModel`].
    type Input;

    /// Output of the [`SubModel`].
    type Output;

    /// Builds [`SubModel`] with [`VarStore`] and [`SubModel::Config`].
    fn build(var_store: &VarStore, config: Self::Config) -> Self;

    /// Clones [`SubModel`] with [`VarStore`].
    fn clone_with_var_store(&self, var_store: &VarStore) -> Self;

    /// A generalized forward function.
    fn forward(&self, input: &Self::Input) -> Self::Output;
}
