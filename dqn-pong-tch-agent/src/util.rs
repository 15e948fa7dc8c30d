//! Utilities.
use log::info;
use tch::nn::VarStore;

/// Interface for handling output dimensions.
pub trait OutDim {
    /// Returns the output dimension.
    fn get_out_dim(&self) -> i64;

    /// Sets the output dimension.
    fn set_out_dim(&mut self, v: i64);
}

/// Logs the shape of every variable and the total number of parameters.
///
/// Returns the number of parameters.
pub fn log_summary(name: &str, var_store: &VarStore) -> i64 {
    let mut variables = var_store.variables().into_iter().collect::<Vec<_>>();
    variables.sort_by(|a, b| a.0.cmp(&b.0));

    info!("{} on {:?}", name, var_store.device());
    let mut n_params = 0;
    for (k, v) in variables.iter() {
        info!("  {}: {:?}", k, v.size());
        n_params += v.numel() as i64;
    }
    info!("  {} parameters", n_params);
    n_params
}
