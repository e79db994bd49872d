//! A [Feedforward neural network]
//! (https://en.wikipedia.org/wiki/Feedforward_neural_network) trained by
//! backpropagation and a pluggable gradient descent rule.
//!
//! # Example
//!
//! Let's fit a small network to a line:
//!
//! ```
//! extern crate rand;
//! extern crate gradnet;
//!
//! use gradnet::activation::Activation;
//! use gradnet::cost::Cost;
//! use gradnet::layer::WeightInit;
//! use gradnet::network::{Logging, Network, TrainOptions};
//! use gradnet::optimizer::OptimizerKind;
//! use rand::{SeedableRng, StdRng};
//!
//! fn main() {
//!     let mut rng: StdRng = SeedableRng::from_seed(&[17usize][..]);
//!     let mut network = Network::new(1, 1, 1, 8,
//!                                    Activation::TanH,
//!                                    Cost::MeanSquared,
//!                                    WeightInit::Scaled,
//!                                    &mut rng)
//!         .unwrap();
//!
//!     let data: Vec<Vec<f64>> =
//!         (0..16).map(|i| vec![i as f64 / 8.0 - 1.0]).collect();
//!     let labels: Vec<Vec<f64>> =
//!         data.iter().map(|x| vec![0.5 * x[0]]).collect();
//!
//!     let options =
//!         TrainOptions::new(50, OptimizerKind::Sgd { learning_rate: 0.1 })
//!             .logging(Logging::Silent)
//!             .collect_costs();
//!     let costs = network.train(&data, &labels, &options, &mut rng)
//!         .unwrap()
//!         .unwrap();
//!     assert!(costs[costs.len() - 1] < costs[0]);
//! }
//! ```

use activation::Activation;
use cost::Cost;
use error::{Error, Result};
use layer::{Layer, WeightInit};
use matrix::Mat;
use optimizer::{Optimizer, OptimizerKind};

use rand::Rng;

/// Logging frequency to use during training.
#[derive(Copy, Clone, Debug)]
pub enum Logging {
    /// No logs will be printed.
    Silent,
    /// A summary will be printed at completion.
    Completion,
    /// A summary will be printed after every `n` epochs.
    Epochs(usize),
}

impl Logging {
    /// Performs logging at the current `epoch` of training.
    fn epoch(&self, epoch: usize, cost: f64) {
        if let &Logging::Epochs(freq) = self {
            if freq > 0 && epoch % freq == 0 {
                println!("Epoch {}:\tcost={}", epoch, cost);
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, epochs: usize, cost: f64) {
        if let &Logging::Silent = self {
            return;
        }
        println!("Training completed after {} epochs.", epochs);
        println!("Final cost: {}", cost);
    }
}

/// Options for one training session.
///
/// A fresh optimizer with zeroed accumulators is attached at the start of
/// every `train` call, so momentum and moment statistics are scoped to the
/// session and never leak between calls.
#[derive(Clone, Debug)]
pub struct TrainOptions {
    epochs: usize,
    optimizer: OptimizerKind,
    regularization: f64,
    batch_size: usize,
    logging: Logging,
    collect_costs: bool,
}

impl TrainOptions {
    /// Creates options for `epochs` passes using the given update rule.
    ///
    /// The defaults are no regularization, a batch size of one (stochastic
    /// updates), logging on completion, and no cost collection.
    pub fn new(epochs: usize, optimizer: OptimizerKind) -> Self {
        TrainOptions {
            epochs: epochs,
            optimizer: optimizer,
            regularization: 0.0,
            batch_size: 1,
            logging: Logging::Completion,
            collect_costs: false,
        }
    }

    /// Sets the L2 regularization strength.
    pub fn regularization(mut self, regularization: f64) -> Self {
        self.regularization = regularization;
        self
    }

    /// Sets how many examples accumulate into one optimizer step.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Collects and returns the mean cost of every epoch.
    pub fn collect_costs(mut self) -> Self {
        self.collect_costs = true;
        self
    }
}

/// A feedforward neural network.
///
/// Hidden layers share one activation function; the output layer is always
/// linear.
#[derive(Debug)]
pub struct Network {
    layers: Vec<Layer>,
    cost: Cost,
}

impl Network {
    /// Creates a new, untrained neural network.
    ///
    /// Arguments:
    ///  * `input_len` - the number of features in one example.
    ///  * `output_len` - the number of network outputs.
    ///  * `hidden_layers` - how many hidden layers to build.
    ///  * `hidden_len` - the number of neurons in each hidden layer.
    ///  * `activation` - the activation function for the hidden layers.
    ///  * `cost` - the cost function used during training.
    ///  * `init` - how to scale the initial weights.
    pub fn new<R: Rng>(input_len: usize,
                       output_len: usize,
                       hidden_layers: usize,
                       hidden_len: usize,
                       activation: Activation,
                       cost: Cost,
                       init: WeightInit,
                       rng: &mut R)
                       -> Result<Network> {
        if input_len == 0 || output_len == 0 {
            return Err(Error::Configuration(
                "input and output sizes must be nonzero".to_string()));
        }
        if hidden_layers > 0 && hidden_len == 0 {
            return Err(Error::Configuration(
                "hidden layer size must be nonzero".to_string()));
        }
        let mut layers = Vec::with_capacity(hidden_layers + 1);
        let mut inputs = input_len;
        for _ in 0..hidden_layers {
            layers.push(Layer::new(activation, inputs, hidden_len, init, rng));
            inputs = hidden_len;
        }
        layers.push(Layer::new(Activation::Linear,
                               inputs,
                               output_len,
                               init,
                               rng));
        Ok(Network {
            layers: layers,
            cost: cost,
        })
    }

    /// Returns the size of the input layer to the network.
    pub fn input_len(&self) -> usize {
        self.layers[0].input_len()
    }

    /// Returns the size of the output layer from the network.
    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1].output_len()
    }

    /// Feeds the provided `example` through the network, returning the
    /// output layer.
    pub fn forward_pass(&mut self, example: &[f64]) -> Result<Vec<f64>> {
        if example.len() != self.input_len() {
            return Err(Error::ShapeMismatch(
                format!("example has {} features, network takes {}",
                        example.len(),
                        self.input_len())));
        }
        let mut activations = self.layers[0].forward(example);
        for layer in self.layers.iter_mut().skip(1) {
            activations = layer.forward(&activations);
        }
        Ok(activations)
    }

    /// Feeds the cost gradient back through every layer, leaving each
    /// layer's loss gradient in its per-example scratch buffer.
    fn back_prop(&mut self, grad: Vec<f64>) {
        let mut grad = grad;
        for layer in self.layers.iter_mut().rev() {
            grad = layer.back_propagate(&grad);
        }
    }

    /// Trains the network on the provided labelled data.
    ///
    /// Every epoch visits each example once, in an order drawn freshly from
    /// `rng`. After each optimizer step the decoupled weight decay
    /// `w -= reg * w` is applied; it is independent of, and in addition to,
    /// the gradient-based update. The L2 penalty also contributes
    /// `0.5 * reg * sum(w^2)` to the reported cost, but never to the
    /// gradient itself.
    ///
    /// Returns the mean cost of every epoch when `collect_costs` was
    /// requested.
    pub fn train<I, O, R>(&mut self,
                          data: &[I],
                          labels: &[O],
                          options: &TrainOptions,
                          rng: &mut R)
                          -> Result<Option<Vec<f64>>>
        where I: AsRef<[f64]>,
              O: AsRef<[f64]>,
              R: Rng
    {
        self.check_examples(data, labels)?;
        if options.batch_size == 0 {
            return Err(Error::Configuration(
                "batch size must be nonzero".to_string()));
        }
        let mut optimizer = Optimizer::new(options.optimizer, &self.layers)?;

        let mut updates: Vec<Mat> =
            self.layers.iter().map(Layer::empty_weight_update).collect();
        let mut order: Vec<usize> = (0..data.len()).collect();
        let mut epoch_costs = if options.collect_costs {
            Some(Vec::with_capacity(options.epochs))
        } else {
            None
        };

        let mut mean_cost = 0.0;
        for epoch in 0..options.epochs {
            rng.shuffle(&mut order);
            let mut total_cost = 0.0;
            let mut batched = 0;
            for (seen, &example) in order.iter().enumerate() {
                let output = self.forward_pass(data[example].as_ref())?;
                let (mut cost, grad) =
                    self.cost.evaluate(&output, labels[example].as_ref());
                if options.regularization != 0.0 {
                    cost += 0.5 * options.regularization * self.weight_norm();
                }
                self.back_prop(grad);
                if !cost.is_finite() || !self.gradients_finite() {
                    return Err(Error::TrainingDiverged {
                        epoch: epoch,
                        example: example,
                    });
                }
                total_cost += cost;

                for (update, layer) in updates.iter_mut().zip(&self.layers) {
                    *update += layer.weight_grad();
                }
                batched += 1;
                if batched == options.batch_size || seen == order.len() - 1 {
                    if batched > 1 {
                        let scale = 1.0 / batched as f64;
                        for update in &mut updates {
                            update.scale(scale);
                        }
                    }
                    optimizer.step(&mut self.layers, &updates);
                    if options.regularization != 0.0 {
                        self.decay_weights(options.regularization);
                    }
                    for update in &mut updates {
                        update.zero_out();
                    }
                    batched = 0;
                }
            }
            mean_cost = total_cost / data.len() as f64;
            options.logging.epoch(epoch + 1, mean_cost);
            if let Some(ref mut costs) = epoch_costs {
                costs.push(mean_cost);
            }
        }
        options.logging.completion(options.epochs, mean_cost);
        Ok(epoch_costs)
    }

    /// Measures classification accuracy: the fraction of examples whose
    /// largest output coincides with the integer label.
    pub fn validate<I>(&mut self, data: &[I], labels: &[usize]) -> Result<f64>
        where I: AsRef<[f64]>
    {
        if data.len() != labels.len() {
            return Err(Error::ShapeMismatch(
                format!("{} examples but {} labels",
                        data.len(),
                        labels.len())));
        }
        if data.is_empty() {
            return Err(Error::Configuration(
                "validation set is empty".to_string()));
        }
        let mut correct = 0;
        for (example, &label) in data.iter().zip(labels) {
            let output = self.forward_pass(example.as_ref())?;
            if argmax(&output) == label {
                correct += 1;
            }
        }
        Ok(correct as f64 / data.len() as f64)
    }

    /// Returns the ordered list of per-layer weight matrices. Together with
    /// the construction parameters, this list fully determines network
    /// behavior.
    pub fn get_weights(&self) -> Vec<Mat> {
        self.layers.iter().map(|layer| layer.weights().clone()).collect()
    }

    /// Replaces every layer's weights with the provided list. The list must
    /// match the network topology exactly; nothing is mutated on error.
    pub fn set_weights(&mut self, weights: Vec<Mat>) -> Result<()> {
        if weights.len() != self.layers.len() {
            return Err(Error::ShapeMismatch(
                format!("{} weight matrices for {} layers",
                        weights.len(),
                        self.layers.len())));
        }
        for (i, (layer, mat)) in self.layers.iter().zip(&weights).enumerate() {
            if !layer.weights().same_shape(mat) {
                return Err(Error::ShapeMismatch(
                    format!("layer {} expects {}x{} weights, got {}x{}",
                            i,
                            layer.weights().rows(),
                            layer.weights().cols(),
                            mat.rows(),
                            mat.cols())));
            }
        }
        for (layer, mat) in self.layers.iter_mut().zip(weights) {
            layer.replace_weights(mat);
        }
        Ok(())
    }

    fn check_examples<I, O>(&self, data: &[I], labels: &[O]) -> Result<()>
        where I: AsRef<[f64]>,
              O: AsRef<[f64]>
    {
        if data.len() != labels.len() {
            return Err(Error::ShapeMismatch(
                format!("{} examples but {} labels",
                        data.len(),
                        labels.len())));
        }
        if data.is_empty() {
            return Err(Error::Configuration(
                "training set is empty".to_string()));
        }
        for (i, (example, label)) in data.iter().zip(labels).enumerate() {
            if example.as_ref().len() != self.input_len() {
                return Err(Error::ShapeMismatch(
                    format!("example {} has {} features, network takes {}",
                            i,
                            example.as_ref().len(),
                            self.input_len())));
            }
            if label.as_ref().len() != self.output_len() {
                return Err(Error::ShapeMismatch(
                    format!("label {} has {} values, network outputs {}",
                            i,
                            label.as_ref().len(),
                            self.output_len())));
            }
        }
        Ok(())
    }

    fn weight_norm(&self) -> f64 {
        self.layers
            .iter()
            .map(|layer| layer.weights().iter().map(|w| w * w).sum::<f64>())
            .sum()
    }

    /// Decoupled weight decay: shrinks every weight directly.
    fn decay_weights(&mut self, regularization: f64) {
        for layer in &mut self.layers {
            layer.weights_mut().scale(1.0 - regularization);
        }
    }

    fn gradients_finite(&self) -> bool {
        self.layers.iter().all(|layer| layer.weight_grad().is_finite())
    }
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, StdRng};

    const ACTIVATIONS: [Activation; 4] = [Activation::Linear,
                                          Activation::ReLU,
                                          Activation::Sigmoid,
                                          Activation::TanH];

    fn rng_for(seed: usize) -> StdRng {
        SeedableRng::from_seed(&[seed][..])
    }

    fn small_network(seed: usize, activation: Activation) -> Network {
        let mut rng = rng_for(seed);
        Network::new(3, 1, 2, 4, activation, Cost::MeanSquared,
                     WeightInit::He, &mut rng)
            .unwrap()
    }

    #[test]
    fn rejects_zero_sizes() {
        let mut rng = rng_for(1);
        assert!(Network::new(0, 1, 1, 4, Activation::TanH,
                             Cost::MeanSquared, WeightInit::Scaled, &mut rng)
            .is_err());
        assert!(Network::new(2, 1, 1, 0, Activation::TanH,
                             Cost::MeanSquared, WeightInit::Scaled, &mut rng)
            .is_err());
    }

    #[test]
    fn layer_shapes_follow_topology() {
        let mut rng = rng_for(2);
        let network = Network::new(3, 2, 2, 5, Activation::Sigmoid,
                                   Cost::MeanSquared, WeightInit::Scaled,
                                   &mut rng)
            .unwrap();
        let weights = network.get_weights();
        assert_eq!(weights.len(), 3);
        assert_eq!((weights[0].rows(), weights[0].cols()), (5, 4));
        assert_eq!((weights[1].rows(), weights[1].cols()), (5, 6));
        assert_eq!((weights[2].rows(), weights[2].cols()), (2, 6));
        assert_eq!(network.input_len(), 3);
        assert_eq!(network.output_len(), 2);
    }

    #[test]
    fn forward_pass_is_deterministic() {
        let mut network = small_network(3, Activation::TanH);
        let example = [0.1, -0.2, 0.3];
        let first = network.forward_pass(&example).unwrap();
        let second = network.forward_pass(&example).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn forward_pass_checks_example_shape() {
        let mut network = small_network(4, Activation::TanH);
        match network.forward_pass(&[1.0]) {
            Err(Error::ShapeMismatch(_)) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn backprop_gradient_matches_finite_difference() {
        let h = 1e-6;
        for activation in ACTIVATIONS.iter() {
            for seed in 0..5 {
                let mut network = small_network(300 + seed, *activation);
                let example = [0.37, -0.11, 0.64];
                let target = [0.5];

                let output = network.forward_pass(&example).unwrap();
                let (_, grad) = Cost::MeanSquared.evaluate(&output, &target);
                network.back_prop(grad);
                let analytic: Vec<Mat> = network.layers
                    .iter()
                    .map(|layer| layer.weight_grad().clone())
                    .collect();

                let loss = |network: &mut Network| -> f64 {
                    let output = network.forward_pass(&example).unwrap();
                    let (loss, _) = Cost::MeanSquared.evaluate(&output,
                                                               &target);
                    loss
                };
                for (l, layer_grad) in analytic.iter().enumerate() {
                    for row in 0..layer_grad.rows() {
                        for col in 0..layer_grad.cols() {
                            let mut weights = network.get_weights();
                            let base = weights[l][(row, col)];
                            weights[l][(row, col)] = base + h;
                            network.set_weights(weights.clone()).unwrap();
                            let plus = loss(&mut network);
                            weights[l][(row, col)] = base - h;
                            network.set_weights(weights.clone()).unwrap();
                            let minus = loss(&mut network);
                            weights[l][(row, col)] = base;
                            network.set_weights(weights).unwrap();

                            let numeric = (plus - minus) / (2.0 * h);
                            let analytic = layer_grad[(row, col)];
                            assert!((numeric - analytic).abs() < 1e-4,
                                    "{:?} seed {} layer {} ({}, {}): \
                                     {} vs {}",
                                    activation,
                                    seed,
                                    l,
                                    row,
                                    col,
                                    numeric,
                                    analytic);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn weight_round_trip_preserves_outputs() {
        let mut network = small_network(5, Activation::Sigmoid);
        let example = [0.9, -0.5, 0.2];
        let before = network.forward_pass(&example).unwrap();
        let weights = network.get_weights();
        network.set_weights(weights).unwrap();
        let after = network.forward_pass(&example).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn set_weights_rejects_bad_topology() {
        let mut network = small_network(6, Activation::TanH);
        let weights = network.get_weights();

        let mut truncated = weights.clone();
        truncated.pop();
        match network.set_weights(truncated) {
            Err(Error::ShapeMismatch(_)) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }

        let mut reshaped = weights.clone();
        reshaped[0] = Mat::zeros(1, 1);
        match network.set_weights(reshaped) {
            Err(Error::ShapeMismatch(_)) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }

        // The failed calls must not have touched the weights.
        assert_eq!(network.get_weights(), weights);
    }

    #[test]
    fn train_rejects_mismatched_data() {
        let mut network = small_network(7, Activation::TanH);
        let options =
            TrainOptions::new(1, OptimizerKind::Sgd { learning_rate: 0.1 })
                .logging(Logging::Silent);
        let mut rng = rng_for(7);

        let data = vec![vec![0.0, 0.0, 0.0]];
        let labels: Vec<Vec<f64>> = vec![];
        match network.train(&data, &labels, &options, &mut rng) {
            Err(Error::ShapeMismatch(_)) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }

        let labels = vec![vec![0.0, 1.0]];
        match network.train(&data, &labels, &options, &mut rng) {
            Err(Error::ShapeMismatch(_)) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn training_runs_are_reproducible() {
        let run = || -> Vec<f64> {
            let mut rng = rng_for(8);
            let mut network = Network::new(2, 1, 1, 6, Activation::TanH,
                                           Cost::MeanSquared,
                                           WeightInit::Scaled, &mut rng)
                .unwrap();
            let data: Vec<Vec<f64>> = (0..20)
                .map(|i| vec![(i as f64 / 10.0) - 1.0, (i % 3) as f64 - 1.0])
                .collect();
            let labels: Vec<Vec<f64>> = data.iter()
                .map(|x| vec![x[0] * 0.3 - x[1] * 0.7])
                .collect();
            let options = TrainOptions::new(10, OptimizerKind::Adam {
                    learning_rate: 0.01,
                    beta1: 0.9,
                    beta2: 0.999,
                })
                .logging(Logging::Silent)
                .collect_costs();
            network.train(&data, &labels, &options, &mut rng)
                .unwrap()
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn divergence_is_reported() {
        let mut rng = rng_for(9);
        let mut network = Network::new(1, 1, 1, 4, Activation::Linear,
                                       Cost::MeanSquared,
                                       WeightInit::Scaled, &mut rng)
            .unwrap();
        let data: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let labels: Vec<Vec<f64>> = (0..10).map(|_| vec![1.0]).collect();
        let options = TrainOptions::new(50, OptimizerKind::Sgd {
                learning_rate: 1e200,
            })
            .logging(Logging::Silent);
        match network.train(&data, &labels, &options, &mut rng) {
            Err(Error::TrainingDiverged { .. }) => {}
            other => panic!("expected divergence, got {:?}", other),
        }
        // The surviving weights are the last finite ones.
        assert!(network.get_weights().iter().all(Mat::is_finite));
    }

    #[test]
    fn weight_decay_shrinks_weights() {
        let mut rng = rng_for(10);
        let mut network = Network::new(2, 1, 0, 0, Activation::Linear,
                                       Cost::MeanSquared,
                                       WeightInit::Scaled, &mut rng)
            .unwrap();
        let data = vec![vec![0.0, 0.0]];
        let labels = vec![vec![0.0]];
        // Zero learning rate isolates the decoupled decay term.
        let options = TrainOptions::new(1, OptimizerKind::Sgd {
                learning_rate: 0.0,
            })
            .regularization(0.1)
            .logging(Logging::Silent);
        let before = network.get_weights();
        network.train(&data, &labels, &options, &mut rng).unwrap();
        let after = network.get_weights();
        for (b, a) in before[0].iter().zip(after[0].iter()) {
            assert!((a - b * 0.9).abs() < 1e-12);
        }
    }

    #[test]
    fn batched_training_converges() {
        let mut rng = rng_for(11);
        let mut network = Network::new(1, 1, 1, 8, Activation::TanH,
                                       Cost::MeanSquared,
                                       WeightInit::Scaled, &mut rng)
            .unwrap();
        let data: Vec<Vec<f64>> =
            (0..24).map(|i| vec![i as f64 / 12.0 - 1.0]).collect();
        let labels: Vec<Vec<f64>> =
            data.iter().map(|x| vec![0.7 * x[0]]).collect();
        let options = TrainOptions::new(60, OptimizerKind::Sgd {
                learning_rate: 0.2,
            })
            .batch_size(4)
            .logging(Logging::Silent)
            .collect_costs();
        let costs = network.train(&data, &labels, &options, &mut rng)
            .unwrap()
            .unwrap();
        assert!(costs[costs.len() - 1] < costs[0]);
    }

    #[test]
    fn fits_sine_regression() {
        let mut rng = rng_for(12);
        let mut network = Network::new(1, 1, 2, 50, Activation::TanH,
                                       Cost::MeanSquared,
                                       WeightInit::Scaled, &mut rng)
            .unwrap();
        let data: Vec<Vec<f64>> =
            (0..20).map(|i| vec![i as f64 / 9.5 - 1.0]).collect();
        let labels: Vec<Vec<f64>> =
            data.iter().map(|x| vec![x[0].sin()]).collect();
        let options = TrainOptions::new(100, OptimizerKind::Sgd {
                learning_rate: 0.1,
            })
            .logging(Logging::Silent)
            .collect_costs();
        let costs = network.train(&data, &labels, &options, &mut rng)
            .unwrap()
            .unwrap();
        assert!(costs[costs.len() - 1] < 0.1 * costs[0],
                "cost went from {} to {}",
                costs[0],
                costs[costs.len() - 1]);
    }

    #[test]
    fn classifies_separable_points() {
        let mut rng = rng_for(13);
        let mut network = Network::new(2, 2, 1, 8, Activation::Sigmoid,
                                       Cost::CrossEntropy,
                                       WeightInit::Scaled, &mut rng)
            .unwrap();
        // Two clusters split by the line x + y = 0.
        let mut data = Vec::new();
        let mut labels = Vec::new();
        let mut classes = Vec::new();
        for _ in 0..100 {
            let x: f64 = rng.gen::<f64>() * 2.0 - 1.0;
            let y: f64 = rng.gen::<f64>() * 2.0 - 1.0;
            data.push(vec![x, y]);
            if x + y > 0.0 {
                labels.push(vec![0.0, 1.0]);
                classes.push(1);
            } else {
                labels.push(vec![1.0, 0.0]);
                classes.push(0);
            }
        }
        let options = TrainOptions::new(60, OptimizerKind::Momentum {
                learning_rate: 0.05,
                momentum: 0.9,
            })
            .logging(Logging::Silent);
        network.train(&data, &labels, &options, &mut rng).unwrap();
        let accuracy = network.validate(&data, &classes).unwrap();
        assert!(accuracy > 0.9, "accuracy was {}", accuracy);
    }
}
