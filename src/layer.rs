//! A single fully connected layer.
//!
//! This performs efficient network updates by storing the weights for every
//! neuron as a single matrix row, with the neuron's bias in the final
//! column. The forward pass caches the local derivatives that
//! `back_propagate` later combines with the upstream gradient.

use activation::Activation;
use matrix::Mat;

use rand::Rng;
use rand::distributions::Normal;

/// Scale applied to freshly drawn weights when He init is not requested.
const WEIGHT_SCALE: f64 = 0.1;

/// How to scale the randomly drawn initial weights.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WeightInit {
    /// Normal samples scaled by a fixed small factor.
    Scaled,
    /// Normal samples scaled by `sqrt(2 / fan_in)`, suited to ReLU-family
    /// activations.
    He,
}

/// A wrapper for a single layer of the neural network.
#[derive(Debug)]
pub struct Layer {
    /// The activation function to be used for every neuron in the layer.
    activation: Activation,
    /// The network weights, one row per neuron; the last column is the bias.
    weights: Mat,
    /// The latest input, extended with the constant bias term.
    input: Vec<f64>,
    /// d(output)/d(input), cached by `forward`.
    grad_inputs: Mat,
    /// d(output)/d(weights), cached by `forward`.
    grad_weights: Mat,
    /// d(loss)/d(weights) for the current example, written by
    /// `back_propagate`. Per-example scratch, overwritten on every call.
    weight_grad: Mat,
}

impl Layer {
    /// Initializes a new, untrained layer.
    ///
    /// Arguments:
    ///
    ///  * `activation` - the activation function to be used for this layer's
    ///                   output.
    ///  * `inputs` - the number of inputs to this layer, excluding the bias.
    ///  * `neurons` - the number of outputs from this layer.
    pub fn new<R: Rng>(activation: Activation,
                       inputs: usize,
                       neurons: usize,
                       init: WeightInit,
                       rng: &mut R)
                       -> Self {
        let scale = match init {
            WeightInit::Scaled => WEIGHT_SCALE,
            WeightInit::He => (2.0 / inputs as f64).sqrt(),
        };
        // The trailing element of `input` is the bias term and stays 1.0.
        let mut input = vec![0.0; inputs + 1];
        input[inputs] = 1.0;
        Layer {
            activation: activation,
            weights: Mat::random(Normal::new(0.0, 1.0),
                                 scale,
                                 neurons,
                                 inputs + 1,
                                 rng),
            input: input,
            grad_inputs: Mat::zeros(neurons, inputs),
            grad_weights: Mat::zeros(neurons, inputs + 1),
            weight_grad: Mat::zeros(neurons, inputs + 1),
        }
    }

    /// Returns the number of inputs to this layer, excluding the bias.
    pub fn input_len(&self) -> usize {
        self.weights.cols() - 1
    }

    /// Returns the number of outputs from this layer.
    pub fn output_len(&self) -> usize {
        self.weights.rows()
    }

    pub fn weights(&self) -> &Mat {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Mat {
        &mut self.weights
    }

    pub(crate) fn weight_grad(&self) -> &Mat {
        &self.weight_grad
    }

    pub(crate) fn replace_weights(&mut self, weights: Mat) {
        assert!(self.weights.same_shape(&weights));
        self.weights = weights;
    }

    /// Returns an empty weight update matrix.
    pub fn empty_weight_update(&self) -> Mat {
        Mat::zeros(self.output_len(), self.input_len() + 1)
    }

    /// Feeds the provided `input` forward through the layer, caching the
    /// local derivatives needed for backpropagation.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        assert_eq!(input.len(), self.input_len());
        self.input[..input.len()].copy_from_slice(input);

        let mut output = vec![0.0; self.output_len()];
        self.weights.mat_vec(&self.input, &mut output);
        for y in &mut output {
            *y = self.activation.f(*y);
        }

        let derivative: Vec<f64> =
            output.iter().map(|&y| self.activation.fprime(y)).collect();
        self.grad_weights.zero_out();
        self.grad_weights.rank_one(1.0, &derivative, &self.input);
        for col in 0..self.grad_inputs.cols() {
            for row in 0..self.grad_inputs.rows() {
                self.grad_inputs[(row, col)] = derivative[row] *
                                               self.weights[(row, col)];
            }
        }
        output
    }

    /// Combines the cached local derivatives with `grad_in`, the loss
    /// gradient with respect to this layer's output. Writes the loss
    /// gradient for the weights into the per-example scratch buffer and
    /// returns the gradient to pass to the preceding layer.
    pub fn back_propagate(&mut self, grad_in: &[f64]) -> Vec<f64> {
        assert_eq!(grad_in.len(), self.output_len());
        for col in 0..self.weight_grad.cols() {
            for row in 0..self.weight_grad.rows() {
                self.weight_grad[(row, col)] = grad_in[row] *
                                               self.grad_weights[(row, col)];
            }
        }
        let mut grad_out = vec![0.0; self.input_len()];
        self.grad_inputs.mat_vec_t(grad_in, &mut grad_out);
        grad_out
    }
}
