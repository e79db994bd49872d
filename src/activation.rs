//! Activation function types.

use error::Error;
use std::str::FromStr;

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// types.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// Identity function
    Linear,
    /// Rectified Linear Unit
    ReLU,
    /// Sigmoid function
    Sigmoid,
    /// Hyperbolic tan function
    TanH,
}

impl Activation {
    /// Evaluates `f(x)` for the selected activation function.
    pub fn f(&self, x: f64) -> f64 {
        match self {
            &Activation::Linear => x,
            &Activation::ReLU => if x > 0.0 { x } else { 0.0 },
            &Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            &Activation::TanH => x.tanh(),
        }
    }

    /// Evaluates the derivative `f'(x)`, where `x = f^{-1}(y)`.
    ///
    /// Note that this function takes in the *output* of the activation
    /// function, rather than the input. This means the forward pass does not
    /// have to store pre-activation values, and the sigmoid and tanh
    /// derivatives reuse the exponential already paid for.
    pub fn fprime(&self, y: f64) -> f64 {
        match self {
            &Activation::Linear => 1.0,
            // An output of exactly zero counts as the inactive side.
            &Activation::ReLU => if y > 0.0 { 1.0 } else { 0.0 },
            &Activation::Sigmoid => y * (1.0 - y),
            &Activation::TanH => 1.0 - y * y,
        }
    }
}

impl FromStr for Activation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "linear" => Ok(Activation::Linear),
            "relu" => Ok(Activation::ReLU),
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::TanH),
            _ => Err(Error::Configuration(
                format!("unknown activation: {}", name))),
        }
    }
}
