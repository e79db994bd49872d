//! Cost function types.
//!
//! Every variant is a pure function from a single example's predicted
//! output and target to a scalar loss and the gradient of that loss with
//! respect to the output.

use error::Error;
use std::str::FromStr;

/// Cost (loss) function types.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cost {
    /// `0.5 * mean((output - target)^2)`
    MeanSquared,
    /// Softmax cross-entropy over the raw network outputs.
    CrossEntropy,
    /// Margin loss over `±1` targets.
    Hinge,
    /// Exponential loss over `±1` targets.
    Exponential,
}

impl Cost {
    /// Evaluates the loss and its gradient with respect to `output`.
    pub fn evaluate(&self, output: &[f64], target: &[f64]) -> (f64, Vec<f64>) {
        debug_assert_eq!(output.len(), target.len());
        let mut loss = 0.0;
        let mut grad = Vec::with_capacity(output.len());
        match self {
            &Cost::MeanSquared => {
                for (&o, &t) in output.iter().zip(target) {
                    loss += (o - t) * (o - t);
                    grad.push(o - t);
                }
                loss *= 0.5 / output.len() as f64;
            }
            &Cost::CrossEntropy => {
                // Stabilized softmax: shifting by the max leaves the
                // probabilities unchanged.
                let max = output.iter()
                    .cloned()
                    .fold(::std::f64::NEG_INFINITY, f64::max);
                let exps: Vec<f64> =
                    output.iter().map(|&o| (o - max).exp()).collect();
                let sum: f64 = exps.iter().sum();
                for (&e, &t) in exps.iter().zip(target) {
                    let p = e / sum;
                    if t != 0.0 {
                        loss -= t * p.ln();
                    }
                    grad.push(p - t);
                }
            }
            &Cost::Hinge => {
                for (&o, &t) in output.iter().zip(target) {
                    if 1.0 - t * o > 0.0 {
                        loss += 1.0 - t * o;
                        grad.push(-t);
                    } else {
                        grad.push(0.0);
                    }
                }
            }
            &Cost::Exponential => {
                for (&o, &t) in output.iter().zip(target) {
                    let e = (-t * o).exp();
                    loss += e;
                    grad.push(-t * e);
                }
            }
        }
        (loss, grad)
    }
}

impl FromStr for Cost {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "mse" | "mean-squared" => Ok(Cost::MeanSquared),
            "cross-entropy" => Ok(Cost::CrossEntropy),
            "hinge" => Ok(Cost::Hinge),
            "exponential" => Ok(Cost::Exponential),
            _ => Err(Error::Configuration(format!("unknown cost: {}", name))),
        }
    }
}
