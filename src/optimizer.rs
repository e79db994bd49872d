//! Gradient descent update rules.
//!
//! Every optimizer consumes the per-layer weight gradients computed by the
//! backward pass and mutates each layer's weights in place. Accumulator
//! state is allocated per layer when the optimizer is attached, shaped to
//! match that layer's weight matrix.

use error::{Error, Result};
use layer::Layer;
use matrix::Mat;

use itertools::multizip;
use std::str::FromStr;

/// Stability term added inside denominators and square roots.
const EPSILON: f64 = 1e-8;

/// Optimizer selection, carrying the hyperparameters of each update rule.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OptimizerKind {
    /// `w -= lr * grad`
    Sgd { learning_rate: f64 },
    /// Velocity accumulation: `v = mom*v - lr*grad; w += v`
    Momentum { learning_rate: f64, momentum: f64 },
    /// Momentum with a lookahead correction along the velocity.
    Nesterov { learning_rate: f64, momentum: f64 },
    /// Per-weight step sizes shrink with the accumulated squared gradient.
    AdaGrad { learning_rate: f64 },
    /// Step sizes come from the ratio of running RMS statistics; there is
    /// no global learning rate.
    AdaDelta { decay: f64 },
    /// AdaGrad with a decaying squared-gradient average.
    RmsProp { learning_rate: f64, decay: f64 },
    /// Bias-corrected first and second moment estimates.
    Adam { learning_rate: f64, beta1: f64, beta2: f64 },
    /// Adam with a Nesterov-style lookahead on the first moment.
    Nadam { learning_rate: f64, beta1: f64, beta2: f64 },
}

impl OptimizerKind {
    fn validate(&self) -> Result<()> {
        match self {
            &OptimizerKind::Sgd { learning_rate } |
            &OptimizerKind::AdaGrad { learning_rate } => {
                check_rate(learning_rate)
            }
            &OptimizerKind::Momentum { learning_rate, momentum } |
            &OptimizerKind::Nesterov { learning_rate, momentum } => {
                check_rate(learning_rate)?;
                check_decay("momentum", momentum)
            }
            &OptimizerKind::AdaDelta { decay } => check_decay("decay", decay),
            &OptimizerKind::RmsProp { learning_rate, decay } => {
                check_rate(learning_rate)?;
                check_decay("decay", decay)
            }
            &OptimizerKind::Adam { learning_rate, beta1, beta2 } |
            &OptimizerKind::Nadam { learning_rate, beta1, beta2 } => {
                check_rate(learning_rate)?;
                check_decay("beta1", beta1)?;
                check_decay("beta2", beta2)
            }
        }
    }
}

fn check_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(Error::Configuration(
            format!("learning rate must be finite and non-negative, got {}",
                    rate)))
    }
}

fn check_decay(name: &str, value: f64) -> Result<()> {
    if value >= 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(Error::Configuration(
            format!("{} must lie in [0, 1), got {}", name, value)))
    }
}

impl FromStr for OptimizerKind {
    type Err = Error;

    /// Resolves an optimizer by name with its customary hyperparameters.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "sgd" => Ok(OptimizerKind::Sgd { learning_rate: 0.01 }),
            "momentum" => Ok(OptimizerKind::Momentum {
                learning_rate: 0.01,
                momentum: 0.9,
            }),
            "nesterov" | "nesterov-momentum" => Ok(OptimizerKind::Nesterov {
                learning_rate: 0.01,
                momentum: 0.9,
            }),
            "adagrad" => Ok(OptimizerKind::AdaGrad { learning_rate: 0.01 }),
            "adadelta" => Ok(OptimizerKind::AdaDelta { decay: 0.9 }),
            "rmsprop" => Ok(OptimizerKind::RmsProp {
                learning_rate: 0.001,
                decay: 0.9,
            }),
            "adam" => Ok(OptimizerKind::Adam {
                learning_rate: 0.001,
                beta1: 0.9,
                beta2: 0.999,
            }),
            "nadam" => Ok(OptimizerKind::Nadam {
                learning_rate: 0.001,
                beta1: 0.9,
                beta2: 0.999,
            }),
            _ => Err(Error::Configuration(
                format!("unknown optimizer: {}", name))),
        }
    }
}

/// Per-layer accumulator state for the attached update rule.
#[derive(Debug)]
enum State {
    Stateless,
    /// Velocity per layer (Momentum, Nesterov).
    Velocity(Vec<Mat>),
    /// Running squared-gradient statistic per layer (AdaGrad, RMSProp).
    SquareAvg(Vec<Mat>),
    /// Squared-gradient and squared-update averages per layer (AdaDelta).
    DeltaAvg {
        grad_avg: Vec<Mat>,
        update_avg: Vec<Mat>,
    },
    /// Moment estimates plus the shared step count (Adam, Nadam).
    Moments {
        first: Vec<Mat>,
        second: Vec<Mat>,
        step: usize,
    },
}

impl State {
    fn velocity_mut(&mut self) -> &mut [Mat] {
        match self {
            &mut State::Velocity(ref mut v) => v,
            _ => unreachable!("optimizer state does not match its kind"),
        }
    }

    fn square_avg_mut(&mut self) -> &mut [Mat] {
        match self {
            &mut State::SquareAvg(ref mut s) => s,
            _ => unreachable!("optimizer state does not match its kind"),
        }
    }

    fn delta_avg_mut(&mut self) -> (&mut [Mat], &mut [Mat]) {
        match self {
            &mut State::DeltaAvg { ref mut grad_avg, ref mut update_avg } => {
                (grad_avg, update_avg)
            }
            _ => unreachable!("optimizer state does not match its kind"),
        }
    }

    fn moments_mut(&mut self) -> (&mut [Mat], &mut [Mat], &mut usize) {
        match self {
            &mut State::Moments { ref mut first,
                                  ref mut second,
                                  ref mut step } => (first, second, step),
            _ => unreachable!("optimizer state does not match its kind"),
        }
    }
}

/// An attached optimizer: an update rule plus its accumulator state.
#[derive(Debug)]
pub struct Optimizer {
    kind: OptimizerKind,
    state: State,
}

impl Optimizer {
    /// Builds an optimizer for the given layer stack, validating the
    /// hyperparameters and allocating every accumulator up front.
    pub fn new(kind: OptimizerKind, layers: &[Layer]) -> Result<Optimizer> {
        kind.validate()?;
        let zeros = || -> Vec<Mat> {
            layers.iter().map(Layer::empty_weight_update).collect()
        };
        let state = match kind {
            OptimizerKind::Sgd { .. } => State::Stateless,
            OptimizerKind::Momentum { .. } |
            OptimizerKind::Nesterov { .. } => State::Velocity(zeros()),
            OptimizerKind::AdaGrad { .. } |
            OptimizerKind::RmsProp { .. } => State::SquareAvg(zeros()),
            OptimizerKind::AdaDelta { .. } => State::DeltaAvg {
                grad_avg: zeros(),
                update_avg: zeros(),
            },
            OptimizerKind::Adam { .. } |
            OptimizerKind::Nadam { .. } => State::Moments {
                first: zeros(),
                second: zeros(),
                step: 0,
            },
        };
        Ok(Optimizer {
            kind: kind,
            state: state,
        })
    }

    /// Applies one update to every layer's weights from the matching
    /// gradient in `gradients`.
    pub fn step(&mut self, layers: &mut [Layer], gradients: &[Mat]) {
        debug_assert_eq!(layers.len(), gradients.len());
        let kind = self.kind;
        match kind {
            OptimizerKind::Sgd { learning_rate } => {
                for (layer, grad) in layers.iter_mut().zip(gradients) {
                    for (w, &g) in layer.weights_mut()
                        .iter_mut()
                        .zip(grad.iter()) {
                        *w -= learning_rate * g;
                    }
                }
            }
            OptimizerKind::Momentum { learning_rate, momentum } => {
                let velocity = self.state.velocity_mut();
                for (layer, grad, vel) in multizip((layers.iter_mut(),
                                                    gradients.iter(),
                                                    velocity.iter_mut())) {
                    for (w, &g, v) in multizip((layer.weights_mut()
                                                    .iter_mut(),
                                                grad.iter(),
                                                vel.iter_mut())) {
                        *v = momentum * *v - learning_rate * g;
                        *w += *v;
                    }
                }
            }
            OptimizerKind::Nesterov { learning_rate, momentum } => {
                let velocity = self.state.velocity_mut();
                for (layer, grad, vel) in multizip((layers.iter_mut(),
                                                    gradients.iter(),
                                                    velocity.iter_mut())) {
                    for (w, &g, v) in multizip((layer.weights_mut()
                                                    .iter_mut(),
                                                grad.iter(),
                                                vel.iter_mut())) {
                        let prev = *v;
                        *v = momentum * *v + learning_rate * g;
                        *w -= momentum * prev + (1.0 + momentum) * *v;
                    }
                }
            }
            OptimizerKind::AdaGrad { learning_rate } => {
                let accum = self.state.square_avg_mut();
                for (layer, grad, acc) in multizip((layers.iter_mut(),
                                                    gradients.iter(),
                                                    accum.iter_mut())) {
                    for (w, &g, s) in multizip((layer.weights_mut()
                                                    .iter_mut(),
                                                grad.iter(),
                                                acc.iter_mut())) {
                        *s += g * g;
                        *w -= learning_rate * g / (*s + EPSILON).sqrt();
                    }
                }
            }
            OptimizerKind::AdaDelta { decay } => {
                let (grad_avg, update_avg) = self.state.delta_avg_mut();
                for (layer, grad, ga, ua) in multizip((layers.iter_mut(),
                                                       gradients.iter(),
                                                       grad_avg.iter_mut(),
                                                       update_avg
                                                           .iter_mut())) {
                    for (w, &g, eg, eu) in multizip((layer.weights_mut()
                                                         .iter_mut(),
                                                     grad.iter(),
                                                     ga.iter_mut(),
                                                     ua.iter_mut())) {
                        *eg = decay * *eg + (1.0 - decay) * g * g;
                        let delta = -((*eu + EPSILON).sqrt() /
                                      (*eg + EPSILON).sqrt()) *
                                    g;
                        *eu = decay * *eu + (1.0 - decay) * delta * delta;
                        *w += delta;
                    }
                }
            }
            OptimizerKind::RmsProp { learning_rate, decay } => {
                let accum = self.state.square_avg_mut();
                for (layer, grad, acc) in multizip((layers.iter_mut(),
                                                    gradients.iter(),
                                                    accum.iter_mut())) {
                    for (w, &g, s) in multizip((layer.weights_mut()
                                                    .iter_mut(),
                                                grad.iter(),
                                                acc.iter_mut())) {
                        *s = decay * *s + (1.0 - decay) * g * g;
                        *w -= learning_rate * g / (*s + EPSILON).sqrt();
                    }
                }
            }
            OptimizerKind::Adam { learning_rate, beta1, beta2 } => {
                let (first, second, step) = self.state.moments_mut();
                *step += 1;
                let bias1 = 1.0 - beta1.powi(*step as i32);
                let bias2 = 1.0 - beta2.powi(*step as i32);
                for (layer, grad, ms, vs) in multizip((layers.iter_mut(),
                                                       gradients.iter(),
                                                       first.iter_mut(),
                                                       second.iter_mut())) {
                    for (w, &g, m, v) in multizip((layer.weights_mut()
                                                       .iter_mut(),
                                                   grad.iter(),
                                                   ms.iter_mut(),
                                                   vs.iter_mut())) {
                        *m = beta1 * *m + (1.0 - beta1) * g;
                        *v = beta2 * *v + (1.0 - beta2) * g * g;
                        let m_hat = *m / bias1;
                        let v_hat = *v / bias2;
                        *w -= learning_rate * m_hat /
                              (v_hat.sqrt() + EPSILON);
                    }
                }
            }
            OptimizerKind::Nadam { learning_rate, beta1, beta2 } => {
                let (first, second, step) = self.state.moments_mut();
                *step += 1;
                let bias1 = 1.0 - beta1.powi(*step as i32);
                let bias2 = 1.0 - beta2.powi(*step as i32);
                for (layer, grad, ms, vs) in multizip((layers.iter_mut(),
                                                       gradients.iter(),
                                                       first.iter_mut(),
                                                       second.iter_mut())) {
                    for (w, &g, m, v) in multizip((layer.weights_mut()
                                                       .iter_mut(),
                                                   grad.iter(),
                                                   ms.iter_mut(),
                                                   vs.iter_mut())) {
                        *m = beta1 * *m + (1.0 - beta1) * g;
                        *v = beta2 * *v + (1.0 - beta2) * g * g;
                        let m_hat = *m / bias1;
                        let v_hat = *v / bias2;
                        // Lookahead: blend the corrected momentum with the
                        // current gradient.
                        let lookahead = beta1 * m_hat +
                                        (1.0 - beta1) * g / bias1;
                        *w -= learning_rate * lookahead /
                              (v_hat.sqrt() + EPSILON);
                    }
                }
            }
        }
    }
}
