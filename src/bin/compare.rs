extern crate gradnet;
extern crate rand;

use gradnet::activation::Activation;
use gradnet::cost::Cost;
use gradnet::layer::WeightInit;
use gradnet::network::{Logging, Network, TrainOptions};
use gradnet::optimizer::OptimizerKind;

use rand::{SeedableRng, StdRng};

fn generate_data(num_samples: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut data = Vec::with_capacity(num_samples);
    let mut labels = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let x = 2.0 * (i as f64) / (num_samples as f64 - 1.0) - 1.0;
        data.push(vec![x]);
        labels.push(vec![(3.0 * x).sin()]);
    }
    (data, labels)
}

fn main() {
    let optimizers = [("sgd", OptimizerKind::Sgd { learning_rate: 0.1 }),
                      ("momentum",
                       OptimizerKind::Momentum {
                           learning_rate: 0.01,
                           momentum: 0.9,
                       }),
                      ("nesterov",
                       OptimizerKind::Nesterov {
                           learning_rate: 0.01,
                           momentum: 0.9,
                       }),
                      ("adagrad", OptimizerKind::AdaGrad { learning_rate: 0.1 }),
                      ("adadelta", OptimizerKind::AdaDelta { decay: 0.9 }),
                      ("rmsprop",
                       OptimizerKind::RmsProp {
                           learning_rate: 0.01,
                           decay: 0.9,
                       }),
                      ("adam",
                       OptimizerKind::Adam {
                           learning_rate: 0.01,
                           beta1: 0.9,
                           beta2: 0.999,
                       }),
                      ("nadam",
                       OptimizerKind::Nadam {
                           learning_rate: 0.01,
                           beta1: 0.9,
                           beta2: 0.999,
                       })];

    let (data, labels) = generate_data(50);
    println!("{:<10} {:>12} {:>12}", "optimizer", "first epoch", "last epoch");
    for &(name, kind) in optimizers.iter() {
        // The same seed for every run, so only the update rule differs.
        let mut rng: StdRng = SeedableRng::from_seed(&[7usize][..]);
        let mut network = Network::new(1,
                                       1,
                                       2,
                                       20,
                                       Activation::TanH,
                                       Cost::MeanSquared,
                                       WeightInit::Scaled,
                                       &mut rng)
            .unwrap();
        let options = TrainOptions::new(100, kind)
            .logging(Logging::Silent)
            .collect_costs();
        let costs = network.train(&data, &labels, &options, &mut rng)
            .unwrap()
            .unwrap();
        println!("{:<10} {:>12.6} {:>12.6}",
                 name,
                 costs[0],
                 costs[costs.len() - 1]);
    }
}
