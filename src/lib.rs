extern crate itertools;
extern crate rand;
#[macro_use]
extern crate serde_derive;

pub mod activation;
pub mod cost;
pub mod error;
pub mod layer;
pub mod matrix;
pub mod network;
pub mod optimizer;
