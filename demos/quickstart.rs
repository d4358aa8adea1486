//! Quickstart example showing 1-norm evaluation and rank dispatch

use ndarray::{array, ArrayD, IxDyn};
use opnorm::{matrix_norm_1, norm_1, vector_norm_1};

fn main() {
    println!("opnorm Quickstart Demo\n");

    // Vector: sum of entry magnitudes
    let x = array![1.0, -2.0, 3.0];
    println!("norm_1([1, -2, 3])       = {}", vector_norm_1(&x));

    // Matrix: maximum absolute row sum
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    println!("norm_1([[1, 2], [3, 4]]) = {}", matrix_norm_1(&a));
    println!("norm_1 of the transpose  = {}", matrix_norm_1(&a.t().to_owned()));

    // The dynamic-rank entry point dispatches on ndim
    let dyn_x = x.into_dyn();
    println!("\nRank-dispatched result: {}", norm_1(&dyn_x).unwrap());

    // Anything but rank 1 or 2 is rejected
    let cube = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 2]));
    match norm_1(&cube) {
        Ok(value) => println!("Unexpected: {}", value),
        Err(e) => println!("Rank-3 input rejected: {}", e),
    }
}
