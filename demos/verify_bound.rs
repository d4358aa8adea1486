//! Run seeded trial batches of the submultiplicative bound

use ndarray::array;
use opnorm::{check_submultiplicative, run_normal_trials, TrialConfig};

fn main() {
    println!("Submultiplicative Bound Verification\n");
    println!("Checking norm_1(A·x) <= norm_1(A) * norm_1(x) on standard-normal draws\n");

    let config = TrialConfig::default();
    let report = run_normal_trials(&config).unwrap();

    println!(
        "{} trials on {}x{} operands (seed {})\n",
        config.trials, config.dim, config.dim, config.seed
    );
    for record in &report.records {
        let status = if record.check.holds() { "HOLDS" } else { "VIOLATED" };
        println!(
            "trial {:>2}: lhs = {:>8.3}  rhs = {:>8.3}  slack = {:>8.3}  {}",
            record.trial,
            record.check.lhs,
            record.check.rhs,
            record.check.slack(),
            status
        );
    }

    println!(
        "\nAll trials hold: {}  (min slack {:.3})",
        report.all_hold(),
        report.min_slack().unwrap()
    );

    // The row-sum reduction is not submultiplicative for every operand pair
    let a = array![[1.0, 0.0], [1.0, 0.0]];
    let x = array![1.0, 0.0];
    let check = check_submultiplicative(&a, &x).unwrap();
    println!(
        "\nAdversarial pair: lhs = {}, rhs = {}, holds = {}",
        check.lhs,
        check.rhs,
        check.holds()
    );
}
