//! Demo: searching an unsorted space of 16 items for index 13.
//! Demonstrates the derived optimal iteration count, the probability
//! distribution before and after amplification, and an explicitly
//! sub-optimal round count for comparison.

use groversim::{GroverError, IterationCount, MarkedSet, SearchSimulator};

fn main() -> Result<(), GroverError> {
    println!("--- Grover search demo: find item 13 among 2^4 = 16 ---");

    let marked_index = 13;
    let mut sim = SearchSimulator::new(4, MarkedSet::single(marked_index))?;

    let initial = sim.probabilities();
    println!(
        "Initial probability of item {}: {:.4} (uniform over {} items)",
        marked_index,
        initial[marked_index],
        sim.dimension()
    );

    // Optimal count for N = 16, M = 1 is floor(π/4 · sqrt(16)) = 3.
    println!("Derived optimal iterations: {}", sim.optimal_iterations());

    let result = sim.run(IterationCount::Optimal)?;
    println!("{}", result);
    println!(
        "Binary representation of measured index: |{:04b}>",
        result.result_index()
    );
    if result.result_index() == marked_index {
        println!("Found the marked item.");
    } else {
        println!("Did not find the marked item (non-optimal round count?)");
    }

    // Same search with a deliberately sub-optimal single round.
    println!("\n--- Same search, explicit single round ---");
    let sub_optimal = sim.run(IterationCount::Exact(1))?;
    println!(
        "Probability of item {} after 1 round: {:.4}",
        marked_index,
        sub_optimal.distribution()[marked_index]
    );

    // A pseudo-stochastic measurement on the final run's state.
    let final_run = sim.run(IterationCount::Optimal)?;
    println!(
        "\nSampled index from the amplified distribution: {} (argmax {})",
        sim.sample(),
        final_run.result_index()
    );

    Ok(())
}
