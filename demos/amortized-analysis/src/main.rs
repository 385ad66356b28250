//! Amortized and Competitive Analysis Demo
//!
//! Runs the classic MTF/IMTF comparison scenario: two fixed request
//! sequences, best- and worst-case search, repetition patterns, and the
//! competitive ratios between the two policies on the extreme workloads.
//!
//! Reads `analysis.toml` from the working directory when present, and
//! falls back to the built-in five-element scenario otherwise. Set
//! `RUST_LOG=mtflab_engine=debug` for per-access engine logs.

use mtflab::prelude::*;
use mtflab::{AccessError, Element};
use tracing_subscriber::EnvFilter;

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Back-to-front descent bouncing twice; for `[0,1,2,3,4]` this is the
/// classic `[4,3,2,1,0,1,2,3,4,3,2,1,0,1,2,3,4]` workload.
fn sawtooth(elements: &[Element]) -> Vec<Element> {
    if elements.len() < 2 {
        return elements.to_vec();
    }
    let down: Vec<Element> = elements.iter().rev().copied().collect();
    let up = &elements[1..];
    let mut seq = down.clone();
    seq.extend_from_slice(up);
    seq.extend_from_slice(&down[1..]);
    seq.extend_from_slice(up);
    seq
}

/// Runs one sequence with a printed per-step trace.
fn run_traced(
    policy: &dyn UpdatePolicy,
    initial: &ListState,
    requests: &[Element],
) -> Result<RunOutcome, AccessError> {
    println!("initial configuration: {initial}");
    let outcome = run_sequence_observed(policy, initial, requests, |record| {
        let status = if record.moved { "moved" } else { "kept" };
        println!(
            "step {:>2}: request {} | cost {} | {} | {}",
            record.step, record.request, record.cost, status, record.after
        );
    })?;
    println!("total access cost: {}\n", outcome.total_cost);
    Ok(outcome)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AnalysisConfig::load("analysis.toml").unwrap_or_default();
    let initial = config.initial_state()?;
    let search_length = config.search_length().unwrap_or(20);

    banner("MTF / IMTF - AMORTIZED AND COMPETITIVE ANALYSIS");
    println!();

    // 1-2. Fixed sequences under plain MTF.
    let fixed: Vec<(String, Vec<Element>)> = if config.sequences.is_empty() {
        vec![
            (
                "four cycles".to_string(),
                initial
                    .elements()
                    .iter()
                    .copied()
                    .cycle()
                    .take(initial.len() * 4)
                    .collect(),
            ),
            ("sawtooth".to_string(), sawtooth(initial.elements())),
        ]
    } else {
        config
            .sequences
            .iter()
            .map(|s| (s.name.clone(), s.requests.clone()))
            .collect()
    };

    let mut fixed_totals = Vec::new();
    for (name, requests) in &fixed {
        banner(&format!("MTF - sequence '{name}'"));
        let outcome = run_traced(&MoveToFront, &initial, requests)?;
        fixed_totals.push((name.clone(), outcome.total_cost));
    }

    // 3-4. Best and worst case over the request space.
    banner(&format!("BEST CASE - minimum cost ({search_length} requests)"));
    let best = find_extreme_sequence(&initial, search_length, Direction::Minimize)?;
    println!("best sequence:  {:?}", best.sequence);
    println!(
        "minimum cost:   {} ({})\n",
        best.total_cost,
        if best.exact { "exact" } else { "heuristic" }
    );

    banner(&format!("WORST CASE - maximum cost ({search_length} requests)"));
    let worst = find_extreme_sequence(&initial, search_length, Direction::Maximize)?;
    println!("worst sequence: {:?}", worst.sequence);
    println!(
        "maximum cost:   {} ({})\n",
        worst.total_cost,
        if worst.exact { "exact" } else { "heuristic" }
    );

    // 5. Repetition patterns.
    banner("REPETITION PATTERNS");
    let deep = initial
        .elements()
        .get(3)
        .copied()
        .unwrap_or(initial.elements()[initial.len() - 1]);
    let repeat_deep: Vec<Element> = vec![deep; 20];
    let rep = run_traced(&MoveToFront, &initial, &repeat_deep)?;
    println!(
        "after the first access, every request finds {deep} at the front,\n\
         so 20 repeats cost {} in total\n",
        rep.total_cost
    );

    // 6. IMTF on the extreme workloads.
    banner("IMTF on the best-case sequence");
    let imtf_best = run_traced(&ImprovedMoveToFront, &initial, &best.sequence)?;

    banner("IMTF on the worst-case sequence");
    let imtf_worst = run_traced(&ImprovedMoveToFront, &initial, &worst.sequence)?;

    // Optional seeded workload comparison.
    let workload_report = config.random_seed.map(|seed| {
        let requests = Workload::seeded(&initial, seed).uniform(search_length);
        let mtf = run_silent(&MoveToFront, &initial, &requests)?;
        let imtf = run_silent(&ImprovedMoveToFront, &initial, &requests)?;
        Ok::<_, AccessError>((seed, mtf, imtf))
    });

    // Summary with competitive ratios; ratio math stays out of the engines.
    banner("SUMMARY");
    for (name, total) in &fixed_totals {
        println!("MTF '{name}': {total}");
    }
    println!("best case  (MTF):  {}", best.total_cost);
    println!("worst case (MTF):  {}", worst.total_cost);
    println!("best case  (IMTF): {}", imtf_best.total_cost);
    println!("worst case (IMTF): {}", imtf_worst.total_cost);
    if let Some(report) = workload_report {
        let (seed, mtf, imtf) = report?;
        println!("uniform workload (seed {seed}): MTF {mtf} | IMTF {imtf}");
    }
    if let Some(ratio) = imtf_best.total_cost.ratio_to(best.total_cost) {
        println!("competitive ratio IMTF/MTF (best case):  {ratio:.2}");
    }
    if let Some(ratio) = imtf_worst.total_cost.ratio_to(worst.total_cost) {
        println!("competitive ratio IMTF/MTF (worst case): {ratio:.2}");
    }

    Ok(())
}
