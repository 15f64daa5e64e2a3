//! Integration tests for bootdiff
//!
//! Exercise the loader, drivers, and report rendering end to end on the
//! placebo/drug example data.

use bootdiff_cli::{
    IntervalReport, PermutationReport, format_interval_human, format_permutation_human,
    parse_groups,
};
use bootdiff_stats::{CiConfig, compute_diff_ci, compute_permutation};
use rand::SeedableRng;
use rand::rngs::StdRng;

const EXAMPLE_INPUT: &str = "\
>placebo_vals
54 51 58 44 55 52 42 47 58 46
>drug_vals
54 73 53 70 73 68 52 65 65
";

#[test]
fn test_observed_difference_is_exact() {
    let groups = parse_groups(EXAMPLE_INPUT).unwrap();
    let config = CiConfig {
        num_resamples: 1_000,
        ..Default::default()
    };
    let result = compute_diff_ci(
        &groups[0].values,
        &groups[1].values,
        &config,
        &mut StdRng::seed_from_u64(17),
    )
    .unwrap();

    let sum_a: f64 = groups[0].values.iter().sum();
    let sum_b: f64 = groups[1].values.iter().sum();
    assert_eq!(result.observed, sum_b / 9.0 - sum_a / 10.0);
    assert!((result.observed - 12.97).abs() < 0.01);
}

#[test]
fn test_repeated_runs_with_same_seed_are_identical() {
    let groups = parse_groups(EXAMPLE_INPUT).unwrap();
    let config = CiConfig::default();

    let run = || {
        compute_diff_ci(
            &groups[0].values,
            &groups[1].values,
            &config,
            &mut StdRng::seed_from_u64(2024),
        )
        .unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first.observed, second.observed);
    assert_eq!(first.interval.lower, second.interval.lower);
    assert_eq!(first.interval.upper, second.interval.upper);
    assert_eq!(first.num_below_observed, second.num_below_observed);
}

#[test]
fn test_bound_estimates_converge_as_resamples_grow() {
    let groups = parse_groups(EXAMPLE_INPUT).unwrap();

    let run = |num_resamples: usize, seed: u64| {
        let config = CiConfig {
            num_resamples,
            ..Default::default()
        };
        compute_diff_ci(
            &groups[0].values,
            &groups[1].values,
            &config,
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    };

    let small = run(2_000, 1);
    let large = run(20_000, 2);

    // Independent seeds and a tenfold resample increase should agree on
    // the bounds to within the quantile sampling noise of this data set.
    assert!((small.interval.lower - large.interval.lower).abs() < 2.0);
    assert!((small.interval.upper - large.interval.upper).abs() < 2.0);
}

#[test]
fn test_interval_report_renders_both_formats() {
    let groups = parse_groups(EXAMPLE_INPUT).unwrap();
    let config = CiConfig::default();
    let result = compute_diff_ci(
        &groups[0].values,
        &groups[1].values,
        &config,
        &mut StdRng::seed_from_u64(5),
    )
    .unwrap();
    let report = IntervalReport::new(&groups[0], &groups[1], &config, &result);

    let human = format_interval_human(&report);
    assert!(human.starts_with("Observed difference between the means: 12.97\n"));
    assert!(human.contains("We have 90% confidence"));

    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string_pretty(&report).unwrap()).unwrap();
    assert_eq!(json["group_a"], "placebo_vals");
    assert_eq!(json["group_b"], "drug_vals");
    assert_eq!(json["num_resamples"], 10_000);
    assert!(json["lower"].as_f64().unwrap() <= json["upper"].as_f64().unwrap());
}

#[test]
fn test_permutation_end_to_end() {
    let groups = parse_groups(EXAMPLE_INPUT).unwrap();

    let run = || {
        compute_permutation(
            &groups[0].values,
            &groups[1].values,
            10_000,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap()
    };
    let first = run();
    let second = run();

    // Deterministic under a fixed seed, and clearly significant for this
    // well-separated data.
    assert_eq!(first.num_as_extreme, second.num_as_extreme);
    assert!(first.p_value < 0.05);
    assert!((0.0..=1.0).contains(&first.p_value));

    let report = PermutationReport::new(&groups[0], &groups[1], &first);
    let human = format_permutation_human(&report);
    assert!(human.starts_with("Observed difference of two means: 12.97\n"));
    assert!(human.contains(&format!("{} out of 10000 experiments", first.num_as_extreme)));
}

#[test]
fn test_invalid_input_fails_before_any_computation() {
    assert!(parse_groups(">only_one\n1 2 3\n").is_err());
    assert!(parse_groups(">a\n1 nope\n>b\n2\n").is_err());
    assert!(parse_groups(">a\n\n>b\n2\n").is_err());
}
