use super::*;
use crate::helpers::utils::random::FakeRandom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TestOperator {
    First,
    Second,
    Third,
}

fn create_pool() -> AdaptivePool<TestOperator> {
    AdaptivePool::new("test", [TestOperator::First, TestOperator::Second, TestOperator::Third])
}

#[test]
fn can_initialize_records() {
    let pool = create_pool();

    assert_eq!(pool.size(), 3);
    pool.iter().for_each(|(_, record)| assert_eq!(*record, OperatorRecord::default()));
    assert_eq!(pool.record(TestOperator::First).map(|record| record.weight), Some(1.));
}

#[test]
fn can_count_uses_on_select() {
    let mut pool = create_pool();
    let random = FakeRandom::new(vec![1, 1, 2], vec![]);

    assert_eq!(pool.select(&random), TestOperator::Second);
    assert_eq!(pool.select(&random), TestOperator::Second);
    assert_eq!(pool.select(&random), TestOperator::Third);

    assert_eq!(pool.record(TestOperator::First).unwrap().segment_uses, 0);
    assert_eq!(pool.record(TestOperator::Second).unwrap().segment_uses, 2);
    assert_eq!(pool.record(TestOperator::Third).unwrap().segment_uses, 1);
}

parameterized_test! {can_recalibrate_weight, (weight, reward, uses, rho, expected), {
    can_recalibrate_weight_impl(weight, reward, uses, rho, expected);
}}

can_recalibrate_weight! {
    case_01_no_uses: (1., 0., 0, 0.45, 1.),
    case_02_no_uses_keeps_weight: (2.5, 30., 0, 0.45, 2.5),
    case_03_single_use: (1., 30., 1, 0.45, 1. * 0.55 + 0.45 * 30.),
    case_04_many_uses: (2., 33., 3, 0.45, 2. * 0.55 + 0.45 * 11.),
    case_05_no_reward: (4., 0., 4, 0.5, 2.),
}

fn can_recalibrate_weight_impl(weight: Float, reward: Float, uses: usize, rho: Float, expected: Float) {
    let mut record = OperatorRecord { weight, segment_reward: reward, segment_uses: uses };

    record.recalibrate(rho);

    assert_eq!(record.weight, expected);
    assert_eq!(record.segment_reward, 0.);
    assert_eq!(record.segment_uses, 0);
}

#[test]
fn can_reward_and_recalibrate_pool() {
    let mut pool = create_pool();
    let random = FakeRandom::new(vec![0, 0, 2], vec![]);
    (0..3).for_each(|_| {
        pool.select(&random);
    });
    pool.reward(TestOperator::First, 30.);
    pool.reward(TestOperator::First, 13.);

    pool.recalibrate(0.45);

    assert_eq!(pool.record(TestOperator::First).unwrap().weight, 0.55 + 0.45 * (43. / 2.));
    assert_eq!(pool.record(TestOperator::Second).unwrap().weight, 1.);
    assert_eq!(pool.record(TestOperator::Third).unwrap().weight, 0.55);
    pool.iter().for_each(|(_, record)| {
        assert_eq!(record.segment_uses, 0);
        assert_eq!(record.segment_reward, 0.);
    });
}

#[test]
fn can_prefer_heavier_operators() {
    let mut pool = create_pool();
    let random = crate::utils::DefaultRandom::new_repeatable(1);
    pool.operators[2].1.weight = 0.;

    let selected = (0..200).map(|_| pool.select(&random)).collect::<Vec<_>>();

    assert!(selected.iter().all(|key| *key != TestOperator::Third));
}

#[test]
fn can_format_weights() {
    let pool = create_pool();

    assert_eq!(pool.to_string(), "test: [First=1.000,Second=1.000,Third=1.000]");
}
