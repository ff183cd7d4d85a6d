use super::*;

#[test]
fn can_return_weights() {
    let random = DefaultRandom::new_repeatable(42);
    let weights = &[100., 50., 20.];
    let experiments = 10000_usize;
    let total_sum = weights.iter().sum::<Float>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| {
        let idx = random.weighted(weights);
        *counter.get_mut(idx).unwrap() += 1;
    });

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as Float / experiments as Float;
        let expected_ratio = *weight / total_sum;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}

#[test]
fn can_skip_zero_weights() {
    let random = DefaultRandom::new_repeatable(7);

    (0..1000).for_each(|_| {
        assert_eq!(random.weighted(&[0., 2., 0.]), 1);
    });
}

#[test]
fn can_select_uniformly_when_all_weights_are_zero() {
    let random = DefaultRandom::new_repeatable(7);
    let mut counter = [0_usize; 2];

    (0..1000).for_each(|_| counter[random.weighted(&[0., 0.])] += 1);

    assert!(counter.iter().all(|&count| count > 300));
}

#[test]
fn can_reproduce_sequence_with_the_same_seed() {
    let sample = |seed: u64| {
        let random = DefaultRandom::new_repeatable(seed);
        (0..20).map(|_| random.uniform_int(0, 100)).collect::<Vec<_>>()
    };

    assert_eq!(sample(3), sample(3));
    assert_ne!(sample(3), sample(4));
}

#[test]
fn can_return_min_when_range_is_empty() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(1.5, 1.5), 1.5);
}

#[test]
fn can_sample_normal_distribution() {
    let sampler = DefaultDistributionSampler::new(Arc::new(DefaultRandom::new_repeatable(11)));
    let samples = (0..5000).map(|_| sampler.normal(10., 2.)).collect::<Vec<_>>();
    let mean = samples.iter().sum::<Float>() / samples.len() as Float;

    assert!((mean - 10.).abs() < 0.2);
    assert_eq!(sampler.normal(3., 0.), 3.);
}
