use super::*;
use crate::models::common::Location;
use crate::solver::search::{CustomerRemoval, DestroyResult};
use alns::utils::compare_floats;
use rand::seq::SliceRandom;

/// Removes customers located in a random rectangle of the customer bounding box. When the
/// zone has too few customers, the nearest ones to its center are taken.
#[derive(Default)]
pub struct ZoneRemoval {
    extension: NeighbourExtension,
}

impl ZoneRemoval {
    /// Creates a new instance of `ZoneRemoval`.
    pub fn new(extension: NeighbourExtension) -> Self {
        Self { extension }
    }
}

impl CustomerRemoval for ZoneRemoval {
    fn remove(&self, ctx: &SearchContext, solution: &Solution) -> DestroyResult {
        let instance = ctx.instance();
        let customers = solution.customers(instance).collect::<Vec<_>>();
        let count = get_removal_count(ctx, customers.len());

        if count == 0 {
            return DestroyResult::Customers { partial: solution.clone(), removed: vec![] };
        }

        let location = |idx: NodeIdx| instance.nodes()[idx].location;
        let (min, max) = customers.iter().map(|&idx| location(idx)).fold(
            (Location::new(Float::MAX, Float::MAX), Location::new(Float::MIN, Float::MIN)),
            |(min, max), loc| (Location::new(min.x.min(loc.x), min.y.min(loc.y)), Location::new(max.x.max(loc.x), max.y.max(loc.y))),
        );

        let (min_ratio, max_ratio) = ctx.config.zone_ratio;
        let sample_side = |from: Float, to: Float| {
            let ratio = if max_ratio > min_ratio { ctx.random.uniform_real(min_ratio, max_ratio) } else { min_ratio };
            let side = (to - from) * ratio;
            let start = from + ctx.random.uniform_real(0., 1.) * (to - from - side);
            (start, start + side)
        };
        let (left, right) = sample_side(min.x, max.x);
        let (bottom, top) = sample_side(min.y, max.y);
        let center = Location::new((left + right) / 2., (bottom + top) / 2.);

        let (mut inside, mut outside): (Vec<_>, Vec<_>) = customers.into_iter().partition(|&idx| {
            let loc = location(idx);
            loc.x >= left && loc.x <= right && loc.y >= bottom && loc.y <= top
        });

        inside.shuffle(&mut ctx.random.get_rng());
        outside.sort_by(|&a, &b| compare_floats(location(a).distance_to(&center), location(b).distance_to(&center)));

        let selected = inside.into_iter().chain(outside).take(count).collect();
        let removed = extend_with_neighbours(instance, solution, selected, count, self.extension);

        DestroyResult::Customers { partial: remove_customers(instance, solution, &removed), removed }
    }
}
