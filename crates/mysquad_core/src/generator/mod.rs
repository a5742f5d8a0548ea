//! Squad generation
//!
//! Default shape is a 4-4-2 split into six buckets of an eleven-player unit:
//!
//! | bucket        | share |
//! |---------------|-------|
//! | GK            | 1/11  |
//! | CB            | 2/11  |
//! | RB + LB       | 2/11  |
//! | CM            | 2/11  |
//! | AM            | 2/11  |
//! | CF            | 2/11  |
//!
//! Every bucket rounds up, so a squad is never smaller than requested
//! (18 requested -> 22 generated).

pub mod names;

pub use names::{NameGenerator, RandomNames, SequentialNames};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::error::Result;
use crate::growth::GrowthConfig;
use crate::models::{Player, Position, Squad};

pub const AGE_RANGE: RangeInclusive<u8> = 16..=35;

/// Eleventh-shares per bucket. Full-backs share one bucket split across both flanks.
const GK_SHARE: usize = 1;
const CB_SHARE: usize = 2;
const FB_SHARE: usize = 2;
const CM_SHARE: usize = 2;
const AM_SHARE: usize = 2;
const CF_SHARE: usize = 2;
const UNIT: usize = 11;

fn ceil_div(numerator: usize, denominator: usize) -> usize {
    (numerator + denominator - 1) / denominator
}

/// Player counts per generated position, in generation order.
pub fn bucket_counts(target_count: usize) -> Vec<(Position, usize)> {
    // ceil((n * 2/11) / 2) == ceil(n / 11)
    let per_flank = ceil_div(target_count * FB_SHARE, UNIT * 2);

    vec![
        (Position::GK, ceil_div(target_count * GK_SHARE, UNIT)),
        (Position::CB, ceil_div(target_count * CB_SHARE, UNIT)),
        (Position::RB, per_flank),
        (Position::LB, per_flank),
        (Position::CM, ceil_div(target_count * CM_SHARE, UNIT)),
        (Position::AM, ceil_div(target_count * AM_SHARE, UNIT)),
        (Position::CF, ceil_div(target_count * CF_SHARE, UNIT)),
    ]
}

/// Size of the squad `generate(target_count)` produces.
pub fn generated_size(target_count: usize) -> usize {
    bucket_counts(target_count).iter().map(|(_, n)| n).sum()
}

/// Rating and potential draw ranges for a generated position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRanges {
    pub rating: RangeInclusive<i32>,
    pub potential: RangeInclusive<i32>,
}

impl AttributeRanges {
    /// `None` for positions the generator never produces.
    pub fn for_position(position: Position) -> Option<Self> {
        let (rating, potential) = match position {
            Position::GK => (50..=75, 60..=85),
            Position::CB => (50..=80, 60..=90),
            Position::RB | Position::LB => (50..=80, 60..=85),
            Position::CM | Position::AM => (50..=80, 60..=90),
            Position::CF => (50..=90, 60..=99),
            Position::SW
            | Position::RWB
            | Position::LWB
            | Position::DM
            | Position::RM
            | Position::LM
            | Position::SS
            | Position::RW
            | Position::LW => return None,
        };
        Some(Self { rating, potential })
    }
}

/// Seeded squad builder.
pub struct SquadGenerator<N: NameGenerator = RandomNames> {
    rng: ChaCha8Rng,
    names: N,
    config: GrowthConfig,
}

impl SquadGenerator<RandomNames> {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            names: RandomNames,
            config: GrowthConfig::default(),
        }
    }
}

impl Default for SquadGenerator<RandomNames> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NameGenerator> SquadGenerator<N> {
    pub fn with_names(seed: u64, names: N) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), names, config: GrowthConfig::default() }
    }

    pub fn with_growth_config(mut self, config: GrowthConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn growth_config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Shared random source, also used by setup code for non-squad draws.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Build a squad of at least `target_count` players.
    pub fn generate(&mut self, target_count: usize) -> Squad {
        let mut squad = Squad::new();

        for (position, count) in interleave_flanks(bucket_counts(target_count)) {
            let Some(ranges) = AttributeRanges::for_position(position) else {
                continue;
            };
            for _ in 0..count {
                let player = self.generate_player(position, &ranges);
                squad.push(player);
            }
        }

        debug!(requested = target_count, generated = squad.len(), "squad generated");
        squad
    }

    fn generate_player(&mut self, position: Position, ranges: &AttributeRanges) -> Player {
        let name = self.names.full_name(&mut self.rng);
        let age = self.rng.gen_range(AGE_RANGE);
        let rating = self.rng.gen_range(ranges.rating.clone());
        let potential = self.rng.gen_range(ranges.potential.clone());

        Player::build(name, position, age, rating, potential, &self.config)
    }
}

/// Expand the flank buckets into alternating RB, LB entries.
fn interleave_flanks(buckets: Vec<(Position, usize)>) -> Vec<(Position, usize)> {
    let mut plan = Vec::with_capacity(buckets.len());
    let mut iter = buckets.into_iter().peekable();

    while let Some((position, count)) = iter.next() {
        if position == Position::RB {
            if let Some(&(Position::LB, left)) = iter.peek() {
                iter.next();
                for i in 0..count.max(left) {
                    if i < count {
                        plan.push((Position::RB, 1));
                    }
                    if i < left {
                        plan.push((Position::LB, 1));
                    }
                }
                continue;
            }
        }
        plan.push((position, count));
    }

    plan
}
