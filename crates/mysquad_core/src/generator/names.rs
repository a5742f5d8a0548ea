//! Name generation for generated players.

use rand::seq::SliceRandom;
use rand::RngCore;

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven", "Andrew", "Kenneth",
    "Joshua", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy", "Jason", "Jeffrey",
    "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin",
    "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Frank", "Alexander", "Raymond",
    "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

/// Supplies display names for generated players.
pub trait NameGenerator {
    fn full_name(&mut self, rng: &mut dyn RngCore) -> String;
}

/// "First Last" drawn from built-in lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNames;

impl NameGenerator for RandomNames {
    fn full_name(&mut self, rng: &mut dyn RngCore) -> String {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("John");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
        format!("{} {}", first, last)
    }
}

/// Numbered names ("Player 1", "Player 2", ...) for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct SequentialNames {
    prefix: String,
    next: usize,
}

impl SequentialNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0 }
    }
}

impl NameGenerator for SequentialNames {
    fn full_name(&mut self, _rng: &mut dyn RngCore) -> String {
        self.next += 1;
        format!("{} {}", self.prefix, self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_names_have_two_parts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let name = RandomNames.full_name(&mut rng);

        assert_eq!(name.split(' ').count(), 2);
    }

    #[test]
    fn test_random_names_are_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);

        assert_eq!(RandomNames.full_name(&mut a), RandomNames.full_name(&mut b));
    }

    #[test]
    fn test_sequential_names() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut names = SequentialNames::new("Player");

        assert_eq!(names.full_name(&mut rng), "Player 1");
        assert_eq!(names.full_name(&mut rng), "Player 2");
    }
}
