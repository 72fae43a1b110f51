use crate::array::ArrayModel;
use crate::sort::{Algorithm, Direction, Highlight, StepGenerator};

/// One in-progress sort run. Dropping it mid-way leaves the array in
/// whatever partially sorted state it reached.
pub struct Session {
    algorithm: Algorithm,
    direction: Direction,
    generator: Box<dyn StepGenerator>,
    steps: usize,
}

impl Session {
    pub fn start(algorithm: Algorithm, direction: Direction) -> Self {
        Session {
            algorithm,
            direction,
            generator: algorithm.generator(direction),
            steps: 0,
        }
    }

    /// Pull one step; `None` once the algorithm has finished.
    pub fn advance(&mut self, array: &mut ArrayModel) -> Option<Highlight> {
        let h = self.generator.step(array)?;
        self.steps += 1;
        Some(h)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("algorithm", &self.algorithm)
            .field("direction", &self.direction)
            .field("steps", &self.steps)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Bounds;

    #[test]
    fn counts_steps_until_exhausted() {
        let mut m = ArrayModel::new(
            vec![5, 3, 8, 1],
            Bounds {
                width: 40,
                height: 10,
            },
        );
        let mut s = Session::start(Algorithm::Bubble, Direction::Ascending);
        while s.advance(&mut m).is_some() {}
        assert_eq!(s.steps(), 4);
        assert_eq!(s.algorithm(), Algorithm::Bubble);
        assert_eq!(s.direction(), Direction::Ascending);
        assert!(s.advance(&mut m).is_none());
        assert_eq!(s.steps(), 4);
    }
}
