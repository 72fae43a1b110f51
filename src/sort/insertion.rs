use crate::array::ArrayModel;
use crate::sort::{Direction, Highlight, Mark, StepGenerator};

// Value being inserted and the slot it currently occupies.
#[derive(Clone, Copy, Debug)]
struct Carry {
    value: i64,
    pos: usize,
}

/// Insertion sort that moves the carried value one slot left per step.
#[derive(Clone, Debug)]
pub struct InsertionSort {
    direction: Direction,
    next: usize,
    carry: Option<Carry>,
    done: bool,
}

impl InsertionSort {
    pub fn new(direction: Direction) -> Self {
        InsertionSort {
            direction,
            next: 1,
            carry: None,
            done: false,
        }
    }
}

impl StepGenerator for InsertionSort {
    fn step(&mut self, array: &mut ArrayModel) -> Option<Highlight> {
        if self.done {
            return None;
        }
        loop {
            let carry = match self.carry {
                Some(c) => c,
                None => {
                    if self.next >= array.len() {
                        self.done = true;
                        return None;
                    }
                    let c = Carry {
                        value: array.get(self.next),
                        pos: self.next,
                    };
                    self.next += 1;
                    c
                }
            };

            if carry.pos == 0 || !self.direction.out_of_order(array.get(carry.pos - 1), carry.value) {
                self.carry = None;
                continue;
            }

            let to = carry.pos - 1;
            array.shift_insert(carry.pos, to, carry.value);
            self.carry = Some(Carry {
                value: carry.value,
                pos: to,
            });

            let mut h = Highlight::new();
            if to > 0 {
                h.mark(to - 1, Mark::Left);
            }
            h.mark(to, Mark::Right);
            return Some(h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Bounds;

    fn model(values: &[i64]) -> ArrayModel {
        ArrayModel::new(
            values.to_vec(),
            Bounds {
                width: 40,
                height: 10,
            },
        )
    }

    #[test]
    fn descending_1_2_3_takes_three_steps() {
        let mut m = model(&[1, 2, 3]);
        let mut g = InsertionSort::new(Direction::Descending);
        let mut snapshots = vec![];
        while g.step(&mut m).is_some() {
            snapshots.push(m.values().to_vec());
        }
        assert_eq!(snapshots, vec![vec![2, 1, 3], vec![2, 3, 1], vec![3, 2, 1]]);
        assert_eq!(m.values(), &[3, 2, 1]);
    }

    #[test]
    fn highlights_follow_the_carried_value() {
        let mut m = model(&[2, 3, 1]);
        let mut g = InsertionSort::new(Direction::Ascending);

        // 1 moves from slot 2 to slot 1
        let h = g.step(&mut m).expect("first shift");
        assert_eq!(m.values(), &[2, 1, 3]);
        assert_eq!(h.get(0), Some(Mark::Left));
        assert_eq!(h.get(1), Some(Mark::Right));

        // and on to slot 0, where there is no predecessor to mark
        let h = g.step(&mut m).expect("second shift");
        assert_eq!(m.values(), &[1, 2, 3]);
        assert_eq!(h.len(), 1);
        assert_eq!(h.get(0), Some(Mark::Right));

        assert!(g.step(&mut m).is_none());
        assert!(g.step(&mut m).is_none());
    }

    #[test]
    fn equal_values_do_not_move() {
        let mut m = model(&[4, 4, 4]);
        let mut g = InsertionSort::new(Direction::Ascending);
        assert!(g.step(&mut m).is_none());
        let mut g = InsertionSort::new(Direction::Descending);
        assert!(g.step(&mut m).is_none());
    }
}
