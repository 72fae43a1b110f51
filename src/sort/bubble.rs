use crate::array::ArrayModel;
use crate::sort::{Direction, Highlight, StepGenerator};

/// Adjacent-pass bubble sort. Each pass leaves one more settled element at
/// the tail, so pass `i` only compares the first `n - 1 - i` pairs.
#[derive(Clone, Debug)]
pub struct BubbleSort {
    direction: Direction,
    pass: usize,
    j: usize,
    done: bool,
}

impl BubbleSort {
    pub fn new(direction: Direction) -> Self {
        BubbleSort {
            direction,
            pass: 0,
            j: 0,
            done: false,
        }
    }
}

impl StepGenerator for BubbleSort {
    fn step(&mut self, array: &mut ArrayModel) -> Option<Highlight> {
        if self.done {
            return None;
        }
        let n = array.len();
        loop {
            if self.pass + 1 >= n {
                self.done = true;
                return None;
            }
            if self.j + 1 + self.pass >= n {
                self.pass += 1;
                self.j = 0;
                continue;
            }
            let j = self.j;
            self.j += 1;
            if self.direction.out_of_order(array.get(j), array.get(j + 1)) {
                array.swap(j, j + 1);
                return Some(Highlight::pair(j, j + 1));
            }
        }
    }
}
