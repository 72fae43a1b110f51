// Array model: the values being sorted plus the display metrics derived from them.

use rand::Rng;

/// Drawable region for the bars, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ArrayModel {
    values: Vec<i64>,
    min_value: i64,
    max_value: i64,
    bar_width: usize,
    // rows per unit of (value - min_value)
    height_scale: f64,
    bounds: Bounds,
}

impl ArrayModel {
    pub fn new(values: Vec<i64>, bounds: Bounds) -> Self {
        let mut m = ArrayModel {
            bounds,
            ..ArrayModel::default()
        };
        m.replace(values);
        m
    }

    /// Install a new sequence and recompute min/max and bar geometry.
    ///
    /// Callers guarantee `values` is non-empty; an empty list is tolerated
    /// with min = max = 0.
    pub fn replace(&mut self, values: Vec<i64>) {
        self.min_value = values.iter().copied().min().unwrap_or(0);
        self.max_value = values.iter().copied().max().unwrap_or(0);
        self.values = values;
        self.recompute_geometry();
    }

    /// Change the drawable region without touching the values.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.recompute_geometry();
    }

    fn recompute_geometry(&mut self) {
        let len = self.values.len().max(1);
        self.bar_width = (self.bounds.width / len).max(1);
        // abs_diff: the span of i64::MIN..=i64::MAX does not fit in an i64
        let span = self.max_value.abs_diff(self.min_value);
        // uniform arrays have no span; every bar is zero rows tall either way
        self.height_scale = if span > 0 {
            self.bounds.height as f64 / span as f64
        } else {
            self.bounds.height.max(1) as f64
        };
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Shift the elements between `to` and `from` one slot towards `from`
    /// and write `value` at `to`.
    pub fn shift_insert(&mut self, from: usize, to: usize, value: i64) {
        if to < from {
            self.values[to..=from].rotate_right(1);
        } else if to > from {
            self.values[from..=to].rotate_left(1);
        }
        self.values[to] = value;
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn get(&self, i: usize) -> i64 {
        self.values[i]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Height of bar `i` in rows, relative to the minimum value.
    pub fn bar_height(&self, i: usize) -> f64 {
        self.values[i].abs_diff(self.min_value) as f64 * self.height_scale
    }
}

/// Generate `len` values drawn uniformly from `min..=max`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, min: i64, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(min..=max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> Bounds {
        Bounds {
            width: 76,
            height: 20,
        }
    }

    #[test]
    fn replace_recomputes_min_max_and_geometry() {
        let mut m = ArrayModel::new(vec![5, 3, 8, 1], bounds());
        assert_eq!(m.min_value(), 1);
        assert_eq!(m.max_value(), 8);
        assert_eq!(m.bar_width(), 19);
        assert!((m.height_scale() - 20.0 / 7.0).abs() < 1e-9);

        m.replace(vec![10, 30]);
        assert_eq!(m.min_value(), 10);
        assert_eq!(m.max_value(), 30);
        assert_eq!(m.bar_width(), 38);
        assert!((m.height_scale() - 1.0).abs() < 1e-9);
        assert_eq!(m.bar_height(0), 0.0);
        assert!((m.bar_height(1) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_array_uses_fallback_scale() {
        let m = ArrayModel::new(vec![7, 7, 7], bounds());
        assert_eq!(m.min_value(), m.max_value());
        assert!(m.height_scale() > 0.0);
        assert!(m.height_scale().is_finite());
        assert_eq!(m.bar_height(1), 0.0);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let mut m = ArrayModel::new(vec![i64::MAX, i64::MIN], bounds());
        assert_eq!(m.min_value(), i64::MIN);
        assert_eq!(m.max_value(), i64::MAX);
        assert!(m.height_scale() > 0.0 && m.height_scale().is_finite());
        assert_eq!(m.bar_height(1), 0.0);
        assert!((m.bar_height(0) - 20.0).abs() < 1e-6);

        m.swap(0, 1);
        m.set_bounds(Bounds {
            width: 10,
            height: 5,
        });
        assert!((m.bar_height(1) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn bar_width_never_drops_to_zero() {
        let m = ArrayModel::new(
            (0..200).collect(),
            Bounds {
                width: 40,
                height: 10,
            },
        );
        assert_eq!(m.bar_width(), 1);
    }

    #[test]
    fn set_bounds_keeps_values() {
        let mut m = ArrayModel::new(vec![2, 4], bounds());
        m.set_bounds(Bounds {
            width: 10,
            height: 4,
        });
        assert_eq!(m.values(), &[2, 4]);
        assert_eq!(m.bar_width(), 5);
        assert!((m.height_scale() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn swap_and_shift_insert() {
        let mut m = ArrayModel::new(vec![1, 2, 3, 4, 5], bounds());
        m.swap(0, 4);
        assert_eq!(m.values(), &[5, 2, 3, 4, 1]);

        // move the value at 3 to the front, shifting 0..3 right
        let v = m.get(3);
        m.shift_insert(3, 0, v);
        assert_eq!(m.values(), &[4, 5, 2, 3, 1]);

        // and back towards the end
        let v = m.get(0);
        m.shift_insert(0, 3, v);
        assert_eq!(m.values(), &[5, 2, 3, 4, 1]);

        // same slot just writes
        m.shift_insert(2, 2, 9);
        assert_eq!(m.values(), &[5, 2, 9, 4, 1]);
    }

    #[test]
    fn empty_replace_does_not_panic() {
        let m = ArrayModel::new(vec![], bounds());
        assert!(m.is_empty());
        assert_eq!(m.min_value(), 0);
        assert_eq!(m.max_value(), 0);
    }

    #[test]
    fn random_values_respect_bounds_and_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs = random_values(&mut a, 50, 0, 100);
        let ys = random_values(&mut b, 50, 0, 100);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| (0..=100).contains(v)));
    }
}
