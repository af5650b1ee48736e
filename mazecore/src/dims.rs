use std::ops::{Add, AddAssign, Sub, SubAssign};

use paste::paste;

/// Position or size on the grid, `x` grows east and `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }

    /// Manhattan length of the vector.
    pub fn abs_sum(&self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn product(&self) -> i32 {
        self.0 * self.1
    }

    pub fn all_positive(&self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Iterates all positions in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

impl From<(i32, i32)> for Dims {
    fn from((x, y): (i32, i32)) -> Self {
        Dims(x, y)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(dims: Dims) -> Self {
        (dims.0, dims.1)
    }
}

macro_rules! impl_op {
    ($trait:ident, $op:ident) => {
        impl $trait for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: Dims) -> Dims {
                Dims(self.0.$op(other.0), self.1.$op(other.1))
            }
        }

        paste! {
            impl [<$trait Assign>] for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Dims) {
                    *self = self.$op(other);
                }
            }
        }
    };
}

impl_op!(Add, add);
impl_op!(Sub, sub);

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn ops() {
        let mut a = Dims(3, -2);
        assert_eq!(a + Dims(1, 1), Dims(4, -1));
        assert_eq!(a - Dims(4, -4), Dims(-1, 2));

        a += Dims(-3, 2);
        assert_eq!(a, Dims::ZERO);
        a -= Dims(1, 2);
        assert_eq!(a, Dims(-1, -2));
        assert_eq!(a.abs_sum(), 3);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(all, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);

        assert_eq!(Dims::iter_fill(Dims::ZERO, Dims(0, 5)).count(), 0);
    }
}
