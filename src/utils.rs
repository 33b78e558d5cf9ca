use std::{
    fmt,
    ops::{Add, Sub},
};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative positions of the Moore neighbourhood, the center excluded.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(-1, 0),
    pos!(-1, 1),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
];

#[test]
fn test_offsets() {
    assert!(!NEIGHBOR_OFFSETS.contains(&pos!(0, 0)));
    for dx in -1..=1 {
        for dy in -1..=1 {
            if (dx, dy) != (0, 0) {
                assert!(NEIGHBOR_OFFSETS.contains(&pos!(dx, dy)));
            }
        }
    }
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(3, 4) + pos!(-1, 1), pos!(2, 5));
    assert_eq!(pos!(3, 4) - pos!(3, 4), pos!(0, 0));
    assert_eq!(pos!(-2, 7).to_string(), "(-2, 7)");
}
