/// One of the four axis directions a peg can jump along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    North,
    East,
    West,
}

impl Direction {
    /// All directions, in candidate generation order.
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    /// Unit (row, column) offset. Rows grow southwards, columns eastwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Get direction name for display
    pub fn name(self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::North => "north",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::South,
                Direction::North,
                Direction::East,
                Direction::West
            ]
        );
    }

    #[test]
    fn test_deltas_are_unit_axis_vectors() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1, "{} is not a unit step", dir.name());
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
