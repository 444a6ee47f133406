/// Direction of travel, one grid cell per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns true if switching from self to other would reverse the snake
    /// onto itself (180-degree turn)
    pub fn is_reverse_of(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// Unit velocity vector (vx, vy) in grid cells per tick
    pub fn velocity(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_detection() {
        assert!(Heading::Up.is_reverse_of(Heading::Down));
        assert!(Heading::Down.is_reverse_of(Heading::Up));
        assert!(Heading::Left.is_reverse_of(Heading::Right));
        assert!(Heading::Right.is_reverse_of(Heading::Left));

        assert!(!Heading::Up.is_reverse_of(Heading::Left));
        assert!(!Heading::Up.is_reverse_of(Heading::Up));
        assert!(!Heading::Right.is_reverse_of(Heading::Down));
    }

    #[test]
    fn test_velocity_vectors() {
        assert_eq!(Heading::Up.velocity(), (0, -1));
        assert_eq!(Heading::Down.velocity(), (0, 1));
        assert_eq!(Heading::Left.velocity(), (-1, 0));
        assert_eq!(Heading::Right.velocity(), (1, 0));
    }
}
