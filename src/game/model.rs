use super::heading::Heading;

/// A position on the game grid, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one step away in a heading
    pub fn moved_in(&self, heading: Heading) -> Self {
        let (vx, vy) = heading.velocity();
        self.moved_by(vx, vy)
    }
}

/// Complete simulation state.
///
/// Pure data: every field is mutated only by the engine. Collaborators
/// (renderer, input layer) read through the snapshot accessors and never
/// write. The head is held apart from the body, so a fresh snake has an
/// empty body and a score of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    pub(super) head: Position,
    /// Trailing segments, ordered head-first: segment i follows segment i-1
    pub(super) body: Vec<Position>,
    pub(super) food: Position,
    pub(super) heading: Heading,
    pub(super) terminal: bool,
    pub(super) grid_width: u32,
    pub(super) grid_height: u32,
}

impl GridModel {
    pub(super) fn new(head: Position, food: Position, grid_width: u32, grid_height: u32) -> Self {
        Self {
            head,
            body: Vec::new(),
            food,
            heading: Heading::Right,
            terminal: false,
            grid_width,
            grid_height,
        }
    }

    /// Head cell
    pub fn head(&self) -> Position {
        self.head
    }

    /// Trailing body segments, head-first order (head itself excluded)
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Current food cell
    pub fn food(&self) -> Position {
        self.food
    }

    /// Current direction of travel
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// True once the game has ended; no later step changes the model
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Score is the number of food items eaten, which equals body length
    pub fn score(&self) -> usize {
        self.body.len()
    }

    /// Grid width in cells
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Grid height in cells
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Check if a position lies within [0, width) x [0, height)
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is covered by the snake, head included
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        pos == self.head || self.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in(Heading::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in(Heading::Down), Position::new(5, 6));
    }

    #[test]
    fn test_fresh_model() {
        let model = GridModel::new(Position::new(5, 5), Position::new(10, 10), 24, 24);
        assert_eq!(model.head(), Position::new(5, 5));
        assert!(model.body().is_empty());
        assert_eq!(model.score(), 0);
        assert_eq!(model.heading(), Heading::Right);
        assert!(!model.is_terminal());
    }

    #[test]
    fn test_bounds_checking() {
        let model = GridModel::new(Position::new(5, 5), Position::new(10, 10), 20, 16);

        assert!(model.is_in_bounds(Position::new(0, 0)));
        assert!(model.is_in_bounds(Position::new(19, 15)));
        assert!(!model.is_in_bounds(Position::new(-1, 0)));
        assert!(!model.is_in_bounds(Position::new(20, 0)));
        assert!(!model.is_in_bounds(Position::new(0, 16)));
    }

    #[test]
    fn test_occupancy_includes_head() {
        let mut model = GridModel::new(Position::new(5, 5), Position::new(10, 10), 24, 24);
        model.body.push(Position::new(4, 5));

        assert!(model.is_occupied_by_snake(Position::new(5, 5)));
        assert!(model.is_occupied_by_snake(Position::new(4, 5)));
        assert!(!model.is_occupied_by_snake(Position::new(3, 5)));
    }
}
