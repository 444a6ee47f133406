use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    config::GridConfig,
    heading::Heading,
    model::{GridModel, Position},
};

/// Per-tick update logic and input arbitration.
///
/// The engine owns the random source used for food placement so tests can
/// seed it; all state lives in the [`GridModel`] passed to each call. The
/// caller is responsible for serializing calls: at most one of `step` or
/// `set_heading` may be active at a time.
pub struct SimulationEngine {
    config: GridConfig,
    rng: StdRng,
}

impl SimulationEngine {
    /// Create an engine with an entropy-seeded random source
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed, for deterministic runs
    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Start a fresh game: head at `start`, empty body, heading right,
    /// food placed on a free cell
    pub fn initialize(&mut self, start: Position) -> GridModel {
        let mut model = GridModel::new(
            start,
            start, // placeholder, replaced below
            self.config.grid_width(),
            self.config.grid_height(),
        );
        model.food = self.place_food(&model);
        model
    }

    /// Apply a requested heading change.
    ///
    /// Silently ignored when the request reverses the current heading
    /// (instant self-collision) or matches it. Called between ticks; if
    /// called several times before the next step, the last accepted value
    /// wins.
    pub fn set_heading(&self, model: &mut GridModel, requested: Heading) {
        if model.heading.is_reverse_of(requested) {
            return;
        }
        model.heading = requested;
    }

    /// Advance the simulation by one tick.
    ///
    /// No-op once the model is terminal, so a scheduler may keep firing
    /// after game over without harm.
    ///
    /// The update order is fixed: food check at the pre-move head, body
    /// shift tail-first, head advance, self-collision against the shifted
    /// body, boundary check. Checking food before the head advances means
    /// consumption registers one tick after the head reaches the food cell;
    /// that ordering is kept deliberately to match the original game's
    /// observable behavior.
    pub fn step(&mut self, model: &mut GridModel) {
        if model.terminal {
            return;
        }

        // Grow if the head sits on the food cell. The new tail segment is
        // appended before the shift, so the shift below moves it onto the
        // old tail's cell.
        if model.head == model.food {
            let eaten = model.food;
            model.body.push(eaten);
            model.food = self.place_food(model);
        }

        // Shift-register motion: each segment takes its predecessor's
        // position, processed tail toward head
        for i in (0..model.body.len()).rev() {
            model.body[i] = if i == 0 {
                model.head
            } else {
                model.body[i - 1]
            };
        }

        // Head advances exactly one cell
        model.head = model.head.moved_in(model.heading);

        // Self-collision is judged against the body as it stands after the
        // shift
        if model.body.contains(&model.head) {
            model.terminal = true;
        }

        if !model.is_in_bounds(model.head) {
            model.terminal = true;
        }
    }

    /// Draw uniform random cells until one free of the snake is found
    fn place_food(&mut self, model: &GridModel) -> Position {
        loop {
            let x = self.rng.gen_range(0..model.grid_width()) as i32;
            let y = self.rng.gen_range(0..model.grid_height()) as i32;
            let pos = Position::new(x, y);

            if !model.is_occupied_by_snake(pos) {
                return pos;
            }
        }
    }
}
