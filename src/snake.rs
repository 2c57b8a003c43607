use crate::grid::{Cell, GridModel};
use crate::heading::{Heading, Steering};

/// One cell-sized unit of the body and the heading it last moved with.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Cell,
    pub heading: Heading,
}

impl Segment {
    #[must_use]
    pub const fn new(position: Cell, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// Why the snake stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathCause {
    SelfCollision,
    OutOfBounds,
}

/// Result of a single movement tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    /// Head position after the tick, used for fruit consumption.
    pub head: Cell,
    pub death: Option<DeathCause>,
}

impl TickOutcome {
    #[must_use]
    pub fn is_dead(self) -> bool {
        self.death.is_some()
    }
}

/// Head-first chain of segments following the leader one cell per tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeBody {
    segments: Vec<Segment>,
    grid: GridModel,
    death: Option<DeathCause>,
}

impl SnakeBody {
    /// Number of segments a freshly spawned snake has.
    pub const INITIAL_LEN: usize = 3;

    /// Creates a three-segment snake with its head at the grid center.
    #[must_use]
    pub fn spawn(grid: GridModel, heading: Heading) -> Self {
        let mut snake = Self::from_segments(grid, vec![Segment::new(grid.center(), heading)]);
        for _ in 1..Self::INITIAL_LEN {
            snake.grow();
        }
        snake
    }

    /// Creates a snake from explicit segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(grid: GridModel, segments: Vec<Segment>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            segments,
            grid,
            death: None,
        }
    }

    /// Advances the whole body by one cell.
    ///
    /// A `requested` heading on the head's current axis is ignored and the
    /// head keeps its heading. Every other segment adopts the heading its
    /// forward neighbour held before this tick. Collisions are judged on
    /// the final positions only, so the head may enter the cell the tail
    /// is leaving. After death this is a no-op that repeats the death.
    pub fn move_toward(&mut self, requested: Heading) -> TickOutcome {
        if let Some(cause) = self.death {
            return TickOutcome {
                head: self.head(),
                death: Some(cause),
            };
        }

        let current = self.heading();
        let heading = Steering::of(current).resolve(current, requested);
        let cell_size = self.grid.cell_size();

        let leaders: Vec<Heading> = self.segments.iter().map(|segment| segment.heading).collect();
        for (segment, leader) in self.segments.iter_mut().skip(1).zip(leaders) {
            segment.heading = leader;
            segment.position = segment.position.offset(leader.delta(cell_size));
        }

        let head = &mut self.segments[0];
        head.heading = heading;
        head.position = head.position.offset(heading.delta(cell_size));

        self.death = self.detect_death();
        TickOutcome {
            head: self.head(),
            death: self.death,
        }
    }

    /// Appends one segment behind the tail, continuing the tail's heading.
    ///
    /// The new segment is not bounds-checked.
    pub fn grow(&mut self) {
        let last = *self
            .segments
            .last()
            .expect("snake body must always contain at least one segment");
        let (dx, dy) = last.heading.delta(self.grid.cell_size());

        self.segments.push(Segment::new(
            last.position.offset((-dx, -dy)),
            last.heading,
        ));
    }

    fn detect_death(&self) -> Option<DeathCause> {
        if self.head_overlaps_body() {
            return Some(DeathCause::SelfCollision);
        }
        if !self.grid.is_inside(self.head()) {
            return Some(DeathCause::OutOfBounds);
        }
        None
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(1)
            .any(|segment| segment.position == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.head_segment().position
    }

    /// Returns the heading the head last moved with.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.head_segment().heading
    }

    fn head_segment(&self) -> &Segment {
        self.segments
            .first()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|segment| segment.position == cell)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    #[must_use]
    pub fn death(&self) -> Option<DeathCause> {
        self.death
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::{DeathCause, Segment, SnakeBody};
    use crate::grid::{Cell, GridModel};
    use crate::heading::Heading;

    fn grid() -> GridModel {
        GridModel::try_new(600, 600, 10).expect("default grid should be valid")
    }

    fn positions(snake: &SnakeBody) -> Vec<Cell> {
        snake.segments().iter().map(|segment| segment.position).collect()
    }

    #[test]
    fn spawn_places_three_segments_behind_the_center() {
        let snake = SnakeBody::spawn(grid(), Heading::UP);

        assert_eq!(
            positions(&snake),
            vec![Cell::new(300, 300), Cell::new(300, 290), Cell::new(300, 280)]
        );
        assert!(snake.segments().iter().all(|s| s.heading == Heading::UP));
        assert!(snake.is_alive());
    }

    #[test]
    fn straight_move_shifts_every_segment_one_cell() {
        let mut snake = SnakeBody::spawn(grid(), Heading::UP);

        let outcome = snake.move_toward(Heading::UP);

        assert_eq!(outcome.head, Cell::new(300, 310));
        assert!(!outcome.is_dead());
        assert_eq!(
            positions(&snake),
            vec![Cell::new(300, 310), Cell::new(300, 300), Cell::new(300, 290)]
        );
    }

    #[test]
    fn turn_propagates_one_segment_per_tick() {
        let mut snake = SnakeBody::spawn(grid(), Heading::UP);

        snake.move_toward(Heading::RIGHT);
        assert_eq!(
            positions(&snake),
            vec![Cell::new(310, 300), Cell::new(300, 300), Cell::new(300, 290)]
        );
        assert_eq!(snake.segments()[1].heading, Heading::UP);

        snake.move_toward(Heading::RIGHT);
        assert_eq!(
            positions(&snake),
            vec![Cell::new(320, 300), Cell::new(310, 300), Cell::new(300, 300)]
        );
        assert_eq!(snake.segments()[1].heading, Heading::RIGHT);
        assert_eq!(snake.segments()[2].heading, Heading::UP);
    }

    #[test]
    fn reversal_request_keeps_current_heading() {
        let mut snake = SnakeBody::spawn(grid(), Heading::UP);

        let outcome = snake.move_toward(Heading::DOWN);

        assert_eq!(outcome.head, Cell::new(300, 310));
        assert_eq!(snake.heading(), Heading::UP);
        assert!(snake.is_alive());
    }

    #[test]
    fn grow_extrapolates_behind_the_tail_heading() {
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![
                Segment::new(Cell::new(100, 100), Heading::LEFT),
                Segment::new(Cell::new(110, 100), Heading::LEFT),
            ],
        );

        snake.grow();

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments()[2],
            Segment::new(Cell::new(120, 100), Heading::LEFT)
        );
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn from_segments_rejects_an_empty_body() {
        let _ = SnakeBody::from_segments(grid(), Vec::new());
    }

    #[test]
    fn grow_is_not_bounds_checked() {
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![Segment::new(Cell::new(0, 0), Heading::RIGHT)],
        );

        snake.grow();

        assert_eq!(snake.segments()[1].position, Cell::new(-10, 0));
        assert!(snake.is_alive());
    }

    #[test]
    fn head_may_enter_the_cell_the_tail_vacates() {
        // 2x2 loop: the head turns right into the cell the tail is leaving.
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![
                Segment::new(Cell::new(10, 10), Heading::DOWN),
                Segment::new(Cell::new(10, 20), Heading::LEFT),
                Segment::new(Cell::new(20, 20), Heading::UP),
                Segment::new(Cell::new(20, 10), Heading::UP),
            ],
        );

        let outcome = snake.move_toward(Heading::RIGHT);

        assert_eq!(outcome.head, Cell::new(20, 10));
        assert!(!outcome.is_dead());
        assert_eq!(
            positions(&snake),
            vec![
                Cell::new(20, 10),
                Cell::new(10, 10),
                Cell::new(10, 20),
                Cell::new(20, 20)
            ]
        );
    }

    #[test]
    fn head_hitting_its_body_dies() {
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![
                Segment::new(Cell::new(10, 10), Heading::DOWN),
                Segment::new(Cell::new(10, 20), Heading::LEFT),
                Segment::new(Cell::new(20, 20), Heading::UP),
                Segment::new(Cell::new(20, 10), Heading::UP),
                Segment::new(Cell::new(20, 0), Heading::UP),
            ],
        );

        let outcome = snake.move_toward(Heading::RIGHT);

        assert_eq!(outcome.death, Some(DeathCause::SelfCollision));
        assert!(!snake.is_alive());
    }

    #[test]
    fn leaving_the_grid_dies() {
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![
                Segment::new(Cell::new(590, 300), Heading::RIGHT),
                Segment::new(Cell::new(580, 300), Heading::RIGHT),
            ],
        );

        let outcome = snake.move_toward(Heading::RIGHT);

        assert_eq!(outcome.head, Cell::new(600, 300));
        assert_eq!(outcome.death, Some(DeathCause::OutOfBounds));
    }

    #[test]
    fn moves_after_death_change_nothing() {
        let mut snake = SnakeBody::from_segments(
            grid(),
            vec![
                Segment::new(Cell::new(300, 0), Heading::DOWN),
                Segment::new(Cell::new(300, 10), Heading::DOWN),
            ],
        );
        assert!(snake.move_toward(Heading::DOWN).is_dead());
        let frozen = snake.clone();

        let outcome = snake.move_toward(Heading::LEFT);

        assert_eq!(outcome.death, Some(DeathCause::OutOfBounds));
        assert_eq!(snake, frozen);
    }
}
