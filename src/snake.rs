use std::collections::VecDeque;

use crate::geometry::{Direction, Position};

/// Role of a segment inside the body.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SegmentKind {
    Head,
    Tail,
    Torso,
}

/// One occupied cell of the snake.
///
/// `direction` is the heading the segment had when it moved into `position`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub position: Position,
    pub direction: Direction,
}

impl Segment {
    #[must_use]
    pub const fn new(kind: SegmentKind, position: Position, direction: Direction) -> Self {
        Self {
            kind,
            position,
            direction,
        }
    }
}

/// Snake body plus the movement/growth state machine.
///
/// The snake is *cruising* while `stopped` is false and *growing* while it
/// still has pending growth to consume. A growing snake keeps its tail in
/// place and inserts one segment behind the head per advance.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Segment>,
    direction: Direction,
    stopped: bool,
    pending_growth: u32,
}

impl Snake {
    /// Creates a snake with no segments.
    #[must_use]
    pub fn empty(direction: Direction) -> Self {
        Self {
            body: VecDeque::new(),
            direction,
            stopped: false,
            pending_growth: 0,
        }
    }

    /// Creates a two-segment snake, both segments facing `direction`.
    #[must_use]
    pub fn spawn(head: Position, tail: Position, direction: Direction) -> Self {
        Self::from_segments(
            vec![
                Segment::new(SegmentKind::Head, head, direction),
                Segment::new(SegmentKind::Tail, tail, direction),
            ],
            direction,
        )
    }

    /// Creates a cruising snake from explicit segments (first is the head).
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            stopped: false,
            pending_growth: 0,
        }
    }

    /// Returns the same snake with its heading replaced. No validation.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Replaces the heading in place.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Moves the head into `next_head`.
    ///
    /// While cruising every other segment follows the one ahead of it and the
    /// length is unchanged. While growing the tail stays where it is and the
    /// old head turns into a new torso segment, so the body gains one cell.
    pub fn advance(&mut self, next_head: Position) {
        let growing = self.is_growing();
        let single = self.body.len() == 1;

        let Some(old_head) = self.body.front_mut() else {
            return;
        };

        if single && !growing {
            old_head.position = next_head;
            old_head.direction = self.direction;
            return;
        }

        old_head.kind = if single {
            SegmentKind::Tail
        } else {
            SegmentKind::Torso
        };

        if !growing {
            let _ = self.body.pop_back();
        }

        self.body.push_front(Segment::new(
            SegmentKind::Head,
            next_head,
            self.direction,
        ));

        if growing {
            self.digest();
        } else {
            self.retarget_tail();
        }
    }

    /// Queues `growth` extra segments. Additive with growth still pending.
    pub fn mark_eating(&mut self, growth: u32) {
        self.pending_growth = self.pending_growth.saturating_add(growth);
        self.stopped = self.pending_growth > 0;
    }

    fn digest(&mut self) {
        self.pending_growth = self.pending_growth.saturating_sub(1);
        self.stopped = self.pending_growth > 0;
    }

    // The tail faces the segment now ahead of it.
    fn retarget_tail(&mut self) {
        let len = self.body.len();
        if len < 2 {
            return;
        }

        let ahead = self.body[len - 2].direction;
        if let Some(tail) = self.body.back_mut() {
            tail.kind = SegmentKind::Tail;
            tail.direction = ahead;
        }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.iter().any(|segment| segment.position == position)
    }

    /// Returns the head position, if the snake has any segments.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.body.front().map(|segment| segment.position)
    }

    /// Returns the tail position, if the snake has any segments.
    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.body.back().map(|segment| segment.position)
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true before the snake has spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true while growth is being consumed.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.stopped && self.pending_growth > 0
    }

    /// Returns true while the tail is held in place.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns how many cells the snake still has to grow.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    /// Iterates over occupied cells from head to tail.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().map(|segment| segment.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Direction, Position};

    use super::{Segment, SegmentKind, Snake};

    fn straight_snake(len: i32) -> Snake {
        // Head at (len, 5), body trailing to the left.
        let segments = (0..len)
            .map(|i| {
                let kind = match i {
                    0 => SegmentKind::Head,
                    i if i == len - 1 => SegmentKind::Tail,
                    _ => SegmentKind::Torso,
                };
                Segment::new(kind, Position::new(len - i, 5), Direction::Right)
            })
            .collect();
        Snake::from_segments(segments, Direction::Right)
    }

    fn kinds(snake: &Snake) -> Vec<SegmentKind> {
        snake.segments().map(|segment| segment.kind).collect()
    }

    #[test]
    fn spawned_snake_has_head_and_tail() {
        let snake = Snake::spawn(Position::new(1, 8), Position::new(0, 8), Direction::Right);

        assert_eq!(snake.len(), 2);
        assert_eq!(kinds(&snake), vec![SegmentKind::Head, SegmentKind::Tail]);
        assert!(!snake.is_stopped());
    }

    #[test]
    fn cruising_advance_keeps_length() {
        for len in 1..6 {
            let mut snake = straight_snake(len);
            let next = Position::new(len + 1, 5);

            snake.advance(next);

            assert_eq!(snake.len(), len as usize);
            assert_eq!(snake.head(), Some(next));
        }
    }

    #[test]
    fn cruising_segments_follow_the_leader() {
        let mut snake = straight_snake(4).with_direction(Direction::Down);
        let before: Vec<Segment> = snake.segments().copied().collect();

        snake.advance(Position::new(4, 6));
        let after: Vec<Segment> = snake.segments().copied().collect();

        assert_eq!(after[0].position, Position::new(4, 6));
        assert_eq!(after[0].direction, Direction::Down);
        assert_eq!(after[1].position, before[0].position);
        assert_eq!(after[1].direction, before[0].direction);
        assert_eq!(after[2].position, before[1].position);
        assert_eq!(after[3].position, before[2].position);
        assert_eq!(after[3].direction, after[2].direction);
        assert_eq!(
            kinds(&snake),
            vec![
                SegmentKind::Head,
                SegmentKind::Torso,
                SegmentKind::Torso,
                SegmentKind::Tail
            ]
        );
    }

    #[test]
    fn two_segment_tail_mirrors_old_head() {
        let mut snake = Snake::spawn(Position::new(1, 8), Position::new(0, 8), Direction::Up);

        snake.advance(Position::new(1, 7));

        let tail = snake.segments().last().copied().expect("tail");
        assert_eq!(tail.position, Position::new(1, 8));
        assert_eq!(tail.direction, Direction::Up);
        assert_eq!(tail.kind, SegmentKind::Tail);
    }

    #[test]
    fn growth_adds_one_segment_per_advance_and_returns_to_cruising() {
        let mut snake = straight_snake(2);
        let tail = snake.tail();
        snake.mark_eating(5);

        for step in 1..=5 {
            assert!(snake.is_growing());
            let next = snake
                .head()
                .expect("head")
                .apply_direction(Direction::Right, crate::config::BOARD);
            snake.advance(next);
            assert_eq!(snake.len(), 2 + step);
            assert_eq!(snake.tail(), tail);
        }

        assert!(!snake.is_growing());
        assert!(!snake.is_stopped());
        assert_eq!(snake.pending_growth(), 0);

        snake.advance(Position::new(8, 5));
        assert_eq!(snake.len(), 7);
        assert_ne!(snake.tail(), tail);
    }

    #[test]
    fn growth_inserts_old_head_as_torso() {
        let mut snake = straight_snake(3);
        let old_head = *snake.segments().next().expect("head");
        snake.mark_eating(1);

        snake.advance(Position::new(4, 5));

        let second = *snake.segments().nth(1).expect("second segment");
        assert_eq!(second.kind, SegmentKind::Torso);
        assert_eq!(second.position, old_head.position);
        assert_eq!(second.direction, old_head.direction);
    }

    #[test]
    fn eating_is_additive() {
        let mut snake = straight_snake(2);
        snake.mark_eating(3);
        snake.advance(Position::new(3, 5));
        snake.mark_eating(3);

        assert_eq!(snake.pending_growth(), 5);
        assert!(snake.is_stopped());
    }

    #[test]
    fn single_segment_growth_creates_a_tail() {
        let mut snake = Snake::from_segments(
            vec![Segment::new(
                SegmentKind::Head,
                Position::new(2, 2),
                Direction::Right,
            )],
            Direction::Right,
        );
        snake.mark_eating(1);

        snake.advance(Position::new(3, 2));

        assert_eq!(kinds(&snake), vec![SegmentKind::Head, SegmentKind::Tail]);
    }

    #[test]
    fn empty_snake_ignores_advance() {
        let mut snake = Snake::empty(Direction::Right);
        snake.advance(Position::new(1, 1));

        assert!(snake.is_empty());
        assert_eq!(snake.head(), None);
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = straight_snake(3);

        assert!(snake.occupies(Position::new(3, 5)));
        assert!(snake.occupies(Position::new(1, 5)));
        assert!(!snake.occupies(Position::new(0, 5)));
    }

    #[test]
    fn with_direction_does_not_validate() {
        let snake = straight_snake(2).with_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }
}
