use crate::border::Border;

/// A cell on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// The neighbouring cell one step in `direction`. May lie off the grid.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Opposite direction (180°).
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    // Offset (dx, dy) of one step; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of [`Snake::move_towards`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    WallCollision,
    SelfCollision,
}

impl MoveOutcome {
    pub fn is_collision(self) -> bool {
        self != MoveOutcome::Moved
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Position>, // body[0] - head
}

impl Snake {
    pub const INITIAL_LENGTH: usize = 3;

    /// Three segments: the head, then one and two cells to its left.
    pub fn new(head: Position) -> Snake {
        Snake::with_length(head, Snake::INITIAL_LENGTH, Direction::Right)
    }

    /// A straight snake whose body trails away from `facing`.
    pub fn with_length(head: Position, length: usize, facing: Direction) -> Snake {
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);
        let (dx, dy) = facing.opposite().delta();
        for i in 1..length {
            // each next segment is one more step behind the head
            let x = head.x + dx * (i as i32);
            let y = head.y + dy * (i as i32);
            body.push(Position { x, y });
        }
        Snake { body }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail.
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Appends a segment on top of the tail; the next move pulls it apart.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Moves the head one cell in `direction`, every other segment taking the
    /// place its predecessor held before the move.
    ///
    /// On a collision the body is left as it was.
    pub fn move_towards(&mut self, direction: Direction, border: &Border) -> MoveOutcome {
        let new_head = self.head().step(direction);
        if !border.contains(new_head) {
            return MoveOutcome::WallCollision;
        }
        // checked against the old layout, tail included
        if self.body[1..].contains(&new_head) {
            return MoveOutcome::SelfCollision;
        }

        let len = self.body.len();
        self.body.copy_within(0..len - 1, 1);
        self.body[0] = new_head;
        MoveOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(coords: &[(i32, i32)]) -> Vec<Position> {
        coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn new_snake_extends_to_the_left() {
        let snake = Snake::new(Position::new(15, 10));
        assert_eq!(snake.body(), positions(&[(15, 10), (14, 10), (13, 10)]).as_slice());
    }

    #[test]
    fn with_length_trails_opposite_to_facing() {
        let snake = Snake::with_length(Position::new(5, 5), 4, Direction::Up);
        assert_eq!(snake.body(), positions(&[(5, 5), (5, 6), (5, 7), (5, 8)]).as_slice());
    }

    #[test]
    fn move_right_shifts_every_segment() {
        let mut snake = Snake::new(Position::new(15, 10));
        let outcome = snake.move_towards(Direction::Right, &Border::default());
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(snake.body(), positions(&[(16, 10), (15, 10), (14, 10)]).as_slice());
    }

    #[test]
    fn segments_follow_through_a_turn() {
        let border = Border::default();
        let mut snake = Snake::new(Position::new(15, 10));
        snake.move_towards(Direction::Up, &border);
        snake.move_towards(Direction::Up, &border);
        assert_eq!(snake.body(), positions(&[(15, 8), (15, 9), (15, 10)]).as_slice());
        snake.move_towards(Direction::Left, &border);
        assert_eq!(snake.body(), positions(&[(14, 8), (15, 8), (15, 9)]).as_slice());
    }

    #[test]
    fn wall_collision_leaves_body_untouched() {
        let mut snake = Snake::new(Position::new(29, 10));
        let before = snake.body().to_vec();
        let outcome = snake.move_towards(Direction::Right, &Border::default());
        assert_eq!(outcome, MoveOutcome::WallCollision);
        assert_eq!(snake.body(), before.as_slice());

        let mut top = Snake::new(Position::new(3, 0));
        assert_eq!(top.move_towards(Direction::Up, &Border::default()), MoveOutcome::WallCollision);
    }

    #[test]
    fn reversing_runs_into_the_neck() {
        let mut snake = Snake::new(Position::new(15, 10));
        let outcome = snake.move_towards(Direction::Left, &Border::default());
        assert_eq!(outcome, MoveOutcome::SelfCollision);
        assert!(outcome.is_collision());
    }

    #[test]
    fn biting_the_body_is_a_self_collision() {
        let border = Border::default();
        let mut snake = Snake::with_length(Position::new(10, 10), 5, Direction::Right);
        assert_eq!(snake.move_towards(Direction::Down, &border), MoveOutcome::Moved);
        assert_eq!(snake.move_towards(Direction::Left, &border), MoveOutcome::Moved);
        // head at (9, 11), body now passes through (9, 10)
        assert_eq!(snake.move_towards(Direction::Up, &border), MoveOutcome::SelfCollision);
    }

    #[test]
    fn grow_duplicates_tail_until_next_move() {
        let mut snake = Snake::new(Position::new(15, 10));
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body()[2], snake.body()[3]);

        snake.move_towards(Direction::Right, &Border::default());
        assert_eq!(
            snake.body(),
            positions(&[(16, 10), (15, 10), (14, 10), (13, 10)]).as_slice()
        );
    }

    #[test]
    fn move_never_teleports_a_segment() {
        let border = Border::default();
        let mut snake = Snake::with_length(Position::new(10, 10), 6, Direction::Right);
        let turns = [Direction::Down, Direction::Down, Direction::Right, Direction::Up];
        for direction in turns {
            let before = snake.body().to_vec();
            assert_eq!(snake.move_towards(direction, &border), MoveOutcome::Moved);
            assert_eq!(snake.head(), before[0].step(direction));
            assert_eq!(&snake.body()[1..], &before[..before.len() - 1]);
        }
    }

    #[test]
    fn contains_head_but_nothing_off_grid() {
        let snake = Snake::new(Position::new(2, 0));
        assert!(snake.contains(snake.head()));
        for pos in [Position::new(-1, 0), Position::new(30, 0), Position::new(0, 20), Position::new(0, -1)] {
            assert!(!snake.contains(pos));
        }
    }
}
