use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::host::Host;
use crate::snake::Position;

/// Playing field bounds, `[0, width) x [0, height)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Border {
    pub width: i32,
    pub height: i32,
}

impl Border {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Any cell of the field, drawn uniformly from the host.
    pub fn random_cell(&self, host: &mut impl Host) -> Position {
        let x = host.random_int(0, self.width - 1);
        let y = host.random_int(0, self.height - 1);
        Position { x, y }
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn contains_only_cells_inside() {
        let border = Border::default();
        assert!(border.contains(Position::new(0, 0)));
        assert!(border.contains(Position::new(29, 19)));
        assert!(!border.contains(Position::new(30, 0)));
        assert!(!border.contains(Position::new(0, 20)));
        assert!(!border.contains(Position::new(-1, 5)));
        assert_eq!(border.cell_count(), 600);
    }

    #[test]
    fn random_cells_stay_on_the_field() {
        let border = Border::new(4, 3);
        let mut host = RecordingHost::seeded(7);
        for _ in 0..500 {
            assert!(border.contains(border.random_cell(&mut host)));
        }
    }
}
