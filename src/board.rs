use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Delta { x: 0, y: -1 },
            Direction::Down => Delta { x: 0, y: 1 },
            Direction::Left => Delta { x: -1, y: 0 },
            Direction::Right => Delta { x: 1, y: 0 },
        }
    }
}

pub fn wrap(coord: i32, dimension: u16) -> u16 {
    coord.rem_euclid(dimension as i32) as u16
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(32, 24)
    }
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Board { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn wrapped_add(&self, cell: Cell, delta: Delta) -> Cell {
        Cell {
            x: wrap(cell.x as i32 + delta.x, self.width),
            y: wrap(cell.y as i32 + delta.y, self.height),
        }
    }

    pub fn wrapped_step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrapped_add(cell, direction.into())
    }

    pub fn center(&self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }

    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }
}

pub trait Occupant {
    fn position(&self) -> Cell;

    fn occupies(&self, cell: Cell) -> bool {
        self.position() == cell
    }
}
