use rand::Rng;

use crate::grid::{Cell, GridModel};

/// Consumable cell that grows the snake on contact with the head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Cell,
}

impl Fruit {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns fruit on a uniformly random grid cell.
    ///
    /// Placement ignores the snake and other fruit, so a fruit may land on
    /// an occupied cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridModel) -> Self {
        Self::new(grid.random_cell(rng))
    }
}

/// The fruit currently live on the board.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Orchard {
    fruits: Vec<Fruit>,
}

impl Orchard {
    /// Plants `count` randomly placed fruit.
    #[must_use]
    pub fn plant<R: Rng + ?Sized>(rng: &mut R, grid: GridModel, count: usize) -> Self {
        Self {
            fruits: (0..count).map(|_| Fruit::spawn(rng, grid)).collect(),
        }
    }

    /// Creates an orchard holding exactly `fruits`.
    #[must_use]
    pub fn from_fruits(fruits: Vec<Fruit>) -> Self {
        Self { fruits }
    }

    /// Removes one fruit at `cell`, returning whether any was there.
    pub fn take_at(&mut self, cell: Cell) -> bool {
        let Some(index) = self.fruits.iter().position(|fruit| fruit.position == cell) else {
            return false;
        };

        self.fruits.remove(index);
        true
    }

    /// Adds one replacement fruit at a random cell and returns it.
    pub fn replant<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridModel) -> Fruit {
        let fruit = Fruit::spawn(rng, grid);
        self.fruits.push(fruit);
        fruit
    }

    pub fn positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.fruits.iter().map(|fruit| fruit.position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
