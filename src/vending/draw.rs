//! Random sources for the prize draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of prize draws.
///
/// Implementations must return a value in `0..odds`; zero is the winning
/// ticket. `odds` is always at least one.
pub trait PrizeDraw {
    fn draw(&mut self, odds: u32) -> u32;
}

/// Reproducible draws from a seeded ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct SeededDraw {
    rng: ChaCha8Rng,
}

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PrizeDraw for SeededDraw {
    fn draw(&mut self, odds: u32) -> u32 {
        self.rng.gen_range(0..odds)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDraw;

impl PrizeDraw for ThreadDraw {
    fn draw(&mut self, odds: u32) -> u32 {
        rand::thread_rng().gen_range(0..odds)
    }
}

/// Replays a fixed script of tickets, cycling when it runs out.
///
/// Each ticket is reduced modulo `odds`. An empty script always returns
/// the last ticket in range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    tickets: Vec<u32>,
    next: usize,
}

impl ScriptedDraw {
    pub fn new(tickets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            tickets: tickets.into_iter().collect(),
            next: 0,
        }
    }

    /// Every draw wins.
    pub fn winning() -> Self {
        Self::new([0])
    }

    /// No draw wins while odds are above one.
    pub fn losing() -> Self {
        Self::new([1])
    }
}

impl PrizeDraw for ScriptedDraw {
    fn draw(&mut self, odds: u32) -> u32 {
        if self.tickets.is_empty() {
            return odds - 1;
        }
        let ticket = self.tickets[self.next % self.tickets.len()];
        self.next += 1;
        ticket % odds
    }
}

impl<D: PrizeDraw + ?Sized> PrizeDraw for Box<D> {
    fn draw(&mut self, odds: u32) -> u32 {
        (**self).draw(odds)
    }
}
