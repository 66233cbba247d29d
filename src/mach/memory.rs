use super::{Cell, Stack, STACK_CAPACITY};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Auxiliary stack memory
///
/// Two independent bounded stacks and a selector naming the active one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    stacks: [Stack<Cell>; 2],
    selected: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new(STACK_CAPACITY)
    }
}

impl Memory {
    pub fn new(capacity: usize) -> Memory {
        Memory {
            stacks: [Stack::new(capacity), Stack::new(capacity)],
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.stacks.len() {
            return Err(error!(InvalidStackIndex));
        }
        self.selected = index;
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.selected = 1 - self.selected;
    }

    pub fn stack(&self, index: usize) -> Result<&Stack<Cell>> {
        self.stacks.get(index).ok_or_else(|| error!(InvalidStackIndex))
    }

    pub fn active(&self) -> &Stack<Cell> {
        &self.stacks[self.selected]
    }

    pub fn active_mut(&mut self) -> &mut Stack<Cell> {
        &mut self.stacks[self.selected]
    }

    /// Empties both stacks. The selector is left alone.
    pub fn reset(&mut self) {
        for stack in self.stacks.iter_mut() {
            stack.clear();
        }
    }
}
