use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: vec![],
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    fn overflow_error(&self) -> Error {
        error!(StackOverflow; "STACK FULL")
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow; "STACK EMPTY")
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.vec
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(self.overflow_error());
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the top two values, top first.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let top = self.pop()?;
        let second = self.pop()?;
        Ok((top, second))
    }
    /// The top two values, top first, without popping.
    pub fn peek_2(&self) -> Result<(&T, &T)> {
        match self.vec.as_slice() {
            [.., second, top] => Ok((top, second)),
            _ => Err(self.underflow_error()),
        }
    }
    /// Removes every value, top first. Fails on an empty stack.
    pub fn drain_all(&mut self) -> Result<Vec<T>> {
        if self.vec.is_empty() {
            return Err(self.underflow_error());
        }
        Ok(self.vec.drain(..).rev().collect())
    }
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.vec.len() {
            return Err(self.underflow_error());
        }
        Ok(self.vec.remove(index))
    }
    pub fn swap_top(&mut self) -> Result<()> {
        let len = self.vec.len();
        if len < 2 {
            return Err(self.underflow_error());
        }
        self.vec.swap(len - 1, len - 2);
        Ok(())
    }
    pub fn reverse(&mut self) {
        self.vec.reverse()
    }
    /// Pushes every value in order, stopping at the first overflow.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        for val in iter {
            self.push(val)?;
        }
        Ok(())
    }
    /// Replaces the contents; the stack is untouched if `vec` does not fit.
    pub fn replace(&mut self, vec: Vec<T>) -> Result<()> {
        if vec.len() > self.capacity {
            return Err(self.overflow_error());
        }
        self.vec = vec;
        Ok(())
    }
}

impl<T: Ord> Stack<T> {
    pub fn sort_ascending(&mut self) {
        self.vec.sort_unstable()
    }
    pub fn sort_descending(&mut self) {
        self.vec.sort_unstable_by(|a, b| b.cmp(a))
    }
}
