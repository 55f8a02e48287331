#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    index: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize, catalog_len: usize) {
        self.index = index.min(catalog_len.saturating_sub(1));
    }

    pub fn step(&mut self, direction: SwipeDirection, catalog_len: usize) {
        match direction {
            SwipeDirection::Previous => self.index = self.index.saturating_sub(1),
            SwipeDirection::Next => {
                self.index = (self.index + 1).min(catalog_len.saturating_sub(1));
            }
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
