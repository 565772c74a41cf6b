//! The closing love letter overlay

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Letter {
    open: bool,
}

impl Letter {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
