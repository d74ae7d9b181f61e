/// Which gallery image, if any, is shown full screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Out of range indexes are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.open {
            self.open = Some((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.open {
            self.open = Some(if i == 0 { self.len - 1 } else { i - 1 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_ignores_navigation() {
        let mut lb = Lightbox::new(3);
        assert!(!lb.is_open());
        lb.next();
        lb.prev();
        assert_eq!(lb.current(), None);
    }

    #[test]
    fn navigation_wraps() {
        let mut lb = Lightbox::new(3);
        lb.open(2);
        lb.next();
        assert_eq!(lb.current(), Some(0));
        lb.prev();
        assert_eq!(lb.current(), Some(2));
        lb.prev();
        assert_eq!(lb.current(), Some(1));
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lb = Lightbox::new(2);
        lb.open(2);
        assert!(!lb.is_open());
        let mut empty = Lightbox::new(0);
        empty.open(0);
        assert!(!empty.is_open());
    }

    #[test]
    fn close_resets() {
        let mut lb = Lightbox::new(4);
        lb.open(1);
        lb.close();
        assert_eq!(lb.current(), None);
    }
}
