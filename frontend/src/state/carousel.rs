/// Wrap-around position for the testimonial carousel and hero taglines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let c = Carousel::new(3).next().next();
        assert_eq!(c.index(), 2);
        assert_eq!(c.next().index(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        assert_eq!(Carousel::new(4).prev().index(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let c = Carousel::new(4);
        assert_eq!(c.select(2).index(), 2);
        assert_eq!(c.select(4).index(), 0);
    }
}
