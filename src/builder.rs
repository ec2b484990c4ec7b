use crate::LcsEngine;

pub struct LcsEngineBuilder<'a, T> {
    seq1: &'a [T],
    seq2: &'a [T],
    max_cells: Option<usize>,
}

impl<'a, T: PartialEq + Clone> LcsEngineBuilder<'a, T> {
    pub fn new(seq1: &'a [T], seq2: &'a [T]) -> Self {
        Self {
            seq1,
            seq2,
            max_cells: None,
        }
    }
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
    pub fn with_max_cells_opt(mut self, max_cells: Option<usize>) -> Self {
        self.max_cells = max_cells;
        self
    }
    pub fn build(self) -> LcsEngine<'a, T> {
        match self.max_cells {
            Some(limit) => LcsEngine::with_max_cells(self.seq1, self.seq2, limit),
            None => LcsEngine::new(self.seq1, self.seq2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LcsEngineBuilder;

    #[test]
    fn default_has_no_limit() {
        let a = ["a", "b"];
        let engine = LcsEngineBuilder::new(&a, &a).build();
        assert_eq!(engine.max_cells(), None);
        assert_eq!(engine.run().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn limit_carries_through() {
        let a = ["a", "b"];
        let engine = LcsEngineBuilder::new(&a, &a)
            .with_max_cells_opt(Some(3))
            .build();
        assert_eq!(engine.max_cells(), Some(3));
        assert!(engine.run().is_err());
    }
}
