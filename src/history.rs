use crate::board::Board;

/// Snapshots of the board after every committed change, for undo and scoring.
///
/// Once a game is dealt the stack always holds the initial deal; undo never
/// removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<Board>,
    undos: usize,
}

impl History {
    /// A history whose only entry is `initial`.
    pub fn starting_from(initial: Board) -> Self {
        Self {
            stack: vec![initial],
            undos: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, board: Board) {
        self.stack.push(board);
    }

    /// Pop the latest snapshot (never the first) and return the board to
    /// restore. Counts an undo only when something was popped.
    pub fn undo(&mut self) -> Option<Board> {
        if self.stack.len() > 1 {
            self.stack.pop();
            self.undos += 1;
        }
        self.stack.last().copied()
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.undos = 0;
    }

    /// Stack length plus twice the undos taken, so undoing a move never
    /// lowers the count.
    #[inline]
    pub fn count(&self) -> usize {
        self.stack.len() + self.undos * 2
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn undos(&self) -> usize {
        self.undos
    }

    #[inline]
    pub fn current(&self) -> Option<&Board> {
        self.stack.last()
    }

    /// The snapshot before the current one, or the current one when only the
    /// deal is recorded.
    pub fn previous(&self) -> Option<&Board> {
        match self.stack.len() {
            0 => None,
            1 => self.stack.first(),
            n => self.stack.get(n - 2),
        }
    }
}
