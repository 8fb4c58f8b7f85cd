use super::Stmt;

/// An ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn push(&mut self, stmt: impl Into<Stmt>) {
        self.stmts.push(stmt.into());
    }

    /// Appends statements after the existing ones. Generated snippets are
    /// self-contained statement runs, so appending never requires parsing
    /// the prefix.
    pub fn append(&mut self, stmts: impl IntoIterator<Item = Stmt>) {
        self.stmts.extend(stmts);
    }
}

impl From<Vec<Stmt>> for Block {
    fn from(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}
