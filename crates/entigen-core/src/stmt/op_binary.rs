#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Concatenation / addition
    Add,

    /// Inequality, used for null guards
    Ne,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Ne => "!=",
        }
    }
}
