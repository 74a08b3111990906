use thiserror::Error;

/// Failures that can surface from a single CPU step.
///
/// Every failure is returned before any state is mutated, so a caller can
/// treat a failed step as a no-op and decide for itself whether to halt.
#[derive(Debug, Error, PartialEq)]
pub enum Chip8Error {
    /// A subroutine was called with all sixteen stack slots in use.
    #[error("call stack overflow")]
    StackOverflow,

    /// A subroutine return was executed with an empty call stack.
    #[error("return with empty call stack")]
    StackUnderflow,

    /// The fetched opcode does not match any supported encoding.
    #[error("unknown instruction {0:#06X}")]
    UnknownInstruction(u16),
}
