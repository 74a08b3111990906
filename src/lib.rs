pub use chip8::Chip8;
pub use constants::{MEM_SIZE, PROG_START};
pub use cpu::Cpu;
pub use errors::Chip8Error;
pub use instruction::Instruction;
pub use memory::Memory;

mod chip8;
pub mod constants;
mod cpu;
mod errors;
mod instruction;
mod memory;
