/// The size of addressable memory, in bytes.
pub const MEM_SIZE: usize = 0x1000;

/// The address where loaded programs begin execution.
pub const PROG_START: u16 = 0x200;

/// The number of primary registers (V0..VF).
pub const REGISTER_COUNT: usize = 16;

/// The number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;
