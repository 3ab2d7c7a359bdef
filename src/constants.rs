// Bit masks on the operands and the result.
pub const SIGN_BIT: u8 = 0b1000_0000;
pub const LOW_BIT: u8 = 0b0000_0001;

// Packed flag layout, Z C N V from bit 3 down to bit 0.
pub const FLAG_Z: u8 = 0b0000_1000;
pub const FLAG_C: u8 = 0b0000_0100;
pub const FLAG_N: u8 = 0b0000_0010;
pub const FLAG_V: u8 = 0b0000_0001;

pub const VECTOR_FILE_EXT: &str = "json";

pub const BANNER: &str = "8-bit ALU with Status Flags (Simulation Mode)";
pub const BANNER_RULE: &str = "------------------------------------------------";
pub const FOOTER: &str = "End of ALU demonstration.";
