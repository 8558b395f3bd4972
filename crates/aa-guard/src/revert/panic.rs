use core::fmt;

use alloy_primitives::U256;

/// Solidity panic codes.
///
/// See <https://docs.soliditylang.org/en/latest/control-structures.html#panic-via-assert-and-error-via-require>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanicCode {
    /// `0x00`: generic compiler inserted panic.
    Generic,
    /// `0x01`: `assert` evaluated to false.
    AssertionFailure,
    /// `0x11`: arithmetic overflow or underflow outside an `unchecked` block.
    ArithmeticOverflow,
    /// `0x12`: division or modulo by zero.
    DivisionByZero,
    /// `0x21`: conversion of an out-of-range value into an enum.
    InvalidEnumValue,
    /// `0x22`: access to an incorrectly encoded storage byte array.
    CorruptStorageArray,
    /// `0x31`: `.pop()` on an empty array.
    PopEmptyArray,
    /// `0x32`: array index out of bounds or negative.
    IndexOutOfBounds,
    /// `0x41`: too much memory allocated or an array that is too large.
    MemoryOverflow,
    /// `0x51`: call to a zero-initialized internal function pointer.
    ZeroFunctionPointer,
    /// Any code outside the table.
    Unknown(U256),
}

impl PanicCode {
    /// Resolves a raw panic code.
    pub fn from_code(code: U256) -> Self {
        if code.bit_len() > 8 {
            return Self::Unknown(code);
        }
        match code.to::<u8>() {
            0x00 => Self::Generic,
            0x01 => Self::AssertionFailure,
            0x11 => Self::ArithmeticOverflow,
            0x12 => Self::DivisionByZero,
            0x21 => Self::InvalidEnumValue,
            0x22 => Self::CorruptStorageArray,
            0x31 => Self::PopEmptyArray,
            0x32 => Self::IndexOutOfBounds,
            0x41 => Self::MemoryOverflow,
            0x51 => Self::ZeroFunctionPointer,
            _ => Self::Unknown(code),
        }
    }

    /// The raw code.
    pub fn code(self) -> U256 {
        let code: u8 = match self {
            Self::Generic => 0x00,
            Self::AssertionFailure => 0x01,
            Self::ArithmeticOverflow => 0x11,
            Self::DivisionByZero => 0x12,
            Self::InvalidEnumValue => 0x21,
            Self::CorruptStorageArray => 0x22,
            Self::PopEmptyArray => 0x31,
            Self::IndexOutOfBounds => 0x32,
            Self::MemoryOverflow => 0x41,
            Self::ZeroFunctionPointer => 0x51,
            Self::Unknown(code) => return code,
        };
        U256::from(code)
    }

    /// Human-readable description. Unknown codes are described by their hex value.
    pub fn description(self) -> String {
        let text = match self {
            Self::Generic => "generic compiler panic",
            Self::AssertionFailure => "assertion failure",
            Self::ArithmeticOverflow => "arithmetic overflow/underflow",
            Self::DivisionByZero => "divide by zero",
            Self::InvalidEnumValue => "invalid enum value",
            Self::CorruptStorageArray => "corrupt storage array encoding",
            Self::PopEmptyArray => "pop on empty array",
            Self::IndexOutOfBounds => "array index out of bounds or negative",
            Self::MemoryOverflow => "memory overflow",
            Self::ZeroFunctionPointer => "zero-initialized internal function pointer",
            Self::Unknown(code) => return format!("0x{code:x}"),
        };
        text.to_string()
    }
}

impl fmt::Display for PanicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
