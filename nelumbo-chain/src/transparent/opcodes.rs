//! Script opcodes used by reward and commitment outputs.

/// Supported opcodes
pub enum OpCode {
    // Opcodes used to generate P2SH scripts.
    Equal = 0x87,
    Hash160 = 0xa9,
    Push20Bytes = 0x14,
    // Additional opcodes used to generate P2PKH scripts.
    Dup = 0x76,
    EqualVerify = 0x88,
    CheckSig = 0xac,
    // Additional opcodes used to generate coinbase height commitments.
    Return = 0x6a,
    Push5Bytes = 0x05,
}
