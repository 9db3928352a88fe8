//! A CHIP-8 disassembler.
//!
//! The core is [`Instruction::decode`](op_code::Instruction::decode), a pure
//! function from a 16-bit opcode to a mnemonic; [`disassemble`] wires it to a
//! ROM image and renders one trace line per instruction.

use std::io::{self, Write};

pub mod op_code;
pub mod rom;
pub mod util;

use op_code::Instruction;
use rom::Words;

/// Write the mnemonic trace for a ROM image.
///
/// One line per 16-bit word, formatted `0xAAAA: [0xOOOO] <mnemonic>` with the
/// address and opcode as 4-digit uppercase hex.
pub fn disassemble(rom: &[u8], out: &mut impl Write) -> io::Result<()> {
    for (addr, opcode) in Words::new(rom) {
        writeln!(
            out,
            "0x{:04X}: [0x{:04X}] {}",
            addr,
            opcode,
            Instruction::decode(opcode)
        )?;
    }
    Ok(())
}
