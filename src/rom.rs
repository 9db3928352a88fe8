/// CHIP-8 programs are loaded at this address; the trace starts counting here.
pub const PROG_START: u16 = 0x0200;

/// Iterator over the big-endian 16-bit words of a ROM image, paired with the
/// memory address each word would occupy.
///
/// Yields `(address, opcode)` starting at [`PROG_START`] and stepping by 2.
/// A trailing odd byte is silently dropped.
pub struct Words<'a> {
    rom: &'a [u8],
    pc: u16,
}

impl<'a> Words<'a> {
    pub fn new(rom: &'a [u8]) -> Words<'a> {
        Words {
            rom,
            pc: PROG_START,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<(u16, u16)> {
        let (&hi, rest) = self.rom.split_first()?;
        let (&lo, rest) = rest.split_first()?;
        let addr = self.pc;
        self.rom = rest;
        self.pc = self.pc.wrapping_add(2);
        Some((addr, u16::from_be_bytes([hi, lo])))
    }
}
