use std::fmt;

/// A register index operand (V0 through VF).
///
/// CHIP-8 registers are conventionally named with a single hex digit, so the
/// index renders as `V0`..`VF` rather than `V0`..`V15`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reg(pub u8);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V{:X}", self.0)
    }
}

/// A decoded CHIP-8 instruction.
///
/// Every 16-bit pattern decodes to exactly one variant; encodings with no
/// defined mnemonic decode to [`Instruction::Unknown`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Instruction {
    Sys(u16),            // 0NNN
    DispClear,           // 00E0
    Ret,                 // 00EE
    Jmp(u16),            // 1NNN
    Call(u16),           // 2NNN
    SkipEqImm(Reg, u8),  // 3XNN
    SkipNeImm(Reg, u8),  // 4XNN
    SkipEqReg(Reg, Reg), // 5XY0
    MovImm(Reg, u8),     // 6XNN
    AddImm(Reg, u8),     // 7XNN
    Mov(Reg, Reg),       // 8XY0
    Or(Reg, Reg),        // 8XY1
    And(Reg, Reg),       // 8XY2
    Xor(Reg, Reg),       // 8XY3
    Add(Reg, Reg),       // 8XY4
    Sub(Reg, Reg),       // 8XY5
    Shr(Reg, Reg),       // 8XY6
    SubRev(Reg, Reg),    // 8XY7
    Shl(Reg, Reg),       // 8XYE
    SkipNeReg(Reg, Reg), // 9XY0
    Index(u16),          // ANNN
    JmpV0(u16),          // BNNN
    Rand(Reg, u8),       // CXNN
    Draw(u8, u8, u8),    // DXYN
    KeyEq(Reg),          // EX9E
    KeyNe(Reg),          // EXA1
    DelayGet(Reg),       // FX07
    KeyWait(Reg),        // FX0A
    DelaySet(Reg),       // FX15
    SoundSet(Reg),       // FX18
    IndexAdd(Reg),       // FX1E
    SpriteAddr(Reg),     // FX29
    Bcd(Reg),            // FX33
    RegDump(Reg),        // FX55
    RegLoad(Reg),        // FX65
    Unknown,
}

impl Instruction {
    /// Decode a single 16-bit opcode.
    ///
    /// Total over the whole input domain: never panics, never fails. The top
    /// nibble selects the instruction family; families 0x0, 0x8, 0xE and 0xF
    /// dispatch again on low-order bits, and any pattern with no defined
    /// mnemonic comes back as [`Instruction::Unknown`].
    pub fn decode(opcode: u16) -> Instruction {
        use Instruction::*;

        let x = Reg(((opcode & 0x0f00) >> 8) as u8);
        let y = Reg(((opcode & 0x00f0) >> 4) as u8);
        let n = (opcode & 0x000f) as u8;
        let nn = (opcode & 0x00ff) as u8;
        let nnn = opcode & 0x0fff;

        match opcode & 0xf000 {
            0x0000 => match nn {
                0xe0 => DispClear,
                0xee => Ret,
                _ => Sys(nnn),
            },
            0x1000 => Jmp(nnn),
            0x2000 => Call(nnn),
            0x3000 => SkipEqImm(x, nn),
            0x4000 => SkipNeImm(x, nn),
            0x5000 if n == 0 => SkipEqReg(x, y),
            0x6000 => MovImm(x, nn),
            0x7000 => AddImm(x, nn),
            0x8000 => match n {
                0x0 => Mov(x, y),
                0x1 => Or(x, y),
                0x2 => And(x, y),
                0x3 => Xor(x, y),
                0x4 => Add(x, y),
                0x5 => Sub(x, y),
                0x6 => Shr(x, y),
                0x7 => SubRev(x, y),
                0xe => Shl(x, y),
                _ => Unknown,
            },
            0x9000 if n == 0 => SkipNeReg(x, y),
            0xa000 => Index(nnn),
            0xb000 => JmpV0(nnn),
            0xc000 => Rand(x, nn),
            0xd000 => Draw(x.0, y.0, n),
            0xe000 => match nn {
                0x9e => KeyEq(x),
                0xa1 => KeyNe(x),
                _ => Unknown,
            },
            0xf000 => match nn {
                0x07 => DelayGet(x),
                0x0a => KeyWait(x),
                0x15 => DelaySet(x),
                0x18 => SoundSet(x),
                0x1e => IndexAdd(x),
                0x29 => SpriteAddr(x),
                0x33 => Bcd(x),
                0x55 => RegDump(x),
                0x65 => RegLoad(x),
                _ => Unknown,
            },
            _ => Unknown,
        }
    }
}

/// Renders the pseudo-C mnemonic. Addresses print as zero-padded 4-digit
/// uppercase hex, other immediates in decimal.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;
        match *self {
            Sys(nnn) => write!(f, "call 0x{:04X}", nnn),
            DispClear => write!(f, "disp_clear()"),
            Ret => write!(f, "return"),
            Jmp(nnn) => write!(f, "goto 0x{:04X}", nnn),
            Call(nnn) => write!(f, "*(0x{:04X})()", nnn),
            SkipEqImm(x, nn) => write!(f, "if ({} == {})", x, nn),
            SkipNeImm(x, nn) => write!(f, "if ({} != {})", x, nn),
            SkipEqReg(x, y) => write!(f, "if ({} == {})", x, y),
            MovImm(x, nn) => write!(f, "{} = {}", x, nn),
            AddImm(x, nn) => write!(f, "{} += {}", x, nn),
            Mov(x, y) => write!(f, "{} = {}", x, y),
            Or(x, y) => write!(f, "{} = {} | {}", x, x, y),
            And(x, y) => write!(f, "{} = {} & {}", x, x, y),
            Xor(x, y) => write!(f, "{} = {} ^ {}", x, x, y),
            Add(x, y) => write!(f, "{} += {}", x, y),
            Sub(x, y) => write!(f, "{} -= {}", x, y),
            Shr(x, y) => write!(f, "{} = {} = {} >> 1", x, y, y),
            SubRev(x, y) => write!(f, "{} = {} - {}", x, y, x),
            Shl(x, y) => write!(f, "{} = {} = {} << 1", x, y, y),
            SkipNeReg(x, y) => write!(f, "if ({} != {})", x, y),
            Index(nnn) => write!(f, "I = 0x{:04X}", nnn),
            JmpV0(nnn) => write!(f, "PC = V0 + 0x{:04X}", nnn),
            Rand(x, nn) => write!(f, "{} = rand() & {}", x, nn),
            Draw(x, y, n) => write!(f, "draw({}, {}, {})", x, y, n),
            KeyEq(x) => write!(f, "if (key() == {})", x),
            KeyNe(x) => write!(f, "if (key() != {})", x),
            DelayGet(x) => write!(f, "{} = get_delay()", x),
            KeyWait(x) => write!(f, "{} = get_key()", x),
            DelaySet(x) => write!(f, "delay_timer({})", x),
            SoundSet(x) => write!(f, "sound_timer({})", x),
            IndexAdd(x) => write!(f, "I += {}", x),
            SpriteAddr(x) => write!(f, "I = sprite_addr[{}]", x),
            Bcd(x) => write!(
                f,
                "set_BCD({}); *(I+0)=BCD(3); *(I+1)=BCD(2); *(I+2)=BCD(1); ",
                x
            ),
            RegDump(x) => write!(f, "reg_dump({}, &I)", x),
            RegLoad(x) => write!(f, "reg_load({}, &I)", x),
            Unknown => write!(f, "unknown"),
        }
    }
}
