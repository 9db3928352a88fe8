use chip8_dasm::{disassemble, util::Error};
use std::env::args;
use std::io::{self, ErrorKind};

fn main() -> anyhow::Result<()> {
    let path = args().nth(1).ok_or(Error::MissingCliArgument)?;
    let rom = match std::fs::read(&path) {
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::FileNotFound(path).into()),
        rom => rom?,
    };

    let stdout = io::stdout();
    disassemble(&rom, &mut stdout.lock())?;
    Ok(())
}
