use chip8_dasm::disassemble;

#[test]
fn renders_one_line_per_word() {
    let rom = [
        0x00, 0xe0, // disp_clear()
        0xa2, 0xf0, // I = 0x02F0
        0x6a, 0x12, // VA = 18
        0xd1, 0xa3, // draw(1, 10, 3)
        0xff, 0xff, // unknown
        0x00, 0xee, // return
    ];

    let mut out = Vec::new();
    disassemble(&rom, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0x0200: [0x00E0] disp_clear()",
            "0x0202: [0xA2F0] I = 0x02F0",
            "0x0204: [0x6A12] VA = 18",
            "0x0206: [0xD1A3] draw(1, 10, 3)",
            "0x0208: [0xFFFF] unknown",
            "0x020A: [0x00EE] return",
        ]
    );
}

#[test]
fn odd_sized_rom_truncates_silently() {
    let rom = [0x12, 0x34, 0x56];

    let mut out = Vec::new();
    disassemble(&rom, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "0x0200: [0x1234] goto 0x0234\n");
}

#[test]
fn empty_rom_produces_no_output() {
    let mut out = Vec::new();
    disassemble(&[], &mut out).unwrap();
    assert!(out.is_empty());
}
