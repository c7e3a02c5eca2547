//! Built-in replacement for the DMG boot ROM.
//!
//! It clears VRAM, sets up the sound and palette registers, enables the LCD
//! and leaves the post-boot register values, skipping the logo scroll and
//! the header checks. The last four bytes write 1 to 0xFF50 so execution
//! falls through to the cartridge entry point at 0x0100.

pub const BOOT_ROM_SIZE: usize = 0x100;

const PROGRAM: &[u8] = &[
    0x31, 0xFE, 0xFF, //       LD   SP,$FFFE
    0xAF, //                   XOR  A
    0x21, 0xFF, 0x9F, //       LD   HL,$9FFF
    0x32, //             clr:  LD   (HL-),A
    0xCB, 0x7C, //             BIT  7,H
    0x20, 0xFB, //             JR   NZ,clr
    0x21, 0x26, 0xFF, //       LD   HL,$FF26
    0x0E, 0x11, //             LD   C,$11
    0x3E, 0x80, //             LD   A,$80
    0x32, //                   LD   (HL-),A      ; NR52 sound on
    0xE2, //                   LD   ($FF00+C),A  ; NR11
    0x0C, //                   INC  C
    0x3E, 0xF3, //             LD   A,$F3
    0xE2, //                   LD   ($FF00+C),A  ; NR12
    0x32, //                   LD   (HL-),A      ; NR51
    0x3E, 0x77, //             LD   A,$77
    0x77, //                   LD   (HL),A       ; NR50
    0x3E, 0xFC, //             LD   A,$FC
    0xE0, 0x47, //             LDH  ($47),A      ; BGP
    0xAF, //                   XOR  A
    0xE0, 0x42, //             LDH  ($42),A      ; SCY
    0xE0, 0x43, //             LDH  ($43),A      ; SCX
    0x3E, 0x91, //             LD   A,$91
    0xE0, 0x40, //             LDH  ($40),A      ; LCDC
    0x01, 0x13, 0x00, //       LD   BC,$0013
    0x11, 0xD8, 0x00, //       LD   DE,$00D8
    0x21, 0xB0, 0x01, //       LD   HL,$01B0
    0xE5, //                   PUSH HL
    0xF1, //                   POP  AF           ; A=$01 F=$B0
    0x21, 0x4D, 0x01, //       LD   HL,$014D
    0xC3, 0xFC, 0x00, //       JP   tail
];

/// Placed at 0x00FC so the final write is the last instruction in the ROM.
const TAIL: [u8; 4] = [
    0x3E, 0x01, //             tail: LD A,$01
    0xE0, 0x50, //             LDH  ($50),A
];

const fn assemble() -> [u8; BOOT_ROM_SIZE] {
    let mut rom = [0x00; BOOT_ROM_SIZE];
    let mut i = 0;
    while i < PROGRAM.len() {
        rom[i] = PROGRAM[i];
        i += 1;
    }
    let mut j = 0;
    while j < TAIL.len() {
        rom[BOOT_ROM_SIZE - TAIL.len() + j] = TAIL[j];
        j += 1;
    }
    rom
}

/// The 256-byte boot program mapped at 0x0000 on power-on.
pub static BOOT_ROM: [u8; BOOT_ROM_SIZE] = assemble();
