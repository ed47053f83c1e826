use crate::{
    comp::{Comp, Src},
    dest::Dest,
    jump::Jump,
    symbol::MAX_ADDR,
    word::to_binary16,
};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit value into A
    A(u16),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

// Leading bits of every compute instruction.
const C_PREFIX: u16 = 0b111 << 13;

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(value) => value & MAX_ADDR,
            Inst::C(dest, comp, jump) => {
                C_PREFIX | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(bin: u16) -> Result<Inst, String> {
        if bin & !MAX_ADDR == 0 {
            return Ok(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return Err(format!("Undefined Inst: {}", to_binary16(bin)));
        }
        let src = Src::from(((bin >> 12) & 0b1) as u8);
        let comp = Comp::from_bits(src, ((bin >> 6) & 0b111111) as u8)?;
        Ok(Inst::C(Dest::from_bits(bin >> 3), comp, Jump::from_bits(bin)))
    }

    /// The 16-character textual word written to the output file.
    pub fn word(&self) -> String {
        to_binary16(self.to_bin())
    }
}

impl std::fmt::Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C(dest, comp, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>0x{:0>4X}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<b>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<g>{}</>", j),
                };
                cformat!("{}<r>{}</>{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! c {
        ($dest:ident, $comp:expr, $jump:ident) => {
            Inst::C(Dest::$dest, Comp::parse($comp).unwrap(), Jump::$jump)
        };
    }

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.word(), $word);
                    let inst_back = Inst::from_bin(inst.to_bin()).unwrap();
                    assert_eq!(inst, inst_back);
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => "0000000000000000",
        test_a_max: Inst::A(MAX_ADDR) => "0111111111111111",
        test_a_screen: Inst::A(16384) => "0100000000000000",
        test_d_eq_m: c!(D, "M", Null) => "1111110000010000",
        test_zero_jmp: c!(Null, "0", JMP) => "1110101010000111",
        test_m_eq_d: c!(M, "D", Null) => "1110001100001000",
        test_d_jgt: c!(Null, "D", JGT) => "1110001100000001",
        test_d_eq_d_sub_m: c!(D, "D-M", Null) => "1111010011010000",
        test_amd_m_inc_jle: c!(AMD, "M+1", JLE) => "1111110111111110",
        test_a_eq_neg_one: c!(A, "-1", Null) => "1110111010100000",
        test_md_d_or_a_jne: c!(MD, "D|A", JNE) => "1110010101011101",
    }

    #[test]
    fn test_display() {
        assert_eq!(Inst::A(21).to_string(), "@21");
        assert_eq!(c!(D, "M", Null).to_string(), "D=M");
        assert_eq!(c!(Null, "0", JMP).to_string(), "0;JMP");
        assert_eq!(c!(AM, "D&M", JEQ).to_string(), "AM=D&M;JEQ");
    }

    #[test]
    fn test_from_bin_rejects_undefined() {
        // leading 1 without the full 111 prefix
        assert!(Inst::from_bin(0b1000_0000_0000_0000).is_err());
        assert!(Inst::from_bin(0b1100_0000_0000_0000).is_err());
        // a=1 with a code only the register table defines
        assert!(Inst::from_bin(0b1111_1010_1000_0000).is_err());
    }
}
