use bimap::BiMap;
use num_enum::{FromPrimitive, IntoPrimitive};
use once_cell::sync::Lazy;

/// The a-bit: second ALU operand is the A register itself or RAM[A].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Src {
    #[default]
    A = 0,
    M = 1,
}

// a = 0
static COMP_A: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    map.insert("0", 0b101010);
    map.insert("1", 0b111111);
    map.insert("-1", 0b111010);
    map.insert("D", 0b001100);
    map.insert("A", 0b110000);
    map.insert("!D", 0b001101);
    map.insert("!A", 0b110001);
    map.insert("-D", 0b001111);
    map.insert("-A", 0b110011);
    map.insert("D+1", 0b011111);
    map.insert("A+1", 0b110111);
    map.insert("D-1", 0b001110);
    map.insert("A-1", 0b110010);
    map.insert("D+A", 0b000010);
    map.insert("D-A", 0b010011);
    map.insert("A-D", 0b000111);
    map.insert("D&A", 0b000000);
    map.insert("D|A", 0b010101);
    map
});

// a = 1, each entry borrows the code of the A form it mirrors
const MEMORY_FORMS: [(&str, &str); 10] = [
    ("M", "A"),
    ("!M", "!A"),
    ("-M", "-A"),
    ("M+1", "A+1"),
    ("M-1", "A-1"),
    ("D+M", "D+A"),
    ("D-M", "D-A"),
    ("M-D", "A-D"),
    ("D&M", "D&A"),
    ("D|M", "D|A"),
];

static COMP_M: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    for (mem, reg) in MEMORY_FORMS {
        map.insert(mem, *COMP_A.get_by_left(reg).unwrap());
    }
    map
});

fn table(src: Src) -> &'static BiMap<&'static str, u8> {
    match src {
        Src::A => &*COMP_A,
        Src::M => &*COMP_M,
    }
}

/// Computation field of a compute instruction: the a-bit and the 6-bit ALU code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp {
    src: Src,
    code: u8,
}

impl Comp {
    /// Look up a mnemonic in the register table, then in the memory table.
    pub fn parse(s: &str) -> Result<Self, String> {
        [Src::A, Src::M]
            .into_iter()
            .find_map(|src| {
                table(src)
                    .get_by_left(s)
                    .map(|&code| Comp { src, code })
            })
            .ok_or_else(|| format!("Unknown comp: {s}"))
    }

    pub fn from_bits(src: Src, code: u8) -> Result<Self, String> {
        match table(src).get_by_right(&code) {
            Some(_) => Ok(Comp { src, code }),
            None => Err(format!("Undefined comp: a={} c={:06b}", u8::from(src), code)),
        }
    }

    pub fn src(&self) -> Src {
        self.src
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn mnemonic(&self) -> &'static str {
        *table(self.src).get_by_right(&self.code).unwrap()
    }

    /// a-bit followed by the 6 code bits (bits 3-9 of the word).
    pub fn bits(&self) -> u16 {
        (u8::from(self.src) as u16) << 6 | (self.code as u16 & 0b111111)
    }
}

impl std::fmt::Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_comp {
        ($($name:ident: $s:expr => ($src:expr, $code:expr),)*) => {
            $(
                #[test]
                fn $name() {
                    let comp = Comp::parse($s).unwrap();
                    assert_eq!(comp.src(), $src);
                    assert_eq!(comp.code(), $code);
                    assert_eq!(comp.mnemonic(), $s);
                }
            )*
        }
    }

    test_comp! {
        test_zero: "0" => (Src::A, 0b101010),
        test_one: "1" => (Src::A, 0b111111),
        test_neg_one: "-1" => (Src::A, 0b111010),
        test_d: "D" => (Src::A, 0b001100),
        test_a: "A" => (Src::A, 0b110000),
        test_not_d: "!D" => (Src::A, 0b001101),
        test_not_a: "!A" => (Src::A, 0b110001),
        test_neg_d: "-D" => (Src::A, 0b001111),
        test_neg_a: "-A" => (Src::A, 0b110011),
        test_d_inc: "D+1" => (Src::A, 0b011111),
        test_a_inc: "A+1" => (Src::A, 0b110111),
        test_d_dec: "D-1" => (Src::A, 0b001110),
        test_a_dec: "A-1" => (Src::A, 0b110010),
        test_d_add_a: "D+A" => (Src::A, 0b000010),
        test_d_sub_a: "D-A" => (Src::A, 0b010011),
        test_a_sub_d: "A-D" => (Src::A, 0b000111),
        test_d_and_a: "D&A" => (Src::A, 0b000000),
        test_d_or_a: "D|A" => (Src::A, 0b010101),
        test_m: "M" => (Src::M, 0b110000),
        test_not_m: "!M" => (Src::M, 0b110001),
        test_neg_m: "-M" => (Src::M, 0b110011),
        test_m_inc: "M+1" => (Src::M, 0b110111),
        test_m_dec: "M-1" => (Src::M, 0b110010),
        test_d_add_m: "D+M" => (Src::M, 0b000010),
        test_d_sub_m: "D-M" => (Src::M, 0b010011),
        test_m_sub_d: "M-D" => (Src::M, 0b000111),
        test_d_and_m: "D&M" => (Src::M, 0b000000),
        test_d_or_m: "D|M" => (Src::M, 0b010101),
    }

    #[test]
    fn test_tables_are_disjoint() {
        for (mnemonic, _) in COMP_M.iter() {
            assert!(COMP_A.get_by_left(mnemonic).is_none(), "{mnemonic}");
        }
        assert_eq!(COMP_A.len(), 18);
        assert_eq!(COMP_M.len(), 10);
    }

    #[test]
    fn test_memory_form_reuses_register_code() {
        for (mem, reg) in MEMORY_FORMS {
            let mem = Comp::parse(mem).unwrap();
            let reg = Comp::parse(reg).unwrap();
            assert_eq!(mem.code(), reg.code());
            assert_eq!(mem.bits(), reg.bits() | 1 << 6);
        }
    }

    #[test]
    fn test_unknown() {
        assert!(Comp::parse("A+D").is_err());
        assert!(Comp::parse("M+A").is_err());
        assert!(Comp::parse("").is_err());
        assert!(Comp::from_bits(Src::M, 0b101010).is_err());
        assert!(Comp::from_bits(Src::A, 0b101010).is_ok());
    }
}
