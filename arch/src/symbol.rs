/// Base address of the memory-mapped screen buffer.
pub const SCREEN: u16 = 0x4000;

/// Address of the memory-mapped keyboard register.
pub const KBD: u16 = 0x6000;

/// First RAM slot handed out to variables. R0-R15 sit below it.
pub const VAR_BASE: u16 = 16;

/// Largest value an address word can carry (15 bits).
pub const MAX_ADDR: u16 = 0x7FFF;

/// Symbols every program starts with.
///
/// SP, LCL, ARG, THIS and THAT are the VM aliases of R0-R4 and resolve to the
/// same addresses.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

#[test]
fn test_predefined() {
    let get = |key: &str| PREDEFINED.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
    assert_eq!(get("SP"), get("R0"));
    assert_eq!(get("LCL"), get("R1"));
    assert_eq!(get("THAT"), Some(4));
    assert_eq!(get("SCREEN"), Some(16384));
    assert_eq!(get("KBD"), Some(24576));
    assert!(PREDEFINED.iter().all(|(_, v)| *v <= MAX_ADDR));
}
