use crate::symbol::SymbolTable;

/// All mutable state of one assembly run.
///
/// Created fresh per run and threaded through both passes.
#[derive(Debug, Clone, Default)]
pub struct AssemblerContext {
    pub symbols: SymbolTable,
    /// Address of the next instruction, advanced during label collection
    pub pc: u16,
}

impl AssemblerContext {
    pub fn new() -> Self {
        AssemblerContext {
            symbols: SymbolTable::new(),
            pc: 0,
        }
    }
}

#[test]
fn test_runs_do_not_share_state() {
    let mut first = AssemblerContext::new();
    first.symbols.allocate_variable("x").unwrap();
    first.pc = 3;

    let second = AssemblerContext::new();
    assert_eq!(second.pc, 0);
    assert_eq!(second.symbols.lookup("x"), None);
    assert_eq!(second.symbols.next_var(), 16);
}
