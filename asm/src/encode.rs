use arch::inst::Inst;

use crate::{
    context::AssemblerContext,
    error::{Error, LineError},
    line::Line,
    parser::{Imm, Stmt},
};

/// An instruction with every symbol resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// 0-based index of the source line
    pub line_idx: usize,
    /// ROM address of the instruction
    pub pc: u16,
    pub inst: Inst,
}

impl Resolved {
    pub fn word(&self) -> String {
        self.inst.word()
    }
}

/// Second pass: encode every instruction line, allocating variables on first use.
///
/// Expects the labels to be already collected into `ctx`.
pub fn resolve(lines: &[Line], ctx: &mut AssemblerContext) -> Result<Vec<Resolved>, LineError> {
    let mut resolved = vec![];
    let mut pc: u16 = 0;
    for line in lines {
        if line.is_empty() || line.is_label() {
            continue;
        }
        let inst = encode(line, ctx).map_err(|e| LineError::new(line.idx, &line.raw, e))?;
        resolved.push(Resolved {
            line_idx: line.idx,
            pc,
            inst,
        });
        pc = pc.saturating_add(1);
    }
    Ok(resolved)
}

fn encode(line: &Line, ctx: &mut AssemblerContext) -> Result<Inst, Error> {
    if line.trailing().is_some() {
        return Err(Error::MalformedInstruction(
            line.raw.trim().to_string(),
            "unexpected text after whitespace",
        ));
    }
    match Stmt::parse(&line.code)? {
        Stmt::Addr(Imm::Literal(value)) => Ok(Inst::A(value)),
        Stmt::Addr(Imm::Ident(name)) => Ok(Inst::A(ctx.symbols.allocate_variable(&name)?)),
        Stmt::Comp(dest, comp, jump) => Ok(Inst::C(dest, comp, jump)),
    }
}
