pub mod context;
pub mod emit;
pub mod encode;
pub mod error;
pub mod label;
pub mod line;
pub mod parser;
pub mod symbol;
pub mod util;

use context::AssemblerContext;
use encode::Resolved;
use error::LineError;
use line::Line;

/// Output of a successful run.
#[derive(Debug, Clone)]
pub struct Assembled {
    pub lines: Vec<Line>,
    pub resolved: Vec<Resolved>,
    pub ctx: AssemblerContext,
}

impl Assembled {
    pub fn words(&self) -> Vec<String> {
        self.resolved.iter().map(Resolved::word).collect()
    }
}

/// Run both passes over `src` with a fresh context.
pub fn assemble_program(src: &str) -> Result<Assembled, LineError> {
    let lines = Line::split(src);
    let mut ctx = AssemblerContext::new();
    label::collect_labels(&lines, &mut ctx)?;
    let resolved = encode::resolve(&lines, &mut ctx)?;
    Ok(Assembled {
        lines,
        resolved,
        ctx,
    })
}

/// Assemble `src` into its binary words, one per instruction.
pub fn assemble(src: &str) -> Result<Vec<String>, LineError> {
    Ok(assemble_program(src)?.words())
}
