use arch::symbol::MAX_ADDR;

use crate::{
    context::AssemblerContext,
    error::{Error, LineError},
    line::Line,
    parser::parse_label,
};

/// First pass: bind every `(LABEL)` to the address of the instruction after it.
///
/// Returns the number of labels found. Stops at the first malformed label.
pub fn collect_labels(lines: &[Line], ctx: &mut AssemblerContext) -> Result<usize, LineError> {
    let mut count = 0;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if line.is_label() {
            bind_label(line, ctx).map_err(|e| LineError::new(line.idx, &line.raw, e))?;
            count += 1;
        } else {
            ctx.pc = ctx.pc.saturating_add(1);
        }
    }
    Ok(count)
}

fn bind_label(line: &Line, ctx: &mut AssemblerContext) -> Result<(), Error> {
    let name = parse_label(&line.code)?;
    if line.trailing().is_some() {
        return Err(Error::MalformedLabel(line.raw.trim().to_string()));
    }
    if ctx.pc > MAX_ADDR {
        return Err(Error::AddressOutOfRange(name.to_string()));
    }
    ctx.symbols.bind(name, ctx.pc)
}
