use color_print::cformat;

use crate::{encode::Resolved, line::Line, symbol::SymbolTable};

/// Listing of the whole source: ROM address and word next to every instruction.
pub fn print_dump(path: &str, lines: &[Line], resolved: &[Resolved]) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(25),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    let mut insts = resolved.iter().peekable();
    for line in lines {
        let line_num = line.idx + 1;
        let comment = comment_of(&line.raw)
            .map(|c| cformat!(" <dim>{}</>", c))
            .unwrap_or_default();

        let body = match insts.next_if(|r| r.line_idx == line.idx) {
            Some(r) => format!(
                "[{:04X}] {} | {:>4}:   {}{}",
                r.pc,
                r.word(),
                line_num,
                r.inst.cformat(),
                comment
            ),
            None if line.is_label() => {
                let label = cformat!("<g>{}</>", line.code);
                format!("{:25}| {:>4}: {}{}", "", line_num, label, comment)
            }
            None => format!("{:25}| {:>4}: {}", "", line_num, comment.trim_start()),
        };
        println!("{}", body);
    }
    println!("-------------------------+-----------------------------------------------------");
}

/// Symbol table after both passes, one `name: address` per line.
pub fn print_symbols(symbols: &SymbolTable) {
    for (name, addr) in symbols.iter() {
        println!("{}", cformat!("  <c>0x{:04X}</> {}", addr, name));
    }
}

fn comment_of(raw: &str) -> Option<&str> {
    raw.find("//").map(|idx| raw[idx..].trim_end())
}
