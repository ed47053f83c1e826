use std::io::Read;

use color_print::{ceprintln, cformat};
use hackasm::{
    context::AssemblerContext,
    emit::Emitter,
    encode,
    error::{Error, LineError},
    label,
    line::Line,
    util,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.hack")]
    output: String,

    /// Print the symbol table instead of writing output
    #[clap(short, long)]
    symbols: bool,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

enum Failure {
    Line(LineError),
    Io(Error),
}

impl From<LineError> for Failure {
    fn from(e: LineError) -> Self {
        Failure::Line(e)
    }
}

impl From<Error> for Failure {
    fn from(e: Error) -> Self {
        Failure::Io(e)
    }
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(failure) = run(&args) {
        match failure {
            Failure::Line(e) => e.print_diag(&args.input),
            Failure::Io(e) => ceprintln!("<red,bold>error</>: {}", e),
        }
        std::process::exit(1);
    }
}

fn read_source(path: &str) -> Result<String, Error> {
    let mut file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut src = String::new();
    file.read_to_string(&mut src).map_err(Error::FileRead)?;
    Ok(src)
}

fn run(args: &Args) -> Result<(), Failure> {
    // `--symbols` keeps stdout for the YAML table alone
    let progress = |msg: String| {
        if !args.symbols {
            println!("{}", msg);
        }
    };

    progress(cformat!("<bold>Hack Assembler</>"));

    progress(format!("1. Read File and Normalize Lines"));
    progress(format!("  < {}", args.input));
    let lines = Line::split(&read_source(&args.input)?);
    let mut ctx = AssemblerContext::new();

    progress(format!("2. Collect Labels"));
    let labels = label::collect_labels(&lines, &mut ctx)?;
    progress(format!("  {} labels", labels));

    let resolved = if args.symbols {
        let resolved = encode::resolve(&lines, &mut ctx)?;
        print!("{}", ctx.symbols.to_yaml()?);
        resolved
    } else {
        println!("3. Resolve Symbols & Generate Binary");
        let resolved = encode::resolve(&lines, &mut ctx)?;
        println!("  > {}", args.output);
        let mut emitter = Emitter::create(&args.output)?;
        for r in &resolved {
            emitter.emit(&r.word())?;
        }
        println!("  {} words, {} symbols", emitter.count(), ctx.symbols.len());
        emitter.finish()?;
        resolved
    };

    if args.dump {
        util::print_dump(&args.input, &lines, &resolved);
        util::print_symbols(&ctx.symbols);
    }
    Ok(())
}
