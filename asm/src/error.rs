use color_print::ceprintln;
use thiserror::Error;

/// Instruction field a mnemonic was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Comp,
    Dest,
    Jump,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Comp => write!(f, "comp"),
            Field::Dest => write!(f, "dest"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Malformed address reference: `{0}`")]
    MalformedVariable(String),

    #[error("Unknown {field} mnemonic: `{mnemonic}`")]
    UnknownMnemonic { field: Field, mnemonic: String },

    #[error("Invalid instruction: nothing to encode")]
    InvalidInstruction,

    #[error("Malformed instruction: `{0}` ({1})")]
    MalformedInstruction(String, &'static str),

    #[error("Not a decimal literal: `{0}`")]
    NonDecimalLiteral(String),

    #[error("Address out of range: `{0}` (allowed 0 to 32767)")]
    AddressOutOfRange(String),

    #[error("Re-defined symbol: `{name}` is already {old}, cannot bind it to {new}")]
    RedefinedSymbol { name: String, old: u16, new: u16 },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    Serialize(#[source] serde_yaml::Error),
}

/// An error raised while processing one source line.
#[derive(Error, Debug)]
#[error("line {}: {}", .line_idx + 1, .error)]
pub struct LineError {
    /// 0-based index of the line in the source
    pub line_idx: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl LineError {
    pub fn new(line_idx: usize, raw: &str, error: Error) -> Self {
        LineError {
            line_idx,
            raw: raw.to_string(),
            error,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        ceprintln!("<red,bold>error</>: {}", self.error);

        // line_idx is 0-based, display as 1-based
        let line_num = self.line_idx + 1;
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        ceprintln!("      <blue>|</>");
    }
}
