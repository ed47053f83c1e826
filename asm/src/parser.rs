use arch::{comp::Comp, dest::Dest, jump::Jump, symbol::MAX_ADDR};

use crate::error::{Error, Field};

// ----------------------------------------------------------------------------
// Statement

/// A normalized, non-label line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@value` or `@symbol`
    Addr(Imm),
    /// `dest=comp;jump`
    Comp(Dest, Comp, Jump),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if code.is_empty() {
            return Err(Error::InvalidInstruction);
        }
        if code.starts_with('@') {
            return Ok(Stmt::Addr(Imm::parse_reference(code)?));
        }

        let fields = Fields::split(code)?;
        let comp = Comp::parse(fields.comp).map_err(|_| Error::UnknownMnemonic {
            field: Field::Comp,
            mnemonic: fields.comp.to_string(),
        })?;
        let dest = match fields.dest {
            Some(dest) => Dest::parse(dest).map_err(|_| Error::UnknownMnemonic {
                field: Field::Dest,
                mnemonic: dest.to_string(),
            })?,
            None => Dest::Null,
        };
        let jump = match fields.jump {
            Some(jump) => Jump::parse(jump).map_err(|_| Error::UnknownMnemonic {
                field: Field::Jump,
                mnemonic: jump.to_string(),
            })?,
            None => Jump::Null,
        };
        Ok(Stmt::Comp(dest, comp, jump))
    }
}

// ----------------------------------------------------------------------------
// Compute instruction fields

/// The three mnemonics of `dest=comp;jump`, not yet looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub dest: Option<&'a str>,
    pub comp: &'a str,
    pub jump: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Before any separator: dest or comp
    Head,
    /// After `=`
    Comp,
    /// After `;`
    Jump,
}

impl<'a> Fields<'a> {
    /// Single left-to-right scan: at most one `=`, at most one `;`, and `=` first.
    pub fn split(code: &'a str) -> Result<Self, Error> {
        let malformed = |why| Error::MalformedInstruction(code.to_string(), why);

        let mut state = Scan::Head;
        let mut dest = None;
        let mut comp_start = 0;
        let mut comp_end = code.len();
        let mut jump = None;

        for (idx, c) in code.char_indices() {
            state = match (state, c) {
                (Scan::Head, '=') => {
                    dest = Some(&code[..idx]);
                    comp_start = idx + 1;
                    Scan::Comp
                }
                (Scan::Head | Scan::Comp, ';') => {
                    comp_end = idx;
                    jump = Some(&code[idx + 1..]);
                    Scan::Jump
                }
                (Scan::Comp, '=') => return Err(malformed("more than one `=`")),
                (Scan::Jump, '=') => return Err(malformed("`=` after `;`")),
                (Scan::Jump, ';') => return Err(malformed("more than one `;`")),
                (state, _) => state,
            };
        }

        let comp = &code[comp_start..comp_end];
        if dest == Some("") {
            return Err(malformed("empty dest"));
        }
        if comp.is_empty() {
            return Err(malformed("empty comp"));
        }
        if jump == Some("") {
            return Err(malformed("empty jump"));
        }
        Ok(Fields { dest, comp, jump })
    }
}

// ----------------------------------------------------------------------------
// Immidiate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    /// Parse the operand of an address-reference line (`@...`).
    pub fn parse_reference(code: &str) -> Result<Imm, Error> {
        match code.strip_prefix('@') {
            Some(token) if !token.is_empty() => Imm::parse(token),
            _ => Err(Error::MalformedVariable(code.to_string())),
        }
    }

    pub fn parse(token: &str) -> Result<Imm, Error> {
        if is_decimal_literal(token) {
            let value = parse_decimal(token)?;
            Ok(Imm::Literal(check_addr(value, token)?))
        } else {
            Ok(Imm::Ident(token.to_string()))
        }
    }
}

// ----------------------------------------------------------------------------
// Label

/// Parse `(NAME)` and return `NAME`.
pub fn parse_label(code: &str) -> Result<&str, Error> {
    let malformed = || Error::MalformedLabel(code.to_string());

    let inner = code.strip_prefix('(').ok_or_else(malformed)?;
    let (name, tail) = inner.split_once(')').ok_or_else(malformed)?;
    let tail = tail.trim_start();

    if name.is_empty()
        || name.contains(|c: char| c == '(' || c.is_whitespace())
        || name.contains("//")
        || !(tail.is_empty() || tail.starts_with("//"))
    {
        return Err(malformed());
    }
    Ok(name)
}

// ----------------------------------------------------------------------------
// Numbers

/// Optional leading `-` followed by at least one ASCII digit.
pub fn is_decimal_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn parse_decimal(token: &str) -> Result<i64, Error> {
    let (sign, digits) = match token.strip_prefix('-') {
        Some(digits) => (-1, digits),
        None => (1, token),
    };
    if digits.is_empty() {
        return Err(Error::NonDecimalLiteral(token.to_string()));
    }
    let value = digits.chars().try_fold(0i64, |acc, c| {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| Error::NonDecimalLiteral(token.to_string()))?;
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(digit as i64))
            .ok_or_else(|| Error::AddressOutOfRange(token.to_string()))
    })?;
    Ok(sign * value)
}

/// Address words carry 15 bits.
pub fn check_addr(value: i64, token: &str) -> Result<u16, Error> {
    if (0..=MAX_ADDR as i64).contains(&value) {
        Ok(value as u16)
    } else {
        Err(Error::AddressOutOfRange(token.to_string()))
    }
}
