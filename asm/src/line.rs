//! Per-line parsing: one expanded source line becomes one `Line` record
//! carrying an optional label, the classified statement, and every
//! diagnostic the line produced.

use arch::op::Op;
use arch::word::{DATA_MAX, DATA_MIN};
use thiserror::Error;

use crate::operand::{classify, legal_label, parse_number, Operand};
use crate::tokenizer::{tokenize, Token};

/// Everything that can go wrong while parsing a single line. A line may
/// carry several of these at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("illegal label: `{0}`")]
    IllegalLabel(String),

    #[error("illegal command: `{0}`")]
    IllegalCommand(String),

    #[error("missing command after label")]
    MissingCommand,

    #[error("illegal use of commas")]
    IllegalCommas,

    #[error("too few operands")]
    TooFewOperands,

    #[error("too many operands")]
    TooManyOperands,

    #[error("illegal type of operand: `{0}`")]
    IllegalOperandType(String),

    #[error("illegal number: `{0}`")]
    IllegalNumber(String),

    #[error("illegal string")]
    IllegalString,
}

/// The classified payload of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Empty,
    Comment,
    Inst { op: Op, operands: Vec<Operand> },
    Directive(Directive),
    /// The command token matched nothing; the diagnostics carry the details.
    Invalid,
}

/// The four assembler directives with their parsed payloads. `Str` holds
/// the literal's content with the quotes already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Data(Vec<i32>),
    Str(String),
    Entry(String),
    Extern(String),
}

/// One parsed line of expanded source. Built fresh per line and consumed
/// immediately by the calling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: Option<String>,
    pub stmt: Stmt,
    pub errors: Vec<LineError>,
}

impl Line {
    /// Parse one line, accumulating every diagnostic rather than stopping
    /// at the first.
    pub fn parse(code: &str) -> Line {
        let mut errors = Vec::new();
        let tokens = tokenize(code);

        let first = match tokens.first() {
            Some(token) => token,
            None => {
                return Line {
                    label: None,
                    stmt: Stmt::Empty,
                    errors,
                }
            }
        };
        if first.text().starts_with(';') {
            return Line {
                label: None,
                stmt: Stmt::Comment,
                errors,
            };
        }

        let mut label = None;
        let mut rest = &tokens[..];
        if let Some(name) = first.text().strip_suffix(':') {
            if legal_label(name) {
                label = Some(name.to_string());
            } else {
                errors.push(LineError::IllegalLabel(name.to_string()));
            }
            rest = &tokens[1..];
        }

        let stmt = match rest.first() {
            None => {
                errors.push(LineError::MissingCommand);
                Stmt::Invalid
            }
            Some(command) => {
                let operands = &rest[1..];
                match command.text() {
                    ".data" => Stmt::Directive(parse_data(operands, &mut errors)),
                    ".string" => Stmt::Directive(parse_string(operands, &mut errors)),
                    ".entry" => {
                        Stmt::Directive(parse_label_directive(operands, &mut errors, Directive::Entry))
                    }
                    ".extern" => {
                        Stmt::Directive(parse_label_directive(operands, &mut errors, Directive::Extern))
                    }
                    command => match Op::parse(command) {
                        Ok(op) => Stmt::Inst {
                            op,
                            operands: parse_inst_operands(op, operands, &mut errors),
                        },
                        Err(_) => {
                            errors.push(LineError::IllegalCommand(command.to_string()));
                            Stmt::Invalid
                        }
                    },
                }
            }
        };

        Line { label, stmt, errors }
    }
}

/// Operands and commas must strictly alternate, with no leading or
/// trailing comma.
fn commas_ok(tokens: &[Token]) -> bool {
    if tokens.first() == Some(&Token::Comma) || tokens.last() == Some(&Token::Comma) {
        return false;
    }
    tokens
        .windows(2)
        .all(|pair| (pair[0] == Token::Comma) != (pair[1] == Token::Comma))
}

fn parse_inst_operands(op: Op, tokens: &[Token], errors: &mut Vec<LineError>) -> Vec<Operand> {
    if !tokens.is_empty() && !commas_ok(tokens) {
        errors.push(LineError::IllegalCommas);
    }

    let mut operands = Vec::new();
    let mut count = 0;
    for token in tokens {
        let word = match token {
            Token::Comma => continue,
            Token::Word(word) => word,
        };
        count += 1;
        if count > op.arity() {
            errors.push(LineError::TooManyOperands);
            break;
        }
        let is_dest = !(op.arity() == 2 && count == 1);
        let legal = if is_dest { op.dest_modes() } else { op.src_modes() };
        match classify(word) {
            Some(operand) if legal.contains(&operand.mode()) => operands.push(operand),
            _ => errors.push(LineError::IllegalOperandType(word.clone())),
        }
    }
    if count < op.arity() {
        errors.push(LineError::TooFewOperands);
    }
    operands
}

/// Shared operand-list shape checks. The raw token count (commas included)
/// is what limits single-operand directives, so a stray comma also trips
/// the count check.
fn directive_shape(tokens: &[Token], multi: bool, errors: &mut Vec<LineError>) {
    if tokens.is_empty() {
        errors.push(LineError::TooFewOperands);
    } else if !commas_ok(tokens) {
        errors.push(LineError::IllegalCommas);
    }
    if !multi && tokens.len() > 1 {
        errors.push(LineError::TooManyOperands);
    }
}

fn parse_data(tokens: &[Token], errors: &mut Vec<LineError>) -> Directive {
    directive_shape(tokens, true, errors);
    let mut values = Vec::new();
    for token in tokens {
        if let Token::Word(word) = token {
            match parse_number(word, DATA_MIN, DATA_MAX, true) {
                Some(value) => values.push(value),
                None => errors.push(LineError::IllegalNumber(word.clone())),
            }
        }
    }
    Directive::Data(values)
}

fn parse_string(tokens: &[Token], errors: &mut Vec<LineError>) -> Directive {
    directive_shape(tokens, false, errors);
    match tokens.first() {
        Some(Token::Word(word))
            if word.len() >= 2 && word.starts_with('"') && word.ends_with('"') =>
        {
            Directive::Str(word[1..word.len() - 1].to_string())
        }
        Some(_) => {
            errors.push(LineError::IllegalString);
            Directive::Str(String::new())
        }
        None => Directive::Str(String::new()),
    }
}

fn parse_label_directive(
    tokens: &[Token],
    errors: &mut Vec<LineError>,
    build: fn(String) -> Directive,
) -> Directive {
    directive_shape(tokens, false, errors);
    match tokens.first() {
        Some(Token::Word(word)) if legal_label(word) => build(word.clone()),
        Some(token) => {
            errors.push(LineError::IllegalLabel(token.text().to_string()));
            build(String::new())
        }
        None => build(String::new()),
    }
}
