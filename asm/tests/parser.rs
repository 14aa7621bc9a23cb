use arch::op::Op;
use arch::reg::Reg;
use asm24::line::{Directive, Line, LineError, Stmt};
use asm24::operand::Operand;

fn inst(line: &Line) -> (Op, &[Operand]) {
    match &line.stmt {
        Stmt::Inst { op, operands } => (*op, operands.as_slice()),
        other => panic!("expected an instruction, got {other:?}"),
    }
}

#[test]
fn empty_and_comment_lines() {
    assert_eq!(Line::parse("").stmt, Stmt::Empty);
    assert_eq!(Line::parse("   \t").stmt, Stmt::Empty);
    assert_eq!(Line::parse("; whole line comment").stmt, Stmt::Comment);
    assert_eq!(Line::parse(";no space").stmt, Stmt::Comment);
}

#[test]
fn label_and_instruction() {
    let line = Line::parse("MAIN: mov #1, r2");
    assert_eq!(line.label.as_deref(), Some("MAIN"));
    assert!(line.errors.is_empty());
    let (op, operands) = inst(&line);
    assert_eq!(op, Op::MOV);
    assert_eq!(
        operands,
        [Operand::Immediate(1), Operand::Register(Reg::R2)]
    );
}

#[test]
fn illegal_label_is_reported_but_skipped_past() {
    let line = Line::parse("1st: stop");
    assert_eq!(line.label, None);
    assert_eq!(line.errors, [LineError::IllegalLabel("1st".to_string())]);
    assert_eq!(inst(&line).0, Op::STOP);

    // reserved words cannot label a line
    let line = Line::parse("mov: stop");
    assert_eq!(line.errors, [LineError::IllegalLabel("mov".to_string())]);
}

#[test]
fn label_alone_is_a_missing_command() {
    let line = Line::parse("MAIN:");
    assert_eq!(line.label.as_deref(), Some("MAIN"));
    assert_eq!(line.errors, [LineError::MissingCommand]);
    assert_eq!(line.stmt, Stmt::Invalid);
}

#[test]
fn unknown_commands_are_rejected() {
    let line = Line::parse("frobnicate r1");
    assert_eq!(
        line.errors,
        [LineError::IllegalCommand("frobnicate".to_string())]
    );
    assert_eq!(line.stmt, Stmt::Invalid);

    // directives must match exactly, dot included
    let line = Line::parse("data 1, 2");
    assert_eq!(line.errors, [LineError::IllegalCommand("data".to_string())]);
}

#[test]
fn comma_structure_is_rejected_exactly_once() {
    for source in ["cmp r1,,r2", "clr ,r1", "clr r1,"] {
        let line = Line::parse(source);
        assert_eq!(line.errors, [LineError::IllegalCommas], "case: {source}");
    }
}

#[test]
fn operand_counts_are_checked() {
    assert_eq!(
        Line::parse("mov r1").errors,
        [LineError::TooFewOperands]
    );
    assert_eq!(
        Line::parse("clr r1, r2").errors,
        [LineError::TooManyOperands]
    );
    assert!(Line::parse("rts").errors.is_empty());
    assert_eq!(
        Line::parse("rts r1").errors,
        [LineError::TooManyOperands]
    );
}

#[test]
fn operand_mode_legality_is_per_position() {
    // immediates may not be written to
    let line = Line::parse("mov r1, #5");
    assert_eq!(
        line.errors,
        [LineError::IllegalOperandType("#5".to_string())]
    );
    // only the legal operand is recorded
    assert_eq!(inst(&line).1, [Operand::Register(Reg::R1)]);

    // lea takes its source from memory only
    let line = Line::parse("lea r1, r2");
    assert_eq!(
        line.errors,
        [LineError::IllegalOperandType("r1".to_string())]
    );

    // cmp accepts an immediate destination
    assert!(Line::parse("cmp r1, #5").errors.is_empty());

    // jump targets are direct or relative
    assert!(Line::parse("jmp LOOP").errors.is_empty());
    assert!(Line::parse("jmp &LOOP").errors.is_empty());
    assert_eq!(
        Line::parse("jmp #5").errors,
        [LineError::IllegalOperandType("#5".to_string())]
    );
}

#[test]
fn out_of_range_immediates_fit_no_mode() {
    let line = Line::parse("prn #1048576");
    assert_eq!(
        line.errors,
        [LineError::IllegalOperandType("#1048576".to_string())]
    );
    assert!(Line::parse("prn #1048575").errors.is_empty());
    assert!(Line::parse("prn #-1048576").errors.is_empty());
}

#[test]
fn register_like_names_can_be_labels() {
    // r8 and r07 are not registers, so they read as direct labels
    let line = Line::parse("clr r8");
    let (_, operands) = inst(&line);
    assert_eq!(operands, [Operand::Direct("r8".to_string())]);
    let line = Line::parse("clr r07");
    let (_, operands) = inst(&line);
    assert_eq!(operands, [Operand::Direct("r07".to_string())]);
}

#[test]
fn data_directive_collects_numbers() {
    let line = Line::parse("LIST: .data 7, -57, +17");
    assert!(line.errors.is_empty());
    assert_eq!(
        line.stmt,
        Stmt::Directive(Directive::Data(vec![7, -57, 17]))
    );
}

#[test]
fn data_directive_reports_each_bad_number() {
    let line = Line::parse(".data 1, x, 8388608, 2");
    assert_eq!(
        line.errors,
        [
            LineError::IllegalNumber("x".to_string()),
            LineError::IllegalNumber("8388608".to_string()),
        ]
    );
    // the good values are still recorded
    assert_eq!(line.stmt, Stmt::Directive(Directive::Data(vec![1, 2])));
}

#[test]
fn string_directive_takes_one_quoted_literal() {
    let line = Line::parse("MSG: .string \"hello world\"");
    assert!(line.errors.is_empty());
    assert_eq!(
        line.stmt,
        Stmt::Directive(Directive::Str("hello world".to_string()))
    );

    assert_eq!(
        Line::parse(".string hello").errors,
        [LineError::IllegalString]
    );
    assert_eq!(Line::parse(".string").errors, [LineError::TooFewOperands]);

    // quote swallowing keeps this one token, inner quotes and all
    let line = Line::parse(".string \"a\" \"b\"");
    assert!(line.errors.is_empty());
    assert_eq!(
        line.stmt,
        Stmt::Directive(Directive::Str("a\" \"b".to_string()))
    );

    assert_eq!(
        Line::parse(".string abc def").errors,
        [
            LineError::IllegalCommas,
            LineError::TooManyOperands,
            LineError::IllegalString,
        ]
    );
}

#[test]
fn entry_and_extern_take_one_label() {
    assert_eq!(
        Line::parse(".entry MAIN").stmt,
        Stmt::Directive(Directive::Entry("MAIN".to_string()))
    );
    assert_eq!(
        Line::parse(".extern W").stmt,
        Stmt::Directive(Directive::Extern("W".to_string()))
    );
    assert_eq!(
        Line::parse(".entry r3").errors,
        [LineError::IllegalLabel("r3".to_string())]
    );
    assert_eq!(
        Line::parse(".entry A, B").errors,
        [LineError::TooManyOperands]
    );
}
