//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Variable declarations and type descriptors
//! - Value reduction over operator occurrences
//! - Function calls
//! - Scope and end-of-input errors

use std::rc::Rc;

use crate::{
    ast::{ast::Program, call::Argument},
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    lexer::lexer::tokenize,
    types::{kinds::ValueKind, value::Value},
};

use super::{
    expr::{create_anonymous_variable, infer_literal_kind, infer_token_kind, reduce_expression},
    parser::parse,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.wi".to_string()))?;
    parse(tokens, source, Rc::new("test.wi".to_string()))
}

fn declared(program: &Program, name: &str) -> (ValueKind, Value) {
    let variable = program.find_variable(name).unwrap();
    (variable.kind(), variable.value().unwrap().clone())
}

#[test]
fn test_parse_integer_declaration() {
    let program = parse_source("let x = 5;").unwrap();

    assert_eq!(program.len(), 1);
    assert_eq!(declared(&program, "x"), (ValueKind::I64, Value::Integer(5)));
}

#[test]
fn test_parse_float_declaration() {
    let program = parse_source("let x = 5.0;").unwrap();

    assert_eq!(declared(&program, "x"), (ValueKind::F64, Value::Float(5.0)));
}

#[test]
fn test_parse_string_declaration() {
    let program = parse_source("let greeting = \"hello world\";").unwrap();

    assert_eq!(
        declared(&program, "greeting"),
        (ValueKind::String, Value::String("hello world".to_string()))
    );
}

#[test]
fn test_parse_explicit_type() {
    let program = parse_source("let small = 100 as i8;").unwrap();

    assert_eq!(declared(&program, "small"), (ValueKind::I8, Value::Integer(100)));
}

#[test]
fn test_parse_explicit_float_type_on_integer_literal() {
    let program = parse_source("let ratio = 2 as f32;").unwrap();

    assert_eq!(declared(&program, "ratio"), (ValueKind::F32, Value::Float(2.0)));
}

#[test]
fn test_parse_explicit_type_out_of_bounds() {
    let error = parse_source("let x = 300 as i8;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Validation);
    assert!(matches!(error.get_error(), ErrorImpl::ValueTypeMismatch { .. }));
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_parse_string_as_number_type() {
    let error = parse_source("let x = \"abc\" as u8;").unwrap_err();

    assert!(matches!(error.get_error(), ErrorImpl::ValueTypeMismatch { .. }));
}

#[test]
fn test_parse_unknown_type() {
    let error = parse_source("let x = 5 as int;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnknownType {
            type_: "int".to_string()
        }
    );
    assert_eq!(error.get_position().0, 13);
}

#[test]
fn test_parse_invalid_type_descriptor() {
    let error = parse_source("let x = 5 as 8;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::InvalidTypeDescriptor {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_parse_misplaced_type_descriptor() {
    let error = parse_source("let x = 5 as i8 + 1;").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedTypeDescriptor);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_addition() {
    let program = parse_source("let x = 5 + 3;").unwrap();

    assert_eq!(declared(&program, "x"), (ValueKind::I64, Value::Integer(8)));
}

#[test]
fn test_parse_operator_without_spaces() {
    let program = parse_source("let x = 10-4;").unwrap();

    assert_eq!(declared(&program, "x"), (ValueKind::I64, Value::Integer(6)));
}

#[test]
fn test_parse_float_arithmetic() {
    let program = parse_source("let x = 1.5 * 2.0;").unwrap();

    assert_eq!(declared(&program, "x"), (ValueKind::F64, Value::Float(3.0)));
}

#[test]
fn test_parse_chained_operators_are_irreducible() {
    let error = parse_source("let x = 2 + 3 + 4;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::IrreducibleExpression { remaining: 2 }
    );
}

#[test]
fn test_parse_two_literals_are_irreducible() {
    let error = parse_source("let x = 1 2;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::IrreducibleExpression { remaining: 2 }
    );
}

#[test]
fn test_parse_empty_value() {
    let error = parse_source("let x = ;").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::EmptyExpression);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_parse_integer_division_by_zero() {
    let error = parse_source("let x = 1 / 0;").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_float_division_by_zero() {
    let error = parse_source("let x = 1.0 / 0.0;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Validation);
}

#[test]
fn test_parse_reference_as_value() {
    let program = parse_source("let x = 5; let y = x;").unwrap();

    assert_eq!(declared(&program, "y"), (ValueKind::I64, Value::Integer(5)));
}

#[test]
fn test_parse_name_cannot_receive_an_action() {
    let error = parse_source("let x = 2; let y = x + 1;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "+".to_string()
        }
    );
    assert_eq!(error.get_position().0, 21);
}

#[test]
fn test_parse_name_after_operator_is_dropped() {
    let program = parse_source("let x = 2; let y = 5 + x;").unwrap();

    assert_eq!(declared(&program, "y"), (ValueKind::I64, Value::Integer(5)));
}

#[test]
fn test_parse_undeclared_name_after_operator_is_dropped() {
    let program = parse_source("let y = 1 + z;").unwrap();

    assert_eq!(declared(&program, "y"), (ValueKind::I64, Value::Integer(1)));
}

#[test]
fn test_parse_operator_without_right_hand_side() {
    let program = parse_source("let y = 7 *;").unwrap();

    assert_eq!(declared(&program, "y"), (ValueKind::I64, Value::Integer(7)));
}

#[test]
fn test_parse_undeclared_reference() {
    let error = parse_source("let y = x;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_parse_operator_on_string_is_not_an_action() {
    let error = parse_source("let s = \"a\" + \"b\";").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "+".to_string()
        }
    );
}

#[test]
fn test_parse_argument_type_mismatch() {
    let error = parse_source("let x = 1 + \"a\";").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::ArgumentTypeMatchError { .. }
    ));
}

#[test]
fn test_parse_incalculable_token() {
    let error = parse_source("let x = (5);").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::IncalculableToken {
            token: "(".to_string()
        }
    );
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_parse_duplicate_declaration() {
    let error = parse_source("let x = 1; let x = 2;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::NameAlreadyDeclared {
            name: "x".to_string()
        }
    );
    assert_eq!(error.get_position().0, 15);
}

#[test]
fn test_parse_missing_identifier() {
    let error = parse_source("let = 5;").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
}

#[test]
fn test_parse_missing_semicolon() {
    let source = "let x = 5 ";
    let error = parse_source(source).unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::UnexpectedEndOfFile { .. }
    ));
    assert_eq!(error.get_position().0 as usize, source.len());
}

#[test]
fn test_parse_call_with_literals() {
    let program = parse_source("print(\"hi\", 42);").unwrap();
    let call = program.body[0].as_call().unwrap();

    assert_eq!(call.function_name(), Some("print"));
    assert_eq!(call.arguments().len(), 2);
    assert_eq!(
        call.arguments()[0].value(&program),
        Some(&Value::String("hi".to_string()))
    );
    assert_eq!(call.arguments()[1].kind(&program), Ok(ValueKind::I64));
}

#[test]
fn test_parse_call_with_reference() {
    let program = parse_source("let x = 5; f(x);").unwrap();
    let call = program.body[1].as_call().unwrap();

    match &call.arguments()[0] {
        Argument::Reference(reference) => assert_eq!(reference.name(), "x"),
        other => panic!("expected a reference, got {:?}", other),
    }
    assert_eq!(call.arguments()[0].value(&program), Some(&Value::Integer(5)));
}

#[test]
fn test_parse_calls_without_semicolons() {
    let program = parse_source("f(1) g(2)").unwrap();

    assert_eq!(program.len(), 2);
    assert_eq!(program.body[0].as_call().unwrap().function_name(), Some("f"));
    assert_eq!(program.body[1].as_call().unwrap().function_name(), Some("g"));
}

#[test]
fn test_parse_calls_with_semicolons() {
    let program = parse_source("f(1); g(2);").unwrap();

    assert_eq!(program.len(), 2);
    assert!(program.iter().all(|node| node.as_call().is_some()));
}

#[test]
fn test_parse_call_without_arguments() {
    let program = parse_source("run();").unwrap();

    assert!(program.body[0].as_call().unwrap().arguments().is_empty());
}

#[test]
fn test_parse_call_arguments_without_commas() {
    let program = parse_source("f(1 2);").unwrap();

    assert_eq!(program.body[0].as_call().unwrap().arguments().len(), 2);
}

#[test]
fn test_parse_call_with_undeclared_reference() {
    let error = parse_source("f(x);").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "x".to_string()
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_call_name_collides_with_variable() {
    let error = parse_source("let f = 1; f(2);").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::NameAlreadyDeclared {
            name: "f".to_string()
        }
    );
}

#[test]
fn test_parse_call_unclosed() {
    let error = parse_source("f(1, \"a\"").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::UnexpectedEndOfFile { .. }
    ));
}

#[test]
fn test_parse_call_bad_argument() {
    let error = parse_source("f(;);").unwrap_err();

    assert!(matches!(
        error.get_error(),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
}

#[test]
fn test_parse_bare_identifier() {
    let error = parse_source("x;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "x".to_string()
        }
    );
}

#[test]
fn test_parse_unexpected_top_level_token() {
    let error = parse_source("5;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "5".to_string()
        }
    );
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.is_empty());
}

#[test]
fn test_reduce_expression_directly() {
    let source = "5 + 3";
    let tokens = tokenize(format!("{};", source), None).unwrap();
    let window = &tokens[..3];
    let reduced =
        reduce_expression(window, &Program::new(), window[0].span.start.clone()).unwrap();

    assert_eq!(reduced.kind(), ValueKind::I64);
    assert_eq!(reduced.value(), Some(&Value::Integer(8)));
    assert_eq!(reduced.name(), None);
}

#[test]
fn test_infer_kinds() {
    let tokens = tokenize("1 1.5 \"s\" x;".to_string(), None).unwrap();

    assert_eq!(infer_token_kind(&tokens[0]).unwrap(), ValueKind::I64);
    assert_eq!(infer_token_kind(&tokens[1]).unwrap(), ValueKind::F64);
    assert_eq!(infer_token_kind(&tokens[2]).unwrap(), ValueKind::String);
    assert!(infer_token_kind(&tokens[3]).is_err());

    assert_eq!(infer_literal_kind(&Value::Float(5.0)), ValueKind::F64);
    assert_eq!(infer_literal_kind(&Value::Integer(5)), ValueKind::I64);
    assert_eq!(infer_literal_kind(&Value::Bool(true)), ValueKind::Bool);
}

#[test]
fn test_create_anonymous_variable() {
    let tokens = tokenize("2.5;".to_string(), None).unwrap();
    let variable = create_anonymous_variable(&tokens[0]).unwrap();

    assert_eq!(variable.kind(), ValueKind::F64);
    assert_eq!(variable.value(), Some(&Value::Float(2.5)));
    assert_eq!(variable.actions().len(), 4);
}
