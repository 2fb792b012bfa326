use anyhow::Result;

use framesim::common::types::PageId;
use framesim::sequence::parser::{ParseError, parse_sequence};

#[test]
fn test_parse_single_reference() -> Result<()> {
    assert_eq!(parse_sequence("42")?, vec![42]);
    Ok(())
}

#[test]
fn test_parse_every_separator_kind() -> Result<()> {
    // Commas, semicolons, spaces and tabs all split the same way
    assert_eq!(parse_sequence("1,2,3")?, vec![1, 2, 3]);
    assert_eq!(parse_sequence("1;2;3")?, vec![1, 2, 3]);
    assert_eq!(parse_sequence("1 2 3")?, vec![1, 2, 3]);
    assert_eq!(parse_sequence("1\t2\n3")?, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_parse_collapses_separator_runs() -> Result<()> {
    assert_eq!(parse_sequence("1, 2;;3  4")?, vec![1, 2, 3, 4]);
    assert_eq!(parse_sequence(",,1,,2,,")?, vec![1, 2]);
    Ok(())
}

#[test]
fn test_parse_empty_inputs() -> Result<()> {
    assert_eq!(parse_sequence("")?, Vec::<PageId>::new());
    assert_eq!(parse_sequence("   ")?, Vec::<PageId>::new());
    assert_eq!(parse_sequence(" ; , ; ")?, Vec::<PageId>::new());
    Ok(())
}

#[test]
fn test_parse_signed_references() -> Result<()> {
    assert_eq!(parse_sequence("-1,-1,2")?, vec![-1, -1, 2]);
    assert_eq!(parse_sequence("+5, -5")?, vec![5, -5]);
    Ok(())
}

#[test]
fn test_parse_full_integer_range() -> Result<()> {
    let input = format!("{},{}", PageId::MIN, PageId::MAX);
    assert_eq!(parse_sequence(&input)?, vec![PageId::MIN, PageId::MAX]);
    Ok(())
}

#[test]
fn test_parse_error_names_offending_token() {
    let result = parse_sequence("1,x,3");

    match result {
        Err(ParseError::InvalidReference(token)) => {
            assert_eq!(token, "x");
        }
        other => panic!("Expected InvalidReference error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_is_displayable() {
    let err = parse_sequence("7,page9").unwrap_err();
    assert!(err.to_string().contains("'page9'"));
}

#[test]
fn test_parse_rejects_non_integer_shapes() {
    for input in ["1.5", "0x10", "12a", "-", "--3", "1 2 three"] {
        assert!(
            parse_sequence(input).is_err(),
            "Expected '{}' to be rejected",
            input
        );
    }
}

#[test]
fn test_parse_stops_at_first_bad_token() {
    // The error reports the first offending token, not a later one
    match parse_sequence("1,bad,worse,2") {
        Err(ParseError::InvalidReference(token)) => assert_eq!(token, "bad"),
        other => panic!("Expected InvalidReference error, got {:?}", other),
    }
}
