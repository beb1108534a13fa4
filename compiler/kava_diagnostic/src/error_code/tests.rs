use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E1010.as_str(), "E1010");
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_categories() {
    assert_eq!(ErrorCode::E1001.category(), Category::LexicalGap);
    assert_eq!(ErrorCode::E1008.category(), Category::LexicalGap);
    assert_eq!(ErrorCode::E1007.category(), Category::StructuralTruncation);
    assert_eq!(ErrorCode::E1010.category(), Category::AnnotationArgumentFailure);
    assert_eq!(ErrorCode::E1011.category(), Category::AnnotationArgumentFailure);
    assert_eq!(ErrorCode::E1012.category(), Category::AssistAmbiguity);
}

#[test]
fn test_only_assist_ambiguity_is_a_note() {
    for code in ErrorCode::ALL {
        let expected = if code.category() == Category::AssistAmbiguity {
            Severity::Note
        } else {
            Severity::Error
        };
        assert_eq!(code.severity(), expected, "{code}");
    }
}
