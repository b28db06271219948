use super::*;

#[test]
fn ordering_is_line_column_bracket_kind() {
    let a = Violation::bracket(')', Position::new(1, 3), ViolationKind::WrongClosing);
    let b = Violation::bracket('(', Position::new(1, 1), ViolationKind::UnmatchedOpening);
    let c = Violation::bracket('(', Position::new(2, 1), ViolationKind::UnmatchedOpening);

    let mut violations = vec![c, a, b];
    sort_and_dedup(&mut violations);
    assert_eq!(violations, vec![b, a, c]);
}

#[test]
fn policy_records_sort_before_bracket_records_at_same_position() {
    // None bracket orders before Some(_) under the derived Ord.
    let policy = Violation::policy(Position::new(1, 1), ViolationKind::LineTooLong);
    let bracket = Violation::bracket('(', Position::new(1, 1), ViolationKind::UnmatchedOpening);

    let mut violations = vec![bracket, policy];
    sort_and_dedup(&mut violations);
    assert_eq!(violations, vec![policy, bracket]);
}

#[test]
fn duplicates_are_removed() {
    let v = Violation::bracket(')', Position::new(3, 7), ViolationKind::WrongClosing);
    let mut violations = vec![v, v, v];
    sort_and_dedup(&mut violations);
    assert_eq!(violations, vec![v]);
}

#[test]
fn is_policy_distinguishes_kinds() {
    assert!(Violation::policy(Position::new(1, 1), ViolationKind::ProgramTooLong).is_policy());
    assert!(Violation::policy(Position::new(1, 1), ViolationKind::LineTooLong).is_policy());
    assert!(
        Violation::bracket('#', Position::new(1, 1), ViolationKind::DisallowedDirective)
            .is_policy()
    );
    assert!(!Violation::bracket(')', Position::new(1, 1), ViolationKind::WrongClosing).is_policy());
}

#[test]
fn messages_name_the_condition() {
    assert_eq!(
        ViolationKind::WrongClosing.message(),
        "wrong closing bracket"
    );
    assert_eq!(
        ViolationKind::UnmatchedOpening.message(),
        "unmatched opening bracket"
    );
    assert!(ViolationKind::ProgramTooLong.message().contains("line count"));
    assert!(ViolationKind::LineTooLong.message().contains("length"));
    assert!(ViolationKind::DisallowedDirective.message().contains("directive"));
}

#[test]
fn serializes_with_flattened_position() {
    let v = Violation::bracket(')', Position::new(2, 5), ViolationKind::WrongClosing);
    let json = serde_json::to_value(v).expect("serialize");
    assert_eq!(json["line"], 2);
    assert_eq!(json["column"], 5);
    assert_eq!(json["bracket"], ")");
    assert_eq!(json["kind"], "wrong_closing");
}
