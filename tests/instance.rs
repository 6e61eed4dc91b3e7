use psmc_core::{FormatError, Instance};

const SAMPLE: &str = "3 2 2\n1 1 1\n5 3\n1 2\n2 3\n";

#[test]
fn test_parse_sample() {
    let instance: Instance = SAMPLE.parse().unwrap();
    assert_eq!(instance.num_elements(), 3);
    assert_eq!(instance.num_sets(), 2);
    assert_eq!(instance.threshold(), 2);
    assert_eq!(instance.requirement(1), Some(1));
    assert_eq!(instance.requirement(4), None);
    assert_eq!(instance.requirement(0), None);
    assert_eq!(instance.cost(1), Some(5));
    assert_eq!(instance.cost(2), Some(3));
    assert_eq!(instance.cost(3), None);
    assert_eq!(
        instance.members(2).unwrap().iter().copied().collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert_eq!(instance.containing_sets(), vec![vec![1], vec![1, 2], vec![2]]);
}

#[test]
fn test_parse_without_trailing_newline() {
    let instance: Instance = SAMPLE.trim_end().parse().unwrap();
    assert_eq!(instance, SAMPLE.parse().unwrap());
}

#[test]
fn test_trailing_blank_lines_are_ignored() {
    let text = format!("{}\n\n", SAMPLE);
    assert!(text.parse::<Instance>().is_ok());
}

#[test]
fn test_empty_line_is_empty_set() {
    let instance: Instance = "3 2 1\n1 1 1\n1 1\n\n1 2 3".parse().unwrap();
    assert!(instance.members(1).unwrap().is_empty());
    assert_eq!(instance.members(2).unwrap().len(), 3);
}

#[test]
fn test_duplicate_membership_is_collapsed() {
    let instance: Instance = "2 1 1\n1 1\n4\n1 1 2".parse().unwrap();
    assert_eq!(instance.members(1).unwrap().len(), 2);
}

#[test]
fn test_empty_input() {
    assert_eq!("".parse::<Instance>(), Err(FormatError::Empty));
    assert_eq!("\n  \n".parse::<Instance>(), Err(FormatError::Empty));
}

#[test]
fn test_non_integer_token() {
    assert_eq!(
        "3 2 2\n1 one 1\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::NotAnInteger {
            line: 2,
            token: "one".to_string()
        })
    );
    assert!(matches!(
        "3 2 2\n1 1 1\n5 3\n1 2.5\n2 3".parse::<Instance>(),
        Err(FormatError::NotAnInteger { line: 4, .. })
    ));
}

#[test]
fn test_wrong_token_counts() {
    assert_eq!(
        "3 2\n1 1 1\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::WrongTokenCount {
            line: 1,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        "3 2 2\n1 1\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::WrongTokenCount {
            line: 2,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        "3 2 2\n1 1 1\n5 3 1\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::WrongTokenCount {
            line: 3,
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_wrong_set_line_count() {
    assert_eq!(
        "3 2 2\n1 1 1\n5 3\n1 2".parse::<Instance>(),
        Err(FormatError::WrongSetCount {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        "3 2 2\n1 1 1\n5 3\n1 2\n2 3\n1\n".parse::<Instance>(),
        Err(FormatError::WrongSetCount {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_final_newline_ends_an_empty_last_set() {
    let instance: Instance = "3 2 2\n1 1 1\n5 3\n1 2\n".parse().unwrap();
    assert_eq!(instance.members(1).unwrap().len(), 2);
    assert!(instance.members(2).unwrap().is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let instance: Instance = "3 2 2\r\n1 1 1\r\n5 3\r\n1 2\r\n2 3\r\n".parse().unwrap();
    assert_eq!(instance, SAMPLE.parse().unwrap());
}

#[test]
fn test_out_of_range_element() {
    assert_eq!(
        "3 2 2\n1 1 1\n5 3\n1 2\n2 4".parse::<Instance>(),
        Err(FormatError::UnknownElement {
            set: 2,
            element: 4,
            num_elements: 3
        })
    );
    assert!(matches!(
        "3 2 2\n1 1 1\n5 3\n0 2\n2 3".parse::<Instance>(),
        Err(FormatError::OutOfRange {
            line: 4,
            what: "element id",
            ..
        })
    ));
}

#[test]
fn test_value_ranges() {
    assert!(matches!(
        "3 2 0\n1 1 1\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::OutOfRange {
            what: "threshold",
            ..
        })
    ));
    assert!(matches!(
        "3 2 2\n1 0 1\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::OutOfRange {
            what: "requirement",
            ..
        })
    ));
    assert!(matches!(
        "3 2 2\n1 1 1\n5 -3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::OutOfRange { what: "cost", .. })
    ));
    assert!(matches!(
        "0 2 2\n\n5 3\n1 2\n2 3".parse::<Instance>(),
        Err(FormatError::OutOfRange {
            what: "number of elements",
            ..
        })
    ));
}

#[test]
fn test_threshold_above_universe_is_allowed() {
    let instance: Instance = "3 2 5\n1 1 1\n5 3\n1 2\n2 3".parse().unwrap();
    assert_eq!(instance.threshold(), 5);
}

#[test]
fn test_new_rejects_mismatched_members() {
    assert_eq!(
        Instance::new(1, vec![1, 1], vec![2, 3], vec![vec![1]]),
        Err(FormatError::WrongSetCount {
            expected: 2,
            found: 1
        })
    );
    assert!(Instance::new(1, vec![1, 1], vec![2], vec![vec![3]]).is_err());
}
