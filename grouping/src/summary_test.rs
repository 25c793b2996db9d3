use super::*;

fn summary(number: u32, group_size: u32) -> Summary {
    Summary::new(Inputs { number, group_size }).unwrap()
}

#[test]
fn twelve_by_three() {
    let s = summary(12, 3);
    assert!(s.divisible);
    assert_eq!((s.quotient, s.remainder), (4, 0));
    assert_eq!(s.divisors, vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(s.classification, Classification::Composite);
    assert_eq!(s.divisibility_message(), "Exact division! 12 is divisible by 3.");
    assert_eq!(s.primality_message(), "12 is a COMPOSITE number");
    assert_eq!(s.divisors_message(), "Divisors of 12: 1, 2, 3, 4, 6, 12");
}

#[test]
fn seven_by_three() {
    let s = summary(7, 3);
    assert!(!s.divisible);
    assert_eq!((s.quotient, s.remainder), (2, 1));
    assert_eq!(s.classification, Classification::Prime);
    assert_eq!(s.divisibility_message(), "Not an exact division. 7 is not divisible by 3.");
    assert_eq!(s.primality_message(), "7 is a PRIME number");
    assert_eq!(s.divisors_message(), "Divisors of 7: 1, 7");
}

#[test]
fn one_by_one() {
    let s = summary(1, 1);
    assert!(s.divisible);
    assert_eq!(s.divisors, vec![1]);
    assert_eq!(s.classification, Classification::Composite);
    assert_eq!(s.primality_message(), "1 is a COMPOSITE number");
    assert_eq!(s.primality_color(), palette::COMPOSITE_TEXT);
}

#[test]
fn seventeen_by_hundred() {
    let s = summary(17, 100);
    assert!(!s.divisible);
    assert_eq!((s.quotient, s.remainder), (0, 17));
    assert_eq!(s.divisors, vec![1, 17]);
}

#[test]
fn colors_follow_outcome() {
    assert_eq!(summary(12, 3).divisibility_color(), palette::DIVISIBLE_TEXT);
    assert_eq!(summary(7, 3).divisibility_color(), palette::NOT_DIVISIBLE_TEXT);
    assert_eq!(summary(7, 3).primality_color(), palette::PRIME_TEXT);
    assert_eq!(summary(12, 3).primality_color(), palette::COMPOSITE_TEXT);
}

#[test]
fn zero_group_size_is_invalid() {
    let err = Summary::new(Inputs { number: 12, group_size: 0 }).unwrap_err();
    assert!(matches!(err, GroupingError::InvalidArgument(_)));
}

#[test]
fn visualize_hundred_by_ten() {
    let v = visualize(Inputs { number: 100, group_size: 10 }, &LayoutParams::default()).unwrap();
    assert!(v.summary.divisible);
    assert_eq!(v.layout.group_sizes(), vec![10; 10]);
    for d in [1, 2, 4, 5, 10, 20, 25, 50, 100] {
        assert!(v.summary.divisors.contains(&d));
    }
}

#[test]
fn visualize_is_repeatable() {
    let inputs = Inputs { number: 37, group_size: 6 };
    let params = LayoutParams::default();
    assert_eq!(visualize(inputs, &params).unwrap(), visualize(inputs, &params).unwrap());
}

#[test]
fn visualization_json_shape() {
    let v = visualize(Inputs { number: 7, group_size: 3 }, &LayoutParams::default()).unwrap();
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["summary"]["classification"], "prime");
    assert_eq!(json["summary"]["divisors"], serde_json::json!([1, 7]));
    assert_eq!(json["layout"]["groups"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["layout"]["groups"][2]["complete"], false);
    assert_eq!(json["layout"]["extent"]["width"], 800.0);
}
