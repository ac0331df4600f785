use passmint::charset::CharClass;
use passmint::generator::{generate, GeneratorError};
use passmint::models::PasswordOptions;

fn all_classes(length: usize) -> PasswordOptions {
    PasswordOptions {
        length,
        include_uppercase: true,
        include_lowercase: true,
        include_numbers: true,
        include_special: true,
    }
}

#[test]
fn test_generated_length_matches_request() {
    let password = generate(&all_classes(16)).unwrap();
    assert_eq!(password.chars().count(), 16);
}

#[test]
fn test_default_options() {
    let password = generate(&PasswordOptions::default()).unwrap();
    assert_eq!(password.chars().count(), 12);
    assert!(!password.chars().any(|c| CharClass::Special.contains(c)));
}

#[test]
fn test_every_enabled_class_is_represented() {
    for _ in 0..50 {
        let password = generate(&all_classes(4)).unwrap();
        assert!(password.chars().any(|c| CharClass::Uppercase.contains(c)));
        assert!(password.chars().any(|c| CharClass::Lowercase.contains(c)));
        assert!(password.chars().any(|c| CharClass::Digit.contains(c)));
        assert!(password.chars().any(|c| CharClass::Special.contains(c)));
    }
}

#[test]
fn test_disabled_classes_never_appear() {
    let options = PasswordOptions {
        length: 32,
        include_uppercase: false,
        include_lowercase: true,
        include_numbers: false,
        include_special: false,
    };
    for _ in 0..20 {
        let password = generate(&options).unwrap();
        assert!(password.chars().all(|c| CharClass::Lowercase.contains(c)));
    }
}

#[test]
fn test_class_coverage_wins_over_requested_length() {
    let options = PasswordOptions {
        length: 1,
        include_uppercase: true,
        include_lowercase: false,
        include_numbers: true,
        include_special: false,
    };
    let password = generate(&options).unwrap();
    assert_eq!(password.chars().count(), 2);
    assert!(password.chars().any(|c| CharClass::Uppercase.contains(c)));
    assert!(password.chars().any(|c| CharClass::Digit.contains(c)));
}

#[test]
fn test_consecutive_calls_differ() {
    let options = all_classes(16);
    let first = generate(&options).unwrap();
    let second = generate(&options).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_zero_length_is_rejected() {
    let result = generate(&all_classes(0));
    assert!(matches!(result, Err(GeneratorError::InvalidLength)));
}

#[test]
fn test_all_classes_disabled_is_rejected() {
    let options = PasswordOptions {
        length: 12,
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_special: false,
    };
    let result = generate(&options);
    assert!(matches!(result, Err(GeneratorError::NoClassesSelected)));
}
