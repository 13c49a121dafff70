//! Tests for RegistrationService

use rstest::rstest;

use zoodesk::application::services::RegistrationService;
use zoodesk::domain::{AnimalKind, RegistrationError};
use zoodesk::util::testing;

fn service() -> RegistrationService {
    testing::init_test_setup();
    RegistrationService::new()
}

#[test]
fn given_mammal_when_describing_then_header_sound_and_run() {
    // Arrange
    let mut service = service();

    // Act
    service.register("Leo", "5", "Mammal").unwrap();
    let reports = service.describe_all();

    // Assert
    assert_eq!(reports.len(), 1);
    assert_eq!(
        reports[0].lines(),
        ["Leo, Age: 5", "Leo makes a mammal sound.", "Leo is running."]
    );
}

#[test]
fn given_amphibian_when_describing_then_swim_precedes_jump() {
    let mut service = service();

    service.register("Freddy", "2", "Amphibian").unwrap();

    assert_eq!(
        service.describe_all()[0].behaviors,
        [
            "Freddy makes an amphibian sound.",
            "Freddy is swimming.",
            "Freddy jumps out of the water.",
        ]
    );
}

#[rstest]
#[case("Bird", "Tweety makes a bird sound.", "Tweety is flying.")]
#[case("Reptile", "Tweety makes a reptile sound.", "Tweety is biting.")]
#[case("Fish", "Tweety makes a bubbling sound.", "Tweety is swimming.")]
#[case("Insect", "Tweety makes an insect sound.", "Tweety is flying.")]
fn given_kind_when_describing_then_fixed_behaviors(
    #[case] kind: &str,
    #[case] sound: &str,
    #[case] action: &str,
) {
    let mut service = service();

    service.register("Tweety", "1", kind).unwrap();

    assert_eq!(service.describe_all()[0].behaviors, [sound, action]);
}

#[rstest]
#[case("BIRD")]
#[case("bird")]
#[case("Bird")]
#[case("bIrD")]
fn given_any_case_kind_when_registering_then_succeeds(#[case] kind: &str) {
    let mut service = service();

    let animal = service.register("Polly", "3", kind).unwrap();

    assert_eq!(animal.kind(), AnimalKind::Bird);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("12.5")]
#[case(" 5")]
#[case("99999999999")]
fn given_unparseable_age_when_registering_then_invalid_age(#[case] age: &str) {
    let mut service = service();
    service.register("first", "1", "fish").unwrap();

    let result = service.register("Leo", age, "mammal");

    assert!(
        matches!(result, Err(RegistrationError::InvalidAge { ref input, .. }) if input == age),
        "got {result:?}"
    );
    assert_eq!(service.registry().len(), 1);
}

#[rstest]
#[case("Dinosaur")]
#[case("")]
#[case("mammals")]
#[case("bird ")]
fn given_unknown_kind_when_registering_then_invalid_kind(#[case] kind: &str) {
    let mut service = service();

    let result = service.register("Rex", "4", kind);

    assert_eq!(result, Err(RegistrationError::InvalidKind(kind.to_string())));
    assert!(service.registry().is_empty());
}

#[test]
fn given_bad_age_and_bad_kind_when_registering_then_age_reported_first() {
    let mut service = service();

    let result = service.register("Rex", "old", "Dinosaur");

    assert!(matches!(result, Err(RegistrationError::InvalidAge { .. })));
}

#[test]
fn given_negative_and_signed_ages_when_registering_then_accepted() {
    let mut service = service();

    assert_eq!(service.register("a", "-4", "fish").unwrap().age(), -4);
    assert_eq!(service.register("b", "+7", "fish").unwrap().age(), 7);
}

#[test]
fn given_duplicate_and_empty_names_when_registering_then_all_kept() {
    let mut service = service();

    service.register("Leo", "5", "mammal").unwrap();
    service.register("Leo", "5", "mammal").unwrap();
    service.register("", "0", "insect").unwrap();

    let reports = service.describe_all();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[2].lines(), [", Age: 0", " makes an insect sound.", " is flying."]);
}

#[test]
fn given_several_animals_when_describing_then_registration_order() {
    let mut service = service();

    for (name, kind) in [("c", "fish"), ("a", "bird"), ("b", "reptile")] {
        service.register(name, "1", kind).unwrap();
    }

    let names: Vec<_> = service.describe_all().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn given_no_registration_between_queries_when_describing_then_identical() {
    let mut service = service();
    service.register("Leo", "5", "mammal").unwrap();

    assert_eq!(service.describe_all(), service.describe_all());
}

#[test]
fn given_fresh_service_when_describing_then_empty() {
    assert!(service().describe_all().is_empty());
}

#[test]
fn given_name_with_spaces_when_registering_then_used_verbatim() {
    let mut service = service();

    let animal = service.register("  Big Leo ", "5", "mammal").unwrap();

    assert_eq!(animal.name(), "  Big Leo ");
    assert_eq!(service.describe_all()[0].header(), "  Big Leo , Age: 5");
}
