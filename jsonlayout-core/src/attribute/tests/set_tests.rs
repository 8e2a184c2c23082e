use crate::attribute::{AccessAttribute, AttributeSet, EventAttribute};
use pretty_assertions::assert_eq;

#[test]
fn iteration_follows_catalogue_order() {
    // Arrange
    let set = AttributeSet::of(&[
        EventAttribute::Exception,
        EventAttribute::Timestamp,
        EventAttribute::Message,
    ]);

    // Act
    let order: Vec<_> = set.iter().collect();

    // Assert
    assert_eq!(
        order,
        vec![
            EventAttribute::Timestamp,
            EventAttribute::Message,
            EventAttribute::Exception,
        ]
    );
}

#[test]
fn insert_and_remove_are_idempotent() {
    let mut set = AttributeSet::<AccessAttribute>::empty();
    assert!(set.is_empty());

    set.insert(AccessAttribute::Method);
    set.insert(AccessAttribute::Method);
    assert_eq!(set.len(), 1);

    set.remove(AccessAttribute::Method);
    set.remove(AccessAttribute::Method);
    assert!(set.is_empty());
}

#[test]
fn all_contains_every_attribute() {
    let set = AttributeSet::<AccessAttribute>::all();

    assert_eq!(set.len(), 17);
    assert!(set.contains(AccessAttribute::UserAgent));
}

#[test]
fn with_and_without_build_new_sets() {
    let base = AttributeSet::<EventAttribute>::default();

    let with_context = base.with(EventAttribute::ContextName);
    let without_mdc = base.without(EventAttribute::Mdc);

    assert!(with_context.contains(EventAttribute::ContextName));
    assert!(!without_mdc.contains(EventAttribute::Mdc));
    assert!(base.contains(EventAttribute::Mdc));
}
