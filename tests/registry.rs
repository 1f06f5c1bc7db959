use argus::{Descriptor, Kind, Registry};
use checkito::*;
use std::{error, result};

type Result = result::Result<(), Box<dyn error::Error>>;
const COUNT: usize = 1000;

#[test]
fn disjoint_options_register_one_by_one() -> Result {
    (
        regex!("[a-m]"),
        regex!("[n-z]"),
        regex!("[a-m]{2,8}"),
        regex!("[n-z]{2,8}"),
    )
        .check(COUNT, |(left, right, first, second)| {
            let mut registry = Registry::new();
            let left = Descriptor::normal()
                .short(left.chars().next().unwrap_or('a'))
                .long(first.clone());
            let right = Descriptor::value()
                .short(right.chars().next().unwrap_or('z'))
                .long(second.clone());
            registry.add(left).is_ok()
                && registry.add(right).is_ok()
                && registry.descriptors().count() == 2
        })?;
    Ok(())
}

#[test]
fn disjoint_options_register_as_a_batch() -> Result {
    (regex!("[a-m]{2,8}"), regex!("[n-z]{2,8}"), regex!("[A-Z]")).check(
        COUNT,
        |(first, second, short)| {
            let mut registry = Registry::new();
            registry
                .add_all([
                    Descriptor::normal().long(first.clone()),
                    Descriptor::normal().long(second.clone()),
                    Descriptor::help().short(short.chars().next().unwrap_or('H')),
                ])
                .map_or(false, |handles| handles.len() == 3)
        },
    )?;
    Ok(())
}

#[test]
fn shared_long_command_is_refused() -> Result {
    (regex!("[a-z]{2,8}"), regex!("[a-z]")).check(COUNT, |(long, short)| {
        let short = short.chars().next().unwrap_or('a');
        let mut registry = Registry::new();
        registry
            .add(Descriptor::normal().short(short).long(long.clone()))
            .unwrap();
        let single = registry.add(Descriptor::value().long(long.clone())).is_err();
        let batch = registry
            .add_all([
                Descriptor::normal().long("unrelated"),
                Descriptor::normal().short(short),
            ])
            .is_err();
        prove!(single && batch && registry.descriptors().count() == 1)
    })?;
    Ok(())
}

#[test]
fn collision_inside_a_batch_is_refused() -> Result {
    (regex!("[a-z]{2,8}"), regex!("[0-9]")).check(COUNT, |(long, short)| {
        let short = short.chars().next().unwrap_or('0');
        let mut registry = Registry::new();
        let rejected = registry.add_all([
            Descriptor::normal().short(short),
            Descriptor::normal().long(long.clone()),
            Descriptor::version().short(short),
        ]);
        rejected.map_or_else(|descriptors| descriptors.len() == 3, |_| false)
            && registry.is_empty()
    })?;
    Ok(())
}

#[test]
fn rejected_descriptor_is_handed_back() {
    let mut registry = Registry::new();
    registry.add(Descriptor::normal().short('q')).unwrap();
    let rejected = registry
        .add(
            Descriptor::value()
                .short('q')
                .long("quiet")
                .description("Collides."),
        )
        .unwrap_err();
    assert_eq!(rejected.kind(), Kind::Value);
    assert_eq!(rejected.get_description(), "Collides.");
}

#[test]
fn clones_with_disjoint_commands_register() -> Result {
    (regex!("[a-m]"), regex!("[n-z]")).check(COUNT, |(left, right)| {
        let left = left.chars().next().unwrap_or('a');
        let right = right.chars().next().unwrap_or('z');
        let template = Descriptor::value().description("Shared text.");

        let mut single = Registry::new();
        let one_by_one = single.add(template.clone().short(left)).is_ok()
            && single.add(template.clone().short(right)).is_ok();

        let mut batch = Registry::new();
        let together = batch
            .add_all([template.clone().short(left), template.clone().short(right)])
            .map_or(false, |handles| handles.len() == 2);
        prove!(one_by_one && together && single.descriptors().count() == 2)
    })?;
    Ok(())
}

#[test]
fn clones_sharing_a_command_are_refused() {
    let mut registry = Registry::new();
    let descriptor = Descriptor::normal().short('a');
    let mut clone = descriptor.clone();
    assert!(clone.add_long("other"));
    assert!(registry.add_all([descriptor, clone]).is_err());
    assert!(registry.is_empty());
}

#[test]
fn cleared_registry_accepts_old_commands() {
    let mut registry = Registry::new();
    registry
        .add_all([
            Descriptor::normal().short('a'),
            Descriptor::normal().long("all"),
        ])
        .unwrap();
    registry.clear();
    assert!(registry.add(Descriptor::normal().short('a').long("all")).is_ok());
}
