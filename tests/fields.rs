use std::any::TypeId;

use trajfile::{TrajFile, TrrFile};

#[test]
fn coord_is_position_0() {
    assert_eq!(TrrFile::output_value_index("coord"), Some(0));
}

#[test]
fn time_is_position_1() {
    assert_eq!(TrrFile::output_value_index("time"), Some(1));
}

#[test]
fn box_is_position_3() {
    assert_eq!(TrrFile::output_value_index("box"), Some(3));
}

#[test]
fn step_is_not_named() {
    assert_eq!(TrrFile::output_value_index("step"), None);
}

#[test]
fn unknown_values_are_absent() {
    for value in ["lambda", "velocity", "boxvec", "", " coord", "coord "] {
        assert_eq!(
            TrrFile::output_value_index(value),
            None,
            "{value:?} should have no position"
        );
    }
}

#[test]
fn value_names_are_case_sensitive() {
    for value in ["Coord", "COORD", "Time", "TIME", "Box", "BOX"] {
        assert_eq!(
            TrrFile::output_value_index(value),
            None,
            "{value:?} should have no position"
        );
    }
}

#[test]
fn reader_type_is_stable() {
    assert_eq!(
        TypeId::of::<<TrrFile as TrajFile>::Reader>(),
        TypeId::of::<xdrfile::TRRTrajectory>()
    );
}

#[test]
fn lookups_are_pure() {
    // Interleave translations with reader type lookups, in scrambled order. Nothing should
    // change between rounds.
    for _ in 0..3 {
        assert_eq!(TrrFile::output_value_index("box"), Some(3));
        let _ = TypeId::of::<<TrrFile as TrajFile>::Reader>();
        assert_eq!(TrrFile::output_value_index("step"), None);
        assert_eq!(TrrFile::output_value_index("coord"), Some(0));
        assert_eq!(TrrFile::output_value_index("time"), Some(1));
    }
}
