#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_camel_case tests

#[test]
fn to_camel_case___converts_snake_case() {
    assert_eq!(to_camel_case("player_idx"), "playerIdx");
    assert_eq!(to_camel_case("camera_x_override"), "cameraXOverride");
}

#[test]
fn to_camel_case___handles_simple_words() {
    assert_eq!(to_camel_case("shield"), "shield");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn to_camel_case___handles_consecutive_underscores() {
    assert_eq!(to_camel_case("foo__bar"), "fooBar");
    assert_eq!(to_camel_case("trailing_"), "trailing");
}

// to_pascal_case tests

#[test]
fn to_pascal_case___converts_snake_case() {
    assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
}

#[test]
fn to_pascal_case___preserves_existing_capitals() {
    assert_eq!(to_pascal_case("EntityType"), "EntityType");
    assert_eq!(to_pascal_case("CannonFrequency"), "CannonFrequency");
}

#[test]
fn to_pascal_case___handles_empty() {
    assert_eq!(to_pascal_case(""), "");
}

// to_title_case tests

#[test_case("PLAYER_BULLET", "PlayerBullet")]
#[test_case("VERY_LARGE", "VeryLarge")]
#[test_case("FREQ_7_5", "Freq75")]
#[test_case("get_score_of_player", "GetScoreOfPlayer")]
#[test_case("mesh_xyz_scale", "MeshXyzScale")]
#[test_case("EntityType", "Entitytype")]
#[test_case("", "")]
fn to_title_case___converts(input: &str, expected: &str) {
    assert_eq!(to_title_case(input), expected);
}

#[test]
fn to_title_case___capitalizes_after_digits() {
    assert_eq!(to_title_case("add_3d_model"), "Add3DModel");
}

// to_host_case tests

#[test_case("print", "Print")]
#[test_case("add_wall", "AddWall")]
#[test_case("entity_get_position", "GetEntityPosition")]
#[test_case("entity_set_radius", "SetEntityRadius")]
#[test_case("customizable_entity_set_mesh_color", "SetEntityMeshColor")]
#[test_case("customizable_entity_get_tag", "GetEntityTag")]
#[test_case("customizable_entity_skip_mesh_attributes_interpolation", "SkipEntityMeshAttributesInterpolation")]
#[test_case("customizable_entity_set_player_collision_callback", "SetEntityPlayerCollision")]
#[test_case("configure_player_ship_weapon", "ConfigureShipWeapon")]
#[test_case("new_player_ship", "NewShip")]
#[test_case("fixedpoint_to_int", "FixedToInt")]
fn to_host_case___converts(input: &str, expected: &str) {
    assert_eq!(to_host_case(input), expected);
}

// CaseConvention tests

#[test_case(CaseConvention::Title, "BAF_BLUE", "BafBlue")]
#[test_case(CaseConvention::Pascal, "BombType", "BombType")]
#[test_case(CaseConvention::Camel, "has_lost", "hasLost")]
#[test_case(CaseConvention::Host, "entity_move", "EntityMove")]
fn CaseConvention___apply___dispatches(convention: CaseConvention, input: &str, expected: &str) {
    assert_eq!(convention.apply(input), expected);
}

// camel_case_references tests

#[test]
fn camel_case_references___converts_wrapped_identifiers() {
    let text = "Sets `has_lost` and `camera_distance`.";

    assert_eq!(
        camel_case_references(text),
        "Sets `hasLost` and `cameraDistance`."
    );
}

#[test]
fn camel_case_references___leaves_unwrapped_text_alone() {
    let text = "player_idx is not wrapped, `player_idx` is";

    assert_eq!(
        camel_case_references(text),
        "player_idx is not wrapped, `playerIdx` is"
    );
}

#[test]
fn camel_case_references___handles_text_without_references() {
    assert_eq!(camel_case_references("Plain text."), "Plain text.");
    assert_eq!(camel_case_references(""), "");
}
