//! Manual identifier overrides.
//!
//! Mechanical case conversion of these names would be misleading in Hybroid
//! source, so they are spelled out. Override entries always take precedence
//! over computed conversions.

/// Host function name → Hybroid name.
pub const FUNCTIONS: &[(&str, &str)] = &[
    ("increase_score_of_player", "IncreasePlayerScore"),
    ("increase_score_streak_of_player", "IncreasePlayerScoreStreak"),
    ("get_score_of_player", "GetPlayerScore"),
    ("get_score_streak_level", "GetPlayerScoreStreak"),
    ("get_player_configuration", "GetPlayerConfig"),
    ("add_damage_to_player_ship", "DamageShip"),
    ("entity_get_is_alive", "IsEntityAlive"),
    ("entity_get_is_started_to_be_destroyed", "IsEntityBeingDestroyed"),
    ("new_customizable_entity", "NewEntity"),
    ("new_baf", "NewYellowBAF"),
    ("new_baf_red", "NewRedBAF"),
    ("new_baf_blue", "NewBlueBAF"),
    ("new_ufo", "NewUFO"),
    ("get_entities_colliding_with_disk", "GetEntitiesInRadius"),
    ("customizable_entity_add_rotation_to_mesh", "AddRotationToEntityMesh"),
    ("customizable_entity_configure_music_response", "SetEntityMusicResponse"),
    ("customizable_entity_set_mesh_xyz", "SetEntityMeshPosition"),
    ("customizable_entity_set_mesh_xyz_scale", "SetEntityMeshXYZScale"),
    ("customizable_entity_configure_wall_collision", "SetEntityWallCollision"),
    ("ufo_set_enable_collisions_with_walls", "SetUFOWallCollision"),
    ("rolling_cube_set_enable_collisions_with_walls", "SetRollingCubeWallCollision"),
    ("entity_destroy", "DestroyEntity"),
    ("customizable_entity_start_spawning", "SpawnEntity"),
    ("customizable_entity_start_exploding", "ExplodeEntity"),
];

/// Host enum name → Hybroid name.
pub const ENUMS: &[(&str, &str)] = &[("CannonFrequency", "CannonFreq")];

/// (host enum name, host variant) → Hybroid variant.
pub const VARIANTS: &[(&str, &str, &str)] = &[
    ("EntityType", "BAF", "YellowBAF"),
    ("EntityType", "BAF_BLUE", "BlueBAF"),
    ("EntityType", "BAF_RED", "RedBAF"),
    ("EntityType", "UFO", "UFO"),
    ("EntityType", "UFO_BULLET", "UFOBullet"),
    ("MothershipType", "THREE_CORNERS", "Triangle"),
    ("MothershipType", "FOUR_CORNERS", "Square"),
    ("MothershipType", "FIVE_CORNERS", "Pentagon"),
    ("MothershipType", "SIX_CORNERS", "Hexagon"),
    ("MothershipType", "SEVEN_CORNERS", "Heptagon"),
    ("CannonFrequency", "FREQ_7_5", "Freq7_5"),
];

pub fn function(key: &str) -> Option<&'static str> {
    FUNCTIONS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn enum_name(key: &str) -> Option<&'static str> {
    ENUMS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn variant(enum_key: &str, key: &str) -> Option<&'static str> {
    VARIANTS
        .iter()
        .find(|(e, k, _)| *e == enum_key && *k == key)
        .map(|(_, _, v)| *v)
}
