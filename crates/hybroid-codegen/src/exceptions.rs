//! Per-function exceptions to generic type rendering.
//!
//! The schema does not encode callback shapes, entity collections or resource
//! paths structurally, so the affected functions are listed here by their
//! mapped name. This is a finite list and is not meant to be inferred.

use crate::descriptor::{BasicKind, Descriptor, PathEnv};
use crate::types::ApiType;

/// Callback signatures accepted by host functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackSignature {
    /// `fn()`
    Update,
    /// `fn(entity)`
    EntityUpdate,
    /// `fn(entity, fixed, fixed)`
    WallCollision,
    /// `fn(entity, number, entity)`
    PlayerCollision,
    /// `fn(entity, number, WeaponType) -> bool`
    WeaponCollision,
}

impl CallbackSignature {
    pub fn for_function(name: &str) -> Option<Self> {
        match name {
            "AddUpdateCallback" => Some(CallbackSignature::Update),
            "SetEntityUpdateCallback" => Some(CallbackSignature::EntityUpdate),
            "SetEntityWallCollision" => Some(CallbackSignature::WallCollision),
            "SetEntityPlayerCollision" => Some(CallbackSignature::PlayerCollision),
            "SetEntityWeaponCollision" => Some(CallbackSignature::WeaponCollision),
            _ => None,
        }
    }

    pub fn descriptor(self, library: &str) -> Descriptor {
        let number = || Descriptor::Basic(BasicKind::Number);
        let (params, returns) = match self {
            CallbackSignature::Update => (vec![], vec![]),
            CallbackSignature::EntityUpdate => (vec![Descriptor::RawEntity], vec![]),
            CallbackSignature::WallCollision => (
                vec![
                    Descriptor::RawEntity,
                    Descriptor::FixedPoint,
                    Descriptor::FixedPoint,
                ],
                vec![],
            ),
            CallbackSignature::PlayerCollision => (
                vec![Descriptor::RawEntity, number(), Descriptor::RawEntity],
                vec![],
            ),
            CallbackSignature::WeaponCollision => (
                vec![
                    Descriptor::RawEntity,
                    number(),
                    Descriptor::enum_type(library, "WeaponType"),
                ],
                vec![Descriptor::Basic(BasicKind::Bool)],
            ),
        };

        Descriptor::FunctionType { params, returns }
    }
}

/// Descriptor forced by the enclosing function's name, if any.
///
/// Checked before the generic per-type rendering.
pub fn context_override(ty: ApiType, function: &str, library: &str) -> Option<Descriptor> {
    match ty {
        ApiType::List | ApiType::String => match function {
            "GetEntitiesInRadius" | "GetAllEntities" => Some(Descriptor::entity_list()),
            "SetEntityFlippingMeshes" | "SetEntityMesh" => Some(Descriptor::Path(PathEnv::Mesh)),
            "PlaySound" | "PlayAmbientSound" => Some(Descriptor::Path(PathEnv::Sound)),
            _ => None,
        },
        ApiType::Number if function == "GetEntityType" => {
            Some(Descriptor::enum_type(library, "EntityType"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("AddUpdateCallback", "NewFunctionType([]Type{}, []Type{})")]
    #[test_case(
        "SetEntityUpdateCallback",
        "NewFunctionType([]Type{&RawEntityType{}}, []Type{})"
    )]
    #[test_case(
        "SetEntityWallCollision",
        "NewFunctionType([]Type{&RawEntityType{}, NewFixedPointType(), NewFixedPointType()}, []Type{})"
    )]
    #[test_case(
        "SetEntityPlayerCollision",
        "NewFunctionType([]Type{&RawEntityType{}, NewBasicType(ast.Number), &RawEntityType{}}, []Type{})"
    )]
    #[test_case(
        "SetEntityWeaponCollision",
        r#"NewFunctionType([]Type{&RawEntityType{}, NewBasicType(ast.Number), NewEnumType("Pewpew", "WeaponType")}, []Type{NewBasicType(ast.Bool)})"#
    )]
    fn CallbackSignature___registered_function___renders(name: &str, expected: &str) {
        let signature = CallbackSignature::for_function(name).unwrap();

        assert_eq!(signature.descriptor("Pewpew").to_string(), expected);
    }

    #[test]
    fn CallbackSignature___unregistered_function___is_none() {
        assert!(CallbackSignature::for_function("AddWall").is_none());
    }

    #[test_case(ApiType::List, "GetAllEntities", Some(Descriptor::entity_list()))]
    #[test_case(ApiType::String, "SetEntityMesh", Some(Descriptor::Path(PathEnv::Mesh)))]
    #[test_case(ApiType::String, "PlayAmbientSound", Some(Descriptor::Path(PathEnv::Sound)))]
    #[test_case(ApiType::Number, "GetEntityType", Some(Descriptor::enum_type("Pewpew", "EntityType")))]
    #[test_case(ApiType::String, "Print", None)]
    #[test_case(ApiType::Bool, "GetAllEntities", None)]
    #[test_case(ApiType::Number, "GetEntityCount", None)]
    fn context_override___table(ty: ApiType, function: &str, expected: Option<Descriptor>) {
        assert_eq!(context_override(ty, function, "Pewpew"), expected);
    }
}
