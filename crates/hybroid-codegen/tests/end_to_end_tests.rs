//! End-to-end generation tests
//!
//! Drives whole documents and alert batches through the public entry points
//! and checks the rendered Go and markdown.

#![allow(non_snake_case)]

use hybroid_codegen::schema::{RawFunction, parse_document};
use hybroid_codegen::{
    CodegenError, EnumModel, FunctionModel, GenerationContext, GeneratorConfig, LibraryConfig,
    emitter, generate_alerts, generate_libraries,
};

fn pewpew_ctx() -> GenerationContext {
    GenerationContext::for_library("Pewpew", &GeneratorConfig::default())
}

#[test]
fn get_score_of_player___maps_and_documents_override() {
    let raw: RawFunction = serde_json::from_str(
        r#"{"func_name": "get_score_of_player", "comment": "",
            "parameters": [{"name": "player_idx", "type": "int32"}],
            "return_types": [{"type": "int32"}]}"#,
    )
    .unwrap();
    let mut ctx = pewpew_ctx();

    let function = FunctionModel::from_raw(&raw, &mut ctx).unwrap();

    assert_eq!(function.name, "GetPlayerScore");
    assert!(emitter::function_docs(&function).contains("GetPlayerScore(number playerIdx) -> number"));
}

#[test]
fn EntityType___variants___use_overrides_in_declaration_order() {
    let raw = serde_json::from_str(r#"{"name": "EntityType", "values": ["BAF", "UFO"]}"#).unwrap();
    let mut ctx = pewpew_ctx();

    let model = EnumModel::from_raw(&raw, &mut ctx).unwrap();

    assert_eq!(model.variants, vec!["YellowBAF", "UFO"]);
    assert!(emitter::enum_entry(&model, "Pewpew").ends_with(r#"true, "YellowBAF", "UFO")"#));
}

#[test]
fn UnexpectedToken___message_and_id_accessors() {
    let code = generate_alerts(
        r#"[{"name": "UnexpectedToken", "type": "Syntax", "message": "unexpected {}",
             "message_format": ["token"]}]"#,
        "Syntax",
        &GeneratorConfig::default(),
    )
    .unwrap();

    assert!(code.contains("func (ut *UnexpectedToken) GetMessage() string {\n\treturn fmt.Sprintf(\"unexpected {}\", ut.token)\n}"));
    assert!(code.contains("func (ut *UnexpectedToken) GetID() string {\n\treturn \"hyb001S\"\n}"));
    assert!(code.contains("func (ut *UnexpectedToken) GetAlertType() AlertType {\n\treturn Syntax\n}"));
    assert!(code.contains("import (\n\t\"fmt\"\n)"));
}

#[test]
fn document___renders_every_artifact() {
    let json = r#"[
        {
            "functions": [
                {"func_name": "add_update_callback", "comment": "Calls `callback` every tick.",
                 "parameters": [{"name": "callback", "type": "callback"}], "return_types": []},
                {"func_name": "get_player_configuration", "comment": "",
                 "parameters": [{"name": "player_index", "type": "int32"}],
                 "return_types": [{"type": "map", "map_entries": {
                     "has_lost": {"type": "boolean"},
                     "shield": {"type": "int32"}
                 }}]},
                {"func_name": "new_asteroid_with_size", "comment": "",
                 "parameters": [
                     {"name": "x", "type": "fixedpoint"},
                     {"name": "size", "type": "int32", "enum": "AsteroidSize"}
                 ],
                 "return_types": [{"type": "entityid"}]}
            ],
            "enums": [
                {"name": "AsteroidSize", "values": ["SMALL", "VERY_LARGE"]},
                {"name": "CannonFrequency", "values": ["FREQ_30", "FREQ_7_5"]}
            ]
        }
    ]"#;

    let libraries = generate_libraries(json, &GeneratorConfig::default()).unwrap();
    let (library, artifacts) = &libraries[0];

    assert_eq!(library, &LibraryConfig::new("Pewpew", "pewpew", 1));

    let reg = &artifacts.registration;
    assert!(reg.contains("Value: NewFunction(NewFunctionType([]Type{}, []Type{})), IsPub: true,"));
    assert!(reg.contains(
        r#"Value: NewFunction(NewBasicType(ast.Number)).WithReturns(NewStructType([]*VariableVal{{Name: "has_lost", Value: &BoolVal{}}, {Name: "shield", Value: &NumberVal{}}}, true)), IsPub: true,"#
    ));
    assert!(reg.contains(
        r#"Value: NewFunction(NewFixedPointType(), NewEnumType("Pewpew", "AsteroidSize")).WithReturns(&RawEntityType{}), IsPub: true,"#
    ));
    assert!(reg.contains(r#""CannonFreq": NewEnumVal("Pewpew", "CannonFreq", true, "Freq30", "Freq7_5"),"#));

    let docs = &artifacts.docs;
    assert!(docs.contains("## Enums\n\n### `AsteroidSize`\n\n- `Small`\n- `VeryLarge`\n\n### `CannonFreq`"));
    assert!(docs.contains("AddUpdateCallback(fn callback)\n```\nCalls `callback` every tick.\n"));
    assert!(docs.contains("GetPlayerConfig(number playerIndex) -> struct {\n  bool hasLost,\n  number shield\n}"));
    assert!(docs.contains("NewAsteroidWithSize(fixed x, AsteroidSize size) -> entity"));

    let mapping = &artifacts.mapping;
    assert!(mapping.contains("\t\"AsteroidSize\": {\n\t\t\"Small\": \"SMALL\", \"VeryLarge\": \"VERY_LARGE\",\n\t},\n"));
    assert!(mapping.contains("\t\"GetPlayerConfig\": \"get_player_configuration\",\n"));
    assert!(mapping.contains("\t\"CannonFreq\": \"CannonFrequency\",\n"));
}

#[test]
fn document___rendering_twice_is_identical() {
    let json = r#"[{"functions": [{"func_name": "entity_get_position", "comment": "",
        "parameters": [{"name": "id", "type": "entityid"}],
        "return_types": [{"type": "fixedpoint"}, {"type": "fixedpoint"}]}]}]"#;
    let config = GeneratorConfig::default();

    let first = generate_libraries(json, &config).unwrap();
    let second = generate_libraries(json, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn document___context_reset___clears_previous_run() {
    let document = parse_document(r#"[{"functions": [{"func_name": "add_wall"}]}]"#).unwrap();
    let library = LibraryConfig::new("Pewpew", "pewpew", 1);
    let mut ctx = pewpew_ctx();

    emitter::render_library(&document[0], &library, &mut ctx).unwrap();
    ctx.reset();
    let artifacts = emitter::render_library(&parse_document("[{}]").unwrap()[0], &library, &mut ctx).unwrap();

    assert!(!artifacts.mapping.contains("AddWall"));
}

#[test]
fn document___enum_collision___is_fatal() {
    let json = r#"[{"enums": [
        {"name": "entity_type", "values": []},
        {"name": "entity-type", "values": []}
    ]}]"#;

    let err = generate_libraries(json, &GeneratorConfig::default()).unwrap_err();

    match err {
        CodegenError::MappedNameCollision { mapped, first, second } => {
            assert_eq!(mapped, "EntityType");
            assert_eq!(first, "entity_type");
            assert_eq!(second, "entity-type");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn document___function_collision___is_fatal() {
    let json = r#"[{"functions": [
        {"func_name": "entity_get_position"},
        {"func_name": "get_entity_position"}
    ]}]"#;

    let err = generate_libraries(json, &GeneratorConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CodegenError::MappedNameCollision { ref mapped, .. } if mapped == "GetEntityPosition"
    ));
}

#[test]
fn document___missing_type___surfaces_fragment() {
    let json = r#"[{"functions": [{"func_name": "f", "parameters": [{"name": "broken"}]}]}]"#;

    let err = generate_libraries(json, &GeneratorConfig::default()).unwrap_err();

    assert_eq!(err.to_string(), r#"missing field `type` in {"name":"broken"}"#);
}
