//! Source and documentation rendering for host libraries.
//!
//! A library is rendered into three artifacts:
//!
//! - the walker registration file declaring `var <Lib>API = &Environment{..}`
//! - the markdown reference page
//! - the inverse mapping table used to translate Hybroid names back to host
//!   names during code generation

use crate::config::LibraryConfig;
use crate::context::GenerationContext;
use crate::descriptor::Descriptor;
use crate::error::CodegenResult;
use crate::mapper::IdentifierMapper;
use crate::model::{EnumModel, FunctionModel};
use crate::naming::camel_case_references;
use crate::schema::RawLibrary;
use crate::value::ValueModel;

const AUTO_GENERATED: &str = "// AUTO-GENERATED, DO NOT MANUALLY MODIFY!";

const DOCS_NOTICE: &str = "<!-- This is an auto-generated file. To modify it, change the host \
     documentation and rerun hybroid-codegen. -->";

/// Rendered output of one library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryArtifacts {
    /// `package walker` registration source
    pub registration: String,
    /// Markdown reference page
    pub docs: String,
    /// `package mapping` inverse name tables
    pub mapping: String,
}

/// Build and render every enum and function of `raw`.
///
/// Enums are registered before functions so that enum references inside
/// parameters resolve to already known tables.
pub fn render_library(
    raw: &RawLibrary,
    library: &LibraryConfig,
    ctx: &mut GenerationContext,
) -> CodegenResult<LibraryArtifacts> {
    let enums = raw
        .enums
        .iter()
        .map(|e| EnumModel::from_raw(e, ctx))
        .collect::<CodegenResult<Vec<_>>>()?;
    let functions = raw
        .functions
        .iter()
        .map(|f| FunctionModel::from_raw(f, ctx))
        .collect::<CodegenResult<Vec<_>>>()?;

    let registration = registration_file(&functions, &enums, ctx)?;
    let docs = docs_file(&functions, &enums, library);
    let mapping = mapping_file(ctx.library(), ctx.mapper(), &enums);

    tracing::info!(
        library = %library.name,
        functions = functions.len(),
        enums = enums.len(),
        "rendered library"
    );

    Ok(LibraryArtifacts {
        registration,
        docs,
        mapping,
    })
}

fn generate_all(
    values: &[ValueModel],
    function: &str,
    ctx: &GenerationContext,
) -> CodegenResult<Vec<Descriptor>> {
    values
        .iter()
        .map(|value| value.generate(true, function, ctx))
        .collect()
}

/// Registration entry of a function inside `Scope.Variables`.
pub fn function_entry(function: &FunctionModel, ctx: &GenerationContext) -> CodegenResult<String> {
    let value = Descriptor::Function {
        params: generate_all(&function.parameters, &function.name, ctx)?,
        returns: generate_all(&function.returns, &function.name, ctx)?,
    };

    Ok(format!(
        "\"{name}\": {{\n\tName: \"{name}\", Value: {value}, IsPub: true,\n}}",
        name = function.name
    ))
}

/// Markdown section documenting a function.
pub fn function_docs(function: &FunctionModel) -> String {
    let params = function
        .parameters
        .iter()
        .map(ValueModel::doc_signature)
        .collect::<Vec<_>>()
        .join(", ");

    let returns = if function.returns.is_empty() {
        String::new()
    } else {
        let returns = function
            .returns
            .iter()
            .map(ValueModel::doc_signature)
            .collect::<Vec<_>>()
            .join(", ");
        format!(" -> {returns}")
    };

    format!(
        "### `{name}`\n\n```rs\n{name}({params}){returns}\n```\n{description}\n",
        name = function.name,
        description = camel_case_references(&function.description)
    )
}

/// Registration entry of an enum inside `Enums`.
pub fn enum_entry(enum_model: &EnumModel, library: &str) -> String {
    let mut args = vec![
        format!("\"{library}\""),
        format!("\"{}\"", enum_model.name),
        "true".to_string(),
    ];
    args.extend(enum_model.variants.iter().map(|v| format!("\"{v}\"")));

    format!("\"{}\": NewEnumVal({})", enum_model.name, args.join(", "))
}

/// Markdown section documenting an enum.
pub fn enum_docs(enum_model: &EnumModel) -> String {
    let variants = enum_model
        .variants
        .iter()
        .map(|v| format!("- `{v}`"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("### `{}`\n\n{variants}", enum_model.name)
}

/// Indent every line of `block` by `depth` tabs.
fn indent(block: &str, depth: usize) -> String {
    let pad = "\t".repeat(depth);
    block
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn registration_file(
    functions: &[FunctionModel],
    enums: &[EnumModel],
    ctx: &GenerationContext,
) -> CodegenResult<String> {
    let library = ctx.library();
    let mut code = String::new();

    code.push_str(AUTO_GENERATED);
    code.push_str("\npackage walker\n\nimport \"hybroid/ast\"\n\n");
    code.push_str("// AUTO-GENERATED API, DO NOT MANUALLY MODIFY!\n");
    code.push_str(&format!("var {library}API = &Environment{{\n"));
    code.push_str(&format!("\tName: \"{library}\",\n"));
    code.push_str("\tScope: Scope{\n");
    code.push_str("\t\tVariables: map[string]*VariableVal{\n");
    for function in functions {
        code.push_str(&indent(&function_entry(function, ctx)?, 3));
        code.push_str(",\n");
    }
    code.push_str("\t\t},\n");
    code.push_str("\t\tTag: &UntaggedTag{},\n");
    code.push_str("\t\tAliasTypes: make(map[string]*AliasType),\n");
    code.push_str("\t\tConstValues: make(map[string]ast.Node),\n");
    code.push_str("\t},\n");
    code.push_str("\timportedWalkers: make([]*Walker, 0),\n");
    code.push_str("\tUsedLibraries: make([]Library, 0),\n");
    code.push_str("\tClasses: make(map[string]*ClassVal),\n");
    code.push_str("\tEntities: make(map[string]*EntityVal),\n");

    if enums.is_empty() {
        code.push_str("\tEnums: make(map[string]*EnumVal),\n");
    } else {
        code.push_str("\tEnums: map[string]*EnumVal{\n");
        for enum_model in enums {
            code.push_str(&format!("\t\t{},\n", enum_entry(enum_model, library)));
        }
        code.push_str("\t},\n");
    }

    code.push_str("}\n");
    Ok(code)
}

fn docs_file(functions: &[FunctionModel], enums: &[EnumModel], library: &LibraryConfig) -> String {
    let mut docs = String::new();

    docs.push_str("---\n");
    docs.push_str(&format!("title: {} API\n", library.name));
    docs.push_str(&format!("slug: libraries/{}\n", library.slug));
    docs.push_str(&format!("sidebar:\n  order: {}\n", library.order));
    docs.push_str("---\n\n");
    docs.push_str(DOCS_NOTICE);
    docs.push('\n');

    if !enums.is_empty() {
        docs.push_str("\n## Enums\n\n");
        let sections: Vec<_> = enums.iter().map(enum_docs).collect();
        docs.push_str(&sections.join("\n\n"));
        docs.push('\n');
    }

    docs.push_str("\n## Functions\n");
    for function in functions {
        docs.push('\n');
        docs.push_str(&function_docs(function));
    }

    docs
}

/// Render the inverse (mapped → source) name tables of a library.
///
/// Only the declared `enums` are listed; tables registered solely through a
/// parameter's enum reference have no registration entry and are skipped.
pub fn mapping_file(library: &str, mapper: &IdentifierMapper, enums: &[EnumModel]) -> String {
    let declared: Vec<_> = mapper
        .enums()
        .filter(|(_, table)| enums.iter().any(|e| e.name == table.mapped()))
        .collect();

    let mut code = String::new();

    code.push_str(AUTO_GENERATED);
    code.push_str("\npackage mapping\n\n");

    code.push_str("// AUTO-GENERATED ENUMS, DO NOT MANUALLY MODIFY!\n");
    code.push_str(&format!(
        "var {library}Enums = map[string]map[string]string{{\n"
    ));
    for (_, table) in &declared {
        let variants = table
            .variants()
            .map(|(source, mapped)| format!("\"{mapped}\": \"{source}\""))
            .collect::<Vec<_>>()
            .join(", ");
        code.push_str(&format!("\t\"{}\": {{\n", table.mapped()));
        if !variants.is_empty() {
            code.push_str(&format!("\t\t{variants},\n"));
        }
        code.push_str("\t},\n");
    }
    code.push_str("}\n\n");

    code.push_str("// AUTO-GENERATED VARIABLES, DO NOT MANUALLY MODIFY!\n");
    code.push_str(&format!("var {library}Variables = map[string]string{{\n"));
    for (source, mapped) in mapper.functions() {
        code.push_str(&format!("\t\"{mapped}\": \"{source}\",\n"));
    }
    for (source, table) in &declared {
        code.push_str(&format!("\t\"{}\": \"{source}\",\n", table.mapped()));
    }
    code.push_str("}\n");

    code
}
