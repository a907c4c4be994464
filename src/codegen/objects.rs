//! `object.d.ts`: concrete objects, updates and class unions.
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::lower::{object_ref, Scope};
use crate::naming::{to_camel_case, Case};
use crate::schema::{Schema, TypeDescriptor};

use super::{see_url, write_members, Codegen, UPDATE_CLASS};

pub fn emit_objects(schema: &Schema, config: &GeneratorConfig) -> Result<String> {
    let mut cg = Codegen::new();

    if config.uses_external_types() {
        cg.line(
            0,
            format!(
                "import type {{ {}, {} }} from '{}';",
                config.base_object_type, config.base_error_type, config.external_module
            ),
        );
        cg.blank();
    }

    // objects and updates are declared the same way
    for (name, data) in schema.types.iter().chain(schema.updates.iter()) {
        if config.uses_external_types() && name.eq_ignore_ascii_case("error") {
            continue;
        }
        emit_object(&mut cg, name, data, config);
    }

    for (class_name, class) in &schema.classes {
        if class_name == UPDATE_CLASS || class.types.is_empty() {
            continue;
        }
        let mut members = Vec::with_capacity(class.types.len());
        for variant in &class.types {
            if !schema.declares_object(variant) {
                return Err(Error::UnknownClassVariant {
                    class: class_name.clone(),
                    variant: variant.clone(),
                });
            }
            members.push(object_ref(variant, Scope::Local, config).to_string());
        }
        cg.doc_block(0, &class.description, &see_url(config, class_name));
        cg.line(
            0,
            format!("export type {} = {};", to_camel_case(class_name, Case::Class), members.join(" | ")),
        );
        cg.blank();
    }

    Ok(cg.into_string())
}

fn emit_object(cg: &mut Codegen, name: &str, data: &TypeDescriptor, config: &GeneratorConfig) {
    let ts_name = to_camel_case(name, Case::Class);
    cg.doc_block(0, &data.description, &see_url(config, name));
    if config.uses_external_types() {
        cg.line(0, format!("export type {ts_name} = {} & {{", config.base_object_type));
    } else {
        cg.line(0, format!("export type {ts_name} = {{"));
    }
    write_members(cg, 1, name, &data.args, Scope::Local, config);
    cg.line(0, "}");
    cg.blank();
}

// ------------------------------- Tests ------------------------------------ //
