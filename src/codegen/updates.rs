//! `update.d.ts`: update name → update object type.
use crate::config::GeneratorConfig;
use crate::lower::{object_ref, Scope};
use crate::naming::property_key;
use crate::schema::Schema;

use super::{object_namespace_import, see_url, Codegen, UPDATES_CONTAINER};

pub fn emit_updates(schema: &Schema, config: &GeneratorConfig) -> String {
    let mut cg = Codegen::new();
    cg.line(0, object_namespace_import(config));
    cg.blank();
    cg.line(0, "export type Up = {");

    let events = schema.updates.iter().filter(|(name, _)| name.as_str() != UPDATES_CONTAINER);
    for (i, (name, data)) in events.enumerate() {
        if i > 0 {
            cg.blank();
        }
        cg.doc_block(1, &data.description, &see_url(config, name));
        let ty = object_ref(name, Scope::External, config);
        cg.line(1, format!("{}: {ty};", property_key(name)));
    }

    cg.line(0, "};");
    cg.into_string()
}
