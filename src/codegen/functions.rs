//! `function.d.ts`: one signature per schema function.
//!
//! Both shapes share the parameter rendering; only the wrapper differs.
use crate::config::{FunctionShape, GeneratorConfig};
use crate::lower::{resolve, Scope};
use crate::naming::{property_key, to_camel_case, Case};
use crate::schema::{FunctionDescriptor, Schema};

use super::{object_namespace_import, see_url, write_members, Codegen};

pub fn emit_functions(schema: &Schema, config: &GeneratorConfig) -> String {
    let mut cg = Codegen::new();
    cg.line(0, object_namespace_import(config));
    if config.uses_external_types() {
        cg.line(
            0,
            format!("import type {{ {} }} from '{}';", config.base_error_type, config.external_module),
        );
    }
    cg.blank();

    match config.function_shape {
        FunctionShape::KeyedMap => {
            cg.line(0, "export type Fn = {");
            for (i, (name, data)) in schema.functions.iter().enumerate() {
                if i > 0 {
                    cg.blank();
                }
                cg.doc_block(1, &data.description, &see_url(config, name));
                cg.line(1, format!("{}: (args: {{", property_key(name)));
                write_signature_tail(&mut cg, 1, name, data, config);
            }
            cg.line(0, "};");
        }
        FunctionShape::NamedAliases => {
            for (name, data) in &schema.functions {
                cg.doc_block(0, &data.description, &see_url(config, name));
                cg.line(0, format!("export type {} = (args: {{", to_camel_case(name, Case::Class)));
                write_signature_tail(&mut cg, 0, name, data, config);
                cg.blank();
            }
        }
    }

    cg.into_string()
}

/// Parameter members and the closing `}) => Result;` line.
fn write_signature_tail(
    cg: &mut Codegen,
    depth: usize,
    name: &str,
    data: &FunctionDescriptor,
    config: &GeneratorConfig,
) {
    write_members(cg, depth + 1, name, &data.args, Scope::External, config);
    let result = resolve(&data.return_type, true, config);
    cg.line(depth, format!("}}) => {result};"));
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::tests::schema;
    use crate::config::Layout;
    use serde_json::json;

    fn sample() -> Schema {
        schema(json!({
            "types": {"user": {}},
            "functions": {
                "getUsers": {
                    "description": "Returns users",
                    "args": {
                        "chat_id": {"type": "int53", "description": "Chat identifier", "is_optional": false},
                        "limit": {"type": "int32", "description": "", "is_optional": true}
                    },
                    "type": "vector<user>"
                },
                "get.me": {"description": "Returns the current user", "args": {}, "type": "user"}
            }
        }))
    }

    #[test]
    fn keyed_map_shape() {
        let out = emit_functions(&sample(), &GeneratorConfig::for_layout(Layout::ThreeFile));
        let expected = "\
import type * as Obj from './object';

export type Fn = {
  /**
   * Returns users
   * @see https://core.telegram.org/tdlib/docs/classtd_1_1td__api_1_1get_users.html
   */
  getUsers: (args: {
    '@type': 'getUsers';
    /** Chat identifier */
    chat_id: number;
    limit?: number;
  }) => Obj.User[];

  /**
   * Returns the current user
   * @see https://core.telegram.org/tdlib/docs/classtd_1_1td__api_1_1get.me.html
   */
  'get.me': (args: {
    '@type': 'get.me';
  }) => Obj.User;
};
";
        assert_eq!(out, expected);
    }

    #[test]
    fn named_alias_shape() {
        let out = emit_functions(&sample(), &GeneratorConfig::for_layout(Layout::TwoFile));
        assert!(out.starts_with(
            "import type * as Obj from './object';\nimport type { TdError } from './base';\n\n"
        ));
        assert!(out.contains("export type GetUsers = (args: {\n  '@type': 'getUsers';\n"));
        assert!(out.contains("  limit?: number;\n}) => Obj.User[];\n"));
        assert!(out.contains("export type GetMe = (args: {\n  '@type': 'get.me';\n}) => Obj.User;\n"));
        assert!(out.ends_with("}) => Obj.User;\n"));
    }

    #[test]
    fn shapes_resolve_identically() {
        let s = schema(json!({
            "functions": {
                "checkThings": {
                    "args": {
                        "ids": {"type": "(vector int64)"},
                        "err": {"type": "error"},
                        "nested": {"type": "vector<vector<messageSender>>"}
                    },
                    "type": "Ok"
                }
            }
        }));
        let keyed = emit_functions(&s, &GeneratorConfig::for_layout(Layout::ThreeFile));
        let named = GeneratorConfig {
            function_shape: FunctionShape::NamedAliases,
            ..GeneratorConfig::for_layout(Layout::ThreeFile)
        };
        let named = emit_functions(&s, &named);
        for out in [&keyed, &named] {
            assert!(out.contains("ids: string[];"));
            assert!(out.contains("err: Obj.Error;"));
            assert!(out.contains("nested: Obj.MessageSender[][];"));
            assert!(out.contains("}) => Obj.Ok;"));
        }
    }

    #[test]
    fn empty_function_list() {
        let s = schema(json!({}));
        let out = emit_functions(&s, &GeneratorConfig::default());
        assert_eq!(out, "import type * as Obj from './object';\n\nexport type Fn = {\n};\n");
    }
}
