//! C templates for class skeletons

use super::ClassSpec;

pub(super) fn header(spec: &ClassSpec) -> String {
    let filename = spec.filename();
    let guard = spec.header_guard();
    let package = &spec.package_upper;
    let object = &spec.object_upper;
    let camel = &spec.class_camel;
    let lower = &spec.class_lower;
    let parent_camel = &spec.parent_camel;

    format!(
        r#"/* {filename}.h */

#ifndef {guard}
#define {guard}

#include <glib-object.h>

G_BEGIN_DECLS

#define {package}_TYPE_{object} {lower}_get_type()

#define {package}_{object}(obj) \
  (G_TYPE_CHECK_INSTANCE_CAST ((obj), {package}_TYPE_{object}, {camel}))

#define {package}_{object}_CLASS(klass) \
  (G_TYPE_CHECK_CLASS_CAST ((klass), {package}_TYPE_{object}, {camel}Class))

#define {package}_IS_{object}(obj) \
  (G_TYPE_CHECK_INSTANCE_TYPE ((obj), {package}_TYPE_{object}))

#define {package}_IS_{object}_CLASS(klass) \
  (G_TYPE_CHECK_CLASS_TYPE ((klass), {package}_TYPE_{object}))

#define {package}_{object}_GET_CLASS(obj) \
  (G_TYPE_INSTANCE_GET_CLASS ((obj), {package}_TYPE_{object}, {camel}Class))

typedef struct {{
  {parent_camel} parent;
}} {camel};

typedef struct {{
  {parent_camel}Class parent_class;
}} {camel}Class;

GType {lower}_get_type (void);

{camel}* {lower}_new (void);

G_END_DECLS

#endif /* {guard} */
"#
    )
}

pub(super) fn source(spec: &ClassSpec) -> String {
    let filename = spec.filename();
    let package = &spec.package_upper;
    let object = &spec.object_upper;
    let camel = &spec.class_camel;
    let lower = &spec.class_lower;
    let parent = &spec.parent;

    let mut extra = Vec::new();
    if spec.private {
        extra.push(private_block(spec));
    }
    if spec.props {
        extra.push(property_block(spec));
    }
    if spec.dispose {
        extra.push(chain_up_block(lower, "dispose"));
    }
    if spec.finalize {
        extra.push(chain_up_block(lower, "finalize"));
    }
    let extra = extra.join("\n");
    let class_init = class_init(spec);

    format!(
        r#"/* {filename}.c */

#include "{filename}.h"

G_DEFINE_TYPE ({camel}, {lower}, {parent})

{extra}
{class_init}

static void
{lower}_init ({camel} *self)
{{
}}

{camel}*
{lower}_new (void)
{{
  return g_object_new ({package}_TYPE_{object}, NULL);
}}
"#
    )
}

fn private_block(spec: &ClassSpec) -> String {
    let package = &spec.package_upper;
    let object = &spec.object_upper;
    let camel = &spec.class_camel;

    format!(
        r#"#define GET_PRIVATE(o) \
  (G_TYPE_INSTANCE_GET_PRIVATE ((o), {package}_TYPE_{object}, {camel}Private))

typedef struct _{camel}Private {camel}Private;

struct _{camel}Private {{
}};
"#
    )
}

fn property_block(spec: &ClassSpec) -> String {
    let lower = &spec.class_lower;

    format!(
        r#"static void
{lower}_get_property (GObject *object, guint property_id,
                              GValue *value, GParamSpec *pspec)
{{
  switch (property_id) {{
  default:
    G_OBJECT_WARN_INVALID_PROPERTY_ID (object, property_id, pspec);
  }}
}}

static void
{lower}_set_property (GObject *object, guint property_id,
                              const GValue *value, GParamSpec *pspec)
{{
  switch (property_id) {{
  default:
    G_OBJECT_WARN_INVALID_PROPERTY_ID (object, property_id, pspec);
  }}
}}
"#
    )
}

/// `dispose`/`finalize` handler that chains up to the parent class
fn chain_up_block(lower: &str, handler: &str) -> String {
    format!(
        r#"static void
{lower}_{handler} (GObject *object)
{{
  if (G_OBJECT_CLASS ({lower}_parent_class)->{handler})
    G_OBJECT_CLASS ({lower}_parent_class)->{handler} (object);
}}
"#
    )
}

fn class_init(spec: &ClassSpec) -> String {
    let lower = &spec.class_lower;
    let camel = &spec.class_camel;
    let wires_handlers = spec.props || spec.dispose || spec.finalize;

    let mut lines = vec![
        "static void".to_string(),
        format!("{lower}_class_init ({camel}Class *klass)"),
        "{".to_string(),
    ];

    if wires_handlers {
        lines.push("  GObjectClass *object_class = G_OBJECT_CLASS (klass);".to_string());
        lines.push(String::new());
    }

    if spec.private {
        lines.push(format!(
            "  g_type_class_add_private (klass, sizeof ({camel}Private));"
        ));
        if wires_handlers {
            lines.push(String::new());
        }
    }

    if spec.props {
        lines.push(format!("  object_class->get_property = {lower}_get_property;"));
        lines.push(format!("  object_class->set_property = {lower}_set_property;"));
    }
    if spec.dispose {
        lines.push(format!("  object_class->dispose = {lower}_dispose;"));
    }
    if spec.finalize {
        lines.push(format!("  object_class->finalize = {lower}_finalize;"));
    }

    lines.push("}".to_string());
    lines.join("\n")
}
