//! Canonical formatter.
//!
//! Walks an AST and emits indented text. Output is deterministic: the
//! same node and options always produce byte-identical text, and text
//! already in canonical form survives a parse→format round trip
//! unchanged.
//!
//! String content is re-emitted verbatim between quotes with no
//! re-escaping; fidelity for unusual characters is exactly what the lexer
//! preserved.

use crate::error::Error;
use crate::node::{Node, Pair};
use crate::parser::parse;

/// Indentation settings for [`format`] and [`format_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent characters per nesting level. Zero keeps the newlines but
    /// flattens all indentation.
    pub indent_size: usize,
    /// The character repeated to build indentation.
    pub indent_char: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            indent_char: ' ',
        }
    }
}

/// Parse `input` and return its canonical formatted text.
///
/// Fails exactly like [`parse`]; the formatter is never invoked on a
/// partially built AST.
pub fn format(input: &str, options: &FormatOptions) -> Result<String, Error> {
    let node = parse(input)?;
    Ok(format_node(&node, options))
}

/// Format an AST into canonical text. Only reads the node.
pub fn format_node(node: &Node, options: &FormatOptions) -> String {
    let mut output = String::new();
    fmt_value(node, &mut output, 0, options);
    output
}

fn push_indent(output: &mut String, depth: usize, options: &FormatOptions) {
    for _ in 0..depth * options.indent_size {
        output.push(options.indent_char);
    }
}

fn fmt_value(node: &Node, output: &mut String, depth: usize, options: &FormatOptions) {
    match node {
        Node::Object(pairs) => fmt_object(pairs, output, depth, options),
        Node::Array(elements) => fmt_array(elements, output, depth, options),
        Node::String(s) => fmt_string(s, output),
        Node::Number(n) => fmt_number(*n, output),
        Node::Bool(true) => output.push_str("true"),
        Node::Bool(false) => output.push_str("false"),
        Node::Null => output.push_str("null"),
    }
}

/// Emit stored string content verbatim between quotes.
fn fmt_string(content: &str, output: &mut String) {
    output.push('"');
    output.push_str(content);
    output.push('"');
}

/// Emit the shortest decimal text that round-trips to the same double.
/// `f64`'s `Display` is exactly that, and never uses scientific notation.
fn fmt_number(value: f64, output: &mut String) {
    output.push_str(&value.to_string());
}

fn fmt_object(pairs: &[Pair], output: &mut String, depth: usize, options: &FormatOptions) {
    if pairs.is_empty() {
        output.push_str("{}");
        return;
    }

    output.push_str("{\n");
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        push_indent(output, depth + 1, options);
        fmt_string(&pair.key, output);
        output.push_str(": ");
        fmt_value(&pair.value, output, depth + 1, options);
    }
    output.push('\n');
    push_indent(output, depth, options);
    output.push('}');
}

fn fmt_array(elements: &[Node], output: &mut String, depth: usize, options: &FormatOptions) {
    if elements.is_empty() {
        output.push_str("[]");
        return;
    }

    output.push_str("[\n");
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        push_indent(output, depth + 1, options);
        fmt_value(element, output, depth + 1, options);
    }
    output.push('\n');
    push_indent(output, depth, options);
    output.push(']');
}
