//! AST node model.
//!
//! A [`Node`] is the structured value produced by parsing: an immutable
//! tagged union with one case per JSON value shape. Nodes carry no
//! behavior beyond construction and read-only accessors; the formatter
//! only ever reads them.
//!
//! Objects are ordered sequences of [`Pair`]s. Insertion order is
//! significant and survives parse→format round trips, and duplicate keys
//! are all retained; nothing in this crate deduplicates.

/// A parsed JSON value.
///
/// Consumers must match all variants exhaustively; there is no catch-all
/// node kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An object: ordered key/value pairs, duplicates retained.
    Object(Vec<Pair>),
    /// An array: ordered elements.
    Array(Vec<Node>),
    /// A string. The content is exactly what the lexer captured between
    /// the quotes, backslash sequences included.
    String(String),
    /// A number, as the IEEE-754 double of the parsed literal.
    Number(f64),
    /// A boolean literal.
    Bool(bool),
    /// The null literal.
    Null,
}

/// One `key: value` entry of an object.
///
/// The key is the string content itself, so a non-string key is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    /// The key, exactly as captured between its quotes.
    pub key: String,
    /// The value bound to the key.
    pub value: Node,
}

impl Node {
    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Returns true if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Returns true if this is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns the string content if this is a String node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a Number node.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a Bool node.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the pairs if this is an Object node.
    pub fn as_object(&self) -> Option<&[Pair]> {
        match self {
            Node::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array node.
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Looks up a key in an object. With duplicate keys the first match
    /// wins; the later pairs are still present in the node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(pairs) => pairs.iter().find(|p| p.key == key).map(|p| &p.value),
            _ => None,
        }
    }

    /// Returns an array element by index.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Returns the node's kind as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::String(_) => "string",
            Node::Number(_) => "number",
            Node::Bool(_) => "boolean",
            Node::Null => "null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> Node {
        Node::Object(vec![
            Pair {
                key: "name".to_string(),
                value: Node::String("John".to_string()),
            },
            Pair {
                key: "age".to_string(),
                value: Node::Number(30.0),
            },
        ])
    }

    #[test]
    fn test_predicates() {
        assert!(sample_object().is_object());
        assert!(Node::Array(vec![]).is_array());
        assert!(Node::String(String::new()).is_string());
        assert!(Node::Number(0.0).is_number());
        assert!(Node::Bool(false).is_bool());
        assert!(Node::Null.is_null());
    }

    #[test]
    fn test_get_preserves_insertion_order() {
        let obj = sample_object();
        let pairs = obj.as_object().unwrap();
        assert_eq!(pairs[0].key, "name");
        assert_eq!(pairs[1].key, "age");
        assert_eq!(obj.get("age").and_then(Node::as_f64), Some(30.0));
        assert_eq!(obj.get("missing"), None);
    }

    #[test]
    fn test_get_is_first_wins_with_duplicates() {
        let obj = Node::Object(vec![
            Pair {
                key: "a".to_string(),
                value: Node::Number(1.0),
            },
            Pair {
                key: "a".to_string(),
                value: Node::Number(2.0),
            },
        ]);
        assert_eq!(obj.get("a").and_then(Node::as_f64), Some(1.0));
        assert_eq!(obj.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_get_index() {
        let arr = Node::Array(vec![Node::Number(1.0), Node::Null]);
        assert_eq!(arr.get_index(0).and_then(Node::as_f64), Some(1.0));
        assert_eq!(arr.get_index(1), Some(&Node::Null));
        assert_eq!(arr.get_index(2), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(sample_object().type_name(), "object");
        assert_eq!(Node::Array(vec![]).type_name(), "array");
        assert_eq!(Node::String(String::new()).type_name(), "string");
        assert_eq!(Node::Number(0.0).type_name(), "number");
        assert_eq!(Node::Bool(true).type_name(), "boolean");
        assert_eq!(Node::Null.type_name(), "null");
    }
}
