//! Function directive parsing.
//!
//! A directive tells the generator to delegate a value to a named plugin
//! function instead of synthesizing one. It appears either as the node's
//! `function` key or embedded in its `description` between the literal
//! markers `>>` and `<<`:
//!
//! ```text
//! swVer
//! swVer;armitem
//! >>buttonid<< the unique id of this button
//! ```

/// A parsed generation directive: a function name plus an optional ordered
/// argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDirective {
    /// Plugin function name to invoke
    pub name: String,

    /// String arguments passed to the function, in order
    pub args: Option<Vec<String>>,
}

impl FunctionDirective {
    /// Parse a directive of the form `name` or `name;arg1,arg2,...`.
    ///
    /// Anything with more than one `;` carries no recognized argument list;
    /// the text before the first `;` is still taken as the function name.
    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.split(';').collect();
        let args = if parts.len() == 2 {
            Some(parts[1].split(',').map(str::to_string).collect())
        } else {
            None
        };
        Self {
            name: parts[0].to_string(),
            args,
        }
    }

    /// Extract a directive embedded in a `description` string.
    ///
    /// The description must start with `>>`; the directive runs up to the
    /// closing `<<`, or to the end of the string when the terminator is
    /// missing. Prose descriptions (not starting with `>>`) yield `None`,
    /// so `<<`/`>>` later in ordinary text never trigger parsing.
    pub fn from_description(description: &str) -> Option<Self> {
        let body = description.strip_prefix(">>")?;
        let directive = match body.find("<<") {
            Some(end) => &body[..end],
            None => body,
        };
        Some(Self::parse(directive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let directive = FunctionDirective::parse("buttonid");
        assert_eq!(directive.name, "buttonid");
        assert_eq!(directive.args, None);
    }

    #[test]
    fn test_parse_with_args() {
        let directive = FunctionDirective::parse("swVer;armitem,extra");
        assert_eq!(directive.name, "swVer");
        assert_eq!(
            directive.args,
            Some(vec!["armitem".to_string(), "extra".to_string()])
        );
    }

    #[test]
    fn test_parse_extra_semicolons_drop_args() {
        let directive = FunctionDirective::parse("swVer;a;b");
        assert_eq!(directive.name, "swVer");
        assert_eq!(directive.args, None);
    }

    #[test]
    fn test_from_description() {
        let directive = FunctionDirective::from_description(">>swVer;armitem<< arm software")
            .expect("directive should parse");
        assert_eq!(directive.name, "swVer");
        assert_eq!(directive.args, Some(vec!["armitem".to_string()]));
    }

    #[test]
    fn test_from_description_unterminated() {
        let directive =
            FunctionDirective::from_description(">>buttonid").expect("directive should parse");
        assert_eq!(directive.name, "buttonid");
        assert_eq!(directive.args, None);
    }

    #[test]
    fn test_prose_description_is_not_a_directive() {
        assert_eq!(
            FunctionDirective::from_description("a plain field, see <<manual>> for details"),
            None
        );
    }
}
