use serde::{Deserialize, Serialize};

/// Engine used when a definition does not name one.
pub const DEFAULT_ENGINE: &str = "grep";

/// A stored pattern definition, one JSON file per name.
///
/// Exactly one of `pattern`/`patterns` has to be usable; `patterns` is
/// collapsed into a single alternation at resolution time. Empty fields are
/// omitted on disk so hand-written files stay minimal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flags: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl PatternDef {
    /// Returns the single effective pattern.
    ///
    /// An explicit non-empty `pattern` wins; otherwise a non-empty `patterns`
    /// list is joined into `(alt1|alt2|...)`. `None` means the definition has
    /// no usable pattern at all.
    pub fn effective_pattern(&self) -> Option<String> {
        match self.pattern.as_deref() {
            Some(p) if !p.is_empty() => Some(p.to_string()),
            _ if self.patterns.is_empty() => None,
            _ => Some(format!("({})", self.patterns.join("|"))),
        }
    }

    /// Engine named by the definition, or [`DEFAULT_ENGINE`].
    pub fn engine(&self) -> &str {
        match self.engine.as_deref() {
            Some(e) if !e.is_empty() => e,
            _ => DEFAULT_ENGINE,
        }
    }
}

/// A definition after resolution: one pattern, one engine, ready to hand to
/// the invocation builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPattern {
    pub engine: String,
    pub flags: String,
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_pattern_wins() {
        let def = PatternDef {
            pattern: Some("TODO".to_string()),
            patterns: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(def.effective_pattern(), Some("TODO".to_string()));
    }

    #[test]
    fn patterns_collapse_into_alternation() {
        let def = PatternDef {
            patterns: vec!["foo".to_string(), "bar".to_string(), "baz".to_string()],
            ..Default::default()
        };
        assert_eq!(def.effective_pattern(), Some("(foo|bar|baz)".to_string()));
    }

    #[test]
    fn single_element_alternation_still_wrapped() {
        let def = PatternDef {
            patterns: vec!["only".to_string()],
            ..Default::default()
        };
        assert_eq!(def.effective_pattern(), Some("(only)".to_string()));
    }

    #[test]
    fn empty_pattern_string_falls_back_to_patterns() {
        let def = PatternDef {
            pattern: Some(String::new()),
            patterns: vec!["x".to_string()],
            ..Default::default()
        };
        assert_eq!(def.effective_pattern(), Some("(x)".to_string()));
    }

    #[test]
    fn no_patterns_at_all() {
        assert_eq!(PatternDef::default().effective_pattern(), None);
    }

    #[test]
    fn engine_defaults_to_grep() {
        assert_eq!(PatternDef::default().engine(), "grep");
        let def = PatternDef {
            engine: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(def.engine(), "grep");
    }

    #[test]
    fn engine_override() {
        let def = PatternDef {
            engine: Some("rg".to_string()),
            ..Default::default()
        };
        assert_eq!(def.engine(), "rg");
    }

    #[test]
    fn empty_fields_omitted_on_disk() {
        let def = PatternDef {
            flags: "-Hnr".to_string(),
            pattern: Some("TODO".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"flags":"-Hnr","pattern":"TODO"}"#);
    }

    #[test]
    fn parses_multi_pattern_files() {
        let json = r#"{"flags":"-HnriE","patterns":["amazonaws","digitalocean"]}"#;
        let def: PatternDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.flags, "-HnriE");
        assert_eq!(def.pattern, None);
        assert_eq!(
            def.effective_pattern(),
            Some("(amazonaws|digitalocean)".to_string())
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"pattern":"x","comment":"hand-edited"}"#;
        let def: PatternDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.pattern, Some("x".to_string()));
    }
}
