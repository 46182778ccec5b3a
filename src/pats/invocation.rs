//! Construction and execution of the external search command.
//!
//! An [`Invocation`] is the fully-determined command line: engine program,
//! flags, pattern, and (maybe) a target path. Building one is pure; the CLI
//! layer decides whether to print it (`dump`) or execute it.

use crate::error::{PatsError, Result};
use crate::model::ResolvedPattern;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub flags: String,
    pub pattern: String,
    pub target: Option<String>,
}

impl Invocation {
    /// Argument order is always `[flags, pattern, target?]`. When stdin is a
    /// pipe the engine reads from it, so the target is dropped no matter what
    /// was passed.
    pub fn build(resolved: &ResolvedPattern, target: &str, stdin_is_pipe: bool) -> Self {
        Self {
            program: resolved.engine.clone(),
            flags: resolved.flags.clone(),
            pattern: resolved.pattern.clone(),
            target: if stdin_is_pipe {
                None
            } else {
                Some(target.to_string())
            },
        }
    }

    /// The equivalent shell command line, pattern double-quoted.
    pub fn command_line(&self) -> String {
        let mut line = format!("{} {} {:?}", self.program, self.flags, self.pattern);
        if let Some(target) = &self.target {
            line.push(' ');
            line.push_str(target);
        }
        line
    }

    fn args(&self) -> Vec<&str> {
        let mut args = vec![self.flags.as_str(), self.pattern.as_str()];
        if let Some(target) = &self.target {
            args.push(target);
        }
        args
    }

    /// Spawn the engine and block until it exits, with stdin/stdout/stderr
    /// inherited from this process. The engine's exit status is returned as-is
    /// and never treated as a wrapper error; only a failure to spawn is.
    pub fn execute(&self) -> Result<ExitStatus> {
        Command::new(&self.program)
            .args(self.args())
            .status()
            .map_err(|source| PatsError::EngineSpawn {
                engine: self.program.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(flags: &str, pattern: &str) -> ResolvedPattern {
        ResolvedPattern {
            engine: "grep".to_string(),
            flags: flags.to_string(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn target_included_when_stdin_is_a_terminal() {
        let inv = Invocation::build(&resolved("-Hnr", "TODO"), ".", false);
        assert_eq!(inv.target.as_deref(), Some("."));
        assert_eq!(inv.args(), vec!["-Hnr", "TODO", "."]);
    }

    #[test]
    fn target_omitted_when_stdin_is_piped() {
        let inv = Invocation::build(&resolved("-Hnr", "TODO"), "src/", true);
        assert_eq!(inv.target, None);
        assert_eq!(inv.args(), vec!["-Hnr", "TODO"]);
    }

    #[test]
    fn command_line_quotes_the_pattern() {
        let inv = Invocation::build(&resolved("-Hnr", "TODO"), ".", false);
        assert_eq!(inv.command_line(), "grep -Hnr \"TODO\" .");
    }

    #[test]
    fn command_line_without_target() {
        let inv = Invocation::build(&resolved("-i", "(foo|bar)"), ".", true);
        assert_eq!(inv.command_line(), "grep -i \"(foo|bar)\"");
    }

    #[test]
    fn command_line_escapes_quotes_in_the_pattern() {
        let inv = Invocation::build(&resolved("-E", r#"say "hi""#), ".", true);
        assert_eq!(inv.command_line(), r#"grep -E "say \"hi\"""#);
    }

    #[test]
    fn engine_name_carries_through() {
        let mut res = resolved("-n", "x");
        res.engine = "rg".to_string();
        let inv = Invocation::build(&res, ".", false);
        assert_eq!(inv.program, "rg");
        assert_eq!(inv.command_line(), "rg -n \"x\" .");
    }

    #[test]
    fn execute_reports_missing_engine_as_spawn_error() {
        let mut res = resolved("-n", "x");
        res.engine = "pats-no-such-engine".to_string();
        let inv = Invocation::build(&res, ".", true);
        let err = inv.execute().unwrap_err();
        assert!(matches!(err, PatsError::EngineSpawn { engine, .. } if engine == "pats-no-such-engine"));
    }
}
