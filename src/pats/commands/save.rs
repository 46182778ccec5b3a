use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PatsError, Result};
use crate::model::PatternDef;
use crate::store::PatternStore;

pub fn run<S: PatternStore>(
    store: &mut S,
    name: &str,
    flags: &str,
    pattern: &str,
    engine: Option<String>,
) -> Result<CmdResult> {
    if name.is_empty() {
        return Err(PatsError::EmptyName);
    }
    if pattern.is_empty() {
        return Err(PatsError::EmptyPattern);
    }

    let def = PatternDef {
        flags: flags.to_string(),
        pattern: Some(pattern.to_string()),
        patterns: Vec::new(),
        engine,
    };
    store.save(name, &def)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Saved pattern '{}'", name)));
    Ok(result)
}
