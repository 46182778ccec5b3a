use crate::error::{PatsError, Result};
use crate::invocation::Invocation;
use crate::model::ResolvedPattern;
use crate::store::PatternStore;

/// Load `name` and collapse it to a single pattern and engine.
pub fn resolve<S: PatternStore>(store: &S, name: &str) -> Result<ResolvedPattern> {
    let def = store.load(name)?;
    let pattern = def
        .effective_pattern()
        .ok_or_else(|| PatsError::MissingPattern(name.to_string()))?;
    Ok(ResolvedPattern {
        engine: def.engine().to_string(),
        flags: def.flags.clone(),
        pattern,
    })
}

/// Returns the invocation for `name` without running it; the CLI layer
/// decides between printing and executing so no process I/O happens here.
pub fn run<S: PatternStore>(
    store: &S,
    name: &str,
    target: &str,
    stdin_is_pipe: bool,
) -> Result<Invocation> {
    let resolved = resolve(store, name)?;
    Ok(Invocation::build(&resolved, target, stdin_is_pipe))
}
