use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PatternStore;

pub fn run<S: PatternStore>(store: &S) -> Result<CmdResult> {
    let names = store.list()?;
    Ok(CmdResult::default().with_listed_names(names))
}
