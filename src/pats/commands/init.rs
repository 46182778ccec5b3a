use crate::commands::{CmdMessage, CmdResult, PatsPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &PatsPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized pattern store at {}",
        paths.dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_the_pattern_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("pats");
        let paths = PatsPaths { dir: dir.clone() };

        run(&paths).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let paths = PatsPaths {
            dir: tmp.path().to_path_buf(),
        };
        run(&paths).unwrap();
        run(&paths).unwrap();
    }
}
