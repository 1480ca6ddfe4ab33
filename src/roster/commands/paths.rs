use crate::commands::{CmdResult, RosterPaths};
use crate::error::Result;

/// The backing file first, then the config file.
pub fn run(paths: &RosterPaths) -> Result<CmdResult> {
    Ok(CmdResult::default().with_paths(vec![paths.data_file.clone(), paths.config_file()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn reports_data_and_config_files() {
        let paths = RosterPaths::new(PathBuf::from("/data"), PathBuf::from("/data/students.json"));
        let result = run(&paths).unwrap();
        assert_eq!(
            result.paths,
            vec![
                PathBuf::from("/data/students.json"),
                PathBuf::from("/data/config.json")
            ]
        );
    }
}
