use std::process::Command;
use test_utils::temp_dir;

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_missing_test_file_prints_usage_and_exits_cleanly() {
        let dir = temp_dir();

        let output = Command::new(env!("CARGO_BIN_EXE_pos-inducer-cli"))
            .arg("0")
            .current_dir(dir.path())
            .output()
            .expect("Failed to run CLI");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: pos-inducer-cli <language> <test_file_path>"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_no_arguments_prints_usage() {
        let dir = temp_dir();

        let output = Command::new(env!("CARGO_BIN_EXE_pos-inducer-cli"))
            .current_dir(dir.path())
            .output()
            .expect("Failed to run CLI");

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
