// tests/tum_loader_test.rs

use std::env;
use std::fs;
use std::path::PathBuf;

/// Writes trajectory file contents to a unique temp path for one test.
fn write_temp_trajectory(file_stem: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!(
        "{}_{}_{}.txt",
        env!("CARGO_PKG_NAME"),
        file_stem,
        std::process::id()
    ));
    fs::write(&path, contents).expect("failed to write temp trajectory file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tum_traj_render::data_input::tum_loader::load_tum_trajectory;

    #[test]
    fn test_loads_poses_in_file_order() {
        let path = write_temp_trajectory(
            "ordered",
            "\
# timestamp tx ty tz qx qy qz qw
100.0 1.0 2.0 3.0 0.0 0.0 0.0 1.0
101.0 1.5 2.5 3.5 0.0 0.0 0.0 1.0
102.0 2.0 3.0 4.0 0.1 0.2 0.3 0.9
",
        );

        let dataset = load_tum_trajectory(&path, "GNSS1").unwrap();
        assert_eq!(dataset.label(), "GNSS1");
        assert_eq!(dataset.len(), 3);

        let records = dataset.records();
        assert_eq!(records[0].timestamp, 100.0);
        assert_eq!(records[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(records[2].timestamp, 102.0);
        assert_eq!(records[2].orientation, [0.1, 0.2, 0.3, 0.9]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let mut path = env::temp_dir();
        path.push(format!(
            "{}_does_not_exist_{}.txt",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));

        let err = load_tum_trajectory(&path, "GNSS1").unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains(&path.display().to_string()),
            "message was: {}",
            message
        );
    }

    #[test]
    fn test_malformed_row_aborts_the_load() {
        let path = write_temp_trajectory(
            "malformed",
            "\
100.0 1.0 2.0 3.0 0.0 0.0 0.0 1.0
101.0 1.5 2.5
",
        );

        let err = load_tum_trajectory(&path, "SBG").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Row 2"), "message was: {}", message);
        assert!(message.contains("expected 8"), "message was: {}", message);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_comment_only_file_loads_as_empty_dataset() {
        let path = write_temp_trajectory("comments_only", "# exported with no fixes\n");

        let dataset = load_tum_trajectory(&path, "INS").unwrap();
        assert!(dataset.is_empty());

        let _ = fs::remove_file(&path);
    }
}

// tests/tum_loader_test.rs
