use std::path::PathBuf;

/// Returns the path of `filename` within the resources/test folder
pub fn get_test_file_path(filename: &str) -> PathBuf {
    let mut test_file_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_file_path.push(format!("resources/test/{}", filename));
    test_file_path
}

/// Returns a path for a temporary output file in the crate directory
pub fn get_output_file_path(filename: &str) -> PathBuf {
    let mut output_file_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    output_file_path.push(filename);
    output_file_path
}
