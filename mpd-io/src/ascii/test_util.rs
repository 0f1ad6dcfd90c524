use mpd_core::containers::SurfacePoint;
use std::path::PathBuf;

/// Returns the resource/test/folder
pub(crate) fn get_test_file_path(filename: &str) -> PathBuf {
    let mut test_file_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_file_path.push(format!("resources/test/{}", filename));
    test_file_path
}

/// The points stored in the `10_points_*` test files
pub(crate) fn test_data_points() -> Vec<SurfacePoint> {
    vec![
        SurfacePoint::new(0.12, 1.5, -0.5),
        SurfacePoint::new(-0.05, -2.0, 1.0),
        SurfacePoint::new(0.33, 0.25, 2.25),
        SurfacePoint::new(0.08, 3.75, -1.75),
        SurfacePoint::new(-0.21, -1.25, 0.5),
        SurfacePoint::new(0.17, 0.0, 3.0),
        SurfacePoint::new(0.02, 2.5, -2.5),
        SurfacePoint::new(-0.11, -3.5, 0.75),
        SurfacePoint::new(0.25, 1.0, -3.25),
        SurfacePoint::new(0.04, -0.75, 1.5),
    ]
}
