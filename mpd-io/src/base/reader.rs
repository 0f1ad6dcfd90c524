use anyhow::Result;
use mpd_core::containers::PointCloud;

/// Base trait for all types that support reading surface points
pub trait PointReader {
    /// Read up to `count` points from this `PointReader` and append them to `cloud`. Returns the number of points
    /// that were read, which is less than `count` only if the end of the input was reached
    fn read_into(&mut self, cloud: &mut PointCloud, count: usize) -> Result<usize>;

    /// Read up to `count` points from this `PointReader` into a new `PointCloud`
    fn read(&mut self, count: usize) -> Result<PointCloud> {
        let mut cloud = PointCloud::new();
        self.read_into(&mut cloud, count)?;
        Ok(cloud)
    }

    /// Read all remaining points from this `PointReader`
    fn read_to_end(&mut self) -> Result<PointCloud> {
        self.read(usize::MAX)
    }
}
