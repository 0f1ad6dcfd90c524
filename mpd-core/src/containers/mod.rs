mod surface_point;
pub use self::surface_point::*;

mod point_cloud;
pub use self::point_cloud::*;
