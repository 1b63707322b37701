pub mod coordinates;
pub mod point_of_interest;
pub mod basemap;
pub mod layer;

pub use coordinates::Coordinates;
pub use point_of_interest::{PointOfInterest, points_of_interest};
pub use basemap::Basemap;
pub use layer::{LayerSpec, IconSpec, IconDatum, LineDatum, ViewState, Rgb, Rgba};
