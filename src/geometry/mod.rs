pub mod line;

pub use line::{
    Line2D, Line3D, Linear2D, Linear3D, LinearEntity, Ray2D, Ray3D, Segment2D, Segment3D,
};
