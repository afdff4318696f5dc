pub mod drivers;
pub mod earnings;
pub mod landing;
pub mod live;
pub mod occupancy;
