mod error_shape;
mod landing;
