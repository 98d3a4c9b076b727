pub mod fixed_point;
