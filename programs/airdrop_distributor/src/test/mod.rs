pub mod test_merkle;
pub mod test_release_math;
