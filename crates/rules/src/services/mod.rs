pub mod age;
pub mod bracket;
pub mod clock;
pub mod enrollment;
pub mod match_duration;
pub mod pairing;
pub mod scoring;
