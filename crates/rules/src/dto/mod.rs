pub mod age;
pub mod athlete;
pub mod division;
pub mod match_time;
pub mod pairing;
pub mod tournament;
