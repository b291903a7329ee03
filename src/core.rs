pub mod charge;
pub mod guarantee;
pub mod load;
pub mod period;
pub mod profile;
pub mod run;
pub mod summary;
pub mod tariff;
