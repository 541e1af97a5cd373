pub mod subdivision;
