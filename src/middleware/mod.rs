pub mod hits;
