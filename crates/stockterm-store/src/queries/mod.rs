pub mod stockmaster;
