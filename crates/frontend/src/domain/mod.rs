pub mod a001_guest;
