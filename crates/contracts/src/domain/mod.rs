pub mod a001_guest;
pub mod a002_room;
pub mod a003_booking;
