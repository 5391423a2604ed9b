pub mod venue;
pub mod schedule;
pub mod booking;
