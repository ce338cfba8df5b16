mod reservation_tests;
mod room_tests;
