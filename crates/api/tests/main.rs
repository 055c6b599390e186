mod test_utils;

mod handlers {
    mod appointment_test;
    mod availability_test;
    mod middleware_test;
    mod schedule_test;
}
