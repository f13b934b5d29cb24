use std::sync::Once;

use crate::Database;

mod number_tests;

static ONCE: Once = Once::new();

pub(crate) const TEST_DATABASE: &str = include_str!("../../resources/test_database.json");

pub(crate) fn get_database() -> Database {
    ONCE.call_once(|| {
        let mut builder: env_logger::Builder = colog::default_builder();
        let _ = builder
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
    Database::from_json_str(TEST_DATABASE).expect("Test database should be valid")
}
