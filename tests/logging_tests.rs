use seabattle::init_logging;

#[test]
fn init_logging_twice_is_harmless() {
    init_logging();
    init_logging();
    log::warn!("logger installed");
}
