//! End-to-end use of the facade: settings drive rendering and scheduling.

use daywise::config::DaywiseConfig;
use daywise::{display_string, time_of_day, work_schedule};

#[test]
fn settings_drive_rendering_and_schedule() {
    let cfg = DaywiseConfig::from_toml_str(
        r#"
        [display]
        reference_zone = "Asia/Kolkata"

        [schedule]
        work_days = 2
        off_days = 2
        "#,
    )
    .unwrap();

    let calendar = cfg.calendar_config().unwrap();
    // IST is UTC+05:30 with no daylight saving.
    assert_eq!(
        display_string("2024-01-01T00:00:00Z", &calendar).unwrap(),
        "1/1/2024, 5:30:00 AM"
    );
    assert_eq!(
        time_of_day("2024-01-01T20:00:00Z", &calendar).unwrap(),
        "01:30:00"
    );

    let days = work_schedule("30-01-2024", "06-02-2024", cfg.work_cycle().unwrap()).unwrap();
    assert_eq!(
        days,
        ["30-01-2024", "31-01-2024", "03-02-2024", "04-02-2024"]
    );
}

#[test]
fn logging_init_twice_fails_the_second_time() {
    assert!(daywise::logging::init(0).is_ok());
    assert!(daywise::logging::init(2).is_err());
}
