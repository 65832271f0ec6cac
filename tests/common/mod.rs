use std::sync::Once;

static INIT: Once = Once::new();

/// Route `tracing` output (skipped-record warnings) to the test harness.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().try_init().ok();
    });
}

/// JSON catalog shared by the integration tests: three valid records of
/// different constellations plus one record missing its eccentricity.
pub const SMALL_CATALOG: &str = r#"[
    {
        "OBJECT_NAME": "IRIDIUM 106",
        "NORAD_CAT_ID": 41917,
        "CLASSIFICATION_TYPE": "U",
        "EPOCH": "2024-01-01T00:00:00",
        "MEAN_MOTION": 14.34,
        "ECCENTRICITY": 0.001,
        "INCLINATION": 86.4,
        "RA_OF_ASC_NODE": 30.0,
        "ARG_OF_PERICENTER": 0.0,
        "MEAN_ANOMALY": 0.0
    },
    {
        "OBJECT_NAME": "STARLINK-1007",
        "NORAD_CAT_ID": 44713,
        "CLASSIFICATION_TYPE": "U",
        "EPOCH": "2024-01-01T06:00:00",
        "MEAN_MOTION": 15.06391562,
        "ECCENTRICITY": 0.0001451,
        "INCLINATION": 53.0542,
        "RA_OF_ASC_NODE": 292.4852,
        "ARG_OF_PERICENTER": 84.9281,
        "MEAN_ANOMALY": 275.187
    },
    {
        "OBJECT_NAME": "COSMOS 2251",
        "NORAD_CAT_ID": 22675,
        "CLASSIFICATION_TYPE": "U",
        "EPOCH": "2024-01-01T12:00:00",
        "MEAN_MOTION": 14.32,
        "ECCENTRICITY": 0.0067,
        "INCLINATION": 74.04,
        "RA_OF_ASC_NODE": 291.6,
        "ARG_OF_PERICENTER": 94.9,
        "MEAN_ANOMALY": 266.0
    },
    {
        "OBJECT_NAME": "BROKEN SAT",
        "NORAD_CAT_ID": 99999,
        "CLASSIFICATION_TYPE": "U",
        "EPOCH": "2024-01-01T00:00:00",
        "MEAN_MOTION": 14.0,
        "INCLINATION": 60.0,
        "RA_OF_ASC_NODE": 10.0,
        "ARG_OF_PERICENTER": 20.0,
        "MEAN_ANOMALY": 30.0
    }
]"#;
