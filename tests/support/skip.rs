//! Skip macros for tests that need external services.

/// Skip a test unless a LocalStack endpoint is configured.
#[macro_export]
macro_rules! skip_without_localstack {
    () => {
        if std::env::var("SSM_TEST_ENDPOINT").is_err() {
            eprintln!("SKIPPED: SSM_TEST_ENDPOINT not set (e.g. http://localhost:4566)");
            return;
        }
    };
}
