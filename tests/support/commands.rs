//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

/// Variables that would otherwise leak settings from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "SSM_CONFIG",
    "SSM_LOG",
    "SSM_REGION",
    "SSM_PROFILE",
    "SSM_ENDPOINT_URL",
    "SSM_PAGE_SIZE",
    "AWS_PROFILE",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_ENDPOINT_URL",
];

impl Test {
    /// Create an ssm command in the isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME inside the temporary home directory
    /// - ssm and AWS settings from the parent environment removed
    /// - Color output disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ssm").expect("failed to find ssm binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command using the given config file.
    pub fn cmd_with_config(&self, config: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.env("SSM_CONFIG", config);
        cmd
    }

    /// Command whose AWS requests go to a closed local port with fake
    /// credentials, so they fail quickly without touching the network.
    pub fn offline_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("AWS_ACCESS_KEY_ID", "test")
            .env("AWS_SECRET_ACCESS_KEY", "test")
            .env("AWS_EC2_METADATA_DISABLED", "true")
            .env("AWS_MAX_ATTEMPTS", "1")
            .args(["--region", "us-east-1", "--endpoint-url", "http://127.0.0.1:9"]);
        cmd
    }

    /// Shortcut for `ssm <key>` against the offline endpoint.
    pub fn get_offline(&self, key: &str) -> Output {
        self.offline_cmd()
            .arg(key)
            .output()
            .expect("failed to run ssm")
    }
}
