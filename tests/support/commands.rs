//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envdoc command running inside the test directory.
    ///
    /// Colors are disabled and `ENVDOC_LOG` is cleared so output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envdoc").expect("failed to find envdoc binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ENVDOC_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run envdoc with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run envdoc")
    }

    /// Run envdoc with arguments and piped stdin.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run envdoc")
    }

    /// Shortcut for `envdoc encrypt` with a piped password.
    pub fn encrypt(&self, file: &str, password: &str) -> Output {
        self.run_with_stdin(&["encrypt", file], &format!("{}\n", password))
    }

    /// Shortcut for `envdoc decrypt` with a piped password.
    pub fn decrypt(&self, file: &str, password: &str) -> Output {
        self.run_with_stdin(&["decrypt", file], &format!("{}\n", password))
    }
}
