// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
pub fn fix_images_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fix-images"))
}
