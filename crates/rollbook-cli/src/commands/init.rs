//! The `rollbook init` command.

use std::path::Path;

use anyhow::Result;

use rollbook_core::config::DEFAULT_CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        println!("{DEFAULT_CONFIG_FILE} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(DEFAULT_CONFIG_FILE, SAMPLE_CONFIG)?;
    println!("Created {DEFAULT_CONFIG_FILE}");

    println!("\nNext steps:");
    println!("  1. Add your own [[students]] entries to {DEFAULT_CONFIG_FILE}");
    println!("  2. Run: rollbook list");
    println!("  3. Run: rollbook");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# rollbook configuration

# Load the built-in sample records (101 Ankit, 102 Riya).
load_samples = true

# Print the sample detail views before the menu.
show_banner = true

# "plain" or "table"
listing_style = "plain"

# Extra records inserted at startup.
[[students]]
roll_no = 103
name = "Neha"
email = "neha@mail.com"
course = "B.Com"
marks = 67.25
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = rollbook_core::config::parse_config_str(SAMPLE_CONFIG).unwrap();
        assert!(config.load_samples);
        assert_eq!(config.students.len(), 1);
        assert_eq!(config.students[0].roll_no, 103);
    }
}
