use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Emit a run output value.
///
/// Under GitHub Actions, `name=value` is appended to the file named by
/// `GITHUB_OUTPUT`; elsewhere the pair is printed to stdout.
pub fn set_output(name: &str, value: &str) -> std::io::Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", name, value)
        }
        _ => {
            println!("{}={}", name, value);
            Ok(())
        }
    }
}
