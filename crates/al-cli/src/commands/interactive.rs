//! Interactive command: three questions on stdin, then the full report.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, ensure};

use al_core::Hours;

use crate::Config;
use crate::commands::report;

/// Runs the prompt-driven flow.
pub fn run<R: BufRead, W: Write>(input: &mut R, writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "Attention Ledger")?;
    writeln!(writer)?;

    let social = ask_hours(
        input,
        writer,
        "How many hours per day do you spend on social media? ",
    )
    .context("invalid social media hours")?;
    let sleep = ask_hours(input, writer, "How many hours per day do you sleep? ")
        .context("invalid sleep hours")?;
    let work_prompt = format!(
        "How many hours per day do you work/study? (press Enter for {}) ",
        config.default_work_hours
    );
    let work = match ask_optional_hours(input, writer, &work_prompt)
        .context("invalid work hours")?
    {
        Some(hours) => hours,
        None => Hours::new(config.default_work_hours)
            .context("invalid default_work_hours in configuration")?,
    };

    writeln!(writer)?;
    report::render(writer, config, social, sleep, work, false)?;

    writeln!(writer)?;
    writeln!(
        writer,
        "This is not about guilt. The goal is to make the impact of your daily habits visible."
    )?;

    Ok(())
}

/// Writes a prompt and reads one trimmed answer line.
fn ask<R: BufRead, W: Write>(input: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    ensure!(read > 0, "no answer given");
    Ok(line.trim().to_string())
}

/// Asks a question whose answer must be a valid hour value.
fn ask_hours<R: BufRead, W: Write>(input: &mut R, writer: &mut W, prompt: &str) -> Result<Hours> {
    let answer = ask(input, writer, prompt)?;
    parse_hours(&answer)
}

/// Like [`ask_hours`], but an empty answer means "use the default".
fn ask_optional_hours<R: BufRead, W: Write>(
    input: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<Hours>> {
    let answer = ask(input, writer, prompt)?;
    if answer.is_empty() {
        return Ok(None);
    }
    parse_hours(&answer).map(Some)
}

fn parse_hours(answer: &str) -> Result<Hours> {
    let value: f64 = answer
        .parse()
        .with_context(|| format!("'{answer}' is not a number"))?;
    Ok(Hours::new(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn interactive_flow_prints_full_report() {
        let mut input = Cursor::new("2\n8\n8\n");
        let mut output = Vec::new();
        run(&mut input, &mut output, &Config::default()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("How many hours per day do you spend on social media?"));
        assert!(output.contains("DAY DISTRIBUTION"));
        assert!(output.contains("Free        6.00 h"));
        assert!(output.contains("This is not about guilt."));
    }

    #[test]
    fn empty_work_answer_uses_configured_default() {
        let mut input = Cursor::new("3\n7\n\n");
        let mut output = Vec::new();
        let config = Config {
            default_work_hours: 6.0,
            recommended_sleep_hours: 7.0,
        };
        run(&mut input, &mut output, &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("press Enter for 6"));
        assert!(output.contains("Work/study  6.00 h"));
    }

    #[test]
    fn non_numeric_answer_fails_fast() {
        let mut input = Cursor::new("lots\n");
        let mut output = Vec::new();
        let err = run(&mut input, &mut output, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("'lots' is not a number"));
        assert!(err.to_string().contains("invalid social media hours"));
    }

    #[test]
    fn negative_answer_fails_fast() {
        let mut input = Cursor::new("2\n-5\n");
        let mut output = Vec::new();
        let err = run(&mut input, &mut output, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("invalid sleep hours"));
        assert!(format!("{err:#}").contains("cannot be negative"));
    }

    #[test]
    fn missing_answer_fails_fast() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let err = run(&mut input, &mut output, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no answer given"));
    }
}
