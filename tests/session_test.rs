use anyhow::Result;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use tip_time::{
    run_session, ConfigOverrides, ConfigProvider, LocaleCurrencyFormatter, ResolvedConfig,
    TipPercentage, TipScreen, TomlConfig,
};

fn run_lines(screen: &mut TipScreen<LocaleCurrencyFormatter>, lines: &str) -> Result<String> {
    let mut output = Vec::new();
    run_session(screen, Cursor::new(lines.as_bytes()), &mut output)?;
    Ok(String::from_utf8(output)?)
}

fn en_us_screen() -> TipScreen<LocaleCurrencyFormatter> {
    let resolved = ResolvedConfig::resolve(ConfigOverrides::default(), None).unwrap();
    TipScreen::from_config(&resolved, LocaleCurrencyFormatter::for_locale("en-US").unwrap())
}

#[test]
fn test_interactive_session() -> Result<()> {
    let mut screen = en_us_screen();
    let output = run_lines(&mut screen, "50.00\n:tip 20\n:calc\n:round on\n33.33\n:quit\n10\n")?;

    assert!(output.contains("Tip Amount: $7.50"));
    assert!(output.contains("Tip Amount: $10.00"));
    assert!(output.contains("Tip Amount: $7.00"));
    // input after :quit is never read
    assert!(!output.contains("Tip Amount: $2.00"));
    assert_eq!(screen.selection(), TipPercentage::Twenty);
    assert!(screen.round_up());
    Ok(())
}

#[test]
fn test_session_survives_bad_input() -> Result<()> {
    let mut screen = en_us_screen();
    let output = run_lines(&mut screen, "abc\n:tip 99\n:unknown\n20\n")?;

    assert!(output.contains("Invalid cost of service: \"abc\""));
    assert!(output.contains("Tip percentage must be 15, 18 or 20"));
    assert!(output.contains("unknown command"));
    assert!(output.contains("Tip Amount: $3.00"));
    Ok(())
}

#[test]
fn test_show_reports_form_state() -> Result<()> {
    let mut screen = en_us_screen();
    let output = run_lines(&mut screen, ":tip 18\n:round on\n:show\n")?;

    assert!(output.contains("[cost: \"\"] [tip: 18%] [round up: on]"));
    Ok(())
}

#[test]
fn test_session_uses_config_file_defaults() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[defaults]
tip = "18"
round_up = true

[display]
locale = "en-GB"

[validation]
on_invalid_input = "reset-to-zero"
"#,
    )?;

    let file = TomlConfig::from_file(temp_file.path())?;
    let resolved = ResolvedConfig::resolve(ConfigOverrides::default(), Some(&file))?;
    let formatter = LocaleCurrencyFormatter::resolve(resolved.locale());
    let mut screen = TipScreen::from_config(&resolved, formatter);

    let output = run_lines(&mut screen, "50.00\nnope\n")?;
    assert!(output.contains("Tip Amount: £9.00"));
    assert!(output.contains("Tip Amount: £0.00"));
    Ok(())
}
