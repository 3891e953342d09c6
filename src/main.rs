use anyhow::{Context, Result};
use month_picker::{init_tracing_once, DateRangeSelector, NavAction, SelectorConfig};

const DEFAULT_CONFIG: &str = r#"{
    "minDate": "2020-01-01",
    "maxDate": "2020-06-15",
    "selectedDate": "2020-08-01",
    "monthFormat": "short",
    "id": "demo"
}"#;

fn main() -> Result<()> {
    init_tracing_once();

    let cfg = match std::env::args().nth(1) {
        Some(path) => SelectorConfig::load(&path)?,
        None => SelectorConfig::from_json_str(DEFAULT_CONFIG)?,
    };

    let options = cfg
        .into_options()
        .on_change(|date| tracing::info!(date=%date, "selection changed"));
    let mut picker = DateRangeSelector::new(options).context("building month picker")?;
    print_line(&picker, "initial");

    let walk = [NavAction::First, NavAction::Next, NavAction::Next, NavAction::Last, NavAction::Prev];
    for action in walk {
        if !picker.is_enabled(action) {
            println!("{:>8}: disabled, skipped", format!("{action:?}"));
            continue;
        }
        picker.navigate(action);
        print_line(&picker, &format!("{action:?}"));
    }

    println!("{}", serde_json::to_string_pretty(picker.controls())?);
    Ok(())
}

fn print_line(picker: &DateRangeSelector, step: &str) {
    let c = picker.controls();
    let disabled: Vec<String> = c.disabled_months().iter().map(|m| (m + 1).to_string()).collect();
    println!(
        "{:>8}: {} first={} prev={} next={} last={} disabled_months=[{}]",
        step,
        picker.selected(),
        c.first.enabled,
        c.prev.enabled,
        c.next.enabled,
        c.last.enabled,
        disabled.join(","),
    );
}
