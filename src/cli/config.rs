use finhealth::error::Result;
use finhealth::settings::{save_settings, settings_path, OutputFormat, Settings};

pub fn run(
    mut settings: Settings,
    locale: Option<String>,
    industry: Option<String>,
    log_level: Option<String>,
    output: Option<OutputFormat>,
) -> Result<()> {
    let changed = locale.is_some() || industry.is_some() || log_level.is_some() || output.is_some();
    if let Some(locale) = locale {
        settings.default_locale = locale;
    }
    if let Some(industry) = industry {
        settings.default_industry = (!industry.is_empty()).then_some(industry);
    }
    if let Some(level) = log_level {
        settings.log_level = level;
    }
    if let Some(output) = output {
        settings.output = output;
    }
    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }

    println!("Locale:     {}", settings.default_locale);
    println!("Industry:   {}", settings.default_industry.as_deref().unwrap_or("(not set)"));
    println!("Log level:  {}", settings.log_level);
    println!(
        "Output:     {}",
        match settings.output {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    );
    Ok(())
}
