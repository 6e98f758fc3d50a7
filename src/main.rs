use clap::Parser;
use interactive_page::utils::{logger, validation::Validate};
use interactive_page::{
    CliConfig, FieldValidator, FormInput, FormReport, NumericParsing, PageConfig, PageError,
    StrengthReport,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting interactive-page CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Validate arguments before touching any file
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if let Some(password) = &config.strength {
        print_strength(password, config.json);
        return;
    }

    match run(&config) {
        Ok(report) => {
            if config.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => exit_with(&PageError::from(e)),
                }
            } else {
                print_report(&report);
            }

            if !report.is_valid() {
                std::process::exit(1);
            }
        }
        Err(e) => exit_with(&e),
    }
}

fn run(config: &CliConfig) -> interactive_page::Result<FormReport> {
    let page_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let page_config = PageConfig::from_file(path)?;
            page_config.validate()?;
            page_config
        }
        None => PageConfig::default(),
    };

    let parsing = if config.lenient_numbers {
        NumericParsing::Lenient
    } else {
        page_config.numeric_parsing()
    };

    let mut input = match &config.input {
        Some(path) => FormInput::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => FormInput::new(),
    };
    // --field flags override values from the input file
    for (field, value) in FormInput::from_pairs(&config.fields)?.iter() {
        input.set(field, value);
    }

    Ok(FieldValidator::new(parsing).validate_form(&input))
}

fn print_report(report: &FormReport) {
    for outcome in &report.fields {
        match outcome.result.message() {
            Some(message) if !outcome.result.valid => {
                println!("❌ {:<16} {}", outcome.field.key(), message)
            }
            _ => println!("✅ {:<16} ok", outcome.field.key()),
        }
    }
    println!();
    println!("{}", report.status.message);
}

fn print_strength(password: &str, json: bool) {
    let report = StrengthReport::evaluate(password);
    if json {
        let value = serde_json::json!({
            "score": report.score(),
            "tier": report.tier(),
            "checks": report,
        });
        println!("{}", value);
    } else {
        println!("Strength: {} ({}/5)", report.tier(), report.score());
    }
}

fn exit_with(e: &PageError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
