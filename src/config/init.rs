use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{get_config_path, save_config, Config};
use crate::profile::{
    BudgetConstraint, ComplianceNeed, DataSovereignty, Industry, ProfileConfig, ProfileError,
    Region, TechRequirement,
};

/// Line-based prompt session over any reader/writer pair.
struct Prompter<R, W> {
    input: R,
    output: W,
    typewriter_delay: Option<std::time::Duration>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the wizard finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
        let input = input.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Keep asking until the answer parses. Returns the canonical id.
    fn prompt_choice<T>(&mut self, message: &str, default: &str, id: fn(&T) -> &'static str) -> Result<String>
    where
        T: FromStr<Err = ProfileError>,
    {
        loop {
            let input = self.prompt_with_default(message, default)?;
            match input.parse::<T>() {
                Ok(value) => return Ok(id(&value).to_string()),
                Err(e) => self.say(&format!("  Invalid: {}. Try again.", e))?,
            }
        }
    }

    /// Keep asking until every comma separated item parses.
    fn prompt_list<T>(&mut self, message: &str, id: fn(&T) -> &'static str) -> Result<Vec<String>>
    where
        T: FromStr<Err = ProfileError>,
    {
        'ask: loop {
            let input = self.prompt_with_default(message, "none")?;
            if input.eq_ignore_ascii_case("none") {
                return Ok(Vec::new());
            }
            let mut ids = Vec::new();
            for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                match item.parse::<T>() {
                    Ok(value) => ids.push(id(&value).to_string()),
                    Err(e) => {
                        self.say(&format!("  Invalid: {}. Try again.", e))?;
                        continue 'ask;
                    }
                }
            }
            ids.dedup();
            return Ok(ids);
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Print text with a typewriter effect, one character at a time.
    fn typewriter(&mut self, text: &str) -> Result<()> {
        match self.typewriter_delay {
            Some(delay) => {
                for c in text.chars() {
                    write!(self.output, "{}", c).context("Failed to write output")?;
                    self.output.flush().ok();
                    std::thread::sleep(delay);
                }
                writeln!(self.output).context("Failed to write output")
            }
            None => self.say(text),
        }
    }
}

fn options(ids: &[&str]) -> String {
    ids.join(", ")
}

/// Ask for every profile field in turn.
fn ask_profile<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<ProfileConfig> {
    p.typewriter("Tell us about your organization. Press enter to accept the default shown in brackets.")?;
    p.say("")?;

    p.say(&format!("Industries: {}", options(&Industry::ALL.map(|i| i.id()))))?;
    let industry = p.prompt_choice::<Industry>("Industry", "other", Industry::id)?;

    p.say(&format!("Regions: {}", options(&Region::ALL.map(|r| r.id()))))?;
    let region = p.prompt_choice::<Region>("Primary region of operation", "global", Region::id)?;

    p.say("")?;
    p.typewriter("A high budget constraint favours cheaper providers; a low one favours the US hyperscalers.")?;
    let budget = p.prompt_choice::<BudgetConstraint>(
        "Budget constraint (low, medium, high)",
        "medium",
        BudgetConstraint::id,
    )?;

    p.say(&format!(
        "Data sovereignty: {}",
        options(&DataSovereignty::ALL.map(|d| d.id()))
    ))?;
    let data_sovereignty = p.prompt_choice::<DataSovereignty>(
        "Data sovereignty requirement",
        "none",
        DataSovereignty::id,
    )?;

    p.say("")?;
    p.typewriter("List compliance frameworks and technical needs separated by commas, or 'none'.")?;
    p.say(&format!(
        "Compliance: {}",
        options(&ComplianceNeed::ALL.map(|c| c.id()))
    ))?;
    let compliance = p.prompt_list::<ComplianceNeed>("Compliance requirements", ComplianceNeed::id)?;

    p.say(&format!(
        "Technical: {}",
        options(&TechRequirement::ALL.map(|t| t.id()))
    ))?;
    let tech = p.prompt_list::<TechRequirement>("Technical requirements", TechRequirement::id)?;

    Ok(ProfileConfig {
        industry: Some(industry),
        region: Some(region),
        budget: Some(budget),
        data_sovereignty: Some(data_sovereignty),
        compliance: Some(compliance),
        tech: Some(tech),
    })
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
        output: std::io::stdout(),
        typewriter_delay: Some(std::time::Duration::from_millis(12)),
    };
    run_wizard(&mut prompter, default_path)
}

fn run_wizard<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    default_path: Option<PathBuf>,
) -> Result<()> {
    p.say("")?;
    p.typewriter("Cloud Advisor Profile Wizard")?;
    p.say("============================")?;
    p.say("")?;

    let profile = ask_profile(p)?;

    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    p.say("")?;
    let path_str = p.prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            p.say("Aborted.")?;
            return Ok(());
        }
    }

    save_config(&config_path, &Config { profile })?;
    tracing::info!(path = %config_path.display(), "wrote config");

    p.say("")?;
    p.say(&format!("Config written to {}", config_path.display()))?;
    p.say("Run `cloud-advisor` to see your recommendations.")?;

    Ok(())
}
